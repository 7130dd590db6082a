use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, weakest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Index,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

/// Binding power of `kind` in infix position. `Default` means it never continues an expression.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equality,
        TokenKind::Less | TokenKind::Greater => BindingPower::Relational,
        TokenKind::Plus | TokenKind::Dash => BindingPower::Additive,
        TokenKind::Star | TokenKind::Slash => BindingPower::Multiplicative,
        TokenKind::OpenParen => BindingPower::Call,
        TokenKind::OpenBracket => BindingPower::Index,
        _ => BindingPower::Default,
    }
}

pub fn stmt_handler(kind: TokenKind) -> Option<StmtHandler> {
    match kind {
        TokenKind::Let => Some(parse_let_stmt),
        TokenKind::Return => Some(parse_return_stmt),
        _ => None,
    }
}

pub fn nud_handler(kind: TokenKind) -> Option<NUDHandler> {
    match kind {
        // Literals and symbols
        TokenKind::Identifier
        | TokenKind::Number
        | TokenKind::String
        | TokenKind::True
        | TokenKind::False => Some(parse_primary_expr),

        TokenKind::Not | TokenKind::Dash => Some(parse_prefix_expr),
        TokenKind::OpenParen => Some(parse_grouping_expr),
        TokenKind::If => Some(parse_if_expr),
        TokenKind::Fn => Some(parse_fn_literal_expr),
        TokenKind::OpenBracket => Some(parse_array_literal_expr),
        _ => None,
    }
}

pub fn led_handler(kind: TokenKind) -> Option<LEDHandler> {
    match kind {
        TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Star
        | TokenKind::Slash => Some(parse_binary_expr),

        TokenKind::OpenParen => Some(parse_call_expr),
        TokenKind::OpenBracket => Some(parse_index_expr),
        _ => None,
    }
}
