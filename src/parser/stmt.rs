use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{lookups::stmt_handler, parser::Parser};

/// Parses one statement starting at the current token.
///
/// On success the current token is the statement's last token.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = stmt_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name = IdentifierExpr {
        token: parser.current_token().clone(),
        value: parser.current_token().value.clone(),
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect_stmt_end()?;

    Ok(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let value = match parser.peek_token_kind() {
        TokenKind::Semicolon | TokenKind::CloseCurly | TokenKind::EOF => None,
        _ => {
            parser.advance();
            Some(parse_expr(parser, BindingPower::Default)?)
        }
    };

    parser.expect_stmt_end()?;

    Ok(Stmt::Return(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// Parses `{ ... }` with the current token on the opening brace.
///
/// A failing inner statement is recorded and skipped so its siblings are
/// still parsed. Ends with the current token on the closing brace.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let mut body = Vec::new();
    while !parser.current_token_is(TokenKind::CloseCurly)
        && !parser.current_token_is(TokenKind::EOF)
    {
        match parse_stmt(parser) {
            Ok(stmt) => body.push(stmt),
            Err(error) => {
                // `x + }`: the brace that failed to start an operand closes this block.
                let closes_block = parser.current_token_is(TokenKind::CloseCurly)
                    && matches!(error.get_kind(), ErrorImpl::NoPrefixParseFn { .. });

                parser.record(error);
                if closes_block {
                    break;
                }
                parser.synchronize(true);
            }
        }
        parser.advance();
    }

    if parser.current_token_is(TokenKind::EOF) {
        return Err(Error::new(
            ErrorImpl::ExpectedToken {
                expected: TokenKind::CloseCurly,
                received: TokenKind::EOF,
            },
            parser.get_position(),
        ));
    }

    Ok(BlockStmt { token, body })
}
