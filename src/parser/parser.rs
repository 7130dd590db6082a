//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the program-level loop.
//! The parser pulls tokens from the lexer on demand and keeps a two-token
//! window (current + peek). Expressions are parsed Pratt-style with the
//! NUD/LED handlers and binding powers from [`super::lookups`].
//!
//! Errors never stop the parse: they are collected in order and the parser
//! skips ahead to the next statement boundary.

use std::mem;

use log::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_stmt;

/// Deepest expression nesting accepted before parsing gives up on a statement.
pub const MAX_NESTING_DEPTH: usize = 100;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token source, advanced one token at a time
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Lexical diagnostics for `peek`, held back until it becomes current
    peek_errors: Vec<Error>,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Expressions currently being parsed, innermost included
    depth: usize,
}

impl Parser {
    /// Creates a new Parser and fills the current/peek window from `lexer`.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let errors = lexer.take_errors();
        let peek = lexer.next_token();
        let peek_errors = lexer.take_errors();

        Parser {
            lexer,
            current,
            peek,
            peek_errors,
            errors,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts the window by one token, pulling the next one from the lexer.
    ///
    /// Lexical diagnostics are recorded when their token becomes current, so
    /// they stay in source order with the syntax errors.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        let next_errors = self.lexer.take_errors();

        self.current = mem::replace(&mut self.peek, next);
        let current_errors = mem::replace(&mut self.peek_errors, next_errors);
        self.errors.extend(current_errors);
        trace!("current token {}", self.current.debug());
    }

    /// Enters one more level of expression nesting.
    ///
    /// Fails with `NestingTooDeep` past [`MAX_NESTING_DEPTH`]; every successful
    /// call must be paired with [`Parser::leave_nesting`].
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Advances if the peek token is `expected_kind`, otherwise reports what was found instead.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek_token_is(expected_kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.peek_error(expected_kind))
        }
    }

    /// Consumes a terminating `;`.
    ///
    /// A missing semicolon is accepted when the statement is the last one of
    /// a block or of the program.
    pub fn expect_stmt_end(&mut self) -> Result<(), Error> {
        match self.peek_token_kind() {
            TokenKind::Semicolon => {
                self.advance();
                Ok(())
            }
            TokenKind::CloseCurly | TokenKind::EOF => Ok(()),
            _ => Err(self.peek_error(TokenKind::Semicolon)),
        }
    }

    pub fn peek_error(&self, expected_kind: TokenKind) -> Error {
        Error::new(
            ErrorImpl::ExpectedToken {
                expected: expected_kind,
                received: self.peek.kind,
            },
            self.peek.span.start.clone(),
        )
    }

    /// Records a non-fatal error.
    pub fn record(&mut self, error: Error) {
        trace!("recorded error: {}", error);
        self.errors.push(error);
    }

    /// Skips to the end of the construct that just failed.
    ///
    /// Stops on a `;`, on the last token before a closing `}` when inside a
    /// block, or before end of input. The caller's loop then advances past it.
    pub fn synchronize(&mut self, in_block: bool) {
        while !self.current_token_is(TokenKind::Semicolon)
            && !self.current_token_is(TokenKind::EOF)
            && !self.peek_token_is(TokenKind::EOF)
            && !(in_block && self.peek_token_is(TokenKind::CloseCurly))
        {
            self.advance();
        }
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// The collected diagnostics rendered as messages, in order.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Parses statements until end of input.
    ///
    /// Statements that fail to parse are left out of the program; their
    /// errors are available from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        debug!("parsing program from {}", self.lexer.file());
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    self.record(error);
                    self.synchronize(false);
                }
            }
            self.advance();
        }

        debug!(
            "parsed {} statement(s) with {} error(s)",
            program.statements.len(),
            self.errors.len()
        );
        program
    }
}

/// Parses a complete source text into a syntax tree.
///
/// This is the main entry point for parsing. It creates a lexer and parser
/// and parses all statements until EOF.
///
/// # Arguments
///
/// * `source` - The program text
/// * `file` - Optional source label used in diagnostics (defaults to `shell`)
///
/// # Returns
///
/// A tuple containing:
/// - The Program that could be built
/// - Every error found, in source order
pub fn parse(source: String, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
