//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (scanner) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Recognition of keywords, identifiers, integer and string literals
//! - One character of lookahead for `==` and `!=`
//! - Token position tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
