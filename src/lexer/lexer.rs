use std::rc::Rc;

use log::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Single-pass scanner over an in-memory source.
///
/// Each call to [`Lexer::next_token`] consumes at least one character unless
/// the end of input has been reached, after which it keeps returning `EOF`.
#[derive(Clone)]
pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    file: Rc<String>,
    errors: Vec<Error>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: source.chars().collect(),
            pos: 0,
            file: file_name,
            errors: vec![],
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    /// The character under the cursor, `None` at end of input.
    pub fn at(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    /// One character of lookahead; `None` when it would cross the end of input.
    pub fn peek_char(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    /// Hands over the lexical diagnostics recorded so far.
    pub fn take_errors(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.errors)
    }

    pub fn next_token(&mut self) -> Token {
        skip_handler(self);

        let token = match self.at() {
            None => MK_TOKEN!(TokenKind::EOF, String::new(), MK_SPAN!(self, self.pos, self.pos)),
            Some('=') => match self.peek_char() {
                Some('=') => self.operator(TokenKind::Equals, 2),
                _ => self.operator(TokenKind::Assignment, 1),
            },
            Some('!') => match self.peek_char() {
                Some('=') => self.operator(TokenKind::NotEquals, 2),
                _ => self.operator(TokenKind::Not, 1),
            },
            Some('+') => self.operator(TokenKind::Plus, 1),
            Some('-') => self.operator(TokenKind::Dash, 1),
            Some('*') => self.operator(TokenKind::Star, 1),
            Some('/') => self.operator(TokenKind::Slash, 1),
            Some('<') => self.operator(TokenKind::Less, 1),
            Some('>') => self.operator(TokenKind::Greater, 1),
            Some('(') => self.operator(TokenKind::OpenParen, 1),
            Some(')') => self.operator(TokenKind::CloseParen, 1),
            Some('{') => self.operator(TokenKind::OpenCurly, 1),
            Some('}') => self.operator(TokenKind::CloseCurly, 1),
            Some('[') => self.operator(TokenKind::OpenBracket, 1),
            Some(']') => self.operator(TokenKind::CloseBracket, 1),
            Some(',') => self.operator(TokenKind::Comma, 1),
            Some(';') => self.operator(TokenKind::Semicolon, 1),
            Some('"') => string_handler(self),
            Some(c) if is_identifier_char(c) => symbol_handler(self),
            Some(c) if c.is_ascii_digit() => number_handler(self),
            Some(_) => self.operator(TokenKind::Illegal, 1),
        };

        trace!("scanned {}", token.debug());
        token
    }

    /// Emits a token made of the next `len` characters, taken verbatim.
    fn operator(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.pos;
        let end = (start + len).min(self.source.len());
        let value = self.source[start..end].iter().collect::<String>();

        self.advance_n(len);
        MK_TOKEN!(kind, value, MK_SPAN!(self, start, self.pos))
    }

    fn take_while(&mut self, predicate: fn(char) -> bool) -> String {
        let start = self.pos;
        while self.at().is_some_and(predicate) {
            self.advance_n(1);
        }

        self.source[start..self.pos].iter().collect()
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn skip_handler(lexer: &mut Lexer) {
    lexer.take_while(is_whitespace);
}

fn number_handler(lexer: &mut Lexer) -> Token {
    let start = lexer.pos;
    let digits = lexer.take_while(|c| c.is_ascii_digit());

    MK_TOKEN!(TokenKind::Number, digits, MK_SPAN!(lexer, start, lexer.pos))
}

fn symbol_handler(lexer: &mut Lexer) -> Token {
    let start = lexer.pos;
    let value = lexer.take_while(is_identifier_char);

    MK_TOKEN!(lookup_identifier(&value), value, MK_SPAN!(lexer, start, lexer.pos))
}

fn string_handler(lexer: &mut Lexer) -> Token {
    let start = lexer.pos;
    lexer.advance_n(1); // opening quote

    let content = lexer.take_while(|c| c != '"');

    if lexer.at_eof() {
        lexer.errors.push(Error::new(
            ErrorImpl::UnterminatedString {
                value: content.clone(),
            },
            Position(start as u32, lexer.file()),
        ));
    } else {
        lexer.advance_n(1); // closing quote
    }

    MK_TOKEN!(TokenKind::String, content, MK_SPAN!(lexer, start, lexer.pos))
}

/// Scans the whole source, returning every token up to and including the first `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
