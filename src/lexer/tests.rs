//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer and string literals
//! - Single and two-character operators
//! - Illegal characters and end-of-input behaviour

use proptest::prelude::*;

use super::{
    lexer::{tokenize, Lexer},
    tokens::{lookup_identifier, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.lang".to_string()))
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "fn let true false if else return".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar_baz _underscore CamelCase lets".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar_baz");
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].value, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "lets");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_identifiers_stop_at_digits() {
    let tokens = tokenize("x1".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "1");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 98765432109876543210".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    // Range checking is the parser's job
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "98765432109876543210");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "multiple words" """#.to_string();
    let tokens = tokenize(source, None);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_unterminated_string_runs_to_end_of_input() {
    let mut lexer = Lexer::new("\"abc def".to_string(), None);

    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(token.value, "abc def");
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);

    let errors = lexer.take_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnterminatedString");
    assert_eq!(errors[0].get_position().0, 0);
    assert!(lexer.take_errors().is_empty());
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("= + - * / ! < > == !="),
        vec![
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Not,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_two_character_operator_values() {
    let tokens = tokenize("a==b!=c".to_string(), None);

    assert_eq!(tokens[1].kind, TokenKind::Equals);
    assert_eq!(tokens[1].value, "==");
    assert_eq!(tokens[3].kind, TokenKind::NotEquals);
    assert_eq!(tokens[3].value, "!=");
}

#[test]
fn test_lookahead_at_end_of_input() {
    assert_eq!(kinds("="), vec![TokenKind::Assignment, TokenKind::EOF]);
    assert_eq!(kinds("!"), vec![TokenKind::Not, TokenKind::EOF]);
    assert_eq!(
        kinds("!!="),
        vec![TokenKind::Not, TokenKind::NotEquals, TokenKind::EOF]
    );
    assert_eq!(
        kinds("==="),
        vec![TokenKind::Equals, TokenKind::Assignment, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_delimiters() {
    assert_eq!(
        kinds("(){}[],;"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_program() {
    let source = "let add = fn(x, y) {\n\tx + y;\r\n};\nlet result = add(five, ten);";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Fn,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_illegal_characters() {
    let tokens = tokenize("a @ é".to_string(), None);

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "@");
    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].value, "é");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_eof_is_repeated() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.value, "");
    }
}

#[test]
fn test_empty_and_whitespace_sources() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds(" \t\r\n "), vec![TokenKind::EOF]);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  xy = \"ab\";".to_string(), Some("span.lang".to_string()));

    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 7);
    // String spans cover the quotes
    assert_eq!(tokens[3].span.start.0, 10);
    assert_eq!(tokens[3].span.end.0, 14);
    assert_eq!(tokens[3].span.start.1.as_str(), "span.lang");
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x".to_string(), None);
    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_lookup_identifier() {
    assert_eq!(lookup_identifier("fn"), TokenKind::Fn);
    assert_eq!(lookup_identifier("return"), TokenKind::Return);
    assert_eq!(lookup_identifier("function"), TokenKind::Identifier);
    assert_eq!(lookup_identifier("Let"), TokenKind::Identifier);
}

#[test]
fn test_kind_names() {
    assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
    assert_eq!(TokenKind::Number.to_string(), "INT");
    assert_eq!(TokenKind::Assignment.to_string(), "ASSIGN");
    assert_eq!(TokenKind::NotEquals.to_string(), "NOT_EQ");
    assert_eq!(TokenKind::Fn.to_string(), "FUNCTION");
    assert_eq!(TokenKind::OpenCurly.to_string(), "LBRACE");
}

proptest! {
    /// Scanning ends within `chars + 1` calls and then keeps returning EOF.
    #[test]
    fn token_count_is_bounded(input in "\\PC{0,200}") {
        let mut lexer = Lexer::new(input.clone(), None);
        let bound = input.chars().count() + 1;

        let mut calls = 0;
        loop {
            calls += 1;
            prop_assert!(calls <= bound, "no EOF after {} calls for {:?}", bound, input);
            if lexer.next_token().kind == TokenKind::EOF {
                break;
            }
        }

        prop_assert_eq!(lexer.next_token().kind, TokenKind::EOF);
        prop_assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }

    /// Every token span lies within the source and spans never overlap.
    #[test]
    fn token_spans_are_ordered(input in "\\PC{0,200}") {
        let tokens = tokenize(input.clone(), None);
        let len = input.chars().count() as u32;

        for window in tokens.windows(2) {
            prop_assert!(window[0].span.end.0 <= window[1].span.start.0);
        }
        for token in &tokens {
            prop_assert!(token.span.start.0 <= token.span.end.0);
            prop_assert!(token.span.end.0 <= len);
        }
    }
}
