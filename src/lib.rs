#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

pub use parser::parser::parse;

/// Character offset into a source, plus the source's label.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding character offset `position`.
///
/// Returns the 1-based line number, the line's text (with its newline) and
/// the column within it. The offset one past the last character is valid, so
/// end-of-input diagnostics can be located too.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = None;

    for line in source.split_inclusive('\n') {
        let end = start + line.chars().count();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
        last_line = Some(line);
    }

    if pos != start {
        return None;
    }

    match last_line {
        Some(line) if !line.ends_with('\n') => {
            Some((line_number - 1, line.to_string(), line.chars().count()))
        }
        _ => Some((line_number, String::new(), 0)),
    }
}

/// Formats one diagnostic against the source it was found in.
///
/// ```text
/// Error: ExpectedToken
/// -> final.lang
///    |
/// 20 | let a 5;
///    | ------^ expected next token to be ASSIGN, got INT instead
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let mut out = String::new();
    if write_error(&mut out, error, source).is_err() {
        return error.to_string();
    }

    out
}

fn write_error(out: &mut String, error: &Error, source: &str) -> std::fmt::Result {
    let position = error.get_position();
    writeln_header(out, error, position)?;

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return writeln!(out, "{}", error);
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    writeln!(out, "{:>padding$}", "|")?;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    writeln!(out, "{} | {}", line_string, line_text_removed.trim_end())?;

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    writeln!(out, "{:>padding$} {:->arrows$} {}", "|", "^", error)
}

fn writeln_header(out: &mut String, error: &Error, position: &Position) -> std::fmt::Result {
    if let ErrorTip::None = error.get_tip() {
        writeln!(out, "Error: {}", error.get_error_name())?;
    } else {
        writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
    }
    writeln!(out, "-> {}", position.1)
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::tokens::TokenKind,
        Position,
    };

    const SOURCE: &str = "let a = 1;\nlet b = 2;\n    let c 3;\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 4).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "let a = 1;\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 32).unwrap();
        assert_eq!(line_number, 3);
        assert_eq!(line, "    let c 3;\n");
        assert_eq!(line_pos, 10);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        assert_eq!(
            super::get_line_at_position("let x", 5),
            Some((1, String::from("let x"), 5))
        );
        assert_eq!(
            super::get_line_at_position("x\n", 2),
            Some((2, String::new(), 0))
        );
        assert_eq!(super::get_line_at_position("x\n", 3), None);
    }

    #[test]
    fn test_format_error() {
        let error = Error::new(
            ErrorImpl::ExpectedToken {
                expected: TokenKind::Assignment,
                received: TokenKind::Number,
            },
            Position(32, Rc::new(String::from("test.lang"))),
        );

        let report = super::format_error(&error, SOURCE);
        let lines = report.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Error: ExpectedToken");
        assert_eq!(lines[1], "-> test.lang");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "3 | let c 3;");
        assert_eq!(
            lines[4],
            "  | ------^ expected next token to be ASSIGN, got INT instead"
        );
    }

    #[test]
    fn test_format_error_with_tip() {
        let error = Error::new(
            ErrorImpl::ExpectedToken {
                expected: TokenKind::Semicolon,
                received: TokenKind::Identifier,
            },
            Position(0, Rc::new(String::from("shell"))),
        );

        let report = super::format_error(&error, "x y");
        assert!(report.starts_with("Error: ExpectedToken (did you miss a semicolon?)\n"));
    }

    #[test]
    fn test_format_error_outside_source() {
        let error = Error::new(
            ErrorImpl::NoPrefixParseFn {
                kind: TokenKind::Illegal,
            },
            Position(40, Rc::new(String::from("short.lang"))),
        );

        let report = super::format_error(&error, "x");
        assert_eq!(
            report,
            "Error: NoPrefixParseFn (`ILLEGAL` cannot start an expression)\n-> short.lang\nno prefix parse function for ILLEGAL found\n"
        );
    }
}
