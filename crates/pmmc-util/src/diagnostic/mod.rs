//! Diagnostic collection.
//!
//! Lexical and syntactic errors are never `Err` values — they are counted
//! and collected here so compilation can continue past them and the user
//! sees every diagnostic from a single pass, in source order.

use std::cell::{Ref, RefCell};
use std::fmt;

use crate::span::Span;

/// Severity of a diagnostic. P‑‑ only ever reports errors, but the type is
/// kept distinct from `Diagnostic` itself in case a future caller wants to
/// downgrade (e.g. for a lint pass outside this crate's scope).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
        }
    }
}

/// A single lexical or syntactic diagnostic, already rendered to its final
/// user-facing text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Collects diagnostics for the duration of one compilation. Shared by
/// immutable reference between the lexer and the parser (both only ever
/// append), mirroring the single diagnostic sink the driver owns.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Records a lexer-level error: `Lexer error on line L col C ('lexeme'): <message>`.
    pub fn lexer_error(&self, span: Span, lexeme: &str, message: &str) {
        self.push(
            span,
            format!(
                "Lexer error on line {} col {} ('{}'): {}",
                span.line, span.column, lexeme, message
            ),
        );
    }

    /// Records a parser-level error against a concrete found token:
    /// `Parser error on line L col C: expected <expected> but found <found>`.
    pub fn parser_error(&self, span: Span, expected: &str, found: &str) {
        self.push(
            span,
            format!(
                "Parser error on line {} col {}: expected {} but found {}",
                span.line, span.column, expected, found
            ),
        );
    }

    /// Records a parser-level error discovered at end of input:
    /// `Parser error on line L col C: unexpected end of file (expected <expected>)`.
    pub fn parser_error_eof(&self, span: Span, expected: &str) {
        self.push(
            span,
            format!(
                "Parser error on line {} col {}: unexpected end of file (expected {})",
                span.line, span.column, expected
            ),
        );
    }

    fn push(&self, span: Span, message: String) {
        self.diagnostics.borrow_mut().push(Diagnostic {
            level: Level::Error,
            message,
            span,
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn diagnostics(&self) -> Ref<'_, Vec<Diagnostic>> {
        self.diagnostics.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_no_errors() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn lexer_error_formats_expected_line() {
        let handler = Handler::new();
        handler.lexer_error(Span::new(0, 1, 3, 5), "#", "Error: Invalid character");
        assert_eq!(handler.error_count(), 1);
        assert_eq!(
            handler.diagnostics()[0].message,
            "Lexer error on line 3 col 5 ('#'): Error: Invalid character"
        );
    }

    #[test]
    fn parser_error_formats_expected_and_found() {
        let handler = Handler::new();
        handler.parser_error(Span::new(0, 0, 4, 1), ";", "begin");
        assert_eq!(
            handler.diagnostics()[0].message,
            "Parser error on line 4 col 1: expected ; but found begin"
        );
    }

    #[test]
    fn parser_error_eof_formats_without_found() {
        let handler = Handler::new();
        handler.parser_error_eof(Span::new(0, 0, 9, 1), "end");
        assert_eq!(
            handler.diagnostics()[0].message,
            "Parser error on line 9 col 1: unexpected end of file (expected end)"
        );
    }

    #[test]
    fn error_count_is_monotonic() {
        let handler = Handler::new();
        for i in 0..5 {
            handler.lexer_error(Span::new(0, 1, i, 1), "x", "Error: Invalid character");
            assert_eq!(handler.error_count(), (i + 1) as usize);
        }
    }
}
