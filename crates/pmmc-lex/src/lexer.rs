//! The lexer itself: drives the main DFA one byte at a time, retries past
//! lexical errors, and reclassifies `ID` lexemes through the keyword DFA.

use pmmc_util::{Handler, Span};

use crate::cursor::Cursor;
use crate::tables::{Tables, COMMENT_STATE};
use crate::token::{Token, TokenClass};

/// Owns the source cursor and the two DFA tables for one compilation.
/// Produces one [`Token`] per call to [`Lexer::next_token`]; lexical
/// errors are reported to the shared [`Handler`] and never escape as a
/// returned `Token` of class `Error` — the lexer retries until it has a
/// real token or reaches end of input.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    tables: Tables,
    last_was_number_or_ident: bool,
}

enum Scan {
    Token(Token),
    Error { span: Span, lexeme: String, message: &'static str },
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(source),
            tables: Tables::build(),
            last_was_number_or_ident: false,
        }
    }

    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the next token, reporting (and skipping past) any number of
    /// lexical errors along the way.
    pub fn next_token(&mut self, handler: &Handler) -> Token {
        loop {
            match self.scan_one() {
                Scan::Token(token) => return token,
                Scan::Error { span, lexeme, message } => {
                    handler.lexer_error(span, &lexeme, message);
                }
            }
        }
    }

    fn scan_one(&mut self) -> Scan {
        let mut state = 0usize;
        let mut start_line = self.cursor.line();
        let mut start_column = self.cursor.column();
        let mut lexeme = String::new();
        let mut last_byte = 0u8;

        while !self.tables.is_final(state) {
            // Still in the start state: whitespace/comment bytes consumed so
            // far belong to no token, so keep sliding the snapshot forward
            // until the DFA actually leaves state 0 on a real token byte.
            if state == 0 {
                start_line = self.cursor.line();
                start_column = self.cursor.column();
            }
            let byte = match self.cursor.advance() {
                Some(byte) => byte,
                None => return self.resolve_eof(state, lexeme, start_line, start_column),
            };
            last_byte = byte;
            state = self.tables.transition(state, byte, self.last_was_number_or_ident);
            if should_append(&self.tables, state) {
                lexeme.push(byte as char);
            }
        }

        self.resolve(state, lexeme, Some(last_byte), start_line, start_column)
    }

    fn resolve_eof(
        &mut self,
        state: usize,
        lexeme: String,
        start_line: u32,
        start_column: u32,
    ) -> Scan {
        if state == 0 {
            self.last_was_number_or_ident = false;
            return Scan::Token(Token::lambda(start_line, start_column));
        }
        if state == COMMENT_STATE {
            self.last_was_number_or_ident = false;
            return Scan::Error {
                span: Span::point(self.cursor.line(), self.cursor.column()),
                lexeme,
                message: "Error: Unexpected end of file",
            };
        }
        // EOF mid-token: treat it as the state's "other" default, the way a
        // character outside every explicitly assigned byte would resolve.
        let fallback = self.tables.eof_fallback(state);
        self.resolve(fallback, lexeme, None, start_line, start_column)
    }

    fn resolve(
        &mut self,
        state: usize,
        lexeme: String,
        last_byte: Option<u8>,
        start_line: u32,
        start_column: u32,
    ) -> Scan {
        let kind = self
            .tables
            .accept_kind(state)
            .expect("loop only exits once `state` is final");
        let (mut class, retreat) = kind.parts();

        if retreat {
            if let Some(byte) = last_byte {
                self.cursor.retreat(byte);
            }
        }

        if self.tables.is_error_state(state) {
            self.last_was_number_or_ident = false;
            let mut column = self.cursor.column();
            if retreat && last_byte.is_some() {
                column += 1;
            }
            return Scan::Error {
                span: Span::point(self.cursor.line(), column),
                lexeme,
                message: self.tables.error_message(state),
            };
        }

        if class == TokenClass::Id {
            class = self.tables.classify_keyword(&lexeme);
        }
        self.last_was_number_or_ident = matches!(
            class,
            TokenClass::Id | TokenClass::NInteger | TokenClass::NReal
        );

        Scan::Token(Token {
            class,
            lexeme,
            line: start_line,
            column: start_column,
        })
    }
}

/// Buffer policy (spec.md §4.3): append the byte that was just consumed
/// only if entering an error state, or if the new state is neither the
/// start state, the comment state, nor an accept-with-retreat state.
fn should_append(tables: &Tables, state: usize) -> bool {
    if tables.is_error_state(state) {
        return true;
    }
    if state == 0 || state == COMMENT_STATE {
        return false;
    }
    match tables.accept_kind(state) {
        Some(kind) => !kind.parts().1,
        None => true,
    }
}
