//! pmmc-lex — the P‑‑ lexical analyzer.
//!
//! Two table-driven DFAs do the work: a 32-state main automaton over ASCII
//! bytes classifies tokens (and marks a handful of final states as
//! "accept, then retreat one byte" — see [`tables::AcceptKind`]), and a
//! 65-state keyword automaton over `'a'..='z'` reclassifies `ID` lexemes
//! that happen to spell one of the 17 protected symbols. [`Lexer`] owns
//! both tables, the byte cursor, and the one bit of cross-token context
//! needed to tell a unary `+`/`-` from a binary one.

pub mod cursor;
pub mod lexer;
pub mod tables;
pub mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenClass};
