//! Byte cursor over the source file.
//!
//! P‑‑ is restricted to 7-bit ASCII (spec.md §1's Non-goals rule out any
//! richer encoding), so unlike a general-purpose compiler's UTF-8-aware
//! cursor this one steps raw bytes — no multi-byte decoding, no grapheme
//! handling.

/// Tracks the read position and 1-based line/column as the lexer consumes
/// the source file one byte at a time.
pub struct Cursor<'a> {
    source: &'a [u8],
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Consumes and returns the next byte, advancing line/column. `None` at
    /// end of input; the cursor is left unmoved so a caller may call this
    /// repeatedly at EOF without harm.
    pub fn advance(&mut self) -> Option<u8> {
        let byte = *self.source.get(self.position)?;
        self.position += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if byte == b'\t' {
            self.column += 4;
        } else {
            self.column += 1;
        }
        Some(byte)
    }

    /// Undoes the most recent [`Cursor::advance`], given the byte it
    /// returned. Column restoration mirrors `advance`'s own accounting
    /// (tab: -4, newline: line only, line stays put at column 1 — matching
    /// the convention `_nextChar` already leaves the column in) so retreat
    /// is the exact inverse step.
    pub fn retreat(&mut self, byte: u8) {
        self.position -= 1;
        if byte == b'\n' {
            self.line -= 1;
        } else if byte == b'\t' {
            self.column -= 4;
        } else {
            self.column -= 1;
        }
    }
}
