use std::ops::Range;

/// Returns true if the character separates atoms.
///
/// `\r` is accepted so that input with Windows line endings parses the same way.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// A position-tracked view over the source text.
///
/// The cursor starts *before* the first character: [`Cursor::peek`] returns the first character,
/// and the first call to [`Iterator::next`] consumes it.
#[derive(Debug, Clone)]
pub struct Cursor<'source> {
    /// The text being traversed.
    source: &'source str,

    /// The byte offset of the **next** character to be consumed.
    offset: usize,
}

impl<'source> Cursor<'source> {
    /// Create a new cursor positioned before the first character of the given source.
    pub fn new(source: &'source str) -> Self {
        Self { source, offset: 0 }
    }

    /// Returns the full text this cursor traverses.
    pub fn source(&self) -> &'source str {
        self.source
    }

    /// Returns the byte offset of the next character to be consumed.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the next character without consuming it, or [`None`] at the end of the source.
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns true if every character has been consumed.
    pub fn at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Returns the text that has not been consumed yet.
    pub fn remaining(&self) -> &'source str {
        &self.source[self.offset..]
    }

    /// Consumes characters as long as they are whitespace.
    pub fn eat_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.next();
        }
    }

    /// Returns the span of the next character, or an empty span at the end of the source if there
    /// is nothing left.
    pub fn span(&self) -> Range<usize> {
        match self.peek() {
            Some(c) => self.offset..self.offset + c.len_utf8(),
            None => self.eof_span(),
        }
    }

    /// Returns an empty span pointing at the end of the source.
    pub fn eof_span(&self) -> Range<usize> {
        self.source.len()..self.source.len()
    }
}

impl Iterator for Cursor<'_> {
    type Item = char;

    /// Consumes the next character and returns it.
    fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }
}
