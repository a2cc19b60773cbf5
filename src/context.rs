//! The cursor, locale, and argument-index state threaded through every scan.

use crate::error::InputError;
use crate::locale::Locale;

/// Opaque cursor position captured by [`ScanContext::checkpoint`].
///
/// Restoring a checkpoint is how the driver implements scanf-style putback:
/// a failed field scan rewinds to the position captured before the field
/// began, so the unconsumed tail is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Scanning state over one borrowed input range.
///
/// Carries the byte-offset cursor into the input, the active [`Locale`], and
/// the next-implicit-argument counter. The engine passes it by mutable
/// reference into every scanner invocation; scanners read and consume
/// characters through it and must not retain it beyond the call (the borrow
/// checker enforces this).
#[derive(Debug)]
pub struct ScanContext<'i> {
    input: &'i str,
    offset: usize,
    locale: Locale,
    next_implicit: usize,
}

impl<'i> ScanContext<'i> {
    /// Context over `input` with the default locale-independent policy.
    pub fn new(input: &'i str) -> Self {
        Self::with_locale(input, Locale::default())
    }

    /// Context over `input` with an explicit locale.
    pub fn with_locale(input: &'i str, locale: Locale) -> Self {
        Self {
            input,
            offset: 0,
            locale,
            next_implicit: 0,
        }
    }

    /// The locale consulted by `L`-flagged fields.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The unconsumed suffix of the input. Aliases the original storage.
    pub fn rest(&self) -> &'i str {
        &self.input[self.offset..]
    }

    /// Number of bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.offset
    }

    /// True when the cursor is at the end of the input range.
    pub fn is_empty(&self) -> bool {
        self.offset == self.input.len()
    }

    /// The next character, without consuming it. `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume and return the next character.
    pub fn next_char(&mut self) -> Result<char, InputError> {
        let ch = self.peek().ok_or(InputError::EndOfInput)?;
        self.offset += ch.len_utf8();
        Ok(ch)
    }

    /// Consume the next character when `peek()` already proved it exists.
    /// Does nothing at end of input.
    pub fn bump(&mut self) {
        if let Some(ch) = self.peek() {
            self.offset += ch.len_utf8();
        }
    }

    /// Advance the cursor by up to `n` characters, clamped at the range end.
    pub fn advance(&mut self, n: usize) {
        for _ in 0..n {
            if self.peek().is_none() {
                break;
            }
            self.bump();
        }
    }

    /// Capture the cursor position for later [`restore`](Self::restore).
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.offset)
    }

    /// Rewind the cursor to a previously captured position.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        debug_assert!(checkpoint.0 <= self.input.len());
        self.offset = checkpoint.0;
    }

    /// The characters consumed since `checkpoint` was captured.
    pub fn slice_from(&self, checkpoint: Checkpoint) -> &'i str {
        &self.input[checkpoint.0..self.offset]
    }

    /// Skip locale-classified whitespace; returns how many characters went.
    pub fn skip_whitespace(&mut self) -> usize {
        let mut skipped = 0;
        while let Some(ch) = self.peek() {
            if !self.locale.is_space(ch) {
                break;
            }
            self.bump();
            skipped += 1;
        }
        skipped
    }

    /// Consume `expected` if the input starts with it (ASCII case-insensitive).
    pub fn eat_ascii_ci(&mut self, expected: &str) -> bool {
        match self.rest().get(..expected.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(expected) => {
                self.offset += expected.len();
                true
            }
            _ => false,
        }
    }

    /// Next implicit argument index; increments on each call.
    pub(crate) fn take_implicit_index(&mut self) -> usize {
        let index = self.next_implicit;
        self.next_implicit += 1;
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_consume() {
        let mut ctx = ScanContext::new("ab");
        assert_eq!(ctx.peek(), Some('a'));
        assert_eq!(ctx.peek(), Some('a'));
        assert_eq!(ctx.next_char(), Ok('a'));
        assert_eq!(ctx.rest(), "b");
    }

    #[test]
    fn next_char_fails_at_end() {
        let mut ctx = ScanContext::new("");
        assert_eq!(ctx.next_char(), Err(InputError::EndOfInput));
    }

    #[test]
    fn advance_clamps_at_end() {
        let mut ctx = ScanContext::new("xy");
        ctx.advance(10);
        assert!(ctx.is_empty());
        assert_eq!(ctx.rest(), "");
    }

    #[test]
    fn checkpoint_restore_round_trip() {
        let mut ctx = ScanContext::new("12345");
        let checkpoint = ctx.checkpoint();
        ctx.advance(3);
        assert_eq!(ctx.slice_from(checkpoint), "123");
        ctx.restore(checkpoint);
        assert_eq!(ctx.rest(), "12345");
    }

    #[test]
    fn multibyte_cursor_stays_on_char_boundaries() {
        let mut ctx = ScanContext::new("äöü");
        assert_eq!(ctx.next_char(), Ok('ä'));
        assert_eq!(ctx.rest(), "öü");
        ctx.advance(1);
        assert_eq!(ctx.rest(), "ü");
    }

    #[test]
    fn skip_whitespace_counts_characters() {
        let mut ctx = ScanContext::new(" \t\nx");
        assert_eq!(ctx.skip_whitespace(), 3);
        assert_eq!(ctx.peek(), Some('x'));
        assert_eq!(ctx.skip_whitespace(), 0);
    }

    #[test]
    fn eat_ascii_ci_matches_prefix() {
        let mut ctx = ScanContext::new("Infinity rest");
        assert!(ctx.eat_ascii_ci("inf"));
        assert!(ctx.eat_ascii_ci("INITY"));
        assert!(!ctx.eat_ascii_ci("xyz"));
        assert_eq!(ctx.rest(), " rest");
    }
}
