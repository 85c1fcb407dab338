//! In-memory [`Lexer`] over a source string.
//!
//! `SourceLexer` plays the host's side of the cursor contract for tests,
//! tools, and the reference driver: it tracks where the current token
//! starts, where the cursor is, and where the scanner last marked an end.
//!
//! # Interior Null Bytes
//!
//! A NUL inside the source is reported by [`lookahead()`](Lexer::lookahead)
//! as `'\0'`, exactly like the end of input. [`is_eof()`](Lexer::is_eof)
//! tells them apart by comparing the position against the source length,
//! so string content keeps scanning through an interior NUL.

use std::fmt;

use crate::Lexer;

/// Half-open byte range `start..end` in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` for a zero-width span.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Host-side cursor over a borrowed source string.
///
/// Positions are `u32` byte offsets; sources longer than `u32::MAX` bytes
/// are truncated at construction.
#[derive(Clone, Debug)]
pub struct SourceLexer<'a> {
    source: &'a str,
    /// Start of the token being scanned (moved by skip-advances).
    token_start: u32,
    /// Current read position.
    pos: u32,
    /// Last position recorded by `mark_end` during this token.
    marked_end: Option<u32>,
}

impl<'a> SourceLexer<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        let source = match u32::try_from(source.len()) {
            Ok(_) => source,
            Err(_) => truncate_to_char_boundary(source, u32::MAX as usize),
        };
        Self {
            source,
            token_start: 0,
            pos: 0,
            marked_end: None,
        }
    }

    /// The full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source in bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source length is capped at u32::MAX in new()"
    )]
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source.len() as u32
    }

    /// Where the token being scanned starts.
    #[inline]
    pub fn token_start(&self) -> u32 {
        self.token_start
    }

    /// The last position recorded by `mark_end`, if any.
    #[inline]
    pub fn marked_end(&self) -> Option<u32> {
        self.marked_end
    }

    /// Start a new token at the current position.
    pub fn begin_token(&mut self) {
        self.token_start = self.pos;
        self.marked_end = None;
    }

    /// Move the cursor to `pos` and start a new token there.
    ///
    /// Used by hosts to rewind after a refused scan, or to continue after
    /// a token whose marked end precedes the cursor.
    pub fn reset_to(&mut self, pos: u32) {
        debug_assert!(
            pos <= self.source_len(),
            "reset position {pos} exceeds source length {}",
            self.source_len()
        );
        debug_assert!(
            self.source.is_char_boundary(pos as usize),
            "reset position {pos} is not a char boundary"
        );
        self.pos = pos;
        self.begin_token();
    }

    /// Extent of the token just scanned: from the token start to the
    /// marked end, or to the cursor if nothing was marked.
    pub fn finish(&self) -> Span {
        Span::new(self.token_start, self.marked_end.unwrap_or(self.pos))
    }

    /// Source text covered by `span`.
    pub fn slice(&self, span: Span) -> &'a str {
        &self.source[span.start as usize..span.end as usize]
    }

    /// Remaining source from the cursor on.
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos as usize..]
    }

    /// Consume characters while `pred` holds, without touching the token
    /// start. Returns the number of bytes consumed.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> u32 {
        let start = self.pos;
        while !self.is_eof() && pred(self.lookahead()) {
            self.bump();
        }
        self.pos - start
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8() is at most 4"
    )]
    #[inline]
    fn bump(&mut self) {
        if let Some(c) = self.rest().chars().next() {
            self.pos += c.len_utf8() as u32;
        }
    }
}

impl Lexer for SourceLexer<'_> {
    #[inline]
    fn lookahead(&self) -> char {
        self.rest().chars().next().unwrap_or('\0')
    }

    #[inline]
    fn advance(&mut self, skip: bool) {
        self.bump();
        if skip {
            self.token_start = self.pos;
        }
    }

    #[inline]
    fn mark_end(&mut self) {
        self.marked_end = Some(self.pos);
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.source_len()
    }
}

/// Longest prefix of `s` no longer than `max` bytes that ends on a char
/// boundary.
fn truncate_to_char_boundary(s: &str, max: usize) -> &str {
    let mut end = max.min(s.len());
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests;
