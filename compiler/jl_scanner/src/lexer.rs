//! Character cursor contract between the host parser and the scanner.
//!
//! The host owns the input and the token boundaries. The scanner only sees
//! one character of lookahead and can do three things with it: consume it
//! as part of the token, consume it as skippable trivia, or record the
//! current position as the token's end.
//!
//! # Token extent
//!
//! - The token starts where the last *skip* advance left the cursor (or
//!   where the call began if nothing was skipped).
//! - If [`mark_end`](Lexer::mark_end) was called, the token ends at the
//!   last marked position; characters consumed after it are not part of
//!   the token and will be seen again by the next call.
//! - Otherwise the token ends at the cursor position when the scanner
//!   returns.
//!
//! On refusal the host discards everything consumed during the call.

/// Host-supplied character cursor.
pub trait Lexer {
    /// The next unconsumed character, or `'\0'` at end of input.
    fn lookahead(&self) -> char;

    /// Consume the lookahead character.
    ///
    /// With `skip = true` the character is trivia: the token start moves
    /// past it.
    fn advance(&mut self, skip: bool);

    /// Record the current position as the end of the token being scanned.
    fn mark_end(&mut self);

    /// Returns `true` once the input is exhausted.
    ///
    /// Defaults to treating a `'\0'` lookahead as the end. Cursors that can
    /// tell an interior NUL from the end of input should override this.
    fn is_eof(&self) -> bool {
        self.lookahead() == '\0'
    }
}
