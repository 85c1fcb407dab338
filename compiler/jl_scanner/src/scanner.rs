//! External scanner entry point and mode dispatch.
//!
//! The scanner is an explicit state machine. Each call starts in
//! [`Mode::Dispatch`]; every mode handler inspects the cursor and returns a
//! [`Step`]: switch to another mode, emit a token, or refuse. Handlers never
//! fall through to each other implicitly.
//!
//! # Priority
//!
//! 1. `(` directly at the cursor, when the grammar asks for it, is an
//!    immediate paren. This is decided before any whitespace is skipped.
//! 2. Inside a string (any content kind valid), whitespace is content, so
//!    the string scanner takes over.
//! 3. Otherwise whitespace is skipped as trivia, then `#` goes to the block
//!    comment scanner and everything else to the delimiter classifier.
//!
//! # State
//!
//! None. Every decision is re-derived from the hint set and the characters
//! ahead of the cursor, so [`Scanner::serialize`] writes zero bytes.

use tracing::trace;

use crate::{Lexer, TokenType, ValidSymbols};

mod block_comment;
mod delimiter;
mod string_content;

use string_content::StringKind;

/// Scanning mode within a single call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Entry: immediate paren, string routing, whitespace, comment opener.
    Dispatch,
    /// At a `"` outside string content: single vs triple quote.
    Delimiter,
    /// Literal run inside a string of the given kind.
    StringContent(StringKind),
    /// At a `#` that may open a nested block comment.
    BlockComment,
}

/// Outcome of one mode handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Enter(Mode),
    Emit(TokenType),
    Reject,
}

/// The Julia external scanner.
///
/// Zero-sized: the scanner keeps no state between calls. The lifecycle
/// methods exist because the host contract requires them; they are
/// always trivial.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scanner;

#[allow(
    clippy::unused_self,
    reason = "methods mirror the host's per-instance lifecycle on a stateless scanner"
)]
impl Scanner {
    /// Bytes written by [`serialize`](Self::serialize). Always zero.
    pub const STATE_SIZE: usize = 0;

    /// Create a scanner. There is nothing to allocate.
    pub const fn new() -> Self {
        Scanner
    }

    /// Save scanner state for incremental re-parsing.
    ///
    /// Writes nothing and returns `0`: there is no state to save.
    pub fn serialize(&self, _buffer: &mut [u8]) -> usize {
        Self::STATE_SIZE
    }

    /// Restore scanner state saved by [`serialize`](Self::serialize).
    ///
    /// The saved state is always empty, so this is a no-op.
    pub fn deserialize(&mut self, _buffer: &[u8]) {}

    /// Scan one external token.
    ///
    /// Returns the token kind on success; the token's extent is whatever
    /// the cursor recorded (see [`Lexer`]). Returns `None` when the scanner
    /// has no opinion here and the host should fall back to its own lexer.
    ///
    /// A returned kind is always a member of `valid`.
    pub fn scan<L: Lexer + ?Sized>(&self, lexer: &mut L, valid: ValidSymbols) -> Option<TokenType> {
        trace!(?valid, lookahead = ?lexer.lookahead(), "scan");

        let mut mode = Mode::Dispatch;
        loop {
            let step = match mode {
                Mode::Dispatch => dispatch(lexer, valid),
                Mode::Delimiter => delimiter::scan(lexer, valid),
                Mode::StringContent(kind) => string_content::scan(lexer, valid, kind),
                Mode::BlockComment => block_comment::scan(lexer),
            };

            match step {
                Step::Enter(next) => {
                    trace!(from = ?mode, to = ?next, "enter");
                    mode = next;
                }
                Step::Emit(kind) => {
                    debug_assert!(valid.allows(kind), "emitted {kind} outside hint set");
                    trace!(%kind, "emit");
                    return Some(kind);
                }
                Step::Reject => {
                    trace!(?mode, "reject");
                    return None;
                }
            }
        }
    }
}

fn dispatch<L: Lexer + ?Sized>(lexer: &mut L, valid: ValidSymbols) -> Step {
    if is_immediate_paren(lexer, valid) {
        return Step::Emit(TokenType::ImmediateParen);
    }

    if let Some(kind) = StringKind::from_valid(valid) {
        return Step::Enter(Mode::StringContent(kind));
    }

    while lexer.lookahead().is_whitespace() {
        lexer.advance(true);
    }

    if lexer.lookahead() == '#' && valid.allows(TokenType::BlockComment) {
        Step::Enter(Mode::BlockComment)
    } else {
        Step::Enter(Mode::Delimiter)
    }
}

/// `f(x)` vs `f (x)`: the paren counts as immediate only when it is the
/// very next character. Nothing is consumed; the host lexes `(` itself.
#[inline]
fn is_immediate_paren<L: Lexer + ?Sized>(lexer: &L, valid: ValidSymbols) -> bool {
    lexer.lookahead() == '(' && valid.allows(TokenType::ImmediateParen)
}
