//! Literal text inside string literals.
//!
//! Consumes everything up to the next structurally significant character
//! and emits one content token for it:
//!
//! - `"` ends plain content. In a triple-quoted string only a run of three
//!   does; one or two quotes are literal text.
//! - `$` ends interpolating content (the host lexes the splice).
//! - `\` always takes the next character with it, so `\"`, `\$` and `\\`
//!   never terminate anything. Escapes are not decoded here.
//! - End of input ends content: an unterminated string still yields a
//!   token.

use tracing::trace;

use super::delimiter::eat_triple_run;
use super::{Mode, Step};
use crate::{Lexer, TokenType, ValidSymbols};

/// Which of the four content kinds the grammar is asking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct StringKind {
    triple: bool,
    interpolate: bool,
}

impl StringKind {
    /// Derive the content kind from the hint set, or `None` when no
    /// content kind is valid.
    ///
    /// Triple kinds win over plain ones, and interpolating over raw, but
    /// only among kinds that are actually in the set: the chosen token is
    /// always one the grammar accepts.
    pub(super) fn from_valid(valid: ValidSymbols) -> Option<Self> {
        if !valid.wants_string_content() {
            return None;
        }
        let triple = valid.intersects(ValidSymbols::TRIPLE_CONTENTS);
        let interpolate = if triple {
            valid.allows(TokenType::TripleStringContent)
        } else {
            valid.allows(TokenType::StringContent)
        };
        Some(Self {
            triple,
            interpolate,
        })
    }

    /// The token emitted for content of this kind.
    pub(super) fn token(self) -> TokenType {
        match (self.triple, self.interpolate) {
            (false, true) => TokenType::StringContent,
            (false, false) => TokenType::StringContentNoInterpolation,
            (true, true) => TokenType::TripleStringContent,
            (true, false) => TokenType::TripleStringContentNoInterpolation,
        }
    }
}

pub(super) fn scan<L: Lexer + ?Sized>(lexer: &mut L, valid: ValidSymbols, kind: StringKind) -> Step {
    let mut has_content = false;

    if lexer.lookahead() == '"' {
        // An empty run of content: the quote belongs to a delimiter.
        if valid.intersects(ValidSymbols::DELIMITERS) {
            return Step::Enter(Mode::Delimiter);
        }
        if !kind.triple {
            return Step::Reject;
        }
        lexer.mark_end();
        if eat_triple_run(lexer) {
            // Closing `"""`; the grammar recognizes it outside content.
            return Step::Reject;
        }
        has_content = true;
    }

    if kind.interpolate && !has_content && lexer.lookahead() == '$' {
        return Step::Reject;
    }

    loop {
        match lexer.lookahead() {
            '"' if !kind.triple => return Step::Emit(kind.token()),
            '"' => {
                lexer.mark_end();
                if eat_triple_run(lexer) {
                    return if has_content {
                        Step::Emit(kind.token())
                    } else {
                        Step::Reject
                    };
                }
                has_content = true;
            }
            '$' if kind.interpolate => {
                lexer.mark_end();
                return Step::Emit(kind.token());
            }
            '\\' => {
                lexer.advance(false);
                has_content = true;
                if lexer.is_eof() {
                    trace!("dangling backslash at end of input");
                    lexer.mark_end();
                    return Step::Emit(kind.token());
                }
                lexer.advance(false);
            }
            '\0' if lexer.is_eof() => {
                trace!(has_content, "unterminated string content");
                lexer.mark_end();
                return Step::Emit(kind.token());
            }
            _ => {
                lexer.advance(false);
                has_content = true;
            }
        }
    }
}
