//! Single vs triple quote classification.
//!
//! A plain delimiter is exactly one `"` wide even when more quotes follow:
//! `""` is an empty string, so the second quote must be left for the next
//! call. Only a full run of three becomes a triple delimiter.

use super::Step;
use crate::{Lexer, TokenType, ValidSymbols};

/// Length of a triple-quote run.
const TRIPLE: u8 = 3;

pub(super) fn scan<L: Lexer + ?Sized>(lexer: &mut L, valid: ValidSymbols) -> Step {
    if lexer.lookahead() != '"' {
        return Step::Reject;
    }

    lexer.advance(false);
    lexer.mark_end();
    let run = 1 + eat_quotes(lexer, TRIPLE - 1);

    if run < TRIPLE {
        return if valid.allows(TokenType::StringDelim) {
            Step::Emit(TokenType::StringDelim)
        } else {
            Step::Reject
        };
    }

    if !valid.allows(TokenType::TripleStringDelim) {
        return Step::Reject;
    }
    lexer.mark_end();
    Step::Emit(TokenType::TripleStringDelim)
}

/// Consume up to `max` consecutive `"` and return how many were consumed.
fn eat_quotes<L: Lexer + ?Sized>(lexer: &mut L, max: u8) -> u8 {
    let mut count = 0;
    while count < max && lexer.lookahead() == '"' {
        lexer.advance(false);
        count += 1;
    }
    count
}

/// Consume up to three quotes; `true` if a full triple run was there.
pub(super) fn eat_triple_run<L: Lexer + ?Sized>(lexer: &mut L) -> bool {
    eat_quotes(lexer, TRIPLE) == TRIPLE
}
