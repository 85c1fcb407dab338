//! Nested `#= ... =#` block comments.
//!
//! Block comments nest, so the scanner counts openers and closers rather
//! than stopping at the first `=#`. An unterminated comment is refused:
//! the host reports it as a parse error instead of silently swallowing the
//! rest of the file.

use tracing::trace;

use super::Step;
use crate::{Lexer, TokenType};

pub(super) fn scan<L: Lexer + ?Sized>(lexer: &mut L) -> Step {
    debug_assert_eq!(lexer.lookahead(), '#', "block comment must start at '#'");
    lexer.advance(false);
    if lexer.lookahead() != '=' {
        return Step::Reject;
    }
    lexer.advance(false);

    // Whether the previous character was an `=` that can start a closer.
    // The `=` of an opener never counts.
    let mut after_eq = false;
    let mut depth: usize = 1;

    loop {
        match lexer.lookahead() {
            '\0' if lexer.is_eof() => {
                trace!(depth, "unterminated block comment");
                return Step::Reject;
            }
            '=' => {
                lexer.advance(false);
                after_eq = true;
            }
            '#' if after_eq => {
                lexer.advance(false);
                after_eq = false;
                depth -= 1;
                if depth == 0 {
                    return Step::Emit(TokenType::BlockComment);
                }
            }
            '#' => {
                lexer.advance(false);
                if lexer.lookahead() == '=' {
                    lexer.advance(false);
                    depth += 1;
                }
            }
            _ => {
                lexer.advance(false);
                after_eq = false;
            }
        }
    }
}
