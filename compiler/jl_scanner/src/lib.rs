//! External scanner for the Julia tree-sitter grammar.
//!
//! The grammar is context-free; a few lexical decisions in Julia are not.
//! The parser calls [`Scanner::scan`] at every point where one of those
//! tokens may appear, passing the set of tokens it would accept
//! ([`ValidSymbols`]) and a character cursor ([`Lexer`]). The scanner
//! consumes characters and answers with at most one [`TokenType`]:
//!
//! - `"` vs `"""` string delimiters,
//! - literal content inside plain and triple-quoted strings, split at `$`
//!   interpolation splices when the string interpolates,
//! - nested `#= ... =#` block comments,
//! - whether a `(` immediately follows the previous token (`f(x)` vs
//!   `f (x)`).
//!
//! It does not parse, build trees, or decode escapes. It keeps no state
//! between calls.
//!
//! The [`ffi`] module exports the same scanner under the C symbol names the
//! generated parser links against.

pub mod ffi;
mod lexer;
mod scanner;
mod source;
mod token_type;
mod valid_symbols;

pub use lexer::Lexer;
pub use scanner::Scanner;
pub use source::{SourceLexer, Span};
pub use token_type::TokenType;
pub use valid_symbols::ValidSymbols;
