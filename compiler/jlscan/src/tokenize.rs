//! Reference host: tokenize whole Julia sources with the external scanner.
//!
//! A tree-sitter parser decides which external tokens are valid from its
//! parse state. This host approximates that with a context stack (code vs
//! the kind of string currently open) so the scanner can be exercised on
//! real files without a generated parser:
//!
//! - In code, block comments and both delimiters are always valid, and an
//!   immediate paren is valid right after an identifier or a closer.
//! - In a string, the matching content kind and closing delimiter are
//!   valid. If that is refused, content alone is tried (a triple string
//!   whose content starts with `"`).
//! - Everything the scanner declines (whitespace, line comments,
//!   identifiers, numbers, punctuation, `$` splices) is lexed here.
//!
//! The produced spans tile the source exactly.

use std::fmt;

use jl_scanner::{Lexer, Scanner, SourceLexer, Span, TokenType, ValidSymbols};
use thiserror::Error;
use tracing::{debug, trace};

/// What a token is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Produced by the external scanner.
    External(TokenType),
    /// Run of whitespace outside strings.
    Whitespace,
    /// `#` to end of line.
    LineComment,
    Identifier,
    Number,
    /// Any other single character in code.
    Punct,
    /// `$name` or `$( ... )` inside an interpolating string.
    Interpolation,
    /// Text the host could not place, such as an unterminated block
    /// comment or a stray quote.
    Error,
}

impl TokenKind {
    /// Returns `true` for whitespace and comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::LineComment
                | TokenKind::External(TokenType::BlockComment)
        )
    }

    /// Short name for listings.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::External(kind) => kind.name(),
            TokenKind::Whitespace => "whitespace",
            TokenKind::LineComment => "line_comment",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Punct => "punct",
            TokenKind::Interpolation => "interpolation",
            TokenKind::Error => "error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token and its byte range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Source text of this token.
    pub fn text(self, source: &str) -> &str {
        &source[self.span.start as usize..self.span.end as usize]
    }
}

/// Tokenization failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// The scanner returned an empty token that would never advance.
    #[error("scanner produced an empty {kind} token at byte {offset}")]
    Stalled { offset: u32, kind: TokenType },
}

/// Tokenize `source` into a gap-free token stream.
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut tokenizer = Tokenizer::new(source);
    tokenizer.run()?;
    debug!(
        bytes = source.len(),
        tokens = tokenizer.tokens.len(),
        "tokenized"
    );
    Ok(tokenizer.tokens)
}

/// Kind of string literal currently open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct StringContext {
    triple: bool,
    interpolate: bool,
}

impl StringContext {
    fn content(self) -> ValidSymbols {
        match (self.triple, self.interpolate) {
            (false, true) => ValidSymbols::STRING_CONTENT,
            (false, false) => ValidSymbols::STRING_CONTENT_NO_INTERPOLATION,
            (true, true) => ValidSymbols::TRIPLE_STRING_CONTENT,
            (true, false) => ValidSymbols::TRIPLE_STRING_CONTENT_NO_INTERPOLATION,
        }
    }

    fn closer(self) -> ValidSymbols {
        if self.triple {
            ValidSymbols::TRIPLE_STRING_DELIM
        } else {
            ValidSymbols::STRING_DELIM
        }
    }
}

struct Tokenizer<'a> {
    lexer: SourceLexer<'a>,
    scanner: Scanner,
    /// Open strings, innermost last. Empty means code.
    strings: Vec<StringContext>,
    tokens: Vec<Token>,
}

impl<'a> Tokenizer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            lexer: SourceLexer::new(source),
            scanner: Scanner::new(),
            strings: Vec::new(),
            tokens: Vec::new(),
        }
    }

    fn run(&mut self) -> Result<(), TokenizeError> {
        while !self.lexer.is_eof() {
            match self.strings.last().copied() {
                None => self.step_code()?,
                Some(string) => self.step_string(string)?,
            }
        }
        Ok(())
    }

    // ─── Code ──────────────────────────────────────────────────

    fn step_code(&mut self) -> Result<(), TokenizeError> {
        let mut valid = ValidSymbols::BLOCK_COMMENT | ValidSymbols::DELIMITERS;
        if self.allows_call_paren() {
            valid |= ValidSymbols::IMMEDIATE_PAREN;
        }

        let start = self.lexer.pos();
        let Some((kind, span)) = self.try_scan(start, valid) else {
            self.lex_code_token(start);
            return Ok(());
        };

        if span.start > start {
            // Whitespace the scanner skipped as trivia.
            self.push(TokenKind::Whitespace, Span::new(start, span.start));
        }
        let opens_raw = self.is_string_macro_prefix(span.start);
        self.commit(kind, span)?;

        match kind {
            TokenType::StringDelim | TokenType::TripleStringDelim => {
                self.strings.push(StringContext {
                    triple: kind == TokenType::TripleStringDelim,
                    interpolate: !opens_raw,
                });
            }
            _ => {}
        }
        Ok(())
    }

    /// An immediate paren is only meaningful where a call can happen.
    fn allows_call_paren(&self) -> bool {
        let Some(last) = self.tokens.last() else {
            return false;
        };
        if last.span.end != self.lexer.pos() {
            return false;
        }
        match last.kind {
            TokenKind::Identifier => true,
            TokenKind::Punct => matches!(
                self.lexer.slice(last.span),
                ")" | "]" | "}"
            ),
            // A closing delimiter: the string that just ended.
            TokenKind::External(kind) => kind.is_delimiter() && self.strings.is_empty(),
            _ => false,
        }
    }

    /// `r"..."`, `raw"..."`: an identifier glued to the opening quote makes
    /// a string macro, whose body does not interpolate.
    fn is_string_macro_prefix(&self, quote_start: u32) -> bool {
        self.tokens
            .last()
            .is_some_and(|t| t.kind == TokenKind::Identifier && t.span.end == quote_start)
    }

    fn lex_code_token(&mut self, start: u32) {
        let c = self.lexer.lookahead();
        let kind = if c.is_whitespace() {
            self.lexer.eat_while(char::is_whitespace);
            TokenKind::Whitespace
        } else if c == '#' {
            if self.lexer.rest().starts_with("#=") {
                // The scanner refused the opener: it never closes.
                self.lexer.eat_while(|_| true);
                TokenKind::Error
            } else {
                self.lexer.eat_while(|c| c != '\n');
                TokenKind::LineComment
            }
        } else if is_ident_start(c) {
            self.lexer.eat_while(is_ident_continue);
            TokenKind::Identifier
        } else if c.is_ascii_digit() {
            self.lexer
                .eat_while(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_');
            TokenKind::Number
        } else {
            self.lexer.advance(false);
            TokenKind::Punct
        };
        self.push(kind, Span::new(start, self.lexer.pos()));
    }

    // ─── Strings ───────────────────────────────────────────────

    fn step_string(&mut self, string: StringContext) -> Result<(), TokenizeError> {
        let start = self.lexer.pos();
        let content = string.content();

        for valid in [content | string.closer(), content] {
            if let Some((kind, span)) = self.try_scan(start, valid) {
                self.commit(kind, span)?;
                if kind.is_delimiter() {
                    self.strings.pop();
                }
                return Ok(());
            }
        }

        // The scanner stops at splices and at quotes it cannot classify.
        match self.lexer.lookahead() {
            '$' if string.interpolate => self.lex_interpolation(start),
            c => {
                self.lexer.advance(false);
                self.push(TokenKind::Error, Span::new(start, self.lexer.pos()));
                if c == '"' {
                    self.strings.pop();
                }
            }
        }
        Ok(())
    }

    /// `$name` or `$( ... )`. Parentheses are balanced naively; the splice
    /// ends at end of input if they never close.
    fn lex_interpolation(&mut self, start: u32) {
        self.lexer.advance(false);
        let c = self.lexer.lookahead();
        if is_ident_start(c) {
            self.lexer.eat_while(is_ident_continue);
        } else if c == '(' {
            let mut depth = 0usize;
            while !self.lexer.is_eof() {
                match self.lexer.lookahead() {
                    '(' => depth += 1,
                    ')' => depth -= 1,
                    _ => {}
                }
                self.lexer.advance(false);
                if depth == 0 {
                    break;
                }
            }
        } else {
            self.push(TokenKind::Error, Span::new(start, self.lexer.pos()));
            return;
        }
        self.push(TokenKind::Interpolation, Span::new(start, self.lexer.pos()));
    }

    // ─── Scanner Calls ─────────────────────────────────────────

    /// Run the scanner from `start`. On refusal the cursor is rewound, as
    /// the tree-sitter runtime does.
    fn try_scan(&mut self, start: u32, valid: ValidSymbols) -> Option<(TokenType, Span)> {
        self.lexer.reset_to(start);
        match self.scanner.scan(&mut self.lexer, valid) {
            Some(kind) => Some((kind, self.lexer.finish())),
            None => {
                self.lexer.reset_to(start);
                None
            }
        }
    }

    /// Record a scanner token and continue right after its marked end.
    fn commit(&mut self, kind: TokenType, span: Span) -> Result<(), TokenizeError> {
        if span.is_empty() && kind != TokenType::ImmediateParen {
            return Err(TokenizeError::Stalled {
                offset: span.start,
                kind,
            });
        }
        self.push(TokenKind::External(kind), span);
        self.lexer.reset_to(span.end);
        Ok(())
    }

    fn push(&mut self, kind: TokenKind, span: Span) {
        trace!(%kind, %span, "token");
        self.tokens.push(Token { kind, span });
    }
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c == '!' || c.is_alphanumeric()
}

#[cfg(test)]
mod tests;
