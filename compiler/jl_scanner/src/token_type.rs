//! Token kinds produced by the external scanner.

use std::fmt;

/// External token kind, one per successful scan.
///
/// The discriminants are the symbol indices the grammar declares in its
/// `externals` list. The host passes its hint set as a `bool` array indexed
/// by these values and reads `result_symbol` back as one of them, so the
/// order is part of the ABI and must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenType {
    /// A complete, possibly nested, `#= ... =#` comment.
    BlockComment = 0,
    /// Zero-width marker: the lookahead `(` touches the previous token.
    ImmediateParen = 1,
    /// Single `"` opening or closing a plain string.
    StringDelim = 2,
    /// `"""` opening or closing a triple-quoted string.
    TripleStringDelim = 3,
    /// Literal run inside a plain string that allows `$` splices.
    StringContent = 4,
    /// Literal run inside a plain string where `$` is ordinary text.
    StringContentNoInterpolation = 5,
    /// Literal run inside a triple-quoted string that allows `$` splices.
    TripleStringContent = 6,
    /// Literal run inside a triple-quoted string where `$` is ordinary text.
    TripleStringContentNoInterpolation = 7,
}

impl TokenType {
    /// Number of external symbols, i.e. the length of the host's hint array.
    pub const COUNT: usize = 8;

    /// Every kind, in symbol-index order.
    pub const ALL: [TokenType; Self::COUNT] = [
        Self::BlockComment,
        Self::ImmediateParen,
        Self::StringDelim,
        Self::TripleStringDelim,
        Self::StringContent,
        Self::StringContentNoInterpolation,
        Self::TripleStringContent,
        Self::TripleStringContentNoInterpolation,
    ];

    /// Symbol index as seen by the host.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a kind by its symbol index.
    pub const fn from_index(index: usize) -> Option<TokenType> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Grammar-facing name, matching the `externals` rule names.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BlockComment => "block_comment",
            Self::ImmediateParen => "immediate_paren",
            Self::StringDelim => "string_delim",
            Self::TripleStringDelim => "triple_string_delim",
            Self::StringContent => "string_content",
            Self::StringContentNoInterpolation => "string_content_no_interpolation",
            Self::TripleStringContent => "triple_string_content",
            Self::TripleStringContentNoInterpolation => "triple_string_content_no_interpolation",
        }
    }

    /// Returns `true` for the four string-content kinds.
    pub const fn is_string_content(self) -> bool {
        matches!(
            self,
            Self::StringContent
                | Self::StringContentNoInterpolation
                | Self::TripleStringContent
                | Self::TripleStringContentNoInterpolation
        )
    }

    /// Returns `true` for the two quote delimiters.
    pub const fn is_delimiter(self) -> bool {
        matches!(self, Self::StringDelim | Self::TripleStringDelim)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
