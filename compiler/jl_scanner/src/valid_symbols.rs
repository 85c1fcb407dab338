//! Hint set: which external tokens the parser accepts at the cursor.
//!
//! The host hands the scanner a `bool` per external symbol. Internally that
//! becomes an 8-bit set, one bit per [`TokenType`] discriminant, so the
//! string-mode flags can be derived with a single mask test.

use bitflags::bitflags;

use crate::TokenType;

bitflags! {
    /// Set of [`TokenType`]s the grammar currently permits.
    ///
    /// Bit `n` corresponds to the token whose discriminant is `n`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ValidSymbols: u8 {
        const BLOCK_COMMENT = 1 << TokenType::BlockComment as u8;
        const IMMEDIATE_PAREN = 1 << TokenType::ImmediateParen as u8;
        const STRING_DELIM = 1 << TokenType::StringDelim as u8;
        const TRIPLE_STRING_DELIM = 1 << TokenType::TripleStringDelim as u8;
        const STRING_CONTENT = 1 << TokenType::StringContent as u8;
        const STRING_CONTENT_NO_INTERPOLATION =
            1 << TokenType::StringContentNoInterpolation as u8;
        const TRIPLE_STRING_CONTENT = 1 << TokenType::TripleStringContent as u8;
        const TRIPLE_STRING_CONTENT_NO_INTERPOLATION =
            1 << TokenType::TripleStringContentNoInterpolation as u8;

        // === Composite masks ===

        /// Either quote delimiter.
        const DELIMITERS = Self::STRING_DELIM.bits() | Self::TRIPLE_STRING_DELIM.bits();
        /// Any of the four string-content kinds.
        const STRING_CONTENTS = Self::STRING_CONTENT.bits()
            | Self::STRING_CONTENT_NO_INTERPOLATION.bits()
            | Self::TRIPLE_STRING_CONTENT.bits()
            | Self::TRIPLE_STRING_CONTENT_NO_INTERPOLATION.bits();
        /// Content kinds inside triple-quoted strings.
        const TRIPLE_CONTENTS = Self::TRIPLE_STRING_CONTENT.bits()
            | Self::TRIPLE_STRING_CONTENT_NO_INTERPOLATION.bits();
        /// Content kinds where `$` opens a splice.
        const INTERPOLATING_CONTENTS =
            Self::STRING_CONTENT.bits() | Self::TRIPLE_STRING_CONTENT.bits();
    }
}

impl ValidSymbols {
    /// The single-bit set for `kind`.
    #[inline]
    pub const fn of(kind: TokenType) -> Self {
        Self::from_bits_retain(1 << kind as u8)
    }

    /// Build a hint set from the host's per-symbol `bool` array.
    ///
    /// Entries past [`TokenType::COUNT`] are ignored; a short slice leaves
    /// the missing kinds disabled.
    pub fn from_bools(valid: &[bool]) -> Self {
        valid
            .iter()
            .zip(TokenType::ALL)
            .filter(|(on, _)| **on)
            .fold(Self::empty(), |set, (_, kind)| set | Self::of(kind))
    }

    /// Returns `true` if the grammar accepts `kind` here.
    #[inline]
    pub const fn allows(self, kind: TokenType) -> bool {
        self.contains(Self::of(kind))
    }

    /// Returns `true` if any string-content kind is accepted.
    #[inline]
    pub const fn wants_string_content(self) -> bool {
        self.intersects(Self::STRING_CONTENTS)
    }

    /// Accepted kinds, in symbol-index order.
    pub fn kinds(self) -> impl Iterator<Item = TokenType> {
        TokenType::ALL.into_iter().filter(move |k| self.allows(*k))
    }
}

impl From<TokenType> for ValidSymbols {
    fn from(kind: TokenType) -> Self {
        Self::of(kind)
    }
}

impl FromIterator<TokenType> for ValidSymbols {
    fn from_iter<I: IntoIterator<Item = TokenType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, kind| set | Self::of(kind))
    }
}
