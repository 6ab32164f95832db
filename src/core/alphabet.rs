//! # Alphabet
//!
//! The fixed symbol table shared by the encoder and decoder.
//!
//! ```text
//! digit:   0  1  2  ...  25  26
//! symbol:  a  b  c  ...  z   /
//! ```
//!
//! There is exactly one alphabet. It is passed around by reference so the
//! codec functions never reach for global state.

/// Symbol used for the highest digit value (26).
const HIGH_SYMBOL: char = '/';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    base: u32,
}

impl Alphabet {
    /// The only alphabet: `a..z` for 0-25 and `/` for 26.
    pub const STANDARD: Alphabet = Alphabet { base: 27 };

    /// Number of distinct digits.
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Maps a digit value to its symbol.
    ///
    /// Callers only ever pass remainders of a division by `base()`, so the
    /// digit is always in range.
    pub fn symbol(&self, digit: u32) -> char {
        debug_assert!(digit < self.base, "digit {digit} out of range");
        if digit == self.base - 1 {
            HIGH_SYMBOL
        } else {
            (b'a' + digit as u8) as char
        }
    }

    /// Maps a symbol back to its digit value, or `None` if it is not part
    /// of the alphabet.
    pub const fn digit(&self, symbol: char) -> Option<u32> {
        match symbol {
            'a'..='z' => Some(symbol as u32 - 'a' as u32),
            HIGH_SYMBOL => Some(26),
            _ => None,
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::STANDARD
    }
}
