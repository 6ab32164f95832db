//! # Codec
//!
//! Converts between non-negative integers and alphabet strings.
//!
//! Strings are written least-significant digit first, so the first symbol
//! is the ones place:
//!
//! ```text
//! 27  = 0·27⁰ + 1·27¹  →  "ab"
//! 728 = 26·27⁰ + 26·27¹ →  "//"
//! ```
//!
//! Zero encodes to the empty string, and the empty string decodes to zero.

use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use super::alphabet::Alphabet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Only non-negative values have an encoding.
    Negative(BigInt),
    /// A decode input contained a character outside the alphabet.
    /// `position` is the 0-based character index.
    InvalidSymbol { symbol: char, position: usize },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Negative(value) => {
                write!(f, "cannot encode negative number {value}")
            }
            CodecError::InvalidSymbol { symbol, position } => write!(
                f,
                "invalid symbol {symbol:?} at position {position} (expected 'a'-'z' or '/')"
            ),
        }
    }
}

impl std::error::Error for CodecError {}

/// Encodes a signed value, rejecting negatives instead of looping forever.
pub fn encode(alphabet: &Alphabet, value: &BigInt) -> Result<String, CodecError> {
    match value.to_biguint() {
        Some(natural) => Ok(encode_natural(alphabet, &natural)),
        None => Err(CodecError::Negative(value.clone())),
    }
}

/// Encodes a natural number. Zero yields an empty string.
pub fn encode_natural(alphabet: &Alphabet, value: &BigUint) -> String {
    if value.is_zero() {
        return String::new();
    }
    // to_radix_le already emits the ones place first
    value
        .to_radix_le(alphabet.base())
        .into_iter()
        .map(|digit| alphabet.symbol(u32::from(digit)))
        .collect()
}

/// Decodes an alphabet string. The whole input is rejected on the first
/// foreign character.
pub fn decode(alphabet: &Alphabet, encoded: &str) -> Result<BigUint, CodecError> {
    let digits = encoded
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            alphabet
                .digit(symbol)
                .ok_or(CodecError::InvalidSymbol { symbol, position })
        })
        .collect::<Result<Vec<u32>, _>>()?;

    Ok(digits
        .into_iter()
        .rev()
        .fold(BigUint::zero(), |acc, digit| acc * alphabet.base() + digit))
}
