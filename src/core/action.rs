//! # Actions
//!
//! Every line the user types becomes an `Action`.
//! Something that parses as a base-10 integer? That's `Action::Encode`.
//! Anything else, including an empty line? That's `Action::Decode`.
//!
//! `update()` runs the action against the alphabet and produces a `Reply`.
//! No I/O here; the loop in `repl` does the reading and printing.
//!
//! ```text
//! line  →  classify()  →  Action  →  update()  →  Reply | CodecError
//! ```

use std::fmt;

use num_bigint::{BigInt, BigUint};

use super::alphabet::Alphabet;
use super::codec::{self, CodecError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Input was a decimal integer (possibly negative).
    Encode(BigInt),
    /// Input was anything else; carries the trimmed text.
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Encoded(String),
    Decoded(BigUint),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Encoded(s) => f.write_str(s),
            Reply::Decoded(n) => write!(f, "{n}"),
        }
    }
}

/// Routes a raw line to one of the two operations.
///
/// Surrounding whitespace is ignored on both paths. A parse failure is not
/// an error, it simply means the line is an encoded string.
pub fn classify(line: &str) -> Action {
    let trimmed = line.trim();
    match trimmed.parse::<BigInt>() {
        Ok(value) => Action::Encode(value),
        Err(_) => Action::Decode(trimmed.to_string()),
    }
}

pub fn update(alphabet: &Alphabet, action: Action) -> Result<Reply, CodecError> {
    match action {
        Action::Encode(value) => codec::encode(alphabet, &value).map(Reply::Encoded),
        Action::Decode(text) => codec::decode(alphabet, &text).map(Reply::Decoded),
    }
}
