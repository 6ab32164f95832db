//! Base-27 calculator library exports

pub mod core;
pub mod repl;

pub use crate::core::alphabet::Alphabet;
pub use crate::core::codec::{CodecError, decode, encode, encode_natural};
pub use crate::repl::Repl;
