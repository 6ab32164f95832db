//! # Core Calculator Logic
//!
//! Everything the calculator knows about numbers and symbols.
//! It knows nothing about terminals or streams.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Alphabet (symbols)   │
//!                    │  • codec (enc / dec)    │
//!                    │  • Action (classify)    │
//!                    │                         │
//!                    │  No I/O. Pure.          │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    REPL    │
//!                         │ stdin/out  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`alphabet`]: The `Alphabet` struct, the fixed 27-symbol table
//! - [`codec`]: `encode()` / `decode()` and `CodecError`
//! - [`action`]: The `Action` enum, classifying one line of input
//! - [`config`]: Layered settings for the prompt and logging

pub mod action;
pub mod alphabet;
pub mod codec;
pub mod config;

pub use action::{Action, Reply};
pub use alphabet::Alphabet;
pub use codec::CodecError;
