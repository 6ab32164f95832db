//! # Read-Eval-Print Loop
//!
//! Owns the input and output streams and drives one line at a time through
//! `core::action`.
//!
//! ```text
//!   Prompting ──line──▶ Processing ──reply──┐
//!       ▲                                   │
//!       └───────────────────────────────────┘
//!       │
//!      EOF ──▶ clean shutdown (Ok)
//! ```
//!
//! The streams are generic so tests can drive the loop with in-memory
//! buffers. The binary hands it locked stdin/stdout.

use log::{debug, info, warn};
use std::io::{self, BufRead, Write};

use crate::core::action::{classify, update};
use crate::core::alphabet::Alphabet;

/// What happened to one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A line was read and answered (with a result or a diagnostic).
    Answered,
    /// The input stream is closed.
    Eof,
}

pub struct Repl<R, W> {
    input: R,
    output: W,
    alphabet: Alphabet,
    prompt: String,
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, prompt: impl Into<String>) -> Self {
        Self {
            input,
            output,
            alphabet: Alphabet::STANDARD,
            prompt: prompt.into(),
            buf: Vec::new(),
        }
    }

    /// Runs until the input stream closes.
    ///
    /// End-of-input is a normal shutdown and returns `Ok(())`. Only I/O
    /// failures on the streams themselves are errors.
    pub fn run(&mut self) -> io::Result<()> {
        info!("Codec loop started");
        let mut answered = 0usize;
        while self.step()? == Step::Answered {
            answered += 1;
        }
        // Keep the shell prompt off the dangling calculator prompt
        writeln!(self.output)?;
        self.output.flush()?;
        info!("Input closed after {} line(s), shutting down", answered);
        Ok(())
    }

    /// Prompts, reads one line and prints its answer.
    pub fn step(&mut self) -> io::Result<Step> {
        write!(self.output, "{}", self.prompt)?;
        self.output.flush()?;

        self.buf.clear();
        if self.input.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(Step::Eof);
        }

        // Invalid bytes become U+FFFD, which the decoder rejects like any
        // other foreign symbol
        let line = String::from_utf8_lossy(&self.buf);
        let action = classify(&line);
        debug!("Input {:?} classified as {:?}", line.trim_end(), action);

        match update(&self.alphabet, action) {
            Ok(reply) => writeln!(self.output, "{reply}")?,
            Err(e) => {
                warn!("Rejected input {:?}: {}", line.trim(), e);
                writeln!(self.output, "error: {e}")?;
            }
        }
        self.output.flush()?;
        Ok(Step::Answered)
    }

    /// Gives back the streams, mainly so tests can inspect the output.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
