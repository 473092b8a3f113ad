//! Output-sink and input-source collaborators.
//!
//! The machine never talks to stdin/stdout directly; it is handed one of
//! each of these at run time. Retry-on-invalid-input lives in the source,
//! not in the executor.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Consumes one byte of program output per call, in emission order.
///
/// The byte sequence is the program's output verbatim; sinks must not add
/// separators of their own.
pub trait OutputSink {
    fn write_byte(&mut self, byte: u8) -> io::Result<()>;
}

/// Yields one validated cell value per call, blocking until one is
/// available. `Ok(None)` means the source is closed (end of input).
pub trait InputSource {
    fn read_value(&mut self) -> io::Result<Option<u8>>;
}

/// Writes raw bytes to stdout, exactly as emitted.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(&[byte])?;
        out.flush()
    }
}

/// Capture sink for tests and embedding: bytes accumulate in order.
impl OutputSink for Vec<u8> {
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.push(byte);
        Ok(())
    }
}

/// Pre-seeded input: yields its values in order, then reports closed.
#[derive(Debug, Default)]
pub struct QueuedInput {
    values: VecDeque<u8>,
}

impl QueuedInput {
    pub fn new<I: IntoIterator<Item = u8>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl InputSource for QueuedInput {
    fn read_value(&mut self) -> io::Result<Option<u8>> {
        Ok(self.values.pop_front())
    }
}

/// Line-oriented stdin input for the CLI.
///
/// Prompts on stderr (stdout stays reserved for program output), reads one
/// line, and expects a non-negative integer that fits a cell (0..=255).
/// Anything else is rejected and re-prompted; EOF reports the source closed.
#[derive(Debug, Default)]
pub struct PromptInput;

impl InputSource for PromptInput {
    fn read_value(&mut self) -> io::Result<Option<u8>> {
        loop {
            eprint!("value?> ");
            io::stderr().flush()?;

            let mut line = String::new();
            if io::stdin().lock().read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match line.trim().parse::<u8>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => eprintln!("Must be a number between 0 and 255."),
            }
        }
    }
}
