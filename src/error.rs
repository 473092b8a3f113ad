use std::io;

use crate::jump::BracketKind;

/// Fatal conditions raised while building or running a program.
///
/// All of these abort the run; nothing is retried internally. Output already
/// emitted before the failure stays emitted.
#[derive(Debug, thiserror::Error)]
pub enum MachineError {
    /// A `[` or `]` with no partner, detected before execution begins.
    #[error("Unmatched bracket {kind} at instruction {ip}")]
    UnbalancedBrackets { ip: usize, kind: BracketKind },

    /// The data pointer attempted to move right past the last tape cell.
    #[error("Pointer overflow at instruction {ip} (ptr={ptr})")]
    PointerOverflow { ip: usize, ptr: usize },

    /// The data pointer attempted to move left of cell 0.
    #[error("Pointer underflow at instruction {ip}")]
    PointerUnderflow { ip: usize },

    /// The input source closed (or exhausted its retries) on `,`.
    #[error("Input closed at instruction {ip}")]
    EndOfInput { ip: usize },

    /// An underlying I/O error from the output sink or input source.
    #[error("I/O error at instruction {ip}: {source}")]
    Io {
        ip: usize,
        #[source]
        source: io::Error,
    },

    /// Execution aborted due to step limit.
    #[error("Execution aborted: step limit exceeded ({limit})")]
    StepLimitExceeded { limit: usize },

    /// Execution aborted due to cooperative cancellation (e.g., timeout).
    #[error("Execution aborted: cancelled")]
    Canceled,
}
