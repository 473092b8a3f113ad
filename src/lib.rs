//! A tape-machine Brainfuck interpreter.
//!
//! The interpreter runs a sanitized instruction sequence against a fixed
//! 30,000-cell memory tape with a single data pointer.
//!
//! Features and behaviors:
//! - Source text is sanitized: anything outside `><+-.,[]` is a comment.
//! - Unbalanced brackets are rejected when the machine is built, before any
//!   instruction executes.
//! - Cells are `u8` and wrap at both ends.
//! - Strict pointer bounds: moving left from cell 0 or right past the last
//!   cell is a fatal error.
//! - Output and input go through caller-supplied [`OutputSink`] and
//!   [`InputSource`] collaborators; a closed input source is a fatal error.
//! - Cooperative cancellation and step budgets via [`StepControl`], so a
//!   host can abort runaway programs.
//!
//! Quick start:
//!
//! ```
//! use bfi::{Machine, Program, QueuedInput};
//!
//! // Classic "Hello World!" in Brainfuck
//! let code = "++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.>+.>.";
//! let mut machine = Machine::new(Program::parse(code)).expect("brackets are balanced");
//! let mut output: Vec<u8> = Vec::new();
//! machine
//!     .run(&mut output, &mut QueuedInput::default())
//!     .expect("program should run");
//! assert_eq!(output, b"Hello World!\n");
//! ```

pub mod cli_util;
pub mod error;
pub mod io;
pub mod jump;
pub mod machine;
pub mod program;

pub use error::MachineError;
pub use io::{InputSource, OutputSink, PromptInput, QueuedInput, StdoutSink};
pub use jump::{BracketKind, JumpTable};
pub use machine::{Machine, StepControl, TAPE_LEN};
pub use program::{Instruction, Program};
