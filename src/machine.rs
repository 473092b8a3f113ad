//! The fetch-decode-execute core.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::MachineError;
use crate::io::{InputSource, OutputSink};
use crate::jump::JumpTable;
use crate::program::{Instruction, Program};

/// Number of tape cells: the classic fixed bound.
pub const TAPE_LEN: usize = 30_000;

/// Controls for cooperative cancellation and step limiting.
#[derive(Clone)]
pub struct StepControl {
    pub max_steps: Option<usize>,
    pub cancel_flag: Arc<AtomicBool>,
}

impl StepControl {
    pub fn new(max_steps: Option<usize>, cancel_flag: Arc<AtomicBool>) -> Self {
        Self {
            max_steps,
            cancel_flag,
        }
    }
}

/// A single-shot Brainfuck executor.
///
/// The machine exclusively owns its tape, data pointer, and program counter
/// for the lifetime of one run; nothing is shared between machines, so
/// concurrent runs just use independent instances. The jump table is built
/// up front in [`Machine::new`], so a program with unbalanced brackets never
/// starts executing.
///
/// Cells are `u8` with wraparound at both ends. Pointer bounds are strict:
/// moving left of cell 0 or right past the last cell is a fatal error rather
/// than growing the tape.
pub struct Machine {
    program: Program,
    jumps: JumpTable,
    tape: Vec<u8>,
    pointer: usize,
    pc: usize,
}

impl Machine {
    /// Build a machine over `program` with the default [`TAPE_LEN`] tape.
    ///
    /// Fails with [`MachineError::UnbalancedBrackets`] if the program's
    /// loops do not pair up.
    pub fn new(program: Program) -> Result<Self, MachineError> {
        Self::with_tape_len(program, TAPE_LEN)
    }

    /// Same as [`Machine::new`] with a custom tape capacity (at least one
    /// cell).
    pub fn with_tape_len(program: Program, tape_len: usize) -> Result<Self, MachineError> {
        let jumps = JumpTable::build(&program)?;
        Ok(Self {
            program,
            jumps,
            tape: vec![0; tape_len.max(1)],
            pointer: 0,
            pc: 0,
        })
    }

    /// Run the program to completion or to the first fatal error.
    ///
    /// A finished machine's program counter stays past the end, so calling
    /// `run` again is a no-op; build a fresh machine per run.
    pub fn run<O, I>(&mut self, output: &mut O, input: &mut I) -> Result<(), MachineError>
    where
        O: OutputSink + ?Sized,
        I: InputSource + ?Sized,
    {
        self.execute(output, input, None)
    }

    /// Run with cooperative cancellation and an optional step budget.
    pub fn run_with_control<O, I>(
        &mut self,
        output: &mut O,
        input: &mut I,
        control: StepControl,
    ) -> Result<(), MachineError>
    where
        O: OutputSink + ?Sized,
        I: InputSource + ?Sized,
    {
        self.execute(output, input, Some(&control))
    }

    fn execute<O, I>(
        &mut self,
        output: &mut O,
        input: &mut I,
        control: Option<&StepControl>,
    ) -> Result<(), MachineError>
    where
        O: OutputSink + ?Sized,
        I: InputSource + ?Sized,
    {
        let mut steps: usize = 0;

        while let Some(op) = self.program.get(self.pc) {
            if let Some(ctrl) = control {
                if ctrl.cancel_flag.load(Ordering::Relaxed) {
                    return Err(MachineError::Canceled);
                }
                if let Some(max) = ctrl.max_steps {
                    if steps >= max {
                        return Err(MachineError::StepLimitExceeded { limit: max });
                    }
                }
            }

            match op {
                Instruction::MoveRight => {
                    if self.pointer + 1 >= self.tape.len() {
                        return Err(MachineError::PointerOverflow {
                            ip: self.pc,
                            ptr: self.pointer,
                        });
                    }
                    self.pointer += 1;
                }
                Instruction::MoveLeft => {
                    if self.pointer == 0 {
                        return Err(MachineError::PointerUnderflow { ip: self.pc });
                    }
                    self.pointer -= 1;
                }
                Instruction::Increment => {
                    self.tape[self.pointer] = self.tape[self.pointer].wrapping_add(1);
                }
                Instruction::Decrement => {
                    self.tape[self.pointer] = self.tape[self.pointer].wrapping_sub(1);
                }
                Instruction::Output => {
                    output
                        .write_byte(self.tape[self.pointer])
                        .map_err(|source| MachineError::Io {
                            ip: self.pc,
                            source,
                        })?;
                }
                Instruction::Input => {
                    let value = input.read_value().map_err(|source| MachineError::Io {
                        ip: self.pc,
                        source,
                    })?;
                    match value {
                        Some(byte) => self.tape[self.pointer] = byte,
                        None => return Err(MachineError::EndOfInput { ip: self.pc }),
                    }
                }
                Instruction::LoopOpen => {
                    // Zero cell: skip the body by jumping to the matching
                    // close; the increment below then steps past it.
                    if self.tape[self.pointer] == 0 {
                        self.pc = self.jumps.target(self.pc).expect("validated bracket");
                    }
                }
                Instruction::LoopClose => {
                    if self.tape[self.pointer] != 0 {
                        self.pc = self.jumps.target(self.pc).expect("validated bracket");
                    }
                }
            }

            steps += 1;
            self.pc += 1;
        }

        Ok(())
    }
}
