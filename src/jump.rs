//! Loop-boundary resolution.

use std::fmt;

use crate::error::MachineError;
use crate::program::{Instruction, Program};

/// Which side of a loop was unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    Open,
    Close,
}

impl fmt::Display for BracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketKind::Open => write!(f, "'['"),
            BracketKind::Close => write!(f, "']'"),
        }
    }
}

/// Precomputed matching bracket positions for O(1) loop jumps.
///
/// `target(i)` holds the matching index for a `LoopOpen`/`LoopClose` at
/// instruction `i`; non-bracket positions have no entry. On a well-formed
/// program the table is an involution: `target(target(i)) == i`.
#[derive(Debug, Clone)]
pub struct JumpTable {
    targets: Vec<Option<usize>>,
}

impl JumpTable {
    /// Match brackets in a single left-to-right scan with a stack of pending
    /// `LoopOpen` positions.
    ///
    /// Runs before any execution: a `LoopClose` with nothing pending or a
    /// leftover `LoopOpen` after the scan is a construction error, never a
    /// runtime one.
    pub fn build(program: &Program) -> Result<Self, MachineError> {
        let mut targets: Vec<Option<usize>> = vec![None; program.len()];
        let mut stack: Vec<usize> = Vec::new();

        for (i, op) in program.iter().enumerate() {
            match op {
                Instruction::LoopOpen => stack.push(i),
                Instruction::LoopClose => {
                    let Some(open) = stack.pop() else {
                        return Err(MachineError::UnbalancedBrackets {
                            ip: i,
                            kind: BracketKind::Close,
                        });
                    };
                    targets[open] = Some(i);
                    targets[i] = Some(open);
                }
                _ => {}
            }
        }

        if let Some(open) = stack.last().copied() {
            return Err(MachineError::UnbalancedBrackets {
                ip: open,
                kind: BracketKind::Open,
            });
        }

        Ok(Self { targets })
    }

    /// The matching bracket position for the bracket at `ip`, if any.
    pub fn target(&self, ip: usize) -> Option<usize> {
        self.targets.get(ip).copied().flatten()
    }
}
