//! Source sanitizing and the instruction sequence.

use std::fmt;

/// One of the eight canonical Brainfuck instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    MoveRight,
    MoveLeft,
    Increment,
    Decrement,
    Output,
    Input,
    LoopOpen,
    LoopClose,
}

impl Instruction {
    /// Map a source character to an instruction. Anything else is comment
    /// text and maps to `None`.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '>' => Some(Instruction::MoveRight),
            '<' => Some(Instruction::MoveLeft),
            '+' => Some(Instruction::Increment),
            '-' => Some(Instruction::Decrement),
            '.' => Some(Instruction::Output),
            ',' => Some(Instruction::Input),
            '[' => Some(Instruction::LoopOpen),
            ']' => Some(Instruction::LoopClose),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Instruction::MoveRight => '>',
            Instruction::MoveLeft => '<',
            Instruction::Increment => '+',
            Instruction::Decrement => '-',
            Instruction::Output => '.',
            Instruction::Input => ',',
            Instruction::LoopOpen => '[',
            Instruction::LoopClose => ']',
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A sanitized program: the ordered instruction sequence, immutable once
/// parsed.
///
/// Each instruction also records its char offset in the raw source text so
/// error reporting can point back at the original program, comments and all.
#[derive(Debug, Clone, Default)]
pub struct Program {
    ops: Vec<Instruction>,
    src_offsets: Vec<usize>,
}

impl Program {
    /// Filter raw text down to the eight instruction characters, keeping
    /// their relative order.
    ///
    /// Never fails: comments and whitespace are dropped, and input with no
    /// instruction characters yields an empty program.
    pub fn parse(src: &str) -> Self {
        let mut ops = Vec::new();
        let mut src_offsets = Vec::new();
        for (offset, ch) in src.chars().enumerate() {
            if let Some(op) = Instruction::from_char(ch) {
                ops.push(op);
                src_offsets.push(offset);
            }
        }
        Self { ops, src_offsets }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The instruction at position `ip`, or `None` past the end.
    pub fn get(&self, ip: usize) -> Option<Instruction> {
        self.ops.get(ip).copied()
    }

    /// Char offset in the original source of the instruction at `ip`.
    pub fn source_offset(&self, ip: usize) -> Option<usize> {
        self.src_offsets.get(ip).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Instruction> + '_ {
        self.ops.iter().copied()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in self.iter() {
            write!(f, "{}", op.as_char())?;
        }
        Ok(())
    }
}
