//! A decoded ALU-16 instruction.

use crate::{Opcode, Operand};

/// A single decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    /// The raw encoded word.
    pub word: u16,
    /// Operation selected by the opcode nibble.
    pub opcode: Opcode,
    /// Operands in display order, destination first.
    pub operands: Vec<Operand>,
}

impl Instruction {
    /// Creates an instruction with no operands yet.
    pub fn new(word: u16, opcode: Opcode) -> Self {
        Self {
            word,
            opcode,
            operands: Vec::new(),
        }
    }

    /// Adds an operand (builder style).
    pub fn with_operand(mut self, operand: Operand) -> Self {
        self.operands.push(operand);
        self
    }

    /// Sets all operands (builder style).
    pub fn with_operands(mut self, operands: Vec<Operand>) -> Self {
        self.operands = operands;
        self
    }

    /// Returns the assembly mnemonic.
    pub fn mnemonic(&self) -> &'static str {
        self.opcode.mnemonic()
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.opcode.mnemonic())?;
        if !self.operands.is_empty() {
            write!(f, " ")?;
            for (i, operand) in self.operands.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", operand)?;
            }
        }
        Ok(())
    }
}
