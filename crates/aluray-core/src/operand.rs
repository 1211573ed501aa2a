//! Instruction operands.

/// A decoded operand.
///
/// The ALU-16 assembly syntax writes both kinds as bare decimal numbers;
/// the distinction matters to consumers of the structured form (the JSON
/// output, for instance), not to the text renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    /// Register operand, identified by its index.
    Register(u8),
    /// Immediate value taken directly from the instruction word.
    Immediate(u8),
}

impl Operand {
    /// Creates a register operand.
    pub fn reg(index: u8) -> Operand {
        Operand::Register(index)
    }

    /// Creates an immediate operand.
    pub fn imm(value: u8) -> Operand {
        Operand::Immediate(value)
    }

    /// Returns true if this is a register operand.
    pub fn is_register(&self) -> bool {
        matches!(self, Operand::Register(_))
    }

    /// Returns true if this is an immediate operand.
    pub fn is_immediate(&self) -> bool {
        matches!(self, Operand::Immediate(_))
    }

    /// Returns the raw field value, whichever kind it is.
    pub fn value(&self) -> u8 {
        match self {
            Operand::Register(index) => *index,
            Operand::Immediate(value) => *value,
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Register(index) => write!(f, "{}", index),
            Operand::Immediate(value) => write!(f, "{}", value),
        }
    }
}
