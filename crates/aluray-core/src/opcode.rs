//! The ALU-16 opcode table.
//!
//! Every instruction word carries its opcode in the top nibble (bits 15:12).
//! Fourteen of the sixteen nibble values are assigned; `0xE` and `0xF` are
//! unallocated and decode as unknown.

/// Operation selected by the most-significant nibble of an instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Opcode {
    Or = 0x0,
    Xor = 0x1,
    And = 0x2,
    Not = 0x3,
    Lshift = 0x4,
    Rshift = 0x5,
    Arshift = 0x6,
    Add = 0x7,
    Addc = 0x8,
    Sub = 0x9,
    Loadlo = 0xA,
    Loadhi = 0xB,
    Out = 0xC,
    Halt = 0xD,
}

/// Operand arity and field placement shared by a group of opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperandLayout {
    /// Destination and two source registers: `rd, rx, ry`.
    ThreeReg,
    /// Destination and one source register: `rd, rx`.
    TwoReg,
    /// Destination register and a 6-bit immediate: `rd, imm`.
    RegImm,
    /// A single register, carried in the `rx` field with bits 11:10 unused.
    OneReg,
}

impl Opcode {
    /// Every assigned opcode, in nibble order.
    pub const ALL: [Opcode; 14] = [
        Opcode::Or,
        Opcode::Xor,
        Opcode::And,
        Opcode::Not,
        Opcode::Lshift,
        Opcode::Rshift,
        Opcode::Arshift,
        Opcode::Add,
        Opcode::Addc,
        Opcode::Sub,
        Opcode::Loadlo,
        Opcode::Loadhi,
        Opcode::Out,
        Opcode::Halt,
    ];

    /// Looks up the opcode assigned to `nibble`, if any.
    pub fn from_nibble(nibble: u8) -> Option<Opcode> {
        match nibble {
            0x0 => Some(Opcode::Or),
            0x1 => Some(Opcode::Xor),
            0x2 => Some(Opcode::And),
            0x3 => Some(Opcode::Not),
            0x4 => Some(Opcode::Lshift),
            0x5 => Some(Opcode::Rshift),
            0x6 => Some(Opcode::Arshift),
            0x7 => Some(Opcode::Add),
            0x8 => Some(Opcode::Addc),
            0x9 => Some(Opcode::Sub),
            0xA => Some(Opcode::Loadlo),
            0xB => Some(Opcode::Loadhi),
            0xC => Some(Opcode::Out),
            0xD => Some(Opcode::Halt),
            _ => None,
        }
    }

    /// Returns the encoding nibble for this opcode.
    pub fn nibble(self) -> u8 {
        self as u8
    }

    /// Returns the assembly mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Or => "OR",
            Opcode::Xor => "XOR",
            Opcode::And => "AND",
            Opcode::Not => "NOT",
            Opcode::Lshift => "LSHIFT",
            Opcode::Rshift => "RSHIFT",
            Opcode::Arshift => "ARSHIFT",
            Opcode::Add => "ADD",
            Opcode::Addc => "ADDC",
            Opcode::Sub => "SUB",
            Opcode::Loadlo => "LOADLO",
            Opcode::Loadhi => "LOADHI",
            Opcode::Out => "OUT",
            Opcode::Halt => "HALT",
        }
    }

    /// Returns the operand layout this opcode encodes with.
    pub fn layout(self) -> OperandLayout {
        match self {
            Opcode::Or
            | Opcode::Xor
            | Opcode::And
            | Opcode::Add
            | Opcode::Addc
            | Opcode::Sub => OperandLayout::ThreeReg,
            Opcode::Not | Opcode::Lshift | Opcode::Rshift | Opcode::Arshift => {
                OperandLayout::TwoReg
            }
            Opcode::Loadlo | Opcode::Loadhi => OperandLayout::RegImm,
            Opcode::Out | Opcode::Halt => OperandLayout::OneReg,
        }
    }
}

impl OperandLayout {
    /// Number of operands an instruction with this layout prints.
    pub fn operand_count(self) -> usize {
        match self {
            OperandLayout::ThreeReg => 3,
            OperandLayout::TwoReg => 2,
            OperandLayout::RegImm => 2,
            OperandLayout::OneReg => 1,
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
