//! # aluray-core
//!
//! Core types for the aluray disassembler: the ALU-16 opcode table, operand
//! and instruction representations, and their assembly rendering.
//!
//! The ALU-16 is a small teaching CPU. Every instruction occupies one 16-bit
//! word whose top nibble selects the operation; the remaining bits hold
//! register indices and immediates in fixed positions determined by the
//! opcode's [`OperandLayout`].
//!
//! This crate is purely representational. Decoding words and reading hex
//! listings live in `aluray-disasm`.

pub mod instruction;
pub mod opcode;
pub mod operand;

pub use instruction::Instruction;
pub use opcode::{Opcode, OperandLayout};
pub use operand::Operand;

/// Width of an instruction word in bits.
pub const WORD_BITS: u32 = 16;

/// Number of addressable general-purpose registers (register fields are
/// two bits wide).
pub const REGISTER_COUNT: u8 = 4;

/// Hex digits in one listing word.
pub const WORD_HEX_DIGITS: usize = 4;
