//! The ALU-16 instruction decoder.
//!
//! Every instruction is one 16-bit word. Bits 15:12 hold the opcode; the
//! rest of the word is divided into fixed two-bit register fields and, for
//! the load immediates, a six-bit immediate field:
//!
//! ```text
//! three-register    [opcode:4][rd:2][rx:2][ry:2][unused:6]
//! two-register      [opcode:4][rd:2][rx:2][unused:8]
//! register + imm    [opcode:4][rd:2][imm:6][unused:4]
//! one-register      [opcode:4][unused:2][rx:2][unused:8]
//! ```
//!
//! Note the one-register shape used by OUT and HALT: the operand sits in
//! the `rx` field and bits 11:10 are ignored, so `0xCC00` and `0xC000`
//! both disassemble as `OUT 0`.

use aluray_core::{Instruction, Opcode, Operand, OperandLayout};

use crate::error::DecodeError;

/// Extract the opcode nibble (bits 15:12).
fn opcode_nibble(word: u16) -> u8 {
    (word >> 12) as u8
}

/// Extract the rd field (bits 11:10).
fn rd(word: u16) -> u8 {
    ((word >> 10) & 0x3) as u8
}

/// Extract the rx field (bits 9:8).
fn rx(word: u16) -> u8 {
    ((word >> 8) & 0x3) as u8
}

/// Extract the ry field (bits 7:6).
fn ry(word: u16) -> u8 {
    ((word >> 6) & 0x3) as u8
}

/// Extract the immediate field (bits 9:4).
fn imm6(word: u16) -> u8 {
    ((word >> 4) & 0x3F) as u8
}

/// Decodes one instruction word.
///
/// Decoding is stateless and infallible for the fourteen assigned opcodes;
/// words whose top nibble is `0xE` or `0xF` return
/// [`DecodeError::UnknownOpcode`]. The unused low bits of a word never
/// affect the result.
pub fn decode(word: u16) -> Result<Instruction, DecodeError> {
    let nibble = opcode_nibble(word);
    let opcode =
        Opcode::from_nibble(nibble).ok_or(DecodeError::UnknownOpcode { word, nibble })?;

    let operands = match opcode.layout() {
        OperandLayout::ThreeReg => vec![
            Operand::reg(rd(word)),
            Operand::reg(rx(word)),
            Operand::reg(ry(word)),
        ],
        OperandLayout::TwoReg => vec![Operand::reg(rd(word)), Operand::reg(rx(word))],
        OperandLayout::RegImm => vec![Operand::reg(rd(word)), Operand::imm(imm6(word))],
        // OUT and HALT carry their register in the rx slot.
        OperandLayout::OneReg => vec![Operand::reg(rx(word))],
    };

    Ok(Instruction::new(word, opcode).with_operands(operands))
}
