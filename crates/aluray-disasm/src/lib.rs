//! # aluray-disasm
//!
//! Decoding for the ALU-16 teaching CPU: turning 16-bit instruction words
//! into [`aluray_core::Instruction`] values, and streaming whole hex
//! listings (four uppercase hex digits per line) through the decoder.
//!
//! ```
//! use aluray_disasm::decode;
//!
//! let insn = decode(0x0123).unwrap();
//! assert_eq!(insn.to_string(), "OR 0, 1, 0");
//! ```

pub mod decoder;
pub mod error;
pub mod listing;

pub use decoder::decode;
pub use error::{DecodeError, ListingError, WordParseError};
pub use listing::{
    disassemble_listing, disassemble_listing_with, parse_word, LineDiagnostic, ListingOptions,
    ListingSummary,
};
