//! Error types for decoding and listing processing.

use thiserror::Error;

/// Error type for decoding a single instruction word.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The opcode nibble is not assigned to any instruction.
    #[error("unknown opcode {nibble:#x} in word {word:#06x}")]
    UnknownOpcode { word: u16, nibble: u8 },
}

/// Error type for one malformed listing line.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordParseError {
    /// The line is not exactly four characters long.
    #[error("expected 4 hex digits, found {found}")]
    BadLength { found: usize },

    /// A character is not an uppercase hex digit.
    #[error("invalid hex digit {found:?} at column {column}")]
    BadDigit { found: char, column: usize },
}

/// Error type for a whole listing run.
#[derive(Error, Debug)]
pub enum ListingError {
    /// A malformed line aborted a strict run.
    #[error("line {line}: {source}")]
    Malformed {
        line: usize,
        source: WordParseError,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ListingError {
    /// Creates a new Malformed error.
    pub fn malformed(line: usize, source: WordParseError) -> Self {
        Self::Malformed { line, source }
    }
}
