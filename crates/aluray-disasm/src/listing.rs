//! Hex listing input.
//!
//! Assembled ALU-16 programs ship as plain text, one instruction word per
//! line, written as exactly four uppercase hex digits (`"A2A0"`). This
//! module parses that format and drives the decoder over it, streaming
//! line by line so listings of any length run in constant memory.

use std::io::{BufRead, Write};

use aluray_core::{Instruction, WORD_HEX_DIGITS};

use crate::decoder::decode;
use crate::error::{DecodeError, ListingError, WordParseError};

/// Options controlling a listing run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingOptions {
    /// Abort on the first malformed line instead of recording a diagnostic
    /// and continuing.
    pub strict: bool,
}

/// A malformed line encountered during a non-strict run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDiagnostic {
    /// 1-based line number in the input.
    pub line: usize,
    /// What was wrong with the line.
    pub error: WordParseError,
}

/// Counters describing a completed listing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingSummary {
    /// Total lines read.
    pub lines: usize,
    /// Lines that parsed as instruction words.
    pub words: usize,
    /// Words decoded and written to the output.
    pub instructions: usize,
    /// Words skipped because their opcode nibble is unassigned.
    pub unknown: usize,
    /// Blank lines skipped.
    pub blank: usize,
    /// Malformed lines, in input order. Always empty under
    /// [`ListingOptions::strict`], which aborts on the first one.
    pub diagnostics: Vec<LineDiagnostic>,
}

/// Parses one listing line (already trimmed) into an instruction word.
///
/// Only uppercase hex digits are accepted. The assembler emits uppercase,
/// and keeping the parser case-sensitive means a lowercase line shows up
/// as a diagnostic instead of silently decoding.
pub fn parse_word(text: &str) -> Result<u16, WordParseError> {
    let count = text.chars().count();
    if count != WORD_HEX_DIGITS {
        return Err(WordParseError::BadLength { found: count });
    }

    let mut word: u16 = 0;
    for (i, ch) in text.chars().enumerate() {
        let digit = match ch {
            '0'..='9' => ch as u16 - '0' as u16,
            'A'..='F' => ch as u16 - 'A' as u16 + 10,
            _ => {
                return Err(WordParseError::BadDigit {
                    found: ch,
                    column: i + 1,
                })
            }
        };
        word = (word << 4) | digit;
    }
    Ok(word)
}

/// Disassembles a hex listing, writing one assembly line per decoded word.
///
/// Lines are trimmed of surrounding whitespace before parsing. Blank lines
/// are skipped. Words with an unassigned opcode nibble are skipped without
/// output, matching the toolchain convention that data words may sit in a
/// listing alongside code. Malformed lines are collected as diagnostics
/// unless `options.strict` is set, in which case the first one aborts the
/// run with [`ListingError::Malformed`].
///
/// Output order is input order. The writer is flushed before returning.
pub fn disassemble_listing<R, W>(
    reader: R,
    writer: W,
    options: ListingOptions,
) -> Result<ListingSummary, ListingError>
where
    R: BufRead,
    W: Write,
{
    disassemble_listing_with(reader, writer, options, |writer, instruction| {
        writeln!(writer, "{}", instruction)
    })
}

/// Like [`disassemble_listing`], but with a caller-supplied renderer.
///
/// `emit` is called once per decoded instruction and writes its own line
/// terminator. The JSON output mode of the command-line tool is one such
/// renderer; the plain assembly form is the default.
pub fn disassemble_listing_with<R, W, F>(
    reader: R,
    mut writer: W,
    options: ListingOptions,
    mut emit: F,
) -> Result<ListingSummary, ListingError>
where
    R: BufRead,
    W: Write,
    F: FnMut(&mut W, &Instruction) -> std::io::Result<()>,
{
    let mut summary = ListingSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        summary.lines += 1;

        let text = line.trim();
        if text.is_empty() {
            summary.blank += 1;
            continue;
        }

        let word = match parse_word(text) {
            Ok(word) => word,
            Err(error) => {
                if options.strict {
                    return Err(ListingError::malformed(number, error));
                }
                summary.diagnostics.push(LineDiagnostic {
                    line: number,
                    error,
                });
                continue;
            }
        };
        summary.words += 1;

        match decode(word) {
            Ok(instruction) => {
                emit(&mut writer, &instruction)?;
                summary.instructions += 1;
            }
            Err(DecodeError::UnknownOpcode { .. }) => summary.unknown += 1,
        }
    }

    writer.flush()?;
    Ok(summary)
}
