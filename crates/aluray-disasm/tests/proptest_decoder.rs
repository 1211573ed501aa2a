//! Property-based tests for the ALU-16 decoder and listing driver.
//!
//! The instruction space is only 2^16 words, so the core decode properties
//! are checked exhaustively; proptest covers the text-level properties
//! where the input space is unbounded.

use std::io::Cursor;

use proptest::prelude::*;

use aluray_core::{OperandLayout, REGISTER_COUNT};
use aluray_disasm::{decode, disassemble_listing, parse_word, DecodeError, ListingOptions};

#[test]
fn decode_accepts_exactly_the_assigned_opcodes() {
    for word in 0..=u16::MAX {
        let nibble = (word >> 12) as u8;
        match decode(word) {
            Ok(insn) => {
                assert!(nibble <= 0xD, "word {:04X} should not decode", word);
                assert_eq!(insn.opcode.nibble(), nibble);
                assert_eq!(insn.word, word);
            }
            Err(error) => {
                assert!(nibble >= 0xE, "word {:04X} should decode", word);
                assert_eq!(error, DecodeError::UnknownOpcode { word, nibble });
            }
        }
    }
}

#[test]
fn operand_fields_stay_in_range_for_every_word() {
    for word in 0..=u16::MAX {
        let Ok(insn) = decode(word) else { continue };

        assert_eq!(
            insn.operands.len(),
            insn.opcode.layout().operand_count(),
            "word {:04X}",
            word
        );
        for operand in &insn.operands {
            if operand.is_register() {
                assert!(operand.value() < REGISTER_COUNT, "word {:04X}", word);
            } else {
                assert!(operand.value() < 64, "word {:04X}", word);
            }
        }
        // Only the load immediates carry an immediate, always in second
        // position.
        let has_imm = insn.operands.iter().any(|operand| operand.is_immediate());
        assert_eq!(has_imm, insn.opcode.layout() == OperandLayout::RegImm);
        assert!(insn.operands[0].is_register());
    }
}

#[test]
fn parse_word_roundtrips_every_word() {
    for word in 0..=u16::MAX {
        assert_eq!(parse_word(&format!("{:04X}", word)), Ok(word));
    }
}

/// Words whose four-digit hex spelling contains at least one letter, so the
/// lowercase form actually differs from the uppercase one. Filtering in the
/// strategy makes the all-numeric discards (about 15% of the word space)
/// count against proptest's local-reject budget rather than the much
/// smaller global one.
fn words_with_letter_digits() -> impl Strategy<Value = u16> {
    any::<u16>().prop_filter("hex spelling must contain a letter digit", |word| {
        let lower = format!("{:04x}", word);
        lower != lower.to_ascii_uppercase()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10000))]

    #[test]
    fn decode_never_panics(word: u16) {
        let _ = decode(word);
    }

    #[test]
    fn decode_is_deterministic(word: u16) {
        prop_assert_eq!(decode(word), decode(word));
    }

    #[test]
    fn rendered_text_has_fixed_shape(word in 0x0000u16..0xE000) {
        let text = decode(word).unwrap().to_string();
        let (mnemonic, operands) = text.split_once(' ').unwrap();
        prop_assert!(mnemonic.chars().all(|c| c.is_ascii_uppercase()));
        for field in operands.split(", ") {
            prop_assert!(!field.is_empty());
            prop_assert!(field.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn lowercase_spellings_are_rejected(word in words_with_letter_digits()) {
        let lower = format!("{:04x}", word);
        prop_assert!(parse_word(&lower).is_err());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn listing_never_panics_on_arbitrary_text(input: String) {
        let mut output = Vec::new();
        let _ = disassemble_listing(
            Cursor::new(input.as_bytes()),
            &mut output,
            ListingOptions::default(),
        );
    }

    #[test]
    fn one_output_line_per_decoded_word(words: Vec<u16>) {
        let listing: String = words.iter().map(|word| format!("{:04X}\n", word)).collect();
        let mut output = Vec::new();
        let summary = disassemble_listing(
            Cursor::new(listing.as_bytes()),
            &mut output,
            ListingOptions::default(),
        )
        .unwrap();

        let decodable = words.iter().filter(|word| **word >> 12 <= 0xD).count();
        let text = String::from_utf8(output).unwrap();
        prop_assert_eq!(text.lines().count(), decodable);
        prop_assert_eq!(summary.instructions, decodable);
        prop_assert_eq!(summary.words, words.len());
        prop_assert_eq!(summary.instructions + summary.unknown, summary.words);
        prop_assert!(summary.diagnostics.is_empty());
    }

    #[test]
    fn strict_mode_agrees_on_clean_listings(words: Vec<u16>) {
        let listing: String = words.iter().map(|word| format!("{:04X}\n", word)).collect();

        let mut lenient = Vec::new();
        let lenient_summary = disassemble_listing(
            Cursor::new(listing.as_bytes()),
            &mut lenient,
            ListingOptions::default(),
        )
        .unwrap();

        let mut strict = Vec::new();
        let strict_summary = disassemble_listing(
            Cursor::new(listing.as_bytes()),
            &mut strict,
            ListingOptions { strict: true },
        )
        .unwrap();

        prop_assert_eq!(lenient, strict);
        prop_assert_eq!(lenient_summary, strict_summary);
    }
}
