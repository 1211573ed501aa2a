#![no_main]

use libfuzzer_sys::fuzz_target;

use aluray_core::REGISTER_COUNT;
use aluray_disasm::decode;

fuzz_target!(|word: u16| {
    match decode(word) {
        Ok(instruction) => {
            assert!(word >> 12 <= 0xD);
            assert!(!instruction.operands.is_empty());
            assert!(instruction.operands.len() <= 3);
            for operand in &instruction.operands {
                if operand.is_register() {
                    assert!(operand.value() < REGISTER_COUNT);
                } else {
                    assert!(operand.value() < 64);
                }
            }
            // Rendering must not panic either.
            let _ = instruction.to_string();
        }
        Err(_) => assert!(word >> 12 >= 0xE),
    }
});
