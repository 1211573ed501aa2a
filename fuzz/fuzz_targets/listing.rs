#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;

use aluray_disasm::{disassemble_listing, ListingOptions};

fuzz_target!(|data: &[u8]| {
    // The driver reads text lines; feed it raw bytes both ways to cover
    // the invalid-UTF-8 path and the lenient/strict split.
    let mut output = Vec::new();
    let _ = disassemble_listing(Cursor::new(data), &mut output, ListingOptions::default());

    let _ = disassemble_listing(
        Cursor::new(data),
        &mut Vec::new(),
        ListingOptions { strict: true },
    );
});
