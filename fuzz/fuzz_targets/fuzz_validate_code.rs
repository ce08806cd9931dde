//! Fuzz target for code validation.
//!
//! Goal: validation should **never panic**, and a code it accepts must be 1-5 lowercase
//! ASCII letters.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_validate_code
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let accepted = promocheck_types::validate_code_bytes(data).is_ok();
    if accepted {
        assert!((1..=5).contains(&data.len()));
        assert!(data.iter().all(u8::is_ascii_lowercase));
    }

    if let Ok(text) = std::str::from_utf8(data) {
        assert_eq!(promocheck_types::validate_code(text).is_ok(), accepted);
    }
});
