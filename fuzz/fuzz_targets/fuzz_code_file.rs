//! Fuzz target for code file parsing.
//!
//! Goal: loading and scanning arbitrary file contents should **never panic**, and a point
//! lookup must agree with the fully loaded index.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_code_file
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use promocheck_repo::InvalidLinePolicy;
use promocheck_repo::fuzz::{exists_in_bytes, load_bytes};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    contents: &'a [u8],
    code: &'a str,
    reject: bool,
}

fuzz_target!(|input: Input<'_>| {
    let policy = if input.reject {
        InvalidLinePolicy::Reject
    } else {
        InvalidLinePolicy::Skip
    };

    let loaded = load_bytes(input.contents, policy);
    let found = exists_in_bytes(input.contents, input.code, policy);

    if let (Ok(index), Ok(found)) = (&loaded, &found) {
        // Reject mode may stop scanning early on a match, so only Skip is exact.
        if !input.reject {
            assert_eq!(index.contains(input.code), *found);
        }
    }
});
