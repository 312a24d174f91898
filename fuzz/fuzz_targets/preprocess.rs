//! Fuzz target for the whole preprocessing pipeline.
//!
//! This fuzzer feeds arbitrary byte sequences through idempotency
//! scanning, slicer detection, and the dialect parsers, checking for
//! panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use precancel::preprocess::preprocess_slice;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    let _ = preprocess_slice(data);
});
