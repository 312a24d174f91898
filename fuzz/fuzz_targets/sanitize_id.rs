//! Fuzz target for identifier sanitization.

#![no_main]

use libfuzzer_sys::fuzz_target;
use precancel::markers::sanitize_id;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    if let Ok(raw) = std::str::from_utf8(data) {
        let clean = sanitize_id(raw);
        // Sanitization must be idempotent and firmware-safe.
        assert_eq!(sanitize_id(&clean), clean);
        assert!(clean.chars().all(|c| c.is_alphanumeric() || c == '_'));
    }
});
