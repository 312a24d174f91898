//! Fuzz target for extrusion-move parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use precancel::gcode::extrusion_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    if let Ok(line) = std::str::from_utf8(data) {
        let _ = extrusion_target(line);
    }
});
