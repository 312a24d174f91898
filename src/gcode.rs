//! G-code motion line parsing.
//!
//! The only thing the dialect parsers need from the G-code itself is the
//! target of an extrusion move: a line whose command word starts with
//! `G`/`g` and that carries `E`, `X`, and `Y` parameters. Everything else
//! (travel moves, temperatures, comments) is passed through untouched.
//!
//! Parameters are single-letter-key/value words; the key is the first
//! character of the word, uppercased, and a later duplicate key overwrites
//! an earlier one. Values are only parsed once the `E`/`X`/`Y` trio is
//! known to be complete, so a stray `X` on a line without `E` never fails.

use crate::error::PrecancelError;
use crate::object::Point;

/// Extracts the XY target of an extrusion move, if `line` is one.
///
/// Returns `Ok(None)` for anything that is not a G-word with all of `E`,
/// `X`, and `Y` present.
///
/// # Errors
/// Returns [`PrecancelError::MalformedMove`] when the trio is present but
/// the `X` or `Y` value does not parse as a number.
pub fn extrusion_target(line: &str) -> Result<Option<Point>, PrecancelError> {
    let mut words = line.split_whitespace();

    let Some(command) = words.next() else {
        return Ok(None);
    };
    if !command.starts_with(['g', 'G']) {
        return Ok(None);
    }

    let mut x_raw: Option<&str> = None;
    let mut y_raw: Option<&str> = None;
    let mut has_e = false;

    for word in words {
        let mut chars = word.chars();
        let Some(key) = chars.next() else {
            continue;
        };
        let value = chars.as_str();
        match key.to_ascii_uppercase() {
            'X' => x_raw = Some(value),
            'Y' => y_raw = Some(value),
            'E' => has_e = true,
            _ => {}
        }
    }

    let (Some(x_raw), Some(y_raw), true) = (x_raw, y_raw, has_e) else {
        return Ok(None);
    };

    let parse = |raw: &str| -> Result<f64, PrecancelError> {
        raw.parse().map_err(|_| PrecancelError::MalformedMove {
            line: line.trim_end().to_string(),
        })
    };

    Ok(Some(Point::new(parse(x_raw)?, parse(y_raw)?)))
}
