//! The common marker vocabulary.
//!
//! Every dialect parser funnels its findings through the renderers here,
//! so the annotated output looks identical no matter which slicer produced
//! the input:
//!
//! - a header block announcing the file has been processed and how many
//!   objects it contains,
//! - one `DEFINE_OBJECT` line per object with its name and optional
//!   center/bounding polygon,
//! - `START_CURRENT_OBJECT` / `END_CURRENT_OBJECT` lines bracketing each
//!   object's print window.
//!
//! All rendered strings are `\n`-terminated and ready to hand to a sink.

use crate::object::Point;

/// Comment line marking a file as processed. Re-running the tool on a file
/// that contains this line (or any `DEFINE_OBJECT` line) is a no-op.
pub const HEADER_MARKER: &str = "; Pre-Processed for Cancel-Object support";

/// Command token used both for object definitions and as the idempotency
/// signal: any line beginning with it means "already annotated".
pub const DEFINE_OBJECT: &str = "DEFINE_OBJECT";

/// Renders the header block: two blank lines, the sentinel comment, and
/// the object count.
pub fn header(object_count: usize) -> String {
    format!("\n\n{HEADER_MARKER}\n; {object_count} known objects\n")
}

/// Renders a `DEFINE_OBJECT` line.
///
/// `CENTER` is the comma-joined coordinate pair; `POLYGON` is a compact
/// JSON array of `[x,y]` pairs. Both are omitted when absent.
pub fn define_object(name: &str, center: Option<Point>, polygon: Option<&[Point]>) -> String {
    let mut line = format!("{DEFINE_OBJECT} NAME={name}");

    if let Some(center) = center {
        line.push_str(&format!(" CENTER={center}"));
    }

    if let Some(corners) = polygon {
        line.push_str(" POLYGON=[");
        for (i, p) in corners.iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            line.push_str(&format!("[{},{}]", p.x, p.y));
        }
        line.push(']');
    }

    line.push('\n');
    line
}

/// Renders a `START_CURRENT_OBJECT` line.
pub fn start_object(name: &str) -> String {
    format!("START_CURRENT_OBJECT NAME={name}\n")
}

/// Renders an `END_CURRENT_OBJECT` line.
pub fn end_object(name: &str) -> String {
    format!("END_CURRENT_OBJECT NAME={name}\n")
}

/// Derives a firmware-safe identifier from a native object name or id.
///
/// Every maximal run of characters that are not alphanumeric or `_` is
/// collapsed to a single underscore, then leading and trailing underscores
/// are stripped. Distinct inputs can map to the same output; uniqueness is
/// not guaranteed.
pub fn sanitize_id(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;

    for ch in raw.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            if pending_sep {
                out.push('_');
                pending_sep = false;
            }
            out.push(ch);
        } else {
            pending_sep = true;
        }
    }

    out.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_collapses_runs_and_strips_edges() {
        assert_eq!(sanitize_id("cube one!!"), "cube_one");
        assert_eq!(sanitize_id("__a__"), "a");
        assert_eq!(sanitize_id("cube_1 id:0 copy 0"), "cube_1_id_0_copy_0");
        assert_eq!(sanitize_id("a - b"), "a_b");
        assert_eq!(sanitize_id("!!!"), "");
        assert_eq!(sanitize_id(""), "");
    }

    #[test]
    fn sanitize_keeps_interior_underscores() {
        assert_eq!(sanitize_id("a__b"), "a__b");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for raw in ["cube one!!", "__a__", "part (2).stl", "ok_name"] {
            let once = sanitize_id(raw);
            assert_eq!(sanitize_id(&once), once);
        }
    }

    #[test]
    fn header_contains_sentinel_and_count() {
        let h = header(3);
        assert!(h.starts_with("\n\n"));
        assert!(h.contains(HEADER_MARKER));
        assert!(h.ends_with("; 3 known objects\n"));
    }

    #[test]
    fn define_object_name_only() {
        assert_eq!(define_object("cube", None, None), "DEFINE_OBJECT NAME=cube\n");
    }

    #[test]
    fn define_object_with_center_and_polygon() {
        let polygon = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 0.0),
        ];
        let line = define_object("cube", Some(Point::new(1.0, 1.0)), Some(&polygon));
        assert_eq!(
            line,
            "DEFINE_OBJECT NAME=cube CENTER=1,1 POLYGON=[[0,0],[0,2],[2,2],[2,0]]\n"
        );
    }

    #[test]
    fn start_and_end_markers() {
        assert_eq!(start_object("cube"), "START_CURRENT_OBJECT NAME=cube\n");
        assert_eq!(end_object("cube"), "END_CURRENT_OBJECT NAME=cube\n");
    }
}
