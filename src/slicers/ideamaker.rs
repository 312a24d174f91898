//! ideaMaker dialect.
//!
//! ideaMaker writes paired comments for every block:
//!
//! ```text
//! ;PRINTING: test_bed_part0.3mf
//! ;PRINTING_ID: 0
//! ```
//!
//! The scan pass consumes these pairs (a `;PRINTING:` line not followed
//! by `;PRINTING_ID:` is fatal) and accumulates geometry; id `-1` marks
//! internal non-object meshes and is always ignored. The emission pass
//! injects the header after `;TOTAL_NUM:<n>` — checking `n` against the
//! scan — and treats each `;PRINTING_ID:` as a close-then-open boundary,
//! with `;REMAINING_TIME: 0` as an extra close signal.

use std::io::{BufRead, Seek, SeekFrom, Write};

use super::{object_name, read_raw_line, Emitter};
use crate::error::PrecancelError;
use crate::gcode;
use crate::markers;
use crate::object::ObjectRegistry;

/// The value after the first `:`, matching how ideaMaker writes its
/// `;KEY: value` comments.
fn comment_value(line: &str) -> &str {
    line.split(':').nth(1).unwrap_or("").trim()
}

/// Annotates an ideaMaker file. Returns the object count.
pub fn preprocess<R, W>(input: &mut R, output: &mut W) -> Result<usize, PrecancelError>
where
    R: BufRead + Seek,
    W: Write,
{
    let mut objects = ObjectRegistry::new();
    let mut current: Option<usize> = None;
    let mut line = String::new();

    // Scan pass: pair ;PRINTING:/;PRINTING_ID: and accumulate geometry.
    while read_raw_line(input, &mut line)? {
        if line.starts_with(";PRINTING:") {
            let name = comment_value(&line).to_string();

            let mut id_line = String::new();
            input.read_line(&mut id_line)?;
            if !id_line.starts_with(";PRINTING_ID:") {
                return Err(PrecancelError::ObjectPairing {
                    line: id_line.trim_end().to_string(),
                });
            }

            let id = comment_value(&id_line);
            // -1 is ideaMaker's sentinel for internal non-object meshes;
            // the previously active hull stays active.
            if id != "-1" {
                current = Some(objects.open(id, || markers::sanitize_id(&name)));
            }
            continue;
        }

        if let Some(slot) = current {
            if let Some(point) = gcode::extrusion_target(&line)? {
                objects.hull_mut(slot).add_point(point);
            }
        }
    }

    input.seek(SeekFrom::Start(0))?;

    // Emission pass.
    let mut emitter = Emitter::new(output);
    let mut current_name: Option<String> = None;

    while read_raw_line(input, &mut line)? {
        emitter.echo(&line)?;

        if line.starts_with(";TOTAL_NUM:") {
            let declared: usize = comment_value(&line).parse().map_err(|_| {
                PrecancelError::InvalidObjectCount {
                    line: line.trim_end().to_string(),
                }
            })?;
            if declared != objects.len() {
                return Err(PrecancelError::ObjectCountMismatch {
                    declared,
                    found: objects.len(),
                });
            }

            emitter.inject(&markers::header(declared))?;
            for (_, obj) in objects.iter() {
                let polygon = obj.hull.exterior();
                emitter.inject(&markers::define_object(
                    &obj.name,
                    obj.hull.center(),
                    polygon.as_ref().map(|p| p.as_slice()),
                ))?;
            }
        }

        if line.starts_with(";PRINTING_ID:") {
            let id = comment_value(&line);
            if let Some(name) = current_name.take() {
                emitter.inject(&markers::end_object(&name))?;
            }
            if id != "-1" {
                let name = object_name(&objects, id)?.to_string();
                emitter.inject(&markers::start_object(&name))?;
                current_name = Some(name);
            }
        }

        if line.trim_end() == ";REMAINING_TIME: 0" {
            if let Some(name) = current_name.take() {
                emitter.inject(&markers::end_object(&name))?;
            }
        }
    }

    if let Some(name) = current_name {
        emitter.inject(&markers::end_object(&name))?;
    }

    Ok(objects.len())
}
