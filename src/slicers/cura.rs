//! Cura dialect.
//!
//! Cura tags extrusion blocks with `;MESH:<name>` comments (the literal
//! name `NONMESH` means skirts, priming and other non-object moves) but
//! never marks where an object's block ends. Boundaries are therefore a
//! best-effort heuristic during emission: a new `;MESH:` closes the open
//! object, and so does a line equal to the last `;TIME_ELAPSED:` line the
//! scan pass saw (the layer-end stamp Cura writes before the footer). An
//! object still open at end-of-stream is closed once after the last line.

use std::io::{BufRead, Seek, SeekFrom, Write};

use super::{object_name, read_raw_line, Emitter};
use crate::error::PrecancelError;
use crate::gcode;
use crate::markers;
use crate::object::ObjectRegistry;

/// Annotates a Cura file. Returns the object count.
pub fn preprocess<R, W>(input: &mut R, output: &mut W) -> Result<usize, PrecancelError>
where
    R: BufRead + Seek,
    W: Write,
{
    let mut objects = ObjectRegistry::new();
    let mut current: Option<usize> = None;
    let mut last_time_elapsed: Option<String> = None;
    let mut line = String::new();

    // Scan pass: register meshes, accumulate geometry, remember the final
    // ;TIME_ELAPSED: stamp.
    while read_raw_line(input, &mut line)? {
        if let Some(name) = line.strip_prefix(";MESH:") {
            let name = name.trim();
            // NONMESH leaves the previously active hull in place.
            if name != "NONMESH" {
                current = Some(objects.open(name, || markers::sanitize_id(name)));
            }
        }

        if let Some(slot) = current {
            if let Some(point) = gcode::extrusion_target(&line)? {
                objects.hull_mut(slot).add_point(point);
            }
        }

        if line.starts_with(";TIME_ELAPSED:") {
            last_time_elapsed = Some(line.clone());
        }
    }

    input.seek(SeekFrom::Start(0))?;

    let mut emitter = Emitter::new(output);

    // Echo the leading comment block; the header goes right after the
    // first non-blank, non-comment line.
    while read_raw_line(input, &mut line)? {
        emitter.echo(&line)?;
        if !line.trim().is_empty() && !line.starts_with(';') {
            break;
        }
    }

    emitter.inject(&markers::header(objects.len()))?;
    for (_, obj) in objects.iter() {
        let polygon = obj.hull.exterior();
        emitter.inject(&markers::define_object(
            &obj.name,
            obj.hull.center(),
            polygon.as_ref().map(|p| p.as_slice()),
        ))?;
    }

    // Emission pass over the remainder of the file.
    let mut current_name: Option<String> = None;
    while read_raw_line(input, &mut line)? {
        emitter.echo(&line)?;

        if let Some(mesh) = line.strip_prefix(";MESH:") {
            if let Some(name) = current_name.take() {
                emitter.inject(&markers::end_object(&name))?;
            }
            let mesh = mesh.trim();
            if mesh != "NONMESH" {
                let name = object_name(&objects, mesh)?.to_string();
                emitter.inject(&markers::start_object(&name))?;
                current_name = Some(name);
            }
        }

        if last_time_elapsed.as_deref() == Some(line.as_str()) {
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
