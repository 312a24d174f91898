//! PrusaSlicer and Slic3r dialect (shared logic).
//!
//! Both slicers bracket each object's extrusions with
//! `; printing object <id>` / `; stop printing object <id>` comments but
//! publish no geometry of their own, so the scan pass derives it: the
//! first `printing object` line for an id registers it, and every
//! extrusion move while its hull is active feeds the centroid and
//! bounding box. The emission pass injects the header right after the
//! `; generated by` banner and re-emits start/end markers at the original
//! comment positions.

use std::io::{BufRead, Seek, SeekFrom, Write};

use super::{object_name, read_raw_line, Emitter};
use crate::error::PrecancelError;
use crate::gcode;
use crate::markers;
use crate::object::ObjectRegistry;

/// Annotates a PrusaSlicer or Slic3r file. Returns the object count.
pub fn preprocess<R, W>(input: &mut R, output: &mut W) -> Result<usize, PrecancelError>
where
    R: BufRead + Seek,
    W: Write,
{
    let mut objects = ObjectRegistry::new();
    let mut current: Option<usize> = None;
    let mut line = String::new();

    // Scan pass: register objects and accumulate their geometry.
    while read_raw_line(input, &mut line)? {
        if let Some(id) = line.strip_prefix("; printing object ") {
            let id = id.trim();
            current = Some(objects.open(id, || markers::sanitize_id(id)));
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
    while read_raw_line(input, &mut line)? {
        emitter.echo(&line)?;

        if line.starts_with("; generated by") {
            emitter.inject(&markers::header(objects.len()))?;
            for (_, obj) in objects.iter() {
                let polygon = obj.hull.exterior();
                emitter.inject(&markers::define_object(
                    &obj.name,
                    obj.hull.center(),
                    polygon.as_ref().map(|p| p.as_slice()),
                ))?;
            }
        }

        if let Some(id) = line.strip_prefix("; printing object ") {
            let name = object_name(&objects, id.trim())?;
            emitter.inject(&markers::start_object(name))?;
        }

        if let Some(id) = line.strip_prefix("; stop printing object ") {
            let name = object_name(&objects, id.trim())?;
            emitter.inject(&markers::end_object(name))?;
        }
    }

    Ok(objects.len())
}
