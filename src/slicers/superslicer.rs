//! SuperSlicer dialect.
//!
//! SuperSlicer is the friendly one: every object announces itself with an
//! inline JSON comment before any motion happens, so no geometry scan is
//! needed and the whole file is processed in a single forward pass:
//!
//! ```text
//! ; object: {"name":"cube_1","id":"cube_1 id:0 copy 0",
//! ;   "object_center":[150.5,155.5,0.0],
//! ;   "boundingbox_center":[150.5,155.5,2.5],
//! ;   "boundingbox_size":[5.0,5.0,5.0]}
//! ```
//!
//! The `; plater:` sentinel ends the metadata block and triggers the
//! header; `; printing object <id>` / `; stop printing object <id>` lines
//! then map straight onto start/end markers.

use std::io::{BufRead, Write};

use serde::Deserialize;
use std::collections::HashMap;

use super::{read_raw_line, Emitter};
use crate::error::PrecancelError;
use crate::markers;
use crate::object::{bounding_box, Point};

/// The JSON payload of a `; object:` comment. Unknown fields (such as
/// `name`) are ignored; only `id` is required.
#[derive(Debug, Deserialize)]
struct ObjectMetadata {
    id: String,
    #[serde(default)]
    object_center: Vec<f64>,
    #[serde(default)]
    boundingbox_center: Vec<f64>,
    #[serde(default)]
    boundingbox_size: Vec<f64>,
}

/// An object definition derived from its metadata comment.
#[derive(Debug)]
struct ObjectDef {
    name: String,
    center: Option<Point>,
    polygon: Option<[Point; 4]>,
}

impl From<ObjectMetadata> for ObjectDef {
    fn from(meta: ObjectMetadata) -> Self {
        let center = xy(&meta.object_center);

        let polygon = match (xy(&meta.boundingbox_center), xy(&meta.boundingbox_size)) {
            (Some(c), Some(size)) => Some(bounding_box(
                Point::new(c.x - size.x / 2.0, c.y - size.y / 2.0),
                Point::new(c.x + size.x / 2.0, c.y + size.y / 2.0),
            )),
            _ => None,
        };

        Self {
            name: markers::sanitize_id(&meta.id),
            center,
            polygon,
        }
    }
}

/// The XY components of a 3-vector (z is ignored); `None` when the array
/// is too short to carry both.
fn xy(coords: &[f64]) -> Option<Point> {
    match coords {
        [x, y, ..] => Some(Point::new(*x, *y)),
        _ => None,
    }
}

/// Insertion-ordered table of object definitions keyed by native id.
/// Re-registering an id replaces the definition but keeps its position.
#[derive(Debug, Default)]
struct ObjectTable {
    entries: Vec<(String, ObjectDef)>,
    index: HashMap<String, usize>,
}

impl ObjectTable {
    fn insert(&mut self, id: String, def: ObjectDef) {
        match self.index.get(&id) {
            Some(&slot) => self.entries[slot].1 = def,
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, def));
            }
        }
    }

    fn get(&self, id: &str) -> Option<&ObjectDef> {
        self.index.get(id).map(|&slot| &self.entries[slot].1)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Annotates a SuperSlicer file in a single pass. Returns the object count.
pub fn preprocess<R, W>(input: &mut R, output: &mut W) -> Result<usize, PrecancelError>
where
    R: BufRead,
    W: Write,
{
    let mut objects = ObjectTable::default();
    let mut emitter = Emitter::new(output);
    let mut line = String::new();

    // Phase 1: collect `; object:` metadata until the `; plater:` sentinel.
    let mut in_metadata = true;

    while read_raw_line(input, &mut line)? {
        emitter.echo(&line)?;

        if in_metadata {
            if let Some(payload) = line.strip_prefix("; object:") {
                let meta: ObjectMetadata =
                    serde_json::from_str(payload.trim()).map_err(|source| {
                        PrecancelError::ObjectMetadataParse {
                            line: line.trim_end().to_string(),
                            source,
                        }
                    })?;
                let id = meta.id.clone();
                objects.insert(id, ObjectDef::from(meta));
            }

            if line.starts_with("; plater:") {
                emitter.inject(&markers::header(objects.len()))?;
                for (_, def) in &objects.entries {
                    emitter.inject(&markers::define_object(
                        &def.name,
                        def.center,
                        def.polygon.as_ref().map(|p| p.as_slice()),
                    ))?;
                }
                in_metadata = false;
            }
            continue;
        }

        // Phase 2: translate the start/stop comments.
        if let Some(id) = line.strip_prefix("; printing object ") {
            let def = lookup(&objects, id.trim())?;
            emitter.inject(&markers::start_object(&def.name))?;
        }

        if let Some(id) = line.strip_prefix("; stop printing object ") {
            let def = lookup(&objects, id.trim())?;
            emitter.inject(&markers::end_object(&def.name))?;
        }
    }

    Ok(objects.len())
}

fn lookup<'a>(objects: &'a ObjectTable, id: &str) -> Result<&'a ObjectDef, PrecancelError> {
    objects.get(id).ok_or_else(|| PrecancelError::UnknownObject {
        id: id.to_string(),
    })
}
