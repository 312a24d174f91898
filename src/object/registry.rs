//! The per-file registry of printed objects.
//!
//! During a parser's scan pass, every object a slicer mentioned is
//! registered here under its dialect-native id. The registry preserves
//! insertion order (the header lists objects in the order the slicer
//! introduced them) while still allowing O(1) lookup by id for the
//! start/stop markers of the emission pass.
//!
//! A registry is created fresh for each input file and discarded when the
//! file is done; it is never shared across files.

use std::collections::HashMap;

use super::HullTracker;

/// One printed object: its firmware-safe display name and the geometry
/// accumulated for it.
///
/// The name is assigned at first registration and never changed. Distinct
/// native ids can sanitize to the same name; that collision is not checked
/// because the registry stays keyed by native id.
#[derive(Clone, Debug)]
pub struct KnownObject {
    pub name: String,
    pub hull: HullTracker,
}

impl KnownObject {
    /// Creates an object with an empty hull.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hull: HullTracker::new(),
        }
    }
}

/// Insertion-ordered map from dialect-native id to [`KnownObject`].
#[derive(Clone, Debug, Default)]
pub struct ObjectRegistry {
    entries: Vec<(String, KnownObject)>,
    index: HashMap<String, usize>,
}

impl ObjectRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no objects are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers `id` with the given display name if it is not already
    /// present, and returns its slot.
    ///
    /// The name is evaluated lazily so callers can avoid sanitizing ids
    /// that were already registered.
    pub fn open(&mut self, id: &str, name: impl FnOnce() -> String) -> usize {
        if let Some(&slot) = self.index.get(id) {
            return slot;
        }
        let slot = self.entries.len();
        self.entries.push((id.to_string(), KnownObject::new(name())));
        self.index.insert(id.to_string(), slot);
        slot
    }

    /// The slot for `id`, if registered.
    pub fn slot_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// The object registered under `id`, if any.
    pub fn get(&self, id: &str) -> Option<&KnownObject> {
        self.slot_of(id).map(|slot| &self.entries[slot].1)
    }

    /// The object in `slot`. Panics on an out-of-range slot, which only
    /// a registry's own caller can produce.
    pub fn by_slot(&self, slot: usize) -> &KnownObject {
        &self.entries[slot].1
    }

    /// Mutable access to the hull in `slot`, for the scan pass.
    pub fn hull_mut(&mut self, slot: usize) -> &mut HullTracker {
        &mut self.entries[slot].1.hull
    }

    /// Iterates (native id, object) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &KnownObject)> {
        self.entries.iter().map(|(id, obj)| (id.as_str(), obj))
    }
}
