//! Registry of element keys declared anywhere in the form tree.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Write-once map from element key to its declared `type` string.
///
/// The registry is flat: keys inside sections share one namespace with
/// top-level keys. The declared type is `None` when `type` was missing or not
/// a string; it is recorded as written, valid or not.
#[derive(Debug, Default)]
pub struct KeyRegistry {
    keys: HashMap<String, Option<String>>,
}

impl KeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a key. Returns `false`, leaving the first entry untouched,
    /// when the key was already declared.
    pub fn declare(&mut self, key: &str, declared_type: Option<&str>) -> bool {
        match self.keys.entry(key.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(declared_type.map(str::to_string));
                true
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    /// The declared type of `key`; the outer `None` means the key is unknown.
    pub fn declared_type(&self, key: &str) -> Option<Option<&str>> {
        self.keys.get(key).map(Option::as_deref)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
