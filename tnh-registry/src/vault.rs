//! Vault records: saved loadouts keyed by file name.
//!
//! Two formats exist side by side. Each gets its own [`VaultTable`]; they are
//! never checked against each other.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A record that can be stored in a [`VaultTable`].
pub trait VaultEntry {
    /// File name the record was loaded from.
    fn file_name(&self) -> &str;
}

/// One object captured in a current-format vault file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultObject {
    /// Object ID of the stored item.
    pub object_id: String,
    /// Index of the parent object within the same file, if attached.
    #[serde(default)]
    pub attached_to: Option<usize>,
}

/// Current-format vault record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultRecord {
    /// File name (unique per format).
    pub file_name: String,
    /// Stored objects.
    #[serde(default)]
    pub objects: Vec<VaultObject>,
}

impl VaultRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            objects: Vec::new(),
        }
    }

    /// Add a top-level object.
    #[must_use]
    pub fn with_object(mut self, object_id: impl Into<String>) -> Self {
        self.objects.push(VaultObject {
            object_id: object_id.into(),
            attached_to: None,
        });
        self
    }
}

impl VaultEntry for VaultRecord {
    fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Legacy-format vault record: a single saved gun with its components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyVaultRecord {
    /// File name (unique per format).
    pub file_name: String,
    /// Object ID of the saved gun.
    pub object_id: String,
    /// Object IDs of attachments and magazines.
    #[serde(default)]
    pub components: Vec<String>,
}

impl LegacyVaultRecord {
    /// Create a record for a bare gun.
    #[must_use]
    pub fn new(file_name: impl Into<String>, object_id: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            object_id: object_id.into(),
            components: Vec::new(),
        }
    }
}

impl VaultEntry for LegacyVaultRecord {
    fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Outcome of registering a vault record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultOutcome {
    /// The record was stored.
    Inserted,
    /// A record with the same file name was already stored and kept.
    Skipped,
}

/// File name → record table. The first record loaded for a name wins.
#[derive(Debug, Clone)]
pub struct VaultTable<R> {
    records: HashMap<String, Arc<R>>,
}

impl<R> Default for VaultTable<R> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
        }
    }
}

impl<R: VaultEntry> VaultTable<R> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` unless its file name is taken.
    pub fn register(&mut self, record: R) -> VaultOutcome {
        if self.records.contains_key(record.file_name()) {
            return VaultOutcome::Skipped;
        }
        self.records.insert(record.file_name().to_string(), Arc::new(record));
        VaultOutcome::Inserted
    }

    /// Record stored under `file_name`.
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&Arc<R>> {
        self.records.get(file_name)
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over stored file names.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_loaded_wins() {
        let mut table = VaultTable::new();
        assert_eq!(
            table.register(VaultRecord::new("save1").with_object("M1911")),
            VaultOutcome::Inserted
        );
        assert_eq!(
            table.register(VaultRecord::new("save1").with_object("AK47")),
            VaultOutcome::Skipped
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("save1").expect("stored").objects[0].object_id, "M1911");
    }

    #[test]
    fn missing_name_is_none() {
        let table: VaultTable<LegacyVaultRecord> = VaultTable::new();
        assert!(table.get("nothing").is_none());
        assert!(table.is_empty());
    }
}
