//! Equipment pools and their composite index keys.
//!
//! Pools are shared through `Arc`: several built-in characters may point at
//! the very same pool object. A pool that belongs to the built-in catalogue
//! carries its own canonical [`PoolKey`], which built-in characters index it
//! under. Custom characters always index under a key derived from their own
//! content ID.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::UgcId;

/// Category label used for character equipment pools.
pub const DEFAULT_POOL_CATEGORY: &str = "EquipmentPool";

/// Composite key of an equipment pool: `(content ID, pool index, category)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolKey {
    /// Content ID of the owning (or canonical) character.
    pub ugc_id: UgcId,
    /// Position of the pool in the character's pool list.
    pub index: usize,
    /// Category label.
    pub category: String,
}

impl PoolKey {
    /// Build a key.
    #[must_use]
    pub fn new(ugc_id: UgcId, index: usize, category: impl Into<String>) -> Self {
        Self {
            ugc_id,
            index,
            category: category.into(),
        }
    }
}

/// What kind of equipment a pool hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolType {
    /// Guns.
    Firearm,
    /// Magazines and loose rounds.
    Ammunition,
    /// Melee weapons.
    Melee,
    /// Grenades and launchers.
    Explosive,
    /// Anything else (attachments, medical).
    Utility,
}

/// A named collection of equipment options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentPool {
    /// Display name.
    pub name: String,
    /// Kind of equipment.
    pub pool_type: PoolType,
    /// Token cost to draw from the pool.
    pub token_cost: u32,
    /// Object IDs the pool can yield.
    pub options: Vec<String>,
    /// Canonical key for catalogue pools shared between characters.
    #[serde(default)]
    pub shared_key: Option<PoolKey>,
}

impl EquipmentPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new(name: impl Into<String>, pool_type: PoolType, token_cost: u32) -> Self {
        Self {
            name: name.into(),
            pool_type,
            token_cost,
            options: Vec::new(),
            shared_key: None,
        }
    }

    /// Add an equipment option.
    #[must_use]
    pub fn with_option(mut self, object_id: impl Into<String>) -> Self {
        self.options.push(object_id.into());
        self
    }

    /// Mark this pool as a catalogue pool addressed by `key` wherever it is used.
    #[must_use]
    pub fn shared_as(mut self, key: PoolKey) -> Self {
        self.shared_key = Some(key);
        self
    }

    /// Index key of this pool when it sits at `index` in a built-in
    /// character's list: the canonical key if shared, else derived from `ugc_id`.
    #[must_use]
    pub fn pool_key(&self, ugc_id: &UgcId, index: usize, category: &str) -> PoolKey {
        match &self.shared_key {
            Some(key) => key.clone(),
            None => PoolKey::new(ugc_id.clone(), index, category),
        }
    }
}

/// Outcome of inserting a pool into the [`PoolTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolIndexOutcome {
    /// The pool was stored under a new key.
    Inserted,
    /// The key was already taken; the stored pool was kept.
    Skipped,
}

/// Arena of equipment pools addressed by key. First insert wins.
#[derive(Debug, Clone, Default)]
pub struct PoolTable {
    pools: HashMap<PoolKey, Arc<EquipmentPool>>,
}

impl PoolTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `pool` under `key` unless the key is taken.
    pub fn insert(&mut self, key: PoolKey, pool: Arc<EquipmentPool>) -> PoolIndexOutcome {
        match self.pools.entry(key) {
            Entry::Occupied(_) => PoolIndexOutcome::Skipped,
            Entry::Vacant(slot) => {
                slot.insert(pool);
                PoolIndexOutcome::Inserted
            }
        }
    }

    /// Pool stored under `key`.
    #[must_use]
    pub fn get(&self, key: &PoolKey) -> Option<&Arc<EquipmentPool>> {
        self.pools.get(key)
    }

    /// Whether `key` is taken.
    #[must_use]
    pub fn contains(&self, key: &PoolKey) -> bool {
        self.pools.contains_key(key)
    }

    /// Number of indexed pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Iterate over every indexed pool.
    pub fn iter(&self) -> impl Iterator<Item = (&PoolKey, &Arc<EquipmentPool>)> {
        self.pools.iter()
    }

    /// Drop every pool.
    pub fn clear(&mut self) {
        self.pools.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_key_uses_owner() {
        let pool = EquipmentPool::new("Sidearms", PoolType::Firearm, 1);
        let key = pool.pool_key(&"TNHF_Ranger".into(), 2, DEFAULT_POOL_CATEGORY);
        assert_eq!(key, PoolKey::new("TNHF_Ranger".into(), 2, "EquipmentPool"));
    }

    #[test]
    fn shared_pool_keeps_canonical_key() {
        let canonical = PoolKey::new("catalogue".into(), 0, DEFAULT_POOL_CATEGORY);
        let pool = EquipmentPool::new("Rifles", PoolType::Firearm, 3).shared_as(canonical.clone());
        assert_eq!(pool.pool_key(&"classic".into(), 4, DEFAULT_POOL_CATEGORY), canonical);
        assert_eq!(pool.pool_key(&"ricochet".into(), 1, DEFAULT_POOL_CATEGORY), canonical);
    }

    #[test]
    fn table_is_first_wins() {
        let key = PoolKey::new("a".into(), 0, DEFAULT_POOL_CATEGORY);
        let first = Arc::new(EquipmentPool::new("First", PoolType::Melee, 0));
        let second = Arc::new(EquipmentPool::new("Second", PoolType::Melee, 0));

        let mut table = PoolTable::new();
        assert_eq!(table.insert(key.clone(), Arc::clone(&first)), PoolIndexOutcome::Inserted);
        assert_eq!(table.insert(key.clone(), second), PoolIndexOutcome::Skipped);
        assert_eq!(table.len(), 1);
        assert!(Arc::ptr_eq(table.get(&key).expect("stored"), &first));
    }
}
