//! Enemy identity allocator.
//!
//! Maintains the bijection between string [`EnemyKey`]s and numeric
//! [`EnemyIdentity`]s for one session. Built-in enemies keep the identity
//! they arrive with; custom enemies draw from a counter that starts above the
//! reserved built-in range. Both entry points share one key table and one
//! identity set, so an identity is never handed out twice.
//!
//! Every call either fully applies or leaves the allocator untouched.

use std::collections::{HashMap, HashSet};

use crate::config::EnemyConfig;
use crate::error::{RegistryError, Result};
use crate::types::{EnemyIdentity, EnemyKey};

/// Key ↔ identity table plus the custom identity counter.
#[derive(Debug, Clone)]
pub struct IdentityAllocator {
    keys: HashMap<EnemyKey, EnemyIdentity>,
    taken: HashSet<EnemyIdentity>,
    /// `None` once the counter has passed [`EnemyIdentity::MAX`].
    next: Option<EnemyIdentity>,
    start: EnemyIdentity,
    reserved_ceiling: u32,
}

impl IdentityAllocator {
    /// Create an allocator for the given ranges.
    ///
    /// # Errors
    /// Returns `RegistryError::Config` if `custom_id_start` is not a valid
    /// identity or does not lie above the reserved range.
    pub fn new(config: &EnemyConfig) -> Result<Self> {
        if config.custom_id_start <= config.reserved_ceiling {
            return Err(RegistryError::Config(format!(
                "custom identities must start above {}",
                config.reserved_ceiling
            )));
        }
        let start = EnemyIdentity::new(config.custom_id_start)
            .map_err(|e| RegistryError::Config(e.to_string()))?;
        Ok(Self {
            keys: HashMap::new(),
            taken: HashSet::new(),
            next: Some(start),
            start,
            reserved_ceiling: config.reserved_ceiling,
        })
    }

    /// Assign the next custom identity to `key`.
    ///
    /// # Errors
    /// - [`RegistryError::DuplicateKey`] if `key` is already mapped.
    /// - [`RegistryError::IdentitySpaceExhausted`] if the counter is spent.
    ///
    /// The counter only advances on success.
    pub fn allocate(&mut self, key: &EnemyKey) -> Result<EnemyIdentity> {
        if self.keys.contains_key(key) {
            return Err(RegistryError::DuplicateKey { key: key.clone() });
        }
        // Built-ins never reach this range, see `adopt`.
        let candidate = self.next.ok_or(RegistryError::IdentitySpaceExhausted)?;
        debug_assert!(!self.taken.contains(&candidate));

        self.keys.insert(key.clone(), candidate);
        self.taken.insert(candidate);
        self.next = candidate.successor();
        Ok(candidate)
    }

    /// Record a built-in enemy's pre-assigned identity verbatim.
    ///
    /// # Errors
    /// - [`RegistryError::DuplicateKey`] if `key` is already mapped.
    /// - [`RegistryError::IdentityOutOfRange`] if `identity` lies above the
    ///   reserved ceiling.
    /// - [`RegistryError::DuplicateIdentity`] if another key holds `identity`.
    pub fn adopt(&mut self, key: &EnemyKey, identity: EnemyIdentity) -> Result<()> {
        if self.keys.contains_key(key) {
            return Err(RegistryError::DuplicateKey { key: key.clone() });
        }
        if identity.get() > self.reserved_ceiling {
            return Err(RegistryError::IdentityOutOfRange {
                value: identity.get(),
                min: 0,
                max: self.reserved_ceiling,
            });
        }
        if self.taken.contains(&identity) {
            return Err(RegistryError::DuplicateIdentity {
                identity: identity.get(),
                key: key.clone(),
            });
        }

        self.keys.insert(key.clone(), identity);
        self.taken.insert(identity);
        Ok(())
    }

    /// Identity mapped to `key`, if any.
    #[must_use]
    pub fn identity_of(&self, key: &EnemyKey) -> Option<EnemyIdentity> {
        self.keys.get(key).copied()
    }

    /// Whether `key` is mapped.
    #[must_use]
    pub fn contains(&self, key: &EnemyKey) -> bool {
        self.keys.contains_key(key)
    }

    /// Identity the next successful [`allocate`](Self::allocate) would try first.
    #[must_use]
    pub fn peek_next(&self) -> Option<EnemyIdentity> {
        self.next
    }

    /// First custom identity.
    #[must_use]
    pub fn start(&self) -> EnemyIdentity {
        self.start
    }

    /// Highest identity a built-in may carry.
    #[must_use]
    pub fn reserved_ceiling(&self) -> u32 {
        self.reserved_ceiling
    }

    /// Number of mapped keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no key is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Forget every mapping and rewind the counter.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.taken.clear();
        self.next = Some(self.start);
    }
}
