//! Thread-safe registry handle for loaders running in parallel.
//!
//! Every registration takes the write lock for the whole call, so an identity
//! allocation and its table insertions land together or not at all. Once all
//! loaders are done, [`SharedRegistry::freeze`] hands back a plain
//! `Arc<Registry>` for the read-only phase.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};
use tracing::info;

use crate::character::{CharacterDefinition, CharacterTemplate};
use crate::enemy::{EnemyDefinition, EnemyTemplate};
use crate::error::Result;
use crate::registry::{CharacterOutcome, Registry};
use crate::types::{EnemyIdentity, LogCategory, SpriteHandle};
use crate::vault::{LegacyVaultRecord, VaultOutcome, VaultRecord};

/// Cloneable handle to a registry under a `parking_lot::RwLock`.
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl SharedRegistry {
    /// Wrap `registry` for the load phase.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// See [`Registry::register_custom_enemy`].
    ///
    /// # Errors
    /// Same as [`Registry::register_custom_enemy`].
    pub fn register_custom_enemy(&self, template: EnemyTemplate) -> Result<EnemyIdentity> {
        self.inner.write().register_custom_enemy(template)
    }

    /// See [`Registry::register_default_enemy`].
    ///
    /// # Errors
    /// Same as [`Registry::register_default_enemy`].
    pub fn register_default_enemy(&self, definition: EnemyDefinition) -> Result<EnemyIdentity> {
        self.inner.write().register_default_enemy(definition)
    }

    /// See [`Registry::register_custom_character`].
    pub fn register_custom_character(&self, template: CharacterTemplate, thumbnail: SpriteHandle) -> CharacterOutcome {
        self.inner.write().register_custom_character(template, thumbnail)
    }

    /// See [`Registry::register_default_character`].
    pub fn register_default_character(&self, definition: CharacterDefinition) -> CharacterOutcome {
        self.inner.write().register_default_character(definition)
    }

    /// See [`Registry::register_vault_record`].
    pub fn register_vault_record(&self, record: VaultRecord) -> VaultOutcome {
        self.inner.write().register_vault_record(record)
    }

    /// See [`Registry::register_legacy_vault_record`].
    pub fn register_legacy_vault_record(&self, record: LegacyVaultRecord) -> VaultOutcome {
        self.inner.write().register_legacy_vault_record(record)
    }

    /// Run several registrations under one write lock.
    pub fn with_registry<T>(&self, f: impl FnOnce(&mut Registry) -> T) -> T {
        f(&mut *self.inner.write())
    }

    /// Read access during the load phase.
    pub fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.inner.read()
    }

    /// End the load phase.
    ///
    /// # Errors
    /// Returns the handle back if other clones are still alive.
    pub fn freeze(self) -> std::result::Result<Arc<Registry>, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => {
                let registry = lock.into_inner();
                info!(
                    category = %LogCategory::Lifecycle,
                    characters = registry.stats().characters,
                    enemies = registry.stats().enemy_keys,
                    "Content registry frozen"
                );
                Ok(Arc::new(registry))
            }
            Err(inner) => Err(Self { inner }),
        }
    }
}
