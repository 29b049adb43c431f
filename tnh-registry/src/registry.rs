//! The content registry.
//!
//! One [`Registry`] owns every table built while content loads at startup:
//!
//! - enemy key → numeric identity (via [`IdentityAllocator`]), and identity →
//!   definition/template
//! - character content ID → definition/template
//! - equipment pool key → pool
//! - vault file name → record, once per save format
//!
//! Registration is write-once: nothing is ever overwritten or removed short
//! of [`Registry::reset`]. Enemy registration is the only place a caller can
//! see an error; re-registering a character or a vault record is reported as
//! an outcome instead.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::character::{CharacterDefinition, CharacterTemplate, LoadedCharacter};
use crate::config::RegistryConfig;
use crate::enemy::{EnemyDefinition, EnemyTemplate};
use crate::error::{RegistryError, Result};
use crate::identity::IdentityAllocator;
use crate::pool::{EquipmentPool, PoolIndexOutcome, PoolKey, PoolTable};
use crate::types::{EnemyIdentity, EnemyKey, LevelId, LogCategory, SpriteHandle, UgcId};
use crate::vault::{LegacyVaultRecord, VaultOutcome, VaultRecord, VaultTable};

/// A registered enemy: the resolved definition next to its template.
#[derive(Debug, Clone)]
pub struct LoadedEnemy {
    /// Resolved definition carrying the numeric identity.
    pub definition: Arc<EnemyDefinition>,
    /// Authored template (or a wrapper around a built-in definition).
    pub template: Arc<EnemyTemplate>,
}

/// Outcome of a character registration call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterOutcome {
    /// The character was added.
    Registered {
        /// Content ID it was stored under.
        ugc_id: UgcId,
        /// Number of pools newly added to the pool index.
        pools_indexed: usize,
    },
    /// A character with this content ID was already registered; nothing changed.
    AlreadyRegistered(UgcId),
}

impl CharacterOutcome {
    /// Content ID the call resolved to.
    #[must_use]
    pub fn ugc_id(&self) -> &UgcId {
        match self {
            Self::Registered { ugc_id, .. } | Self::AlreadyRegistered(ugc_id) => ugc_id,
        }
    }

    /// Whether the call added a new character.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered { .. })
    }
}

/// Table sizes at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Keys in the enemy identity table.
    pub enemy_keys: usize,
    /// Custom enemies registered.
    pub custom_enemies: usize,
    /// Built-in enemies registered.
    pub default_enemies: usize,
    /// Characters registered (custom and built-in).
    pub characters: usize,
    /// Custom characters registered.
    pub custom_characters: usize,
    /// Built-in characters registered.
    pub default_characters: usize,
    /// Indexed equipment pools.
    pub equipment_pools: usize,
    /// Current-format vault records.
    pub vault_records: usize,
    /// Legacy-format vault records.
    pub legacy_vault_records: usize,
    /// Identity the next custom enemy would receive.
    pub next_custom_identity: Option<u32>,
}

/// Process-scoped content registry.
///
/// Build one at startup, hand `&mut` to every loader, then treat it as
/// read-only. For loaders running on several threads wrap it in a
/// [`crate::SharedRegistry`].
#[derive(Debug, Clone)]
pub struct Registry {
    config: RegistryConfig,
    identities: IdentityAllocator,
    enemies: HashMap<EnemyIdentity, LoadedEnemy>,
    custom_enemies: Vec<Arc<EnemyTemplate>>,
    default_enemies: Vec<Arc<EnemyDefinition>>,
    characters: HashMap<UgcId, LoadedCharacter>,
    custom_characters: Vec<Arc<CharacterTemplate>>,
    default_characters: Vec<Arc<CharacterTemplate>>,
    pools: PoolTable,
    vault: VaultTable<VaultRecord>,
    legacy_vault: VaultTable<LegacyVaultRecord>,
    default_icons: HashMap<String, SpriteHandle>,
    current_character: Option<UgcId>,
    current_level: Option<LevelId>,
}

impl Registry {
    /// Initialise an empty registry.
    ///
    /// # Errors
    /// Returns `RegistryError::Config` if `config` fails validation.
    pub fn new(config: RegistryConfig) -> Result<Self> {
        config.validate()?;
        let identities = IdentityAllocator::new(&config.enemies)?;
        info!(
            category = %LogCategory::Lifecycle,
            custom_id_start = config.enemies.custom_id_start,
            table_prefix = %config.characters.custom_table_prefix,
            "Content registry initialised"
        );
        Ok(Self {
            config,
            identities,
            enemies: HashMap::new(),
            custom_enemies: Vec::new(),
            default_enemies: Vec::new(),
            characters: HashMap::new(),
            custom_characters: Vec::new(),
            default_characters: Vec::new(),
            pools: PoolTable::new(),
            vault: VaultTable::new(),
            legacy_vault: VaultTable::new(),
            default_icons: HashMap::new(),
            current_character: None,
            current_level: None,
        })
    }

    /// Drop every registration and selection and rewind the identity counter.
    /// The configuration is kept.
    pub fn reset(&mut self) {
        self.identities.clear();
        self.enemies.clear();
        self.custom_enemies.clear();
        self.default_enemies.clear();
        self.characters.clear();
        self.custom_characters.clear();
        self.default_characters.clear();
        self.pools.clear();
        self.vault.clear();
        self.legacy_vault.clear();
        self.default_icons.clear();
        self.current_character = None;
        self.current_level = None;
        info!(category = %LogCategory::Lifecycle, "Content registry reset");
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Enemies
    // -----------------------------------------------------------------------

    /// Register a custom enemy, assigning it a fresh identity.
    ///
    /// # Errors
    /// - [`RegistryError::DuplicateKey`] if the key is already registered.
    /// - [`RegistryError::IdentitySpaceExhausted`] if no identity is left.
    ///
    /// On error nothing is registered and the counter does not move.
    pub fn register_custom_enemy(&mut self, template: EnemyTemplate) -> Result<EnemyIdentity> {
        let identity = match self.identities.allocate(&template.key) {
            Ok(identity) => identity,
            Err(e) => {
                error!(
                    category = %LogCategory::Enemy,
                    key = %template.key,
                    error = %e,
                    "Enemy registration rejected"
                );
                return Err(e);
            }
        };

        let definition = Arc::new(template.resolve(identity));
        let template = Arc::new(template);
        self.custom_enemies.push(Arc::clone(&template));
        self.enemies.insert(
            identity,
            LoadedEnemy {
                definition,
                template: Arc::clone(&template),
            },
        );

        info!(
            category = %LogCategory::Enemy,
            key = %template.key,
            identity = identity.get(),
            name = %template.display_name,
            "Enemy added successfully"
        );
        Ok(identity)
    }

    /// Register a built-in enemy under its pre-assigned identity.
    ///
    /// # Errors
    /// - [`RegistryError::DuplicateKey`] if the key is already registered.
    /// - [`RegistryError::IdentityOutOfRange`] if the identity lies in the
    ///   custom range.
    /// - [`RegistryError::DuplicateIdentity`] if another key holds the identity.
    ///
    /// On error nothing is registered.
    pub fn register_default_enemy(&mut self, definition: EnemyDefinition) -> Result<EnemyIdentity> {
        let template = EnemyTemplate::from_definition(&definition);
        let identity = definition.identity;

        if let Err(e) = self.identities.adopt(&template.key, identity) {
            error!(
                category = %LogCategory::Enemy,
                key = %template.key,
                identity = identity.get(),
                error = %e,
                "Enemy registration rejected"
            );
            return Err(e);
        }

        info!(
            category = %LogCategory::Enemy,
            key = %template.key,
            identity = identity.get(),
            name = %template.display_name,
            "Enemy added successfully"
        );

        let definition = Arc::new(definition);
        self.default_enemies.push(Arc::clone(&definition));
        self.enemies.insert(
            identity,
            LoadedEnemy {
                definition,
                template: Arc::new(template),
            },
        );
        Ok(identity)
    }

    /// Enemy registered under `identity`.
    #[must_use]
    pub fn enemy(&self, identity: EnemyIdentity) -> Option<&LoadedEnemy> {
        self.enemies.get(&identity)
    }

    /// Identity mapped to `key`.
    #[must_use]
    pub fn enemy_identity(&self, key: &EnemyKey) -> Option<EnemyIdentity> {
        self.identities.identity_of(key)
    }

    /// Enemy registered under `key`.
    #[must_use]
    pub fn enemy_by_key(&self, key: &EnemyKey) -> Option<&LoadedEnemy> {
        self.enemy_identity(key).and_then(|identity| self.enemy(identity))
    }

    /// Custom enemy templates in registration order.
    #[must_use]
    pub fn custom_enemies(&self) -> &[Arc<EnemyTemplate>] {
        &self.custom_enemies
    }

    /// Built-in enemy definitions in registration order.
    #[must_use]
    pub fn default_enemies(&self) -> &[Arc<EnemyDefinition>] {
        &self.default_enemies
    }

    /// The enemy identity allocator.
    #[must_use]
    pub fn identities(&self) -> &IdentityAllocator {
        &self.identities
    }

    // -----------------------------------------------------------------------
    // Characters
    // -----------------------------------------------------------------------

    /// Register a custom character.
    ///
    /// The table ID is moved under the configured custom prefix before the
    /// template is resolved. A content ID that is already registered makes
    /// this a no-op.
    pub fn register_custom_character(
        &mut self,
        mut template: CharacterTemplate,
        thumbnail: SpriteHandle,
    ) -> CharacterOutcome {
        template.mark_custom(&self.config.characters.custom_table_prefix);
        let definition = template.resolve(Some(thumbnail));
        let ugc_id = definition.ugc_id.clone();

        if self.characters.contains_key(&ugc_id) {
            info!(
                category = %LogCategory::Character,
                ugc_id = %ugc_id,
                table_id = %template.table_id,
                name = %template.display_name,
                "Character already exists"
            );
            return CharacterOutcome::AlreadyRegistered(ugc_id);
        }

        let template = Arc::new(template);
        self.custom_characters.push(Arc::clone(&template));
        let pools_indexed = self.index_pools(&ugc_id, &template.equipment_pools, false);
        self.characters.insert(
            ugc_id.clone(),
            LoadedCharacter {
                definition: Arc::new(definition),
                template: Arc::clone(&template),
            },
        );

        info!(
            category = %LogCategory::Character,
            ugc_id = %ugc_id,
            table_id = %template.table_id,
            name = %template.display_name,
            pools = pools_indexed,
            "Character added successfully"
        );
        CharacterOutcome::Registered {
            ugc_id,
            pools_indexed,
        }
    }

    /// Register a built-in character.
    ///
    /// Built-in characters may point at the same catalogue pools; a pool key
    /// that is already indexed is left as is.
    pub fn register_default_character(&mut self, definition: CharacterDefinition) -> CharacterOutcome {
        let ugc_id = definition.ugc_id.clone();

        if self.characters.contains_key(&ugc_id) {
            info!(
                category = %LogCategory::Character,
                ugc_id = %ugc_id,
                table_id = %definition.table_id,
                name = %definition.display_name,
                "Character already exists"
            );
            return CharacterOutcome::AlreadyRegistered(ugc_id);
        }

        let template = Arc::new(CharacterTemplate::from_definition(&definition));
        self.default_characters.push(Arc::clone(&template));
        let pools_indexed = self.index_pools(&ugc_id, &template.equipment_pools, true);

        info!(
            category = %LogCategory::Character,
            ugc_id = %ugc_id,
            table_id = %definition.table_id,
            name = %definition.display_name,
            pools = pools_indexed,
            "Character added successfully"
        );
        self.characters.insert(
            ugc_id.clone(),
            LoadedCharacter {
                definition: Arc::new(definition),
                template,
            },
        );
        CharacterOutcome::Registered {
            ugc_id,
            pools_indexed,
        }
    }

    /// Index `pools` under keys derived from `ugc_id`. With `follow_shared`,
    /// catalogue pools go under their canonical key instead; only built-in
    /// characters do that. Taken keys keep their first pool. Returns how many
    /// keys were newly filled.
    fn index_pools(&mut self, ugc_id: &UgcId, pools: &[Arc<EquipmentPool>], follow_shared: bool) -> usize {
        let category = self.config.characters.pool_category.as_str();
        let mut indexed = 0;
        for (index, pool) in pools.iter().enumerate() {
            let key = if follow_shared {
                pool.pool_key(ugc_id, index, category)
            } else {
                PoolKey::new(ugc_id.clone(), index, category)
            };
            if self.pools.insert(key, Arc::clone(pool)) == PoolIndexOutcome::Inserted {
                indexed += 1;
            }
        }
        indexed
    }

    /// Character registered under `ugc_id`.
    #[must_use]
    pub fn character(&self, ugc_id: &UgcId) -> Option<&LoadedCharacter> {
        self.characters.get(ugc_id)
    }

    /// Custom character templates in registration order.
    #[must_use]
    pub fn custom_characters(&self) -> &[Arc<CharacterTemplate>] {
        &self.custom_characters
    }

    /// Built-in character wrappers in registration order.
    #[must_use]
    pub fn default_characters(&self) -> &[Arc<CharacterTemplate>] {
        &self.default_characters
    }

    /// Pool indexed under `key`.
    #[must_use]
    pub fn equipment_pool(&self, key: &PoolKey) -> Option<&Arc<EquipmentPool>> {
        self.pools.get(key)
    }

    /// The equipment pool index.
    #[must_use]
    pub fn equipment_pools(&self) -> &PoolTable {
        &self.pools
    }

    // -----------------------------------------------------------------------
    // Vault records
    // -----------------------------------------------------------------------

    /// Register a current-format vault record. A file name that is already
    /// present keeps its first record.
    pub fn register_vault_record(&mut self, record: VaultRecord) -> VaultOutcome {
        let file_name = record.file_name.clone();
        let outcome = self.vault.register(record);
        if outcome == VaultOutcome::Inserted {
            debug!(category = %LogCategory::Vault, file = %file_name, "Vault record added");
        }
        outcome
    }

    /// Register a legacy-format vault record. Only checked against other
    /// legacy records.
    pub fn register_legacy_vault_record(&mut self, record: LegacyVaultRecord) -> VaultOutcome {
        let file_name = record.file_name.clone();
        let outcome = self.legacy_vault.register(record);
        if outcome == VaultOutcome::Inserted {
            debug!(category = %LogCategory::Vault, file = %file_name, legacy = true, "Vault record added");
        }
        outcome
    }

    /// Current-format record stored under `file_name`.
    #[must_use]
    pub fn vault_record(&self, file_name: &str) -> Option<&Arc<VaultRecord>> {
        self.vault.get(file_name)
    }

    /// Legacy-format record stored under `file_name`.
    #[must_use]
    pub fn legacy_vault_record(&self, file_name: &str) -> Option<&Arc<LegacyVaultRecord>> {
        self.legacy_vault.get(file_name)
    }

    /// Current-format vault table.
    #[must_use]
    pub fn vault(&self) -> &VaultTable<VaultRecord> {
        &self.vault
    }

    /// Legacy-format vault table.
    #[must_use]
    pub fn legacy_vault(&self) -> &VaultTable<LegacyVaultRecord> {
        &self.legacy_vault
    }

    // -----------------------------------------------------------------------
    // Icons and selection
    // -----------------------------------------------------------------------

    /// Register a built-in icon sprite by name. Returns `false` and keeps the
    /// existing sprite if the name is taken.
    pub fn register_default_icon(&mut self, name: impl Into<String>, sprite: SpriteHandle) -> bool {
        match self.default_icons.entry(name.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(sprite);
                true
            }
        }
    }

    /// Built-in icon sprite registered under `name`.
    #[must_use]
    pub fn default_icon(&self, name: &str) -> Option<SpriteHandle> {
        self.default_icons.get(name).copied()
    }

    /// Make a registered character the current selection.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownCharacter`] if `ugc_id` is not registered.
    pub fn select_character(&mut self, ugc_id: &UgcId) -> Result<()> {
        if !self.characters.contains_key(ugc_id) {
            return Err(RegistryError::UnknownCharacter(ugc_id.clone()));
        }
        self.current_character = Some(ugc_id.clone());
        debug!(category = %LogCategory::Character, ugc_id = %ugc_id, "Character selected");
        Ok(())
    }

    /// Currently selected character.
    #[must_use]
    pub fn current_character(&self) -> Option<&LoadedCharacter> {
        self.current_character
            .as_ref()
            .and_then(|ugc_id| self.characters.get(ugc_id))
    }

    /// Make `level` the current selection.
    pub fn select_level(&mut self, level: LevelId) {
        debug!(category = %LogCategory::Lifecycle, level = %level, "Level selected");
        self.current_level = Some(level);
    }

    /// Currently selected level.
    #[must_use]
    pub fn current_level(&self) -> Option<&LevelId> {
        self.current_level.as_ref()
    }

    /// Snapshot of table sizes.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            enemy_keys: self.identities.len(),
            custom_enemies: self.custom_enemies.len(),
            default_enemies: self.default_enemies.len(),
            characters: self.characters.len(),
            custom_characters: self.custom_characters.len(),
            default_characters: self.default_characters.len(),
            equipment_pools: self.pools.len(),
            vault_records: self.vault.len(),
            legacy_vault_records: self.legacy_vault.len(),
            next_custom_identity: self.identities.peek_next().map(EnemyIdentity::get),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::EnemyBehavior;
    use crate::pool::{DEFAULT_POOL_CATEGORY, PoolType};

    fn registry() -> Registry {
        Registry::new(RegistryConfig::default()).expect("default config")
    }

    fn id(value: u32) -> EnemyIdentity {
        EnemyIdentity::new(value).expect("valid identity")
    }

    fn builtin_enemy(value: u32, key: &str) -> EnemyDefinition {
        EnemyDefinition::new(id(value), key, key, EnemyBehavior::default())
    }

    fn pool(name: &str) -> Arc<EquipmentPool> {
        Arc::new(EquipmentPool::new(name, PoolType::Firearm, 1).with_option("M1911"))
    }

    // --- enemies ---------------------------------------------------------

    #[test]
    fn custom_enemy_gets_fresh_identity() {
        let mut reg = registry();
        let identity = reg
            .register_custom_enemy(EnemyTemplate::new("wasteland_raider", "Raider"))
            .expect("register");
        assert_eq!(identity.get(), 30_000);

        let loaded = reg.enemy(identity).expect("lookup");
        assert_eq!(loaded.definition.identity, identity);
        assert_eq!(loaded.template.key.as_str(), "wasteland_raider");
        assert_eq!(reg.custom_enemies().len(), 1);
    }

    #[test]
    fn duplicate_custom_enemy_is_rejected_atomically() {
        let mut reg = registry();
        reg.register_custom_enemy(EnemyTemplate::new("raider", "Raider"))
            .expect("first");
        let before = reg.stats();

        let err = reg
            .register_custom_enemy(EnemyTemplate::new("raider", "Other Raider"))
            .expect_err("should fail");
        assert!(matches!(err, RegistryError::DuplicateKey { .. }));
        assert_eq!(reg.stats(), before);
        assert_eq!(
            reg.enemy_by_key(&"raider".into()).expect("kept").template.display_name,
            "Raider"
        );
    }

    #[test]
    fn default_enemy_keeps_identity() {
        let mut reg = registry();
        let def = builtin_enemy(12, "M_Swat_Scout");
        let identity = reg.register_default_enemy(def.clone()).expect("register");
        assert_eq!(identity.get(), 12);
        assert_eq!(*reg.enemy(identity).expect("lookup").definition, def);
        assert_eq!(reg.stats().next_custom_identity, Some(30_000));
        assert_eq!(reg.default_enemies().len(), 1);
    }

    #[test]
    fn default_and_custom_share_key_space() {
        let mut reg = registry();
        reg.register_default_enemy(builtin_enemy(3, "grunt")).expect("default");
        let err = reg
            .register_custom_enemy(EnemyTemplate::new("grunt", "Grunt"))
            .expect_err("should fail");
        assert!(matches!(err, RegistryError::DuplicateKey { .. }));
        assert!(reg.custom_enemies().is_empty());
        assert_eq!(reg.stats().next_custom_identity, Some(30_000));
    }

    #[test]
    fn default_enemy_in_custom_range_is_rejected() {
        let mut reg = registry();
        let err = reg
            .register_default_enemy(builtin_enemy(30_000, "impostor"))
            .expect_err("should fail");
        assert!(matches!(err, RegistryError::IdentityOutOfRange { .. }));
        assert!(reg.enemy(id(30_000)).is_none());
        assert!(reg.default_enemies().is_empty());
    }

    // --- characters ------------------------------------------------------

    #[test]
    fn custom_character_is_namespaced_and_indexed() {
        let mut reg = registry();
        let template = CharacterTemplate::new("Ranger", "Ranger")
            .with_pool(pool("Sidearms"))
            .with_pool(pool("Rifles"));

        let outcome = reg.register_custom_character(template, SpriteHandle(1));
        assert_eq!(
            outcome,
            CharacterOutcome::Registered {
                ugc_id: "TNHF_Ranger".into(),
                pools_indexed: 2,
            }
        );

        let loaded = reg.character(&"TNHF_Ranger".into()).expect("lookup");
        assert!(loaded.template.is_custom);
        assert_eq!(loaded.definition.thumbnail, Some(SpriteHandle(1)));

        let key = PoolKey::new("TNHF_Ranger".into(), 1, DEFAULT_POOL_CATEGORY);
        assert_eq!(reg.equipment_pool(&key).expect("pool").name, "Rifles");
    }

    #[test]
    fn custom_and_default_with_same_base_name_coexist() {
        let mut reg = registry();
        reg.register_default_character(CharacterDefinition::new("Ranger", "Ranger", "Ranger"));
        let outcome = reg.register_custom_character(CharacterTemplate::new("Ranger", "Ranger"), SpriteHandle(2));
        assert!(outcome.is_registered());
        assert_eq!(reg.stats().characters, 2);
    }

    #[test]
    fn custom_character_registration_is_idempotent() {
        let mut reg = registry();
        let template = CharacterTemplate::new("Ranger", "Ranger").with_pool(pool("Sidearms"));

        assert!(reg.register_custom_character(template.clone(), SpriteHandle(1)).is_registered());
        let pools_before = reg.equipment_pools().len();

        let outcome = reg.register_custom_character(template, SpriteHandle(9));
        assert_eq!(outcome, CharacterOutcome::AlreadyRegistered("TNHF_Ranger".into()));
        assert_eq!(reg.equipment_pools().len(), pools_before);
        assert_eq!(reg.custom_characters().len(), 1);
        assert_eq!(
            reg.character(&"TNHF_Ranger".into()).expect("kept").definition.thumbnail,
            Some(SpriteHandle(1))
        );
    }

    #[test]
    fn default_characters_share_pools_first_wins() {
        let mut reg = registry();
        let canonical = PoolKey::new("catalogue".into(), 0, DEFAULT_POOL_CATEGORY);
        let shared = Arc::new(
            EquipmentPool::new("Shared Rifles", PoolType::Firearm, 2).shared_as(canonical.clone()),
        );

        let first = reg.register_default_character(
            CharacterDefinition::new("classic", "Classic", "Classic").with_pool(Arc::clone(&shared)),
        );
        let second = reg.register_default_character(
            CharacterDefinition::new("ricochet", "Ricochet", "Ricochet").with_pool(Arc::clone(&shared)),
        );

        assert_eq!(
            first,
            CharacterOutcome::Registered {
                ugc_id: "classic".into(),
                pools_indexed: 1
            }
        );
        assert_eq!(
            second,
            CharacterOutcome::Registered {
                ugc_id: "ricochet".into(),
                pools_indexed: 0
            }
        );
        assert_eq!(reg.equipment_pools().len(), 1);
        assert!(Arc::ptr_eq(reg.equipment_pool(&canonical).expect("pool"), &shared));
    }

    #[test]
    fn custom_character_indexes_catalogue_pool_under_own_key() {
        let mut reg = registry();
        let canonical = PoolKey::new("catalogue".into(), 0, DEFAULT_POOL_CATEGORY);
        let shared = Arc::new(
            EquipmentPool::new("Shared Rifles", PoolType::Firearm, 2).shared_as(canonical.clone()),
        );
        reg.register_default_character(
            CharacterDefinition::new("classic", "Classic", "Classic").with_pool(Arc::clone(&shared)),
        );

        let outcome = reg.register_custom_character(
            CharacterTemplate::new("Ranger", "Ranger").with_pool(Arc::clone(&shared)),
            SpriteHandle(3),
        );
        assert_eq!(
            outcome,
            CharacterOutcome::Registered {
                ugc_id: "TNHF_Ranger".into(),
                pools_indexed: 1
            }
        );
        let own = PoolKey::new("TNHF_Ranger".into(), 0, DEFAULT_POOL_CATEGORY);
        assert!(Arc::ptr_eq(reg.equipment_pool(&own).expect("own key"), &shared));
        assert!(Arc::ptr_eq(reg.equipment_pool(&canonical).expect("canonical"), &shared));
        assert_eq!(reg.equipment_pools().len(), 2);
    }

    #[test]
    fn duplicate_default_character_is_noop() {
        let mut reg = registry();
        reg.register_default_character(CharacterDefinition::new("classic", "Classic", "Classic"));
        let outcome = reg.register_default_character(CharacterDefinition::new("classic", "Other", "Other"));
        assert_eq!(outcome, CharacterOutcome::AlreadyRegistered("classic".into()));
        assert_eq!(reg.default_characters().len(), 1);
        assert_eq!(
            reg.character(&"classic".into()).expect("kept").definition.display_name,
            "Classic"
        );
    }

    // --- vault -----------------------------------------------------------

    #[test]
    fn vault_formats_are_disjoint() {
        let mut reg = registry();
        assert_eq!(
            reg.register_legacy_vault_record(LegacyVaultRecord::new("save1", "M1911")),
            VaultOutcome::Inserted
        );
        assert_eq!(
            reg.register_vault_record(VaultRecord::new("save1")),
            VaultOutcome::Inserted
        );
        assert_eq!(
            reg.register_vault_record(VaultRecord::new("save1").with_object("AK47")),
            VaultOutcome::Skipped
        );
        assert!(reg.vault_record("save1").expect("current").objects.is_empty());
        assert_eq!(reg.legacy_vault_record("save1").expect("legacy").object_id, "M1911");
    }

    // --- icons, selection, lifecycle --------------------------------------

    #[test]
    fn default_icons_are_first_wins() {
        let mut reg = registry();
        assert!(reg.register_default_icon("pistol", SpriteHandle(10)));
        assert!(!reg.register_default_icon("pistol", SpriteHandle(11)));
        assert_eq!(reg.default_icon("pistol"), Some(SpriteHandle(10)));
        assert_eq!(reg.default_icon("rifle"), None);
    }

    #[test]
    fn selecting_unknown_character_fails() {
        let mut reg = registry();
        let err = reg.select_character(&"ghost".into()).expect_err("should fail");
        assert!(matches!(err, RegistryError::UnknownCharacter(_)));
        assert!(reg.current_character().is_none());

        reg.register_default_character(CharacterDefinition::new("classic", "Classic", "Classic"));
        reg.select_character(&"classic".into()).expect("select");
        assert_eq!(
            reg.current_character().expect("selected").definition.ugc_id.as_str(),
            "classic"
        );
    }

    #[test]
    fn reset_clears_everything_and_rewinds_counter() {
        let mut reg = registry();
        reg.register_custom_enemy(EnemyTemplate::new("raider", "Raider"))
            .expect("raider");
        reg.register_default_character(
            CharacterDefinition::new("classic", "Classic", "Classic").with_pool(pool("Rifles")),
        );
        reg.register_vault_record(VaultRecord::new("save1"));
        reg.register_default_icon("pistol", SpriteHandle(1));
        reg.select_character(&"classic".into()).expect("select");
        reg.select_level(LevelId::new("institution"));

        reg.reset();

        assert_eq!(
            reg.stats(),
            RegistryStats {
                next_custom_identity: Some(30_000),
                ..RegistryStats::default()
            }
        );
        assert!(reg.current_character().is_none());
        assert!(reg.current_level().is_none());
        assert!(reg.default_icon("pistol").is_none());
        assert_eq!(
            reg.register_custom_enemy(EnemyTemplate::new("raider", "Raider"))
                .expect("again")
                .get(),
            30_000
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = RegistryConfig::default();
        config.characters.custom_table_prefix.clear();
        assert!(matches!(Registry::new(config), Err(RegistryError::Config(_))));
    }
}
