//! Character templates and resolved character definitions.
//!
//! A [`CharacterTemplate`] is the authored form (custom content, or a
//! wrapper around a built-in character). Resolving it yields a
//! [`CharacterDefinition`] whose [`UgcId`] keys the registry's character
//! table. The content ID is derived from the table ID, so resolving the same
//! content twice yields the same ID.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::pool::EquipmentPool;
use crate::types::{SpriteHandle, UgcId};

/// Resolved character as read by the character picker and the spawner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDefinition {
    /// Globally unique content ID.
    pub ugc_id: UgcId,
    /// Table identifier (namespaced for custom characters).
    pub table_id: String,
    /// Display name.
    pub display_name: String,
    /// Description shown in the picker.
    pub description: String,
    /// Picker thumbnail.
    #[serde(default)]
    pub thumbnail: Option<SpriteHandle>,
    /// Equipment pools, possibly shared with other characters.
    #[serde(default)]
    pub equipment_pools: Vec<Arc<EquipmentPool>>,
}

impl CharacterDefinition {
    /// Build a built-in character definition.
    #[must_use]
    pub fn new(
        ugc_id: impl Into<UgcId>,
        table_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            ugc_id: ugc_id.into(),
            table_id: table_id.into(),
            display_name: display_name.into(),
            description: String::new(),
            thumbnail: None,
            equipment_pools: Vec::new(),
        }
    }

    /// Attach an equipment pool.
    #[must_use]
    pub fn with_pool(mut self, pool: Arc<EquipmentPool>) -> Self {
        self.equipment_pools.push(pool);
        self
    }
}

/// Authored character template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterTemplate {
    /// Table identifier as written by the author.
    pub table_id: String,
    /// Display name.
    pub display_name: String,
    /// Description shown in the picker.
    #[serde(default)]
    pub description: String,
    /// Set when the template came from user content.
    #[serde(default)]
    pub is_custom: bool,
    /// Equipment pools owned by (or shared with) this character.
    #[serde(default)]
    pub equipment_pools: Vec<Arc<EquipmentPool>>,
}

impl CharacterTemplate {
    /// Create a template with no pools.
    #[must_use]
    pub fn new(table_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
            display_name: display_name.into(),
            description: String::new(),
            is_custom: false,
            equipment_pools: Vec::new(),
        }
    }

    /// Set the picker description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach an equipment pool.
    #[must_use]
    pub fn with_pool(mut self, pool: Arc<EquipmentPool>) -> Self {
        self.equipment_pools.push(pool);
        self
    }

    /// Flag as user content and move the table ID under `prefix`.
    pub fn mark_custom(&mut self, prefix: &str) {
        self.is_custom = true;
        self.table_id = format!("{prefix}{}", self.table_id);
    }

    /// Wrap a built-in definition.
    #[must_use]
    pub fn from_definition(definition: &CharacterDefinition) -> Self {
        Self {
            table_id: definition.table_id.clone(),
            display_name: definition.display_name.clone(),
            description: definition.description.clone(),
            is_custom: false,
            equipment_pools: definition.equipment_pools.clone(),
        }
    }

    /// Resolve into a definition using `thumbnail` for the picker.
    #[must_use]
    pub fn resolve(&self, thumbnail: Option<SpriteHandle>) -> CharacterDefinition {
        CharacterDefinition {
            ugc_id: UgcId::new(self.table_id.clone()),
            table_id: self.table_id.clone(),
            display_name: self.display_name.clone(),
            description: self.description.clone(),
            thumbnail,
            equipment_pools: self.equipment_pools.clone(),
        }
    }
}

/// A registered character: the resolved definition next to its template.
#[derive(Debug, Clone)]
pub struct LoadedCharacter {
    /// Resolved definition.
    pub definition: Arc<CharacterDefinition>,
    /// Originating template.
    pub template: Arc<CharacterTemplate>,
}
