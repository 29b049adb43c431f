//! Configuration for the content registry.
//!
//! Maps directly to `tnh_registry.toml`. Every field has a default, so an
//! empty file yields the stock layout (custom enemies from `30000`, custom
//! table IDs prefixed with `TNHF_`).

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};
use crate::types::EnemyIdentity;

/// Top-level registry configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Enemy identity allocation.
    #[serde(default)]
    pub enemies: EnemyConfig,
    /// Character namespacing and pool indexing.
    #[serde(default)]
    pub characters: CharacterConfig,
}

impl RegistryConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `RegistryError::Config` if the TOML is invalid or the values
    /// are inconsistent.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| RegistryError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    /// Returns `RegistryError::Config` when the custom range overlaps the
    /// reserved built-in range or the prefix is empty.
    pub fn validate(&self) -> Result<()> {
        let enemies = &self.enemies;
        if enemies.custom_id_start <= enemies.reserved_ceiling {
            return Err(RegistryError::Config(format!(
                "enemies.custom_id_start ({}) must be above enemies.reserved_ceiling ({})",
                enemies.custom_id_start, enemies.reserved_ceiling
            )));
        }
        if enemies.custom_id_start > EnemyIdentity::MAX {
            return Err(RegistryError::Config(format!(
                "enemies.custom_id_start ({}) exceeds the identity limit ({})",
                enemies.custom_id_start,
                EnemyIdentity::MAX
            )));
        }
        if self.characters.custom_table_prefix.is_empty() {
            return Err(RegistryError::Config(
                "characters.custom_table_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level for hosts that install a subscriber: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Enemy identity ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyConfig {
    /// First identity handed to a custom enemy.
    #[serde(default = "default_custom_id_start")]
    pub custom_id_start: u32,
    /// Highest identity a built-in enemy may carry.
    #[serde(default = "default_reserved_ceiling")]
    pub reserved_ceiling: u32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            custom_id_start: default_custom_id_start(),
            reserved_ceiling: default_reserved_ceiling(),
        }
    }
}

/// Character namespacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterConfig {
    /// Prefix prepended to the table ID of every custom character.
    #[serde(default = "default_table_prefix")]
    pub custom_table_prefix: String,
    /// Category label used when deriving equipment pool keys.
    #[serde(default = "default_pool_category")]
    pub pool_category: String,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            custom_table_prefix: default_table_prefix(),
            pool_category: default_pool_category(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (for serde)
// ---------------------------------------------------------------------------

fn default_log_level() -> String {
    "info".to_string()
}
fn default_custom_id_start() -> u32 {
    30_000
}
fn default_reserved_ceiling() -> u32 {
    29_999
}
fn default_table_prefix() -> String {
    "TNHF_".to_string()
}
fn default_pool_category() -> String {
    crate::pool::DEFAULT_POOL_CATEGORY.to_string()
}
