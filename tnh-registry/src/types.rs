//! Identity and handle types shared by every table in the registry.
//!
//! String keys are newtypes so an enemy key can never be passed where a
//! character content ID is expected. Numeric enemy identities are validated
//! on construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};

// ---------------------------------------------------------------------------
// String keys
// ---------------------------------------------------------------------------

/// Human-assigned string key of an enemy template (e.g. `"wasteland_raider"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnemyKey(String);

impl EnemyKey {
    /// Wrap a key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Globally unique content ID of a character.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UgcId(String);

impl UgcId {
    /// Wrap a content ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw content ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a playable level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelId(String);

impl LevelId {
    /// Wrap a level identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw level identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnemyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for UgcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EnemyKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for EnemyKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<String> for UgcId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UgcId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// ---------------------------------------------------------------------------
// Numeric enemy identity
// ---------------------------------------------------------------------------

/// Compact numeric identity of an enemy.
///
/// Built-in enemies arrive with a pre-assigned value, validated through
/// [`EnemyIdentity::new`]. Custom enemies only ever receive one from the
/// registry's allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct EnemyIdentity(u32);

impl EnemyIdentity {
    /// Largest representable identity. Identities are stored by the game as
    /// signed 32-bit integers.
    pub const MAX: u32 = i32::MAX as u32;

    /// Validate a pre-assigned identity.
    ///
    /// # Errors
    /// Returns [`RegistryError::IdentityOutOfRange`] above [`Self::MAX`].
    pub fn new(value: u32) -> Result<Self> {
        if value > Self::MAX {
            return Err(RegistryError::IdentityOutOfRange {
                value,
                min: 0,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// The numeric value.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// The identity following this one, if any.
    pub(crate) fn successor(self) -> Option<Self> {
        self.0.checked_add(1).filter(|&v| v <= Self::MAX).map(Self)
    }
}

impl TryFrom<u32> for EnemyIdentity {
    type Error = RegistryError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<EnemyIdentity> for u32 {
    fn from(identity: EnemyIdentity) -> Self {
        identity.0
    }
}

impl fmt::Display for EnemyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Handles
// ---------------------------------------------------------------------------

/// Opaque handle to an image owned by the asset system (thumbnails, icons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteHandle(pub u64);

/// Category attached to every diagnostic the registry emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    /// Character registration.
    Character,
    /// Enemy identity allocation and registration.
    Enemy,
    /// Equipment pool indexing.
    Pool,
    /// Vault record registration.
    Vault,
    /// Registry initialisation, reset and freeze.
    Lifecycle,
}

impl LogCategory {
    /// Lowercase label used in the `category` log field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Enemy => "enemy",
            Self::Pool => "pool",
            Self::Vault => "vault",
            Self::Lifecycle => "lifecycle",
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
