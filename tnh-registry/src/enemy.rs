//! Enemy templates and their resolved definitions.
//!
//! An [`EnemyTemplate`] is what a content author writes: a string key, a
//! display name and behaviour data. The game consumes an [`EnemyDefinition`],
//! which is the same data stamped with a numeric [`EnemyIdentity`].

use serde::{Deserialize, Serialize};

use crate::types::{EnemyIdentity, EnemyKey};

/// Behaviour data for a hostile agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyBehavior {
    /// Hit points before the agent goes down.
    pub max_health: f32,
    /// Movement speed multiplier (1.0 = stock).
    pub speed_multiplier: f32,
    /// Object IDs the agent may spawn holding.
    pub weapon_options: Vec<String>,
    /// Free-form tags read by spawners (e.g. `"patrol"`, `"boss"`).
    pub tags: Vec<String>,
}

impl Default for EnemyBehavior {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            speed_multiplier: 1.0,
            weapon_options: Vec::new(),
            tags: Vec::new(),
        }
    }
}

/// Resolved enemy definition as consumed by spawners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyDefinition {
    /// Numeric identity.
    pub identity: EnemyIdentity,
    /// String key the identity is mapped from.
    pub key: EnemyKey,
    /// Display name.
    pub display_name: String,
    /// Behaviour data.
    pub behavior: EnemyBehavior,
}

impl EnemyDefinition {
    /// Build a definition for a built-in enemy with a pre-assigned identity.
    #[must_use]
    pub fn new(
        identity: EnemyIdentity,
        key: impl Into<EnemyKey>,
        display_name: impl Into<String>,
        behavior: EnemyBehavior,
    ) -> Self {
        Self {
            identity,
            key: key.into(),
            display_name: display_name.into(),
            behavior,
        }
    }
}

/// Authored enemy template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    /// Human-assigned key.
    pub key: EnemyKey,
    /// Display name.
    pub display_name: String,
    /// Behaviour data.
    #[serde(default)]
    pub behavior: EnemyBehavior,
}

impl EnemyTemplate {
    /// Create a template with stock behaviour.
    #[must_use]
    pub fn new(key: impl Into<EnemyKey>, display_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            behavior: EnemyBehavior::default(),
        }
    }

    /// Replace the behaviour data.
    #[must_use]
    pub fn with_behavior(mut self, behavior: EnemyBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Wrap a built-in definition so it can sit next to authored templates.
    #[must_use]
    pub fn from_definition(definition: &EnemyDefinition) -> Self {
        Self {
            key: definition.key.clone(),
            display_name: definition.display_name.clone(),
            behavior: definition.behavior.clone(),
        }
    }

    /// Resolve into a definition carrying `identity`.
    #[must_use]
    pub fn resolve(&self, identity: EnemyIdentity) -> EnemyDefinition {
        EnemyDefinition {
            identity,
            key: self.key.clone(),
            display_name: self.display_name.clone(),
            behavior: self.behavior.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_stamps_identity() {
        let template = EnemyTemplate::new("wasteland_raider", "Raider");
        let identity = EnemyIdentity::new(30_000).expect("valid");
        let def = template.resolve(identity);
        assert_eq!(def.identity, identity);
        assert_eq!(def.key, template.key);
        assert_eq!(def.display_name, "Raider");
    }

    #[test]
    fn from_definition_keeps_key_and_behavior() {
        let behavior = EnemyBehavior {
            max_health: 250.0,
            tags: vec!["boss".to_string()],
            ..EnemyBehavior::default()
        };
        let def = EnemyDefinition::new(EnemyIdentity::new(12).expect("valid"), "M_Swat_Heavy", "Heavy", behavior);
        let template = EnemyTemplate::from_definition(&def);
        assert_eq!(template.key.as_str(), "M_Swat_Heavy");
        assert_eq!(template.resolve(def.identity), def);
    }
}
