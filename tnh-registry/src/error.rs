//! Error types for the content registry.

use thiserror::Error;

use crate::types::{EnemyKey, UgcId};

/// Top-level error type for all registry operations.
///
/// Re-registering a character or a vault record is not an error; those
/// calls report their outcome instead (see [`crate::CharacterOutcome`] and
/// [`crate::VaultOutcome`]).
#[derive(Error, Debug)]
pub enum RegistryError {
    /// An enemy with this key is already present in the identity table.
    #[error("Duplicate enemy key: {key}")]
    DuplicateKey {
        /// The rejected key.
        key: EnemyKey,
    },

    /// A numeric enemy identity fell outside its valid range.
    #[error("Enemy identity {value} out of range ({min}..={max})")]
    IdentityOutOfRange {
        /// The offending value.
        value: u32,
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
    },

    /// Another enemy already holds this numeric identity.
    #[error("Duplicate enemy identity {identity} (requested by {key})")]
    DuplicateIdentity {
        /// The identity that is already taken.
        identity: u32,
        /// The key whose registration was rejected.
        key: EnemyKey,
    },

    /// The custom identity counter cannot allocate another identity.
    #[error("Custom enemy identity space exhausted")]
    IdentitySpaceExhausted,

    /// No character with this content ID is registered.
    #[error("Unknown character: {0}")]
    UnknownCharacter(UgcId),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, RegistryError>;
