//! # TNH Content Registry
//!
//! Startup registry that merges built-in and user-supplied Take and Hold
//! content into one namespace:
//!
//! - **Enemies** — string keys mapped to numeric identities. Built-ins keep
//!   their identity; custom enemies draw fresh ones from above the reserved
//!   range.
//! - **Characters** — keyed by content ID. Custom table IDs are namespaced so
//!   they cannot clash with built-ins. Equipment pools are indexed per
//!   character and may be shared between built-ins.
//! - **Vault records** — saved loadouts keyed by file name, current and
//!   legacy formats kept apart.
//!
//! Loaders receive the [`Registry`] explicitly; there is no global instance.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod character;
pub mod config;
pub mod enemy;
pub mod error;
pub mod identity;
pub mod pool;
pub mod registry;
pub mod shared;
pub mod types;
pub mod vault;

pub use config::RegistryConfig;
pub use error::RegistryError;
pub use registry::{CharacterOutcome, LoadedEnemy, Registry, RegistryStats};
pub use shared::SharedRegistry;
pub use types::*;
pub use vault::VaultOutcome;
