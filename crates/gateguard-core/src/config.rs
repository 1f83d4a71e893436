//! Configuration loading for the gate passability policy.
//!
//! Read once at startup from a TOML file:
//!
//! ```toml
//! [policy]
//! blocked = ["minecraft:zombie"]
//! allowed = ["minecraft:villager"]
//! default_behavior = "check_leash"
//! ```

use std::path::Path;

use gateguard_api::EntityTypeId;
use serde::Deserialize;
use thiserror::Error;

use crate::policy::{Behavior, PassabilitySet};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
pub struct GateConfig {
    #[serde(default)]
    pub policy: PolicySection,
}

#[derive(Debug, Default, Deserialize)]
pub struct PolicySection {
    /// Entity types an open gate always blocks.
    #[serde(default)]
    pub blocked: Vec<EntityTypeId>,
    /// Entity types an open gate always admits.
    #[serde(default)]
    pub allowed: Vec<EntityTypeId>,
    /// Fallback for types in neither list.
    #[serde(default)]
    pub default_behavior: Behavior,
}

impl GateConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Build the immutable policy from the loaded sections.
    pub fn passability_set(&self) -> PassabilitySet {
        PassabilitySet::new(
            self.policy.blocked.iter().cloned(),
            self.policy.allowed.iter().cloned(),
            self.policy.default_behavior,
        )
    }
}
