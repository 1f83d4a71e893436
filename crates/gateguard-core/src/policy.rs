//! Passability policy: which entity types an open gate blocks or admits.
//!
//! Built once from configuration and read-only afterwards. Unknown types
//! classify as [`Passability::Unspecified`] and fall back to the configured
//! default behavior.

use std::collections::HashSet;

use gateguard_api::EntityTypeId;
use serde::Deserialize;
use tracing::warn;

/// Fallback behavior for entity types in neither set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    /// Open gates block unlisted types.
    Block,
    /// Open gates admit unlisted types.
    Allow,
    /// Block unlisted types that a player could leash (or that are tied to
    /// a leash anchor); admit the rest.
    #[default]
    CheckLeash,
}

/// Result of classifying one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passability {
    Blocked,
    Allowed,
    Unspecified,
}

/// Immutable blocked/allowed membership sets plus the default behavior.
#[derive(Debug, Clone)]
pub struct PassabilitySet {
    blocked: HashSet<EntityTypeId>,
    allowed: HashSet<EntityTypeId>,
    default_behavior: Behavior,
}

impl PassabilitySet {
    /// Build the set. An id listed as both blocked and allowed is tolerated;
    /// blocked wins, and the conflict is logged once here.
    pub fn new(
        blocked: impl IntoIterator<Item = EntityTypeId>,
        allowed: impl IntoIterator<Item = EntityTypeId>,
        default_behavior: Behavior,
    ) -> Self {
        let blocked: HashSet<_> = blocked.into_iter().collect();
        let allowed: HashSet<_> = allowed.into_iter().collect();

        for id in blocked.intersection(&allowed) {
            warn!("entity type {id} is both blocked and allowed; blocked wins");
        }

        Self {
            blocked,
            allowed,
            default_behavior,
        }
    }

    /// Classify one entity type. Blocked membership is checked first, so an
    /// id in both sets classifies as blocked.
    pub fn classify(&self, id: &EntityTypeId) -> Passability {
        if self.blocked.contains(id) {
            Passability::Blocked
        } else if self.allowed.contains(id) {
            Passability::Allowed
        } else {
            Passability::Unspecified
        }
    }

    pub fn default_behavior(&self) -> Behavior {
        self.default_behavior
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> EntityTypeId {
        EntityTypeId::new(s)
    }

    #[test]
    fn blocked_membership_classifies_blocked() {
        let set = PassabilitySet::new([id("minecraft:zombie")], [], Behavior::CheckLeash);
        assert_eq!(set.classify(&id("minecraft:zombie")), Passability::Blocked);
    }

    #[test]
    fn allowed_membership_classifies_allowed() {
        let set = PassabilitySet::new([], [id("minecraft:villager")], Behavior::Block);
        assert_eq!(set.classify(&id("minecraft:villager")), Passability::Allowed);
    }

    #[test]
    fn unknown_type_is_unspecified() {
        let set = PassabilitySet::new(
            [id("minecraft:zombie")],
            [id("minecraft:villager")],
            Behavior::Allow,
        );
        assert_eq!(set.classify(&id("minecraft:creeper")), Passability::Unspecified);
    }

    #[test]
    fn blocked_wins_over_allowed() {
        let set = PassabilitySet::new(
            [id("minecraft:cow")],
            [id("minecraft:cow")],
            Behavior::CheckLeash,
        );
        assert_eq!(set.classify(&id("minecraft:cow")), Passability::Blocked);
    }

    #[test]
    fn default_behavior_round_trips() {
        let set = PassabilitySet::new([], [], Behavior::Block);
        assert_eq!(set.default_behavior(), Behavior::Block);
    }

    #[test]
    fn behavior_deserializes_snake_case() {
        let b: Behavior = serde_json::from_str("\"check_leash\"").unwrap();
        assert_eq!(b, Behavior::CheckLeash);
        let b: Behavior = serde_json::from_str("\"block\"").unwrap();
        assert_eq!(b, Behavior::Block);
    }
}
