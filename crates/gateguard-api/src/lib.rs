//! Gateguard API: types and the host-facing seam trait.
//!
//! This crate defines the interface between the gate passability logic and
//! the host engine's entity model. It has no dependency on gateguard-core;
//! the host (or an adapter such as gateguard-ecs) implements [`EntityQueries`]
//! and composes the evaluator into its block-collision path.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// ─── Identifiers ─────────────────────────────────────────────────────────────

/// Namespaced entity type identifier, e.g. `"minecraft:zombie"`.
///
/// Opaque to the decision logic; compared by equality only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityTypeId(String);

impl EntityTypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityTypeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

// ─── Gate geometry ───────────────────────────────────────────────────────────

/// Horizontal axis a fence gate can face. Gates never face up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Z,
}

/// Block state of the gate being queried, as handed in by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateState {
    pub open: bool,
    pub facing: Axis,
}

/// Collision-shape decision returned to the host block behavior.
///
/// `FullCollision` names the host's precomputed closed-gate shape for the
/// given facing axis; the shapes themselves are host geometry this crate
/// never constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeDecision {
    FullCollision(Axis),
    NoCollision,
}

// ─── Player subjects ─────────────────────────────────────────────────────────

/// Non-interactive stand-in player used for leash-permission checks on
/// dedicated servers, where no real client player is in context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticPlayer {
    /// Random v4 UUID, hyphenated lowercase hex.
    pub uuid: String,
    /// Display name, e.g. `"[gateguard]"`.
    pub name: String,
}

/// The player on whose behalf a leash-permission check is made.
#[derive(Debug, Clone)]
pub enum LeashSubject<Id> {
    /// A real player entity in the world.
    Player(Id),
    /// The session's synthetic stand-in.
    Synthetic(Arc<SyntheticPlayer>),
}

// ─── Host seam ───────────────────────────────────────────────────────────────

/// Live entity queries implemented by the host engine.
///
/// All lookups are total within one synchronous collision query: the ids the
/// host passes in stay valid for the duration of the call, and nothing is
/// cached across calls.
pub trait EntityQueries {
    /// Handle identifying one entity in the host's world.
    type EntityId: Copy + Eq + Hash;

    /// The entity's type identifier.
    fn entity_type(&self, entity: Self::EntityId) -> EntityTypeId;

    /// The entity currently restraining this one via a leash, if any.
    fn leash_holder(&self, entity: Self::EntityId) -> Option<Self::EntityId>;

    /// The entity currently riding/steering this one, if any.
    fn controlling_passenger(&self, entity: Self::EntityId) -> Option<Self::EntityId>;

    /// Whether this entity is a passive leash anchor (e.g. a fence knot)
    /// rather than a live leash holder.
    fn is_leash_anchor(&self, entity: Self::EntityId) -> bool;

    /// Whether this entity is a player of any kind.
    fn is_player(&self, entity: Self::EntityId) -> bool;

    /// Whether this entity is a server-controlled player (the kind that
    /// advancement criteria are recorded for).
    fn is_server_player(&self, entity: Self::EntityId) -> bool;

    /// Whether `subject` could legally attach a leash to `entity` right now.
    fn can_be_leashed(
        &self,
        entity: Self::EntityId,
        subject: &LeashSubject<Self::EntityId>,
    ) -> bool;

    /// The client's own player, when running in a client context.
    ///
    /// Dedicated-server hosts return `None`; client hosts must return `Some`
    /// whenever a collision query runs.
    fn local_player(&self) -> Option<Self::EntityId>;
}
