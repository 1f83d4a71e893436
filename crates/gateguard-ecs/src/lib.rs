//! bevy_ecs adapter: leash/mount relation components and the
//! [`EntityQueries`] implementation over a `World`.
//!
//! Hosts that keep their entities in bevy_ecs attach these components and
//! hand a [`WorldQueries`] borrow to the evaluator on each collision query.

use bevy_ecs::prelude::*;

use gateguard_api::{EntityQueries, EntityTypeId, LeashSubject};

/// Type id for entities missing an [`EntityType`] component. Classifies as
/// unspecified under any policy.
pub const UNKNOWN_ENTITY_TYPE: &str = "gateguard:unknown";

// ─── Components ──────────────────────────────────────────────────────────────

/// The entity's type identifier, e.g. `"minecraft:zombie"`.
#[derive(Component, Debug, Clone)]
pub struct EntityType(pub EntityTypeId);

/// The entity currently holding this one on a leash.
#[derive(Component, Debug, Clone, Copy)]
pub struct LeashHolder(pub Entity);

/// The entity currently riding/steering this one.
#[derive(Component, Debug, Clone, Copy)]
pub struct ControllingPassenger(pub Entity);

/// Marker: a leash can be attached to this entity.
#[derive(Component, Debug)]
pub struct Leashable;

/// Marker: passive leash anchor (e.g. a knot tied to a fence post).
#[derive(Component, Debug)]
pub struct LeashAnchor;

/// Marker: this entity is a player.
#[derive(Component, Debug)]
pub struct Player;

/// Marker: this entity is a server-controlled player.
#[derive(Component, Debug)]
pub struct ServerPlayer;

/// The client's own player, present only in client processes.
#[derive(Resource, Debug, Clone, Copy)]
pub struct LocalPlayer(pub Entity);

// ─── Adapter ─────────────────────────────────────────────────────────────────

/// Read-only entity queries over a bevy_ecs `World`.
pub struct WorldQueries<'w> {
    world: &'w World,
}

impl<'w> WorldQueries<'w> {
    pub fn new(world: &'w World) -> Self {
        Self { world }
    }
}

impl EntityQueries for WorldQueries<'_> {
    type EntityId = Entity;

    fn entity_type(&self, entity: Entity) -> EntityTypeId {
        self.world
            .get::<EntityType>(entity)
            .map(|t| t.0.clone())
            .unwrap_or_else(|| EntityTypeId::new(UNKNOWN_ENTITY_TYPE))
    }

    fn leash_holder(&self, entity: Entity) -> Option<Entity> {
        self.world.get::<LeashHolder>(entity).map(|h| h.0)
    }

    fn controlling_passenger(&self, entity: Entity) -> Option<Entity> {
        self.world.get::<ControllingPassenger>(entity).map(|p| p.0)
    }

    fn is_leash_anchor(&self, entity: Entity) -> bool {
        self.world.get::<LeashAnchor>(entity).is_some()
    }

    fn is_player(&self, entity: Entity) -> bool {
        self.world.get::<Player>(entity).is_some()
    }

    fn is_server_player(&self, entity: Entity) -> bool {
        self.world.get::<ServerPlayer>(entity).is_some()
    }

    fn can_be_leashed(&self, entity: Entity, _subject: &LeashSubject<Entity>) -> bool {
        // Vanilla leash rules do not depend on who is asking: a leashable
        // entity takes a leash unless one is already attached.
        self.world.get::<Leashable>(entity).is_some() && self.leash_holder(entity).is_none()
    }

    fn local_player(&self) -> Option<Entity> {
        self.world.get_resource::<LocalPlayer>().map(|p| p.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_id(s: &str) -> EntityTypeId {
        EntityTypeId::new(s)
    }

    #[test]
    fn entity_type_reads_component() {
        let mut world = World::new();
        let cow = world.spawn(EntityType(type_id("minecraft:cow"))).id();
        let queries = WorldQueries::new(&world);
        assert_eq!(queries.entity_type(cow), type_id("minecraft:cow"));
    }

    #[test]
    fn missing_type_component_maps_to_unknown() {
        let mut world = World::new();
        let bare = world.spawn(()).id();
        let queries = WorldQueries::new(&world);
        assert_eq!(queries.entity_type(bare), type_id(UNKNOWN_ENTITY_TYPE));
    }

    #[test]
    fn relations_read_components() {
        let mut world = World::new();
        let player = world.spawn(Player).id();
        let horse = world
            .spawn((
                EntityType(type_id("minecraft:horse")),
                Leashable,
                ControllingPassenger(player),
            ))
            .id();
        let queries = WorldQueries::new(&world);
        assert_eq!(queries.controlling_passenger(horse), Some(player));
        assert_eq!(queries.leash_holder(horse), None);
        assert!(queries.is_player(player));
        assert!(!queries.is_player(horse));
    }

    #[test]
    fn leashable_without_holder_can_be_leashed() {
        let mut world = World::new();
        let player = world.spawn(Player).id();
        let cow = world
            .spawn((EntityType(type_id("minecraft:cow")), Leashable))
            .id();
        let queries = WorldQueries::new(&world);
        assert!(queries.can_be_leashed(cow, &LeashSubject::Player(player)));
    }

    #[test]
    fn already_leashed_cannot_be_leashed_again() {
        let mut world = World::new();
        let player = world.spawn(Player).id();
        let cow = world
            .spawn((
                EntityType(type_id("minecraft:cow")),
                Leashable,
                LeashHolder(player),
            ))
            .id();
        let queries = WorldQueries::new(&world);
        assert!(!queries.can_be_leashed(cow, &LeashSubject::Player(player)));
    }

    #[test]
    fn local_player_comes_from_resource() {
        let mut world = World::new();
        let queries = WorldQueries::new(&world);
        assert_eq!(queries.local_player(), None);

        let player = world.spawn((Player, ServerPlayer)).id();
        world.insert_resource(LocalPlayer(player));
        let queries = WorldQueries::new(&world);
        assert_eq!(queries.local_player(), Some(player));
        assert!(queries.is_server_player(player));
    }
}
