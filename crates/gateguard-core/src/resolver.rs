//! Controller chain resolution: who ultimately steers an entity.
//!
//! Leash and mount relations can chain — a player leads a horse that a
//! villager rides — so the evaluator needs the root decision-maker, not the
//! entity standing in the gate. Relations are re-queried live from the host
//! on every call; nothing is cached.

use std::collections::HashSet;

use gateguard_api::EntityQueries;

/// Outcome of walking the control chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<Id> {
    /// The chain ended at an entity with no leash holder and no controlling
    /// passenger.
    Terminal(Id),
    /// The relations loop back on themselves; the id is the first entity
    /// seen twice. Callers treat this as inescapably entangled and apply
    /// the restrictive branch.
    Cycle(Id),
}

/// Walk leash-holder and controlling-passenger edges from `start` until a
/// terminal entity or a revisit.
///
/// A leash held by a passive anchor is not followed: the anchor pins the
/// entity in place but makes no decisions for it. For a relation graph with
/// a cycle of length `k` reachable from `start`, this returns within `k + 1`
/// iterations.
pub fn resolve_controller<Q: EntityQueries>(world: &Q, start: Q::EntityId) -> Resolved<Q::EntityId> {
    let mut visited = HashSet::new();
    let mut current = start;

    loop {
        if !visited.insert(current) {
            return Resolved::Cycle(current);
        }

        if let Some(holder) = world.leash_holder(current) {
            if !world.is_leash_anchor(holder) {
                current = holder;
                continue;
            }
        }

        if let Some(rider) = world.controlling_passenger(current) {
            current = rider;
            continue;
        }

        return Resolved::Terminal(current);
    }
}
