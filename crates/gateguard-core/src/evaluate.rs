//! Gate interaction evaluation: the collision-shape override itself.
//!
//! The host's fence gate block behavior composes a [`GateEvaluator`] into its
//! collision-shape query. For an open gate with an entity in context, the
//! evaluator classifies the entity, resolves its controlling entity, and
//! decides whether the gate keeps its closed-shape collision for this query.

use gateguard_api::{EntityQueries, GateState, LeashSubject, ShapeDecision};
use tracing::debug;

use crate::advancement::EnterGateTrigger;
use crate::policy::{Behavior, Passability, PassabilitySet};
use crate::resolver::{resolve_controller, Resolved};
use crate::session::ServerSession;

/// Where the fallback leash-check subject comes from. Fixed once at startup
/// by the runtime environment the module is loaded into.
#[derive(Debug)]
pub enum SubjectMode {
    /// Dedicated server: use the session's synthetic player.
    DedicatedServer(ServerSession),
    /// Client process: use the host's local player.
    Client,
}

/// Per-entity collision decision for open fence gates.
#[derive(Debug)]
pub struct GateEvaluator<Id> {
    policy: PassabilitySet,
    subjects: SubjectMode,
    trigger: EnterGateTrigger<Id>,
}

impl<Id: Copy + Eq + std::hash::Hash> GateEvaluator<Id> {
    pub fn new(policy: PassabilitySet, subjects: SubjectMode) -> Self {
        Self {
            policy,
            subjects,
            trigger: EnterGateTrigger::new(),
        }
    }

    /// Events queued for the advancement layer.
    pub fn trigger(&self) -> &EnterGateTrigger<Id> {
        &self.trigger
    }

    /// Decide the gate's collision shape for one query.
    ///
    /// Returns `None` to defer to the host's default geometry: always for
    /// closed gates (their shape is not ours to change) and when no entity
    /// is being tested.
    pub fn collision_shape<Q>(
        &self,
        world: &Q,
        state: GateState,
        entity: Option<Id>,
    ) -> Option<ShapeDecision>
    where
        Q: EntityQueries<EntityId = Id>,
    {
        if !state.open {
            return None;
        }
        let entity = entity?;

        // Side effect only; the decision below does not depend on it.
        if world.is_server_player(entity) {
            self.trigger.trigger(entity);
        }

        let full = ShapeDecision::FullCollision(state.facing);
        let entity_type = world.entity_type(entity);

        match self.policy.classify(&entity_type) {
            Passability::Blocked => {
                debug!(%entity_type, "blocked by policy");
                return Some(full);
            }
            Passability::Allowed => return Some(ShapeDecision::NoCollision),
            Passability::Unspecified => match self.policy.default_behavior() {
                Behavior::Block => return Some(full),
                Behavior::Allow => return Some(ShapeDecision::NoCollision),
                Behavior::CheckLeash => {}
            },
        }

        let controller = match resolve_controller(world, entity) {
            // Entangled control relations: treat as inescapable and block.
            Resolved::Cycle(_) => {
                debug!(%entity_type, "cyclic control relations, blocking");
                return Some(full);
            }
            Resolved::Terminal(controller) => controller,
        };

        // The leash check is made on behalf of whoever controls the entity;
        // absent a player controller, the environment supplies a subject.
        let subject = if world.is_player(controller) {
            LeashSubject::Player(controller)
        } else {
            match &self.subjects {
                SubjectMode::DedicatedServer(session) => {
                    LeashSubject::Synthetic(session.synthetic_player())
                }
                // The host guarantees a local player exists whenever a client
                // runs collision queries.
                SubjectMode::Client => LeashSubject::Player(
                    world
                        .local_player()
                        .expect("client context always has a local player"),
                ),
            }
        };

        let tied_to_anchor = world
            .leash_holder(entity)
            .is_some_and(|holder| world.is_leash_anchor(holder));

        if world.can_be_leashed(entity, &subject) || tied_to_anchor {
            Some(full)
        } else {
            Some(ShapeDecision::NoCollision)
        }
    }
}
