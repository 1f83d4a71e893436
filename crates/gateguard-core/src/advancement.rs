//! Enter-gate criterion: the hook feeding the host's advancement layer.
//!
//! When a server-controlled player is tested against an open gate, the
//! evaluator fires this trigger. Events are queued here and drained by the
//! host's advancement layer, which owns per-player deduplication; the
//! trigger itself fires once per collision query without further bookkeeping.

use std::sync::Mutex;

use serde::Deserialize;
use tracing::trace;

/// Criterion identifier used in advancement JSON.
pub const ENTER_GATE_CRITERION_ID: &str = "gateguard:enter_fence_gate";

/// One configured instance of the criterion, parsed from advancement JSON.
///
/// The entity predicate is host vocabulary; it is carried opaquely for the
/// advancement layer to interpret.
#[derive(Debug, Clone, Deserialize)]
pub struct TriggerInstance {
    #[serde(default)]
    pub player: Option<serde_json::Value>,
}

impl TriggerInstance {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Queue of "entered open fence gate" events awaiting the advancement layer.
#[derive(Debug, Default)]
pub struct EnterGateTrigger<Id> {
    fired: Mutex<Vec<Id>>,
}

impl<Id: Copy> EnterGateTrigger<Id> {
    pub fn new() -> Self {
        Self {
            fired: Mutex::new(Vec::new()),
        }
    }

    /// Record that `player` was tested against an open gate.
    pub fn trigger(&self, player: Id) {
        trace!("player entered open fence gate");
        self.fired.lock().unwrap().push(player);
    }

    /// Take all queued events, leaving the queue empty.
    pub fn drain(&self) -> Vec<Id> {
        std::mem::take(&mut *self.fired.lock().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_queues_in_order() {
        let trigger = EnterGateTrigger::new();
        trigger.trigger(3u32);
        trigger.trigger(1);
        trigger.trigger(3);
        assert_eq!(trigger.drain(), vec![3, 1, 3]);
    }

    #[test]
    fn drain_empties_the_queue() {
        let trigger = EnterGateTrigger::new();
        trigger.trigger(7u32);
        assert_eq!(trigger.drain(), vec![7]);
        assert!(trigger.drain().is_empty());
    }

    #[test]
    fn instance_parses_without_predicate() {
        let instance = TriggerInstance::from_json("{}").unwrap();
        assert!(instance.player.is_none());
    }

    #[test]
    fn instance_keeps_predicate_opaque() {
        let instance =
            TriggerInstance::from_json(r#"{"player": {"type": "minecraft:player"}}"#).unwrap();
        let predicate = instance.player.unwrap();
        assert_eq!(predicate["type"], "minecraft:player");
    }

    #[test]
    fn malformed_instance_is_an_error() {
        assert!(TriggerInstance::from_json("[1, 2]").is_err());
    }
}
