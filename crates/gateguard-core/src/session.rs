//! Server-session state: the synthetic stand-in player.
//!
//! Dedicated servers have no client player to test leash permission against,
//! so the session lazily creates one non-interactive stand-in and reuses it
//! for the session's lifetime. The host invalidates the session when the
//! server instance goes away; the next query then gets a fresh stand-in.

use std::sync::{Arc, Mutex};

use gateguard_api::SyntheticPlayer;
use tracing::debug;

/// Display name carried by the synthetic player's profile.
pub const SYNTHETIC_PLAYER_NAME: &str = "[gateguard]";

/// State scoped to one server session.
///
/// The slot is mutex-guarded: collision queries run on the host's single
/// simulation thread, but nothing here depends on that.
#[derive(Debug, Default)]
pub struct ServerSession {
    synthetic: Mutex<Option<Arc<SyntheticPlayer>>>,
}

impl ServerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session's synthetic player, created on first use.
    pub fn synthetic_player(&self) -> Arc<SyntheticPlayer> {
        let mut slot = self.synthetic.lock().unwrap();
        match &*slot {
            Some(player) => Arc::clone(player),
            None => {
                let player = Arc::new(SyntheticPlayer {
                    uuid: random_uuid_v4(),
                    name: SYNTHETIC_PLAYER_NAME.to_owned(),
                });
                debug!(uuid = %player.uuid, "created synthetic player");
                *slot = Some(Arc::clone(&player));
                player
            }
        }
    }

    /// Drop the stand-in. Called when the server session ends so a later
    /// session does not reuse a player bound to a dead world.
    pub fn invalidate(&self) {
        *self.synthetic.lock().unwrap() = None;
    }
}

/// Random version-4 UUID, hyphenated lowercase hex.
fn random_uuid_v4() -> String {
    let mut bytes: [u8; 16] = rand::random();
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    format!(
        "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3],
        bytes[4], bytes[5],
        bytes[6], bytes[7],
        bytes[8], bytes[9],
        bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
    )
}
