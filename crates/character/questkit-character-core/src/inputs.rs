//! Per-tick input contract.
//!
//! The input layer (keyboard/gamepad mapping, ground probes) samples these
//! flags once per simulation tick; the state machine consumes the snapshot
//! and nothing else. Field names keep their JS-facing camelCase spelling.

use serde::{Deserialize, Serialize};

/// Frozen record of the tick's input flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputSnapshot {
    pub is_moving: bool,
    pub is_running: bool,
    pub is_sprinting: bool,
    pub is_crouching: bool,
    pub is_on_ground: bool,
    pub is_jumping: bool,
    pub is_attacking: bool,
    pub is_blocking: bool,
    pub is_dodging: bool,
    pub is_interacting: bool,
}
