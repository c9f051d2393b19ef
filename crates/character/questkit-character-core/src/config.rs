//! Core configuration.

use serde::{Deserialize, Serialize};

/// Per-instance defaults. Each constructed state machine or registry carries
/// its own copy, so independent players never share hidden globals.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Crossfade duration for transitions without an explicit override.
    pub default_blend_time: f32,
    /// Trigger radius for interactables that do not carry their own range.
    pub interaction_range: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_blend_time: 0.2,
            interaction_range: 3.0,
        }
    }
}
