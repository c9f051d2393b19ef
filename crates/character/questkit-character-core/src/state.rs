//! Animation states, per-state playback configs, and the transition graph.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Closed set of character animation states.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationState {
    Idle,
    Walk,
    Run,
    Sprint,
    Jump,
    Fall,
    Land,
    Crouch,
    CrouchWalk,
    Attack,
    Block,
    Dodge,
    Interact,
    Pickup,
    Death,
}

impl AnimationState {
    /// The full state set in a stable order.
    pub const ALL: [AnimationState; 15] = [
        Self::Idle,
        Self::Walk,
        Self::Run,
        Self::Sprint,
        Self::Jump,
        Self::Fall,
        Self::Land,
        Self::Crouch,
        Self::CrouchWalk,
        Self::Attack,
        Self::Block,
        Self::Dodge,
        Self::Interact,
        Self::Pickup,
        Self::Death,
    ];

    /// Kebab-case label, identical to the serde form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walk => "walk",
            Self::Run => "run",
            Self::Sprint => "sprint",
            Self::Jump => "jump",
            Self::Fall => "fall",
            Self::Land => "land",
            Self::Crouch => "crouch",
            Self::CrouchWalk => "crouch-walk",
            Self::Attack => "attack",
            Self::Block => "block",
            Self::Dodge => "dodge",
            Self::Interact => "interact",
            Self::Pickup => "pickup",
            Self::Death => "death",
        }
    }
}

impl std::fmt::Display for AnimationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Playback settings for one state. One config per state, fixed at machine
/// construction.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    pub name: String,
    pub state: AnimationState,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub speed: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
}

/// One edge of the transition graph. Edges only scope which destinations are
/// reachable; whether an edge fires is decided per destination state against
/// the tick's input snapshot.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StateTransition {
    pub from: AnimationState,
    pub to: AnimationState,
    #[serde(rename = "blendTime")]
    pub blend_time: f32,
}

/// Default playback config table, insertion-ordered.
pub fn default_state_configs() -> IndexMap<AnimationState, AnimationConfig> {
    use AnimationState::*;
    let table: [(AnimationState, bool, f32); 15] = [
        (Idle, true, 1.0),
        (Walk, true, 1.0),
        (Run, true, 1.0),
        (Sprint, true, 1.2),
        (Jump, false, 1.0),
        (Fall, true, 1.0),
        (Land, false, 1.0),
        (Crouch, true, 1.0),
        (CrouchWalk, true, 0.8),
        (Attack, false, 1.0),
        (Block, true, 1.0),
        (Dodge, false, 1.0),
        (Interact, false, 1.0),
        (Pickup, false, 1.0),
        (Death, false, 1.0),
    ];
    table
        .into_iter()
        .map(|(state, looped, speed)| {
            (
                state,
                AnimationConfig {
                    name: state.label().to_string(),
                    state,
                    looped,
                    speed,
                    weight: None,
                },
            )
        })
        .collect()
}

/// Default transition graph. Insertion order is load-bearing: the machine
/// scans edges in this order and takes the first valid destination.
pub fn default_transitions(blend_time: f32) -> Vec<StateTransition> {
    use AnimationState::*;
    let edge = |from, to| StateTransition {
        from,
        to,
        blend_time,
    };
    vec![
        // Movement
        edge(Idle, Walk),
        edge(Walk, Run),
        edge(Run, Sprint),
        edge(Idle, Jump),
        edge(Walk, Jump),
        edge(Run, Jump),
        edge(Jump, Fall),
        edge(Fall, Land),
        edge(Land, Idle),
        // Crouch
        edge(Idle, Crouch),
        edge(Crouch, CrouchWalk),
        edge(CrouchWalk, Crouch),
        edge(Crouch, Idle),
        // Combat
        edge(Idle, Attack),
        edge(Walk, Attack),
        edge(Run, Attack),
        edge(Idle, Block),
        edge(Idle, Dodge),
        // Interaction
        edge(Idle, Interact),
        edge(Idle, Pickup),
    ]
}
