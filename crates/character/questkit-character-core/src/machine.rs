//! Animation state machine: per-character finite-state controller.
//!
//! One instance per character, created at spawn and updated once per tick.
//! The machine is a pure function of (current, previous, input) — no timers,
//! no randomness — so identical input sequences always produce identical
//! state sequences.

use indexmap::IndexMap;

use crate::config::Config;
use crate::inputs::InputSnapshot;
use crate::state::{
    default_state_configs, default_transitions, AnimationConfig, AnimationState, StateTransition,
};

#[derive(Clone, Debug)]
pub struct AnimationStateMachine {
    current: AnimationState,
    previous: AnimationState,
    transitions: Vec<StateTransition>,
    configs: IndexMap<AnimationState, AnimationConfig>,
    default_blend_time: f32,
}

impl AnimationStateMachine {
    /// Machine with the default state configs and transition graph.
    pub fn new(cfg: &Config) -> Self {
        Self::with_transitions(cfg, default_transitions(cfg.default_blend_time))
    }

    /// Machine with a caller-supplied transition graph (custom move sets,
    /// cutscene rigs). State configs stay at their defaults.
    pub fn with_transitions(cfg: &Config, transitions: Vec<StateTransition>) -> Self {
        Self {
            current: AnimationState::Idle,
            previous: AnimationState::Idle,
            transitions,
            configs: default_state_configs(),
            default_blend_time: cfg.default_blend_time,
        }
    }

    /// Append an edge to the transition graph. `blend_time` of `None` uses
    /// the machine default.
    pub fn add_transition(
        &mut self,
        from: AnimationState,
        to: AnimationState,
        blend_time: Option<f32>,
    ) {
        self.transitions.push(StateTransition {
            from,
            to,
            blend_time: blend_time.unwrap_or(self.default_blend_time),
        });
    }

    /// Advance one tick. Edges from the current state are scanned in
    /// insertion order and the first whose *destination* is valid for this
    /// input fires; otherwise the auto-revert rules apply.
    pub fn update(&mut self, input: InputSnapshot) -> AnimationState {
        let fired = self
            .transitions
            .iter()
            .filter(|t| t.from == self.current)
            .find(|t| self.destination_valid(t.to, input))
            .copied();
        if let Some(transition) = fired {
            self.previous = self.current;
            self.current = transition.to;
            return self.current;
        }

        self.apply_auto_revert(input);
        self.current
    }

    /// Destination-keyed validity. The edge list never decides firing on its
    /// own; destinations without a rule here are always valid.
    fn destination_valid(&self, to: AnimationState, input: InputSnapshot) -> bool {
        use AnimationState::*;
        match to {
            Walk => {
                input.is_moving && !input.is_running && !input.is_sprinting && !input.is_crouching
            }
            Run => {
                input.is_moving && input.is_running && !input.is_sprinting && !input.is_crouching
            }
            Sprint => input.is_moving && input.is_sprinting && !input.is_crouching,
            Jump => input.is_jumping && input.is_on_ground,
            Fall => !input.is_on_ground && !input.is_jumping,
            Land => input.is_on_ground && self.previous == Fall,
            Crouch => input.is_crouching && !input.is_moving,
            CrouchWalk => input.is_crouching && input.is_moving,
            Attack => input.is_attacking,
            Block => input.is_blocking,
            Dodge => input.is_dodging,
            Interact => input.is_interacting,
            _ => true,
        }
    }

    /// One-shot states fall back to the state they interrupted once their
    /// trigger flag clears; a grounded landing resolves to movement. Checks
    /// run in sequence, so a revert landing on `Land` can resolve further in
    /// the same tick.
    fn apply_auto_revert(&mut self, input: InputSnapshot) {
        use AnimationState::*;
        if self.current == Attack && !input.is_attacking {
            self.current = self.previous;
        }
        if self.current == Dodge && !input.is_dodging {
            self.current = self.previous;
        }
        if self.current == Interact && !input.is_interacting {
            self.current = self.previous;
        }
        if self.current == Land && input.is_on_ground {
            self.current = if input.is_moving {
                if input.is_running {
                    Run
                } else {
                    Walk
                }
            } else {
                Idle
            };
        }
    }

    pub fn current_state(&self) -> AnimationState {
        self.current
    }

    pub fn previous_state(&self) -> AnimationState {
        self.previous
    }

    pub fn state_config(&self, state: AnimationState) -> Option<&AnimationConfig> {
        self.configs.get(&state)
    }

    /// Forced override for scripted moments (death, cutscenes). Records the
    /// interrupted state and never fails.
    pub fn set_state(&mut self, state: AnimationState) {
        self.previous = self.current;
        self.current = state;
    }

    /// Crossfade duration for a (from, to) pair: the first matching edge's
    /// blend time, or the machine default when no edge carries one.
    pub fn blend_time(&self, from: AnimationState, to: AnimationState) -> f32 {
        self.transitions
            .iter()
            .find(|t| t.from == from && t.to == to)
            .map(|t| t.blend_time)
            .unwrap_or(self.default_blend_time)
    }

    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }
}
