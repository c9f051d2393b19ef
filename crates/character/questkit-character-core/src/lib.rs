//! Questkit character core (engine-agnostic)
//!
//! Drives a playable character's visible behavior: a per-tick animation state
//! machine, name-based skeletal retargeting so clips authored for one rig
//! play on another, and a proximity interaction registry. Asset loading,
//! playback, cameras and UI live in host layers and only exchange the typed
//! values defined here.

pub mod compat;
pub mod config;
pub mod data;
pub mod inputs;
pub mod interaction;
pub mod machine;
pub mod mapping;
pub mod retarget;
pub mod state;
pub mod value;

// Re-exports for consumers (adapters)
pub use compat::{
    analyze_clip_compatibility, normalize_bone_name, CompatibilityReport, COMPATIBILITY_THRESHOLD,
};
pub use config::Config;
pub use data::{AnimationClip, Keypoint, Skeleton, Track, TrackChannel};
pub use inputs::InputSnapshot;
pub use interaction::{
    AvailabilityFn, EffectFuture, InteractEffect, Interactable, InteractionContext,
    InteractionError, InteractionKind, InteractionRegistry,
};
pub use machine::AnimationStateMachine;
pub use mapping::{build_bone_mapping, BoneMapping};
pub use retarget::retarget_clip;
pub use state::{
    default_state_configs, default_transitions, AnimationConfig, AnimationState, StateTransition,
};
pub use value::{Value, ValueKind};
