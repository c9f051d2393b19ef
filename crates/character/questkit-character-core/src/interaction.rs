//! Proximity interaction registry.
//!
//! World objects register themselves when they spawn and unregister on
//! despawn; the registry tracks the player position and resolves which entry
//! responds when the player signals "interact". Entries are owned exclusively
//! by the registry; queries hand out short-lived references. Iteration order
//! is registration order, which doubles as the nearest-tie break.

use std::fmt;

use futures_util::future::LocalBoxFuture;
use glam::Vec3;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Npc,
    Object,
    Item,
    Door,
    Lever,
    Chest,
}

/// Read-only view of the player handed to effects and availability checks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InteractionContext {
    pub player_position: Vec3,
}

/// An interaction effect may suspend awaiting an external completion (dialogue
/// close, pickup animation). The registry lives on the single tick thread, so
/// effects are not required to be `Send`.
pub type EffectFuture = LocalBoxFuture<'static, anyhow::Result<()>>;
pub type InteractEffect = Box<dyn FnMut(InteractionContext) -> EffectFuture>;
pub type AvailabilityFn = Box<dyn Fn(&InteractionContext) -> bool>;

#[derive(Error, Debug)]
pub enum InteractionError {
    #[error("no interactable within range")]
    NothingInRange,
    #[error("an interaction is already in progress")]
    Busy,
    #[error("interaction effect failed: {0}")]
    Effect(anyhow::Error),
}

/// A world entity that responds to a player-initiated interaction.
pub struct Interactable {
    pub id: String,
    pub kind: InteractionKind,
    pub position: Vec3,
    /// Per-entry trigger radius; `None` falls back to the registry default.
    pub range: Option<f32>,
    pub effect: InteractEffect,
    pub availability: Option<AvailabilityFn>,
    pub label: Option<String>,
}

impl Interactable {
    pub fn new(
        id: impl Into<String>,
        kind: InteractionKind,
        position: Vec3,
        effect: InteractEffect,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            position,
            range: None,
            effect,
            availability: None,
            label: None,
        }
    }

    pub fn with_range(mut self, range: f32) -> Self {
        self.range = Some(range);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_availability(mut self, availability: AvailabilityFn) -> Self {
        self.availability = Some(availability);
        self
    }
}

impl fmt::Debug for Interactable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interactable")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("position", &self.position)
            .field("range", &self.range)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Registry of interactable world objects for one player.
pub struct InteractionRegistry {
    entries: IndexMap<String, Interactable>,
    player_position: Vec3,
    default_range: f32,
    busy: bool,
}

impl InteractionRegistry {
    pub fn new(cfg: &Config) -> Self {
        Self {
            entries: IndexMap::new(),
            player_position: Vec3::ZERO,
            default_range: cfg.interaction_range,
            busy: false,
        }
    }

    /// Register an entry. Re-registering an id overwrites the previous entry
    /// (last write wins, documented behavior); the entry keeps its original
    /// registration slot so nearest-tie ordering stays stable.
    pub fn register(&mut self, interactable: Interactable) {
        if self.entries.contains_key(&interactable.id) {
            log::debug!("re-registering interactable '{}'", interactable.id);
        }
        self.entries.insert(interactable.id.clone(), interactable);
    }

    /// Remove an entry, preserving registration order for the rest.
    pub fn unregister(&mut self, id: &str) -> Option<Interactable> {
        self.entries.shift_remove(id)
    }

    pub fn update_player_position(&mut self, position: Vec3) {
        self.player_position = position;
    }

    /// Default trigger radius for entries without their own range.
    pub fn set_interaction_range(&mut self, range: f32) {
        self.default_range = range;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distance to the player if the entry is in range and available.
    fn eligible_distance(&self, entry: &Interactable) -> Option<f32> {
        let distance = self.player_position.distance(entry.position);
        let range = entry.range.unwrap_or(self.default_range);
        if distance > range {
            return None;
        }
        let ctx = InteractionContext {
            player_position: self.player_position,
        };
        match &entry.availability {
            Some(can_interact) if !can_interact(&ctx) => None,
            _ => Some(distance),
        }
    }

    /// Closest eligible entry. Strict `<` keeps the first-registered entry on
    /// exact distance ties.
    pub fn nearest_interactable(&self) -> Option<&Interactable> {
        let mut nearest: Option<(&Interactable, f32)> = None;
        for entry in self.entries.values() {
            if let Some(distance) = self.eligible_distance(entry) {
                if nearest.map_or(true, |(_, best)| distance < best) {
                    nearest = Some((entry, distance));
                }
            }
        }
        nearest.map(|(entry, _)| entry)
    }

    /// All eligible entries, ascending by distance. The sort is stable, so
    /// equidistant entries stay in registration order.
    pub fn interactables_in_range(&self) -> Vec<&Interactable> {
        let mut in_range: Vec<(&Interactable, f32)> = self
            .entries
            .values()
            .filter_map(|entry| self.eligible_distance(entry).map(|d| (entry, d)))
            .collect();
        in_range.sort_by(|a, b| a.1.total_cmp(&b.1));
        in_range.into_iter().map(|(entry, _)| entry).collect()
    }

    /// Trigger the nearest eligible entry's effect and await its completion.
    /// One interaction at a time: a busy flag is taken for the duration of
    /// the effect, and a call arriving while one is in flight fails fast.
    /// Effect failures are logged and returned as values, never propagated as
    /// panics.
    pub async fn interact(&mut self) -> Result<(), InteractionError> {
        if self.busy {
            return Err(InteractionError::Busy);
        }
        let id = match self.nearest_interactable() {
            Some(entry) => entry.id.clone(),
            None => return Err(InteractionError::NothingInRange),
        };
        let ctx = InteractionContext {
            player_position: self.player_position,
        };
        let effect_future = match self.entries.get_mut(&id) {
            Some(entry) => (entry.effect)(ctx),
            None => return Err(InteractionError::NothingInRange),
        };
        self.busy = true;
        let outcome = effect_future.await;
        self.busy = false;
        match outcome {
            Ok(()) => Ok(()),
            Err(err) => {
                log::error!("interaction with '{id}' failed: {err:#}");
                Err(InteractionError::Effect(err))
            }
        }
    }
}
