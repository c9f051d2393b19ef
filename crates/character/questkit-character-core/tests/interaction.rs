use std::cell::Cell;
use std::rc::Rc;
use std::task::Poll;

use futures_util::FutureExt;
use glam::Vec3;
use questkit_character_core::{
    Config, Interactable, InteractionError, InteractionKind, InteractionRegistry,
};

fn registry() -> InteractionRegistry {
    InteractionRegistry::new(&Config::default())
}

fn noop_item(id: &str, position: Vec3) -> Interactable {
    Interactable::new(
        id,
        InteractionKind::Object,
        position,
        Box::new(|_| async { anyhow::Ok(()) }.boxed_local()),
    )
}

fn counting_item(id: &str, position: Vec3, hits: &Rc<Cell<u32>>) -> Interactable {
    let hits = Rc::clone(hits);
    Interactable::new(
        id,
        InteractionKind::Chest,
        position,
        Box::new(move |_| {
            let hits = Rc::clone(&hits);
            async move {
                hits.set(hits.get() + 1);
                anyhow::Ok(())
            }
            .boxed_local()
        }),
    )
}

/// it should return the nearer of two entries and filter by range
#[test]
fn nearest_and_in_range() {
    let mut registry = registry();
    registry.register(noop_item("near", Vec3::new(2.0, 0.0, 0.0)));
    registry.register(noop_item("far", Vec3::new(4.0, 0.0, 0.0)));
    registry.update_player_position(Vec3::ZERO);

    let nearest = registry.nearest_interactable().expect("entry in range");
    assert_eq!(nearest.id, "near");

    let in_range = registry.interactables_in_range();
    assert_eq!(in_range.len(), 1);
    assert_eq!(in_range[0].id, "near");
}

/// it should break exact distance ties by registration order
#[test]
fn tie_break_is_registration_order() {
    let mut registry = registry();
    registry.register(noop_item("first", Vec3::new(1.0, 0.0, 0.0)));
    registry.register(noop_item("second", Vec3::new(-1.0, 0.0, 0.0)));
    registry.update_player_position(Vec3::ZERO);

    assert_eq!(registry.nearest_interactable().unwrap().id, "first");

    let in_range = registry.interactables_in_range();
    assert_eq!(in_range[0].id, "first");
    assert_eq!(in_range[1].id, "second");
}

/// it should sort in-range entries by ascending distance
#[test]
fn in_range_sorted_by_distance() {
    let mut registry = registry();
    registry.register(noop_item("mid", Vec3::new(1.5, 0.0, 0.0)));
    registry.register(noop_item("close", Vec3::new(0.5, 0.0, 0.0)));
    registry.register(noop_item("edge", Vec3::new(2.5, 0.0, 0.0)));
    registry.update_player_position(Vec3::ZERO);

    let ids: Vec<&str> = registry
        .interactables_in_range()
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids, vec!["close", "mid", "edge"]);
}

/// it should honor per-entry ranges over the registry default
#[test]
fn per_entry_range_overrides_default() {
    let mut registry = registry();
    registry.register(noop_item("short-reach", Vec3::new(2.0, 0.0, 0.0)).with_range(1.0));
    registry.register(noop_item("long-reach", Vec3::new(4.0, 0.0, 0.0)).with_range(5.0));
    registry.update_player_position(Vec3::ZERO);

    let nearest = registry.nearest_interactable().expect("long reach entry");
    assert_eq!(nearest.id, "long-reach");
}

/// it should skip entries whose availability predicate refuses
#[test]
fn unavailable_entries_are_skipped() {
    let mut registry = registry();
    registry.register(
        noop_item("locked", Vec3::new(1.0, 0.0, 0.0)).with_availability(Box::new(|_| false)),
    );
    registry.register(noop_item("open", Vec3::new(2.0, 0.0, 0.0)));
    registry.update_player_position(Vec3::ZERO);

    assert_eq!(registry.nearest_interactable().unwrap().id, "open");
    assert_eq!(registry.interactables_in_range().len(), 1);
}

/// it should fail without side effects when the registry is empty
#[tokio::test]
async fn interact_with_empty_registry() {
    let mut registry = registry();
    let outcome = registry.interact().await;
    assert!(matches!(outcome, Err(InteractionError::NothingInRange)));
}

/// it should run the nearest effect exactly once
#[tokio::test]
async fn interact_triggers_nearest_effect() {
    let near_hits = Rc::new(Cell::new(0u32));
    let far_hits = Rc::new(Cell::new(0u32));
    let mut registry = registry();
    registry.register(counting_item("near", Vec3::new(1.0, 0.0, 0.0), &near_hits));
    registry.register(counting_item("far", Vec3::new(2.0, 0.0, 0.0), &far_hits));
    registry.update_player_position(Vec3::ZERO);

    registry.interact().await.expect("interaction should succeed");
    assert_eq!(near_hits.get(), 1);
    assert_eq!(far_hits.get(), 0);
}

/// it should hand the player position to the effect context
#[tokio::test]
async fn effect_sees_player_position() {
    let seen = Rc::new(Cell::new(Vec3::ZERO));
    let seen_by_effect = Rc::clone(&seen);
    let mut registry = registry();
    registry.register(Interactable::new(
        "npc",
        InteractionKind::Npc,
        Vec3::new(1.0, 0.0, 0.0),
        Box::new(move |ctx| {
            let seen = Rc::clone(&seen_by_effect);
            async move {
                seen.set(ctx.player_position);
                anyhow::Ok(())
            }
            .boxed_local()
        }),
    ));
    let player = Vec3::new(0.5, 0.0, 0.5);
    registry.update_player_position(player);

    registry.interact().await.expect("interaction should succeed");
    assert_eq!(seen.get(), player);
}

/// it should convert effect failures into results and release the busy flag
#[tokio::test]
async fn effect_failure_is_a_value() {
    let mut registry = registry();
    registry.register(Interactable::new(
        "cursed-chest",
        InteractionKind::Chest,
        Vec3::new(1.0, 0.0, 0.0),
        Box::new(|_| async { Err(anyhow::anyhow!("the lock is jammed")) }.boxed_local()),
    ));
    registry.update_player_position(Vec3::ZERO);

    let outcome = registry.interact().await;
    assert!(matches!(outcome, Err(InteractionError::Effect(_))));

    // The flag was released, so the next attempt reaches the effect again.
    let outcome = registry.interact().await;
    assert!(matches!(outcome, Err(InteractionError::Effect(_))));
}

/// it should refuse a second interaction while one is in flight
#[tokio::test]
async fn overlapping_interactions_are_busy() {
    let mut registry = registry();
    registry.register(Interactable::new(
        "slow-door",
        InteractionKind::Door,
        Vec3::new(1.0, 0.0, 0.0),
        Box::new(|_| futures_util::future::pending::<anyhow::Result<()>>().boxed_local()),
    ));
    registry.update_player_position(Vec3::ZERO);

    {
        let first = registry.interact();
        futures_util::pin_mut!(first);
        assert!(matches!(futures_util::poll!(&mut first), Poll::Pending));
        // Dropped mid-flight; the busy flag stays taken.
    }

    let second = registry.interact().await;
    assert!(matches!(second, Err(InteractionError::Busy)));
}

/// it should overwrite entries with the same id in their original slot
#[test]
fn re_registration_is_last_write_wins() {
    let mut registry = registry();
    registry.register(noop_item("door", Vec3::new(1.0, 0.0, 0.0)));
    registry.register(noop_item("window", Vec3::new(1.0, 0.0, 0.0)));
    registry.register(noop_item("door", Vec3::new(0.5, 0.0, 0.0)));
    registry.update_player_position(Vec3::ZERO);

    assert_eq!(registry.len(), 2);
    let nearest = registry.nearest_interactable().unwrap();
    assert_eq!(nearest.id, "door");
    assert_eq!(nearest.position, Vec3::new(0.5, 0.0, 0.0));

    // Equal distances again: the overwritten entry kept its first slot.
    registry.register(noop_item("door", Vec3::new(1.0, 0.0, 0.0)));
    assert_eq!(registry.nearest_interactable().unwrap().id, "door");
}

/// it should preserve registration order across unregister
#[test]
fn unregister_preserves_order() {
    let mut registry = registry();
    registry.register(noop_item("a", Vec3::new(1.0, 0.0, 0.0)));
    registry.register(noop_item("b", Vec3::new(-1.0, 0.0, 0.0)));
    registry.register(noop_item("c", Vec3::new(0.0, 1.0, 0.0)));
    registry.update_player_position(Vec3::ZERO);

    let removed = registry.unregister("a").expect("entry was registered");
    assert_eq!(removed.id, "a");
    assert!(registry.unregister("a").is_none());

    assert_eq!(registry.nearest_interactable().unwrap().id, "b");
    assert_eq!(registry.len(), 2);
}

/// it should follow the player and the configured default range
#[test]
fn player_position_and_range_updates() {
    let mut registry = registry();
    registry.register(noop_item("shrine", Vec3::new(10.0, 0.0, 0.0)));

    assert!(registry.nearest_interactable().is_none());

    registry.update_player_position(Vec3::new(9.0, 0.0, 0.0));
    assert!(registry.nearest_interactable().is_some());

    registry.set_interaction_range(0.5);
    assert!(registry.nearest_interactable().is_none());
}

/// it should drop every entry on clear
#[test]
fn clear_empties_the_registry() {
    let mut registry = registry();
    registry.register(noop_item("a", Vec3::ZERO));
    registry.register(noop_item("b", Vec3::ZERO));
    assert_eq!(registry.len(), 2);

    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.nearest_interactable().is_none());
}

/// it should serialize interaction kinds with lowercase labels
#[test]
fn interaction_kind_labels() {
    assert_eq!(
        serde_json::to_string(&InteractionKind::Npc).unwrap(),
        "\"npc\""
    );
    let parsed: InteractionKind = serde_json::from_str("\"lever\"").unwrap();
    assert_eq!(parsed, InteractionKind::Lever);
}
