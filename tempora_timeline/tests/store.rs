// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `TimelineStore`.
//!
//! These exercise the selection contract views rely on: select by id, clear
//! with `None`, and the revision counters observers poll.

use tempora_timeline::{Timeline, TimelineEvent, TimelineGroup, TimelineStore};

fn sample() -> Timeline {
    Timeline::new(
        vec![
            TimelineEvent::new("a", "x", "1900"),
            TimelineEvent::new("b", "x", "1950").in_group("g"),
        ],
        vec![TimelineGroup::new("g", "Group")],
    )
}

#[test]
fn empty_store_basics() {
    let store = TimelineStore::new(Timeline::default());
    assert!(store.timeline().is_empty());
    assert_eq!(store.selected_event_id(), None);
    assert_eq!(store.selection_revision(), 0);
    assert_eq!(store.data_revision(), 0);
}

#[test]
fn select_bumps_revision_only_on_change() {
    let mut store = TimelineStore::new(sample());

    assert!(store.select_event(Some("a")));
    assert_eq!(store.selected_event_id(), Some("a"));
    assert_eq!(store.selection_revision(), 1);

    // Re-selecting the same id is a no-op.
    assert!(!store.select_event(Some("a")));
    assert_eq!(store.selection_revision(), 1);

    assert!(store.select_event(Some("b")));
    assert_eq!(store.selected_event().map(|e| e.id.as_str()), Some("b"));
    assert_eq!(store.selection_revision(), 2);
}

#[test]
fn clear_with_none() {
    let mut store = TimelineStore::new(sample());
    assert!(!store.select_event(None));
    assert_eq!(store.selection_revision(), 0);

    store.select_event(Some("a"));
    assert!(store.select_event(None));
    assert_eq!(store.selected_event_id(), None);
    assert_eq!(store.selection_revision(), 2);
}

#[test]
fn unknown_ids_are_ignored() {
    let mut store = TimelineStore::new(sample());
    store.select_event(Some("a"));
    assert!(!store.select_event(Some("nope")));
    assert_eq!(store.selected_event_id(), Some("a"));
}

#[test]
fn replacing_the_timeline_drops_stale_selection() {
    let mut store = TimelineStore::new(sample());
    store.select_event(Some("b"));

    // Still present: selection survives.
    store.replace_timeline(sample());
    assert_eq!(store.data_revision(), 1);
    assert_eq!(store.selected_event_id(), Some("b"));

    // Gone: selection is cleared and observers are told.
    let before = store.selection_revision();
    store.replace_timeline(Timeline::new(vec![TimelineEvent::new("a", "x", "1900")], vec![]));
    assert_eq!(store.data_revision(), 2);
    assert_eq!(store.selected_event_id(), None);
    assert!(store.selection_revision() > before);
}
