// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariants of the layout engines.
//!
//! 1. Partition completeness: every event is placed exactly once per view.
//! 2. Determinism: the same input produces identical output.
//! 3. Depth bounds: depth, scale and lateral position stay in range.
//! 4. Bays are contiguous in time and in array order.

use proptest::prelude::*;
use tempora_layout::{
    BranchStates, CorridorConfig, DepthConfig, ShelfConfig, TreeConfig, ViewConfigs, ViewKind,
    ViewLayout, ViewUiState, compute_view, layout_corridor, layout_depth,
};
use tempora_timeline::{Timeline, TimelineEvent, TimelineGroup, chronological};

const KINDS: [&str; 4] = ["war", "art", "science", "politics"];
const GROUPS: [&str; 3] = ["a", "b", "c"];

fn date() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (-3000i32..2100).prop_map(|y| y.to_string()),
        3 => (-500i32..2100, 1u8..=12, 1u8..=28)
            .prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}")),
        1 => Just("???".to_string()),
    ]
}

fn event() -> impl Strategy<Value = (String, Option<String>, usize, Option<usize>)> {
    (
        date(),
        prop::option::of(date()),
        0..KINDS.len(),
        prop::option::of(0..GROUPS.len() + 1),
    )
}

fn timeline() -> impl Strategy<Value = Timeline> {
    prop::collection::vec(event(), 0..40).prop_map(|events| {
        let events = events
            .into_iter()
            .enumerate()
            .map(|(i, (start, end, kind, group))| {
                let mut event = TimelineEvent::new(format!("e{i}"), KINDS[kind], start);
                event.date_end = end;
                if let Some(g) = group {
                    // Index `GROUPS.len()` refers to a group that does not exist.
                    event = event.in_group(GROUPS.get(g).copied().unwrap_or("ghost"));
                }
                event
            })
            .collect();
        let groups = GROUPS
            .iter()
            .map(|id| TimelineGroup::new(*id, id.to_uppercase()))
            .collect();
        Timeline::new(events, groups)
    })
}

fn placed_indices(layout: &ViewLayout) -> Vec<usize> {
    let mut indices: Vec<usize> = match layout {
        ViewLayout::Tree(tree) => tree
            .trunk_nodes
            .iter()
            .chain(tree.branches.iter().flat_map(|b| b.nodes.iter()))
            .map(|n| n.event)
            .collect(),
        ViewLayout::Depth(depth) => depth.events.iter().map(|e| e.event).collect(),
        ViewLayout::Corridor(corridor) => corridor
            .bays
            .iter()
            .flat_map(|b| b.events.iter().copied())
            .collect(),
        ViewLayout::Shelf(shelf) => shelf
            .books
            .iter()
            .flat_map(|b| b.chapters.iter().map(|c| c.event))
            .collect(),
    };
    indices.sort_unstable();
    indices
}

proptest! {
    #[test]
    fn every_event_is_placed_once(timeline in timeline(), collapse in any::<bool>()) {
        let configs = ViewConfigs::default();
        let mut ui = ViewUiState::default();
        if collapse {
            ui.branch_states.collapse_all(&timeline.groups);
        }
        let expected: Vec<usize> = (0..timeline.events.len()).collect();
        for kind in ViewKind::ALL {
            let layout = compute_view(kind, &timeline, &configs, &ui);
            prop_assert_eq!(placed_indices(&layout), expected.clone(), "view {}", kind.name());
        }
    }

    #[test]
    fn layouts_are_deterministic(timeline in timeline(), ppy in 0.1f64..100.0) {
        let configs = ViewConfigs::default();
        let ui = ViewUiState { pixels_per_year: ppy, ..ViewUiState::default() };
        for kind in ViewKind::ALL {
            let a = compute_view(kind, &timeline, &configs, &ui);
            let b = compute_view(kind, &timeline.clone(), &configs.clone(), &ui.clone());
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn depth_values_stay_in_bounds(
        timeline in timeline(),
        exponent in 0.05f64..3.0,
        spread in -1.0f64..2.0,
    ) {
        let config = DepthConfig { exponent, lateral_spread: spread, ..DepthConfig::default() };
        let layout = layout_depth(&timeline, &config, kurbo::Size::new(1200.0, 800.0));
        for card in &layout.events {
            prop_assert!((0.0..=1.0).contains(&card.normalized_depth));
            prop_assert!((0.0..=1.0).contains(&card.curved_depth));
            prop_assert!((-1.0..=1.0).contains(&card.lateral_position));
            prop_assert!(card.scale >= config.min_scale && card.scale <= config.max_scale);
            prop_assert!((0..=1000).contains(&card.z_index));
        }
        prop_assert!(layout.events.windows(2).all(|w| w[0].normalized_depth >= w[1].normalized_depth));
    }

    #[test]
    fn bays_are_contiguous(timeline in timeline(), threshold in 0.0f64..200.0, max in 1usize..10) {
        let config = CorridorConfig {
            gap_threshold_years: threshold,
            max_events_per_bay: max,
            ..CorridorConfig::default()
        };
        let layout = layout_corridor(&timeline, &config);
        let sorted: Vec<usize> = chronological(&timeline.events).iter().map(|d| d.index).collect();
        let in_bay_order: Vec<usize> = layout.bays.iter().flat_map(|b| b.events.iter().copied()).collect();
        prop_assert_eq!(in_bay_order, sorted);
        for pair in layout.bays.windows(2) {
            prop_assert!(pair[0].right() < pair[1].x_position);
            prop_assert!(pair[1].gap_from_previous.is_some());
            prop_assert!(pair[0].start_date.decimal_year <= pair[1].start_date.decimal_year);
        }
        for bay in &layout.bays {
            prop_assert!(bay.events.len() <= max);
            prop_assert!(bay.width >= config.min_bay_width && bay.width <= config.max_bay_width);
        }
    }

    #[test]
    fn tree_and_shelf_extents_are_finite(timeline in timeline(), ppy in -10.0f64..1e6) {
        let tree_config = TreeConfig::default();
        let tree = tempora_layout::layout_tree(&timeline, &tree_config, ppy, &BranchStates::new());
        prop_assert!(tree.total_height.is_finite() && tree.total_height >= 0.0);
        prop_assert!(tree.pixels_per_year >= tree_config.zoom_min && tree.pixels_per_year <= tree_config.zoom_max);

        let shelf_config = ShelfConfig::default();
        let shelf = tempora_layout::layout_shelf(&timeline, &shelf_config, None);
        for book in &shelf.books {
            prop_assert!(book.width >= shelf_config.min_spine_width && book.width <= shelf_config.max_spine_width);
            prop_assert_eq!(book.start_year.rem_euclid(shelf.segment_size), 0);
        }
    }
}
