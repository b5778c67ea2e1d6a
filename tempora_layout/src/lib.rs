// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tempora Layout: turns a [`Timeline`](tempora_timeline::Timeline) into
//! positioned geometry for four spatial metaphors.
//!
//! | View | Module | Partition |
//! | --- | --- | --- |
//! | Tree growth | [`tree`] | trunk plus one branch per group |
//! | Perspective road | [`depth`] | none; every event is a card |
//! | Museum corridor | [`corridor`] | bays split by gaps and size |
//! | Library shelf | [`shelf`] | books of a density-chosen year span |
//!
//! Every engine is a pure function of the timeline, a plain configuration
//! record with defaults, and whatever UI state the view has (zoom, collapsed
//! branches, open book). Running it twice on the same input yields identical
//! output. Outputs refer to events by their index in
//! [`Timeline::events`](tempora_timeline::Timeline::events).
//!
//! Nothing here fails. Empty input gives an empty layout with zero extent, a
//! dataset whose events share one year is treated as spanning a single year,
//! and out-of-range parameters are clamped.
//!
//! ```
//! use tempora_layout::{ViewConfigs, ViewKind, ViewUiState, compute_view};
//! use tempora_timeline::{Timeline, TimelineEvent};
//!
//! let timeline = Timeline::new(
//!     vec![
//!         TimelineEvent::new("a", "misc", "1900"),
//!         TimelineEvent::new("b", "misc", "1905"),
//!         TimelineEvent::new("c", "misc", "1950"),
//!     ],
//!     vec![],
//! );
//! let layout = compute_view(
//!     ViewKind::Corridor,
//!     &timeline,
//!     &ViewConfigs::default(),
//!     &ViewUiState::default(),
//! );
//! assert_eq!(layout.placed_events(), 3);
//! ```
//!
//! Colors are [`Rgba8`](peniko::color::Rgba8) so layouts can be compared for
//! equality; convert with `Color::from_rgba8` when painting.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod corridor;
pub mod depth;
pub mod palette;
pub mod shelf;
pub mod ticks;
pub mod tree;
pub mod view;

pub use corridor::{BaySize, CorridorConfig, CorridorLayout, ExhibitBay, layout_corridor};
pub use depth::{DepthConfig, DepthLayout, DepthRoadEvent, RoadGeometry, layout_depth};
pub use palette::Palette;
pub use shelf::{Book, BookDensity, Chapter, ShelfConfig, ShelfLayout, layout_shelf};
pub use ticks::{TickSpacing, YearTick};
pub use tree::{
    AutoFit, BranchState, BranchStates, TreeBranch, TreeConfig, TreeLayout, TreeNode,
    auto_fit_pixels_per_year, layout_tree,
};
pub use view::{LayoutCache, LayoutKey, ViewConfigs, ViewKind, ViewLayout, ViewUiState, compute_view};

#[expect(
    clippy::cast_possible_truncation,
    reason = "Float-to-int casts saturate; parsed years fit in i32"
)]
pub(crate) fn floor_year(year: f64) -> i32 {
    libm::floor(year) as i32
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Float-to-int casts saturate; parsed years fit in i32"
)]
pub(crate) fn ceil_year(year: f64) -> i32 {
    libm::ceil(year) as i32
}
