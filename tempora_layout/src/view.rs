// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One entry point for every view, plus an optional single-slot cache.

use kurbo::Size;
use tempora_timeline::Timeline;

use crate::corridor::{CorridorConfig, CorridorLayout, layout_corridor};
use crate::depth::{DepthConfig, DepthLayout, layout_depth};
use crate::shelf::{ShelfConfig, ShelfLayout, layout_shelf};
use crate::tree::{BranchStates, TreeConfig, TreeLayout, layout_tree};

/// The spatial metaphors a timeline can be shown as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewKind {
    /// Trunk and branches growing upwards.
    Tree,
    /// Perspective road towards a vanishing point.
    Depth,
    /// Exhibit bays along a corridor.
    Corridor,
    /// Books on a shelf.
    Shelf,
}

impl ViewKind {
    /// Every view, in menu order.
    pub const ALL: [Self; 4] = [Self::Tree, Self::Depth, Self::Corridor, Self::Shelf];

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Depth => "depth",
            Self::Corridor => "corridor",
            Self::Shelf => "shelf",
        }
    }

    /// Looks a view up by [`ViewKind::name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Configuration of every view.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewConfigs {
    /// Tree view.
    pub tree: TreeConfig,
    /// Depth view.
    pub depth: DepthConfig,
    /// Corridor view.
    pub corridor: CorridorConfig,
    /// Shelf view.
    pub shelf: ShelfConfig,
}

/// User-controlled state that feeds the layouts.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewUiState {
    /// Collapsed tree branches.
    pub branch_states: BranchStates,
    /// Tree zoom.
    pub pixels_per_year: f64,
    /// Size of the area the view is drawn in.
    pub viewport: Size,
    /// Start year of the open shelf book.
    pub open_book: Option<i32>,
}

impl Default for ViewUiState {
    fn default() -> Self {
        Self {
            branch_states: BranchStates::new(),
            pixels_per_year: TreeConfig::default().default_pixels_per_year,
            viewport: Size::new(1280.0, 800.0),
            open_book: None,
        }
    }
}

/// Output of [`compute_view`].
#[derive(Clone, Debug, PartialEq)]
pub enum ViewLayout {
    /// See [`layout_tree`].
    Tree(TreeLayout),
    /// See [`layout_depth`].
    Depth(DepthLayout),
    /// See [`layout_corridor`].
    Corridor(CorridorLayout),
    /// See [`layout_shelf`].
    Shelf(ShelfLayout),
}

impl ViewLayout {
    /// The view this layout belongs to.
    #[must_use]
    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Tree(_) => ViewKind::Tree,
            Self::Depth(_) => ViewKind::Depth,
            Self::Corridor(_) => ViewKind::Corridor,
            Self::Shelf(_) => ViewKind::Shelf,
        }
    }

    /// Returns `true` if no event was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Tree(layout) => layout.is_empty(),
            Self::Depth(layout) => layout.is_empty(),
            Self::Corridor(layout) => layout.is_empty(),
            Self::Shelf(layout) => layout.is_empty(),
        }
    }

    /// Number of events placed, hidden ones included.
    #[must_use]
    pub fn placed_events(&self) -> usize {
        match self {
            Self::Tree(layout) => {
                layout.trunk_nodes.len()
                    + layout.branches.iter().map(|b| b.nodes.len()).sum::<usize>()
            }
            Self::Depth(layout) => layout.events.len(),
            Self::Corridor(layout) => layout.bays.iter().map(|b| b.events.len()).sum(),
            Self::Shelf(layout) => layout.books.iter().map(|b| b.chapters.len()).sum(),
        }
    }
}

/// Lays out `timeline` for one view.
#[must_use]
pub fn compute_view(
    kind: ViewKind,
    timeline: &Timeline,
    configs: &ViewConfigs,
    ui: &ViewUiState,
) -> ViewLayout {
    match kind {
        ViewKind::Tree => ViewLayout::Tree(layout_tree(
            timeline,
            &configs.tree,
            ui.pixels_per_year,
            &ui.branch_states,
        )),
        ViewKind::Depth => ViewLayout::Depth(layout_depth(timeline, &configs.depth, ui.viewport)),
        ViewKind::Corridor => ViewLayout::Corridor(layout_corridor(timeline, &configs.corridor)),
        ViewKind::Shelf => ViewLayout::Shelf(layout_shelf(timeline, &configs.shelf, ui.open_book)),
    }
}

/// What a cached layout was computed from.
///
/// The caller bumps `data_revision` when the timeline or configuration
/// changes, and `ui_revision` when [`ViewUiState`] changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutKey {
    /// View.
    pub kind: ViewKind,
    /// Revision of the timeline and configuration.
    pub data_revision: u64,
    /// Revision of the UI state.
    pub ui_revision: u64,
}

/// Remembers the last layout and recomputes only when the key changes.
#[derive(Clone, Debug, Default)]
pub struct LayoutCache {
    entry: Option<(LayoutKey, ViewLayout)>,
}

impl LayoutCache {
    /// An empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the layout for `key`, computing it if the cached key differs.
    pub fn get_or_compute(
        &mut self,
        key: LayoutKey,
        timeline: &Timeline,
        configs: &ViewConfigs,
        ui: &ViewUiState,
    ) -> &ViewLayout {
        if !matches!(&self.entry, Some((cached, _)) if *cached == key) {
            self.entry = None;
        }
        let (_, layout) = self
            .entry
            .get_or_insert_with(|| (key, compute_view(key.kind, timeline, configs, ui)));
        layout
    }

    /// Key of the cached layout.
    #[must_use]
    pub fn cached_key(&self) -> Option<LayoutKey> {
        self.entry.as_ref().map(|(key, _)| *key)
    }

    /// Drops the cached layout.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
