// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree growth layout: a vertical trunk with one branch per group.
//!
//! Time runs upwards. The earliest year sits at the bottom of the trunk and
//! every later event is placed higher, at
//! `total_height - (decimal_year - min_year) * pixels_per_year - padding`.
//!
//! Events without a group, or whose primary group is not part of the
//! timeline, grow on the trunk. Every other event sits on the branch of its
//! primary group. Branches alternate right and left of the trunk and move one
//! tier further out every second group, so neighbouring groups never overlap.
//!
//! ```
//! use tempora_layout::tree::{layout_tree, BranchStates, TreeConfig};
//! use tempora_timeline::{Timeline, TimelineEvent, TimelineGroup};
//!
//! let timeline = Timeline::new(
//!     vec![
//!         TimelineEvent::new("a", "war", "1900"),
//!         TimelineEvent::new("b", "war", "1950").in_group("g"),
//!     ],
//!     vec![TimelineGroup::new("g", "Group")],
//! );
//! let config = TreeConfig::default();
//! let layout = layout_tree(&timeline, &config, 2.0, &BranchStates::new());
//!
//! assert_eq!(layout.trunk_nodes.len(), 1);
//! assert_eq!(layout.branches[0].nodes.len(), 1);
//! assert_eq!(layout.total_height, 50.0 * 2.0 + 2.0 * config.padding);
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::{Point, QuadBez};
use peniko::color::{Rgba8, Srgb, parse_color};
use tempora_timeline::{DatedEvent, Timeline, TimelineGroup, YearRange, chronological};

use crate::palette::Palette;
use crate::ticks::{TickSpacing, YearTick, year_ticks};
use crate::{ceil_year, floor_year};

/// Parameters of the tree layout.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TreeConfig {
    /// Zoom used before the first auto-fit.
    pub default_pixels_per_year: f64,
    /// Smallest allowed pixels per year.
    pub zoom_min: f64,
    /// Largest allowed pixels per year.
    pub zoom_max: f64,
    /// Space above the latest and below the earliest year.
    pub padding: f64,
    /// Horizontal distance from the trunk to the innermost branches.
    pub branch_offset: f64,
    /// Extra horizontal distance per tier.
    pub branch_spacing: f64,
    /// Shortest vertical extent of a branch.
    pub min_branch_length: f64,
    /// Height of the stub shown for a collapsed branch.
    pub collapsed_height: f64,
    /// Vertical distance over which a branch curves out of the trunk.
    pub curve_rise: f64,
    /// Branch colors, used when a group carries no parseable color.
    #[cfg_attr(feature = "serde", serde(skip, default = "Palette::branches"))]
    pub palette: Palette,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            default_pixels_per_year: 10.0,
            zoom_min: 0.5,
            zoom_max: 50.0,
            padding: 100.0,
            branch_offset: 160.0,
            branch_spacing: 140.0,
            min_branch_length: 120.0,
            collapsed_height: 60.0,
            curve_rise: 80.0,
            palette: Palette::branches(),
        }
    }
}

impl TreeConfig {
    /// Clamps a zoom into `[zoom_min, zoom_max]`; NaN becomes `zoom_min`.
    #[must_use]
    pub fn clamp_zoom(&self, pixels_per_year: f64) -> f64 {
        let (lo, hi) = if self.zoom_min <= self.zoom_max {
            (self.zoom_min, self.zoom_max)
        } else {
            (self.zoom_max, self.zoom_min)
        };
        if pixels_per_year.is_nan() {
            lo
        } else {
            pixels_per_year.clamp(lo, hi)
        }
    }
}

/// Whether a branch shows its events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BranchState {
    /// Nodes are visible.
    #[default]
    Expanded,
    /// Nodes are hidden behind a count badge.
    Collapsed,
}

/// Per-branch collapse state, keyed by group id.
///
/// Branches are expanded unless recorded otherwise, so only collapsed ids are
/// stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BranchStates {
    collapsed: HashSet<String>,
}

impl BranchStates {
    /// All branches expanded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State of the branch for `group_id`.
    #[must_use]
    pub fn state(&self, group_id: &str) -> BranchState {
        if self.collapsed.contains(group_id) {
            BranchState::Collapsed
        } else {
            BranchState::Expanded
        }
    }

    /// Sets the state of one branch.
    pub fn set(&mut self, group_id: &str, state: BranchState) {
        match state {
            BranchState::Collapsed => {
                self.collapsed.insert(group_id.to_string());
            }
            BranchState::Expanded => {
                self.collapsed.remove(group_id);
            }
        }
    }

    /// Flips one branch and returns its new state.
    pub fn toggle(&mut self, group_id: &str) -> BranchState {
        let next = match self.state(group_id) {
            BranchState::Expanded => BranchState::Collapsed,
            BranchState::Collapsed => BranchState::Expanded,
        };
        self.set(group_id, next);
        next
    }

    /// Expands every branch.
    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }

    /// Collapses the branch of every group, replacing any previous state.
    pub fn collapse_all(&mut self, groups: &[TimelineGroup]) {
        self.collapsed.clear();
        self.collapsed
            .extend(groups.iter().map(|group| group.id.clone()));
    }

    /// Number of collapsed branches.
    #[must_use]
    pub fn collapsed_count(&self) -> usize {
        self.collapsed.len()
    }
}

/// Which side of the trunk a branch grows on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchSide {
    /// Even group indices.
    Right,
    /// Odd group indices.
    Left,
}

impl BranchSide {
    fn sign(self) -> f64 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }
}

/// A positioned event.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode {
    /// Index into [`Timeline::events`].
    pub event: usize,
    /// Center of the node.
    pub position: Point,
    /// Group id of the branch, `None` on the trunk.
    pub branch_id: Option<String>,
    /// Index of the branch in [`TreeLayout::branches`], `None` on the trunk.
    pub branch_index: Option<usize>,
}

/// Count badge drawn on a collapsed branch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BranchBadge {
    /// Center of the badge.
    pub position: Point,
    /// Number of hidden events.
    pub count: usize,
}

/// One group's branch.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeBranch {
    /// Position of the group in [`Timeline::groups`].
    pub index: usize,
    /// Group id.
    pub group_id: String,
    /// Group title.
    pub label: String,
    /// Side of the trunk.
    pub side: BranchSide,
    /// Distance tier, `index / 2`.
    pub tier: usize,
    /// Horizontal position of the branch line.
    pub x: f64,
    /// Lower end of the branch line.
    pub start_y: f64,
    /// Upper end of the branch line.
    pub end_y: f64,
    /// Connection from the trunk to `(x, start_y)`.
    pub curve: QuadBez,
    /// Branch color.
    pub color: Rgba8,
    /// Collapse state.
    pub state: BranchState,
    /// Every event of the branch, in chronological order.
    pub nodes: Vec<TreeNode>,
    /// Present when the branch is collapsed.
    pub badge: Option<BranchBadge>,
}

impl TreeBranch {
    /// Nodes to draw: all of them when expanded, none when collapsed.
    #[must_use]
    pub fn visible_nodes(&self) -> &[TreeNode] {
        match self.state {
            BranchState::Expanded => &self.nodes,
            BranchState::Collapsed => &[],
        }
    }
}

/// The vertical trunk.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Trunk {
    /// Horizontal position.
    pub x: f64,
    /// Bottom end, at the earliest year.
    pub base_y: f64,
    /// Top end, at the latest year.
    pub top_y: f64,
}

/// Output of [`layout_tree`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeLayout {
    /// Zoom the layout was computed at, after clamping.
    pub pixels_per_year: f64,
    /// Year at the trunk base.
    pub min_year: i32,
    /// Year at the trunk top.
    pub max_year: i32,
    /// Full content height; zero when there are no events.
    pub total_height: f64,
    /// Full content width; zero when there are no events.
    pub total_width: f64,
    /// Trunk geometry.
    pub trunk: Trunk,
    /// Events on the trunk, in chronological order.
    pub trunk_nodes: Vec<TreeNode>,
    /// One branch per group, in group order.
    pub branches: Vec<TreeBranch>,
    /// Year ruler along the trunk.
    pub ticks: Vec<YearTick>,
}

impl TreeLayout {
    /// Returns `true` if no event was laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trunk_nodes.is_empty() && self.branches.iter().all(|b| b.nodes.is_empty())
    }

    /// Vertical position of a decimal year.
    #[must_use]
    pub fn y_for(&self, decimal_year: f64) -> f64 {
        y_for(
            self.total_height,
            self.min_year,
            self.pixels_per_year,
            self.total_height - self.trunk.base_y,
            decimal_year,
        )
    }

    /// Finds the node of an event, visible or not.
    #[must_use]
    pub fn node(&self, event: usize) -> Option<&TreeNode> {
        self.trunk_nodes
            .iter()
            .chain(self.branches.iter().flat_map(|b| b.nodes.iter()))
            .find(|node| node.event == event)
    }
}

/// Tick spacing for a zoom: finer ticks as pixels per year grows.
#[must_use]
pub fn tick_spacing(pixels_per_year: f64) -> TickSpacing {
    if pixels_per_year < 2.0 {
        TickSpacing::new(50, 100)
    } else if pixels_per_year < 10.0 {
        TickSpacing::new(10, 50)
    } else {
        TickSpacing::new(1, 10)
    }
}

/// Whole years covered by the trunk: the range rounded outwards, at least one year.
fn year_bounds(range: &YearRange) -> (i32, i32) {
    let min_year = floor_year(range.min);
    let max_year = ceil_year(range.max).max(min_year.saturating_add(1));
    (min_year, max_year)
}

fn y_for(total_height: f64, min_year: i32, pixels_per_year: f64, padding: f64, year: f64) -> f64 {
    total_height - (year - f64::from(min_year)) * pixels_per_year - padding
}

/// Zoom that fits the whole range into `viewport_height`, clamped to the zoom bounds.
#[must_use]
pub fn auto_fit_pixels_per_year(range: &YearRange, viewport_height: f64, config: &TreeConfig) -> f64 {
    let (min_year, max_year) = year_bounds(range);
    let years = f64::from(max_year) - f64::from(min_year);
    let available = viewport_height - 2.0 * config.padding;
    config.clamp_zoom(available / years)
}

/// Runs [`auto_fit_pixels_per_year`] once per data revision.
///
/// Later zoom changes are left to the user until the data changes again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoFit {
    fitted_revision: Option<u64>,
}

impl AutoFit {
    /// A latch that has not fitted anything yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fitted zoom the first time it sees `data_revision`.
    ///
    /// Returns `None` for a revision that was already fitted, or for a
    /// timeline without events (which does not consume the revision).
    pub fn fit(
        &mut self,
        data_revision: u64,
        timeline: &Timeline,
        viewport_height: f64,
        config: &TreeConfig,
    ) -> Option<f64> {
        if self.fitted_revision == Some(data_revision) {
            return None;
        }
        let dated = chronological(&timeline.events);
        let range = YearRange::of_spans(&dated)?;
        self.fitted_revision = Some(data_revision);
        Some(auto_fit_pixels_per_year(&range, viewport_height, config))
    }

    /// Forgets the last fitted revision.
    pub fn reset(&mut self) {
        self.fitted_revision = None;
    }
}

fn group_color(group: &TimelineGroup, index: usize, palette: &Palette) -> Rgba8 {
    group
        .color
        .as_deref()
        .and_then(|css| parse_color(css).ok())
        .map(|color| color.to_alpha_color::<Srgb>().to_rgba8())
        .unwrap_or_else(|| palette.color(index))
}

/// Lays out `timeline` as a tree at `pixels_per_year`.
///
/// The zoom is clamped to the configured bounds. An empty timeline yields an
/// empty layout with zero height and width.
#[must_use]
pub fn layout_tree(
    timeline: &Timeline,
    config: &TreeConfig,
    pixels_per_year: f64,
    branch_states: &BranchStates,
) -> TreeLayout {
    let pixels_per_year = config.clamp_zoom(pixels_per_year);
    let dated = chronological(&timeline.events);
    let Some(range) = YearRange::of_spans(&dated) else {
        return TreeLayout {
            pixels_per_year,
            ..TreeLayout::default()
        };
    };

    let (min_year, max_year) = year_bounds(&range);
    let padding = config.padding;
    let total_height =
        (f64::from(max_year) - f64::from(min_year)) * pixels_per_year + 2.0 * padding;
    let y_of = |year: f64| y_for(total_height, min_year, pixels_per_year, padding, year);

    let groups = &timeline.groups;
    let outermost_tier = groups.len().saturating_sub(1) / 2;
    let reach = if groups.is_empty() {
        0.0
    } else {
        config.branch_offset + tier_f64(outermost_tier) * config.branch_spacing
    };
    let trunk = Trunk {
        x: padding + reach,
        base_y: total_height - padding,
        top_y: padding,
    };

    let mut trunk_nodes = Vec::new();
    let mut per_branch: Vec<Vec<&DatedEvent<'_>>> = groups.iter().map(|_| Vec::new()).collect();
    for event in &dated {
        let branch = event
            .event
            .primary_group_id()
            .and_then(|id| timeline.group_index(id));
        match branch {
            Some(index) => per_branch[index].push(event),
            None => trunk_nodes.push(TreeNode {
                event: event.index,
                position: Point::new(trunk.x, y_of(event.start.decimal_year)),
                branch_id: None,
                branch_index: None,
            }),
        }
    }

    let branches = groups
        .iter()
        .zip(per_branch)
        .enumerate()
        .map(|(index, (group, events))| {
            let side = if index % 2 == 0 {
                BranchSide::Right
            } else {
                BranchSide::Left
            };
            let tier = index / 2;
            let x = trunk.x
                + side.sign() * (config.branch_offset + tier_f64(tier) * config.branch_spacing);

            let nodes: Vec<TreeNode> = events
                .iter()
                .map(|event| TreeNode {
                    event: event.index,
                    position: Point::new(x, y_of(event.start.decimal_year)),
                    branch_id: Some(group.id.clone()),
                    branch_index: Some(index),
                })
                .collect();

            let start_y = nodes.first().map_or(trunk.base_y, |n| n.position.y);
            let latest_y = nodes.last().map_or(start_y, |n| n.position.y);
            let state = branch_states.state(&group.id);
            let (end_y, badge) = match state {
                BranchState::Expanded => {
                    (latest_y.min(start_y - config.min_branch_length), None)
                }
                BranchState::Collapsed => {
                    let end_y = start_y - config.collapsed_height;
                    let badge = BranchBadge {
                        position: Point::new(x, end_y),
                        count: nodes.len(),
                    };
                    (end_y, Some(badge))
                }
            };

            let root = Point::new(trunk.x, (start_y + config.curve_rise).min(trunk.base_y));
            let curve = QuadBez::new(root, Point::new(x, root.y), Point::new(x, start_y));

            TreeBranch {
                index,
                group_id: group.id.clone(),
                label: group.title.clone(),
                side,
                tier,
                x,
                start_y,
                end_y,
                curve,
                color: group_color(group, index, &config.palette),
                state,
                nodes,
                badge,
            }
        })
        .collect();

    let ticks = year_ticks(min_year, max_year, tick_spacing(pixels_per_year), |year| {
        y_of(f64::from(year))
    });

    TreeLayout {
        pixels_per_year,
        min_year,
        max_year,
        total_height,
        total_width: 2.0 * trunk.x,
        trunk,
        trunk_nodes,
        branches,
        ticks,
    }
}

fn tier_f64(tier: usize) -> f64 {
    tier as f64
}
