// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perspective road layout: recent events near the viewer, old ones towards
//! the horizon.
//!
//! Each event's depth is its distance from the most recent year, normalized
//! over the dataset's span: `0` is the newest event, `1` the oldest. A power
//! curve with an exponent below one then spends more of the road on recent
//! history, and the curved depth drives both the screen height (from the
//! near edge up to the vanishing point) and the card scale.
//!
//! Cards are spread sideways by a hash of their category and index. The
//! spread has no meaning; it only keeps cards from stacking and is stable
//! for a given event list.

use alloc::vec::Vec;

use kurbo::{Point, Size};
use tempora_timeline::{Timeline, YearRange, chronological};

use crate::ticks::{TickSpacing, year_ticks};
use crate::{ceil_year, floor_year};

/// Parameters of the perspective layout.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DepthConfig {
    /// Power applied to the normalized depth; values below one favour recent years.
    pub exponent: f64,
    /// Vanishing point height, as a fraction of the viewport height.
    pub vanishing_y: f64,
    /// Near edge height, as a fraction of the viewport height.
    pub near_y: f64,
    /// Card scale at the vanishing point.
    pub min_scale: f64,
    /// Card scale at the near edge.
    pub max_scale: f64,
    /// Fraction of the road's half width used for lateral spread.
    pub lateral_spread: f64,
    /// Road half width at the near edge, as a fraction of the viewport width.
    pub near_half_width: f64,
    /// Road half width at the vanishing point, as a fraction of the viewport width.
    pub far_half_width: f64,
    /// Z index of the nearest card.
    pub z_range: f64,
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            exponent: 0.7,
            vanishing_y: 0.15,
            near_y: 0.95,
            min_scale: 0.3,
            max_scale: 1.0,
            lateral_spread: 0.85,
            near_half_width: 0.45,
            far_half_width: 0.04,
            z_range: 1000.0,
        }
    }
}

impl DepthConfig {
    /// Applies the power curve to a normalized depth.
    ///
    /// The exponent falls back to `1` when it is not a positive number.
    #[must_use]
    pub fn curve(&self, depth: f64) -> f64 {
        let exponent = if self.exponent.is_finite() && self.exponent > 0.0 {
            self.exponent
        } else {
            1.0
        };
        let depth = if depth.is_nan() { 0.0 } else { depth.clamp(0.0, 1.0) };
        libm::pow(depth, exponent).clamp(0.0, 1.0)
    }

    /// Card scale at a curved depth, between `min_scale` and `max_scale`.
    #[must_use]
    pub fn scale_at(&self, curved: f64) -> f64 {
        let (lo, hi) = if self.min_scale <= self.max_scale {
            (self.min_scale, self.max_scale)
        } else {
            (self.max_scale, self.min_scale)
        };
        lerp(self.max_scale, self.min_scale, curved).clamp(lo, hi)
    }
}

/// Road outline on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoadGeometry {
    /// Point where the road meets the horizon.
    pub vanishing_point: Point,
    /// Left corner of the near edge.
    pub near_left: Point,
    /// Right corner of the near edge.
    pub near_right: Point,
    /// Half width of the road at the vanishing point.
    pub far_half_width: f64,
}

impl RoadGeometry {
    /// Road for a viewport.
    #[must_use]
    pub fn new(config: &DepthConfig, viewport: Size) -> Self {
        let center_x = viewport.width * 0.5;
        let near_y = config.near_y * viewport.height;
        let near_half = config.near_half_width * viewport.width;
        Self {
            vanishing_point: Point::new(center_x, config.vanishing_y * viewport.height),
            near_left: Point::new(center_x - near_half, near_y),
            near_right: Point::new(center_x + near_half, near_y),
            far_half_width: config.far_half_width * viewport.width,
        }
    }

    /// Horizontal center of the road.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.vanishing_point.x
    }

    /// Screen height at a curved depth.
    #[must_use]
    pub fn y_at(&self, curved: f64) -> f64 {
        lerp(self.near_left.y, self.vanishing_point.y, curved)
    }

    /// Road half width at a curved depth.
    #[must_use]
    pub fn half_width_at(&self, curved: f64) -> f64 {
        let near_half = (self.near_right.x - self.near_left.x) * 0.5;
        lerp(near_half, self.far_half_width, curved)
    }

    /// Screen point for a curved depth and a lateral position in `[-1, 1]`.
    #[must_use]
    pub fn point_at(&self, curved: f64, lateral: f64) -> Point {
        Point::new(
            self.center_x() + lateral * self.half_width_at(curved),
            self.y_at(curved),
        )
    }
}

/// A positioned event card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthRoadEvent {
    /// Index into [`Timeline::events`].
    pub event: usize,
    /// Decimal start year.
    pub year: f64,
    /// `0` for the newest event, `1` for the oldest.
    pub normalized_depth: f64,
    /// Depth after the power curve.
    pub curved_depth: f64,
    /// Card scale.
    pub scale: f64,
    /// Sideways offset in `[-1, 1]`, relative to the road's half width.
    pub lateral_position: f64,
    /// Card anchor on screen.
    pub position: Point,
    /// Paint order; nearer cards have larger values.
    pub z_index: i32,
}

/// A year marker across the road.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthTick {
    /// Calendar year.
    pub year: i32,
    /// Normalized depth of the year.
    pub normalized_depth: f64,
    /// Screen height.
    pub y: f64,
    /// Label scale.
    pub scale: f64,
}

/// Output of [`layout_depth`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DepthLayout {
    /// Cards, farthest first.
    pub events: Vec<DepthRoadEvent>,
    /// Year markers, oldest first.
    pub ticks: Vec<DepthTick>,
    /// Years between markers.
    pub tick_interval: i32,
    /// Road outline; present even without events.
    pub road: RoadGeometry,
    /// Oldest start year.
    pub min_year: f64,
    /// Newest start year.
    pub max_year: f64,
}

impl DepthLayout {
    /// Returns `true` if there are no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Years between depth ticks for a span of years.
#[must_use]
pub fn tick_interval(span_years: f64) -> i32 {
    if span_years <= 100.0 {
        10
    } else if span_years <= 500.0 {
        50
    } else if span_years <= 5_000.0 {
        100
    } else {
        1_000
    }
}

/// 32-bit FNV-1a over the category bytes followed by the index.
fn lateral_hash(kind: &str, index: usize) -> u32 {
    const OFFSET: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;
    kind.bytes()
        .chain((index as u64).to_le_bytes())
        .fold(OFFSET, |hash, byte| (hash ^ u32::from(byte)).wrapping_mul(PRIME))
}

/// Stable sideways position in `[-1, 1]` before spreading.
#[must_use]
pub fn lateral_unit(kind: &str, index: usize) -> f64 {
    f64::from(lateral_hash(kind, index)) / f64::from(u32::MAX) * 2.0 - 1.0
}

/// Lays out `timeline` along a perspective road in `viewport`.
#[must_use]
pub fn layout_depth(timeline: &Timeline, config: &DepthConfig, viewport: Size) -> DepthLayout {
    let road = RoadGeometry::new(config, viewport);
    let dated = chronological(&timeline.events);
    let Some(range) = YearRange::of_starts(&dated) else {
        return DepthLayout {
            road,
            ..DepthLayout::default()
        };
    };

    let total_years = range.total_years();
    let depth_of = |year: f64| {
        if range.is_degenerate() {
            0.0
        } else {
            ((range.max - year) / total_years).clamp(0.0, 1.0)
        }
    };
    let spread = if config.lateral_spread.is_nan() {
        0.0
    } else {
        config.lateral_spread.clamp(0.0, 1.0)
    };

    let mut events: Vec<DepthRoadEvent> = dated
        .iter()
        .map(|dated| {
            let year = dated.start.decimal_year;
            let normalized_depth = depth_of(year);
            let curved_depth = config.curve(normalized_depth);
            let lateral_position =
                (lateral_unit(&dated.event.kind, dated.index) * spread).clamp(-1.0, 1.0);
            DepthRoadEvent {
                event: dated.index,
                year,
                normalized_depth,
                curved_depth,
                scale: config.scale_at(curved_depth),
                lateral_position,
                position: road.point_at(curved_depth, lateral_position),
                z_index: z_index(normalized_depth, config.z_range),
            }
        })
        .collect();
    // `sort_by` is stable.
    events.sort_by(|a, b| b.normalized_depth.total_cmp(&a.normalized_depth));

    let interval = tick_interval(range.max - range.min);
    let first = ceil_year(range.min);
    let last = floor_year(range.max);
    let ticks = if first <= last {
        year_ticks(first, last, TickSpacing::new(interval, interval), |_| 0.0)
            .into_iter()
            .map(|tick| {
                let normalized_depth = depth_of(f64::from(tick.year));
                let curved = config.curve(normalized_depth);
                DepthTick {
                    year: tick.year,
                    normalized_depth,
                    y: road.y_at(curved),
                    scale: config.scale_at(curved),
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    DepthLayout {
        events,
        ticks,
        tick_interval: interval,
        road,
        min_year: range.min,
        max_year: range.max,
    }
}

fn z_index(depth: f64, z_range: f64) -> i32 {
    let z = libm::round((1.0 - depth) * z_range);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Float-to-int casts saturate; z ranges are small"
    )]
    {
        z as i32
    }
}

/// Exact at both ends: `t = 0` gives `from`, `t = 1` gives `to`.
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}
