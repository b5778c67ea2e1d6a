// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Year ruler ticks shared by the tree and depth engines.

use alloc::vec::Vec;

/// Upper bound on ticks produced for one ruler; the step is widened tenfold
/// until the count fits.
const MAX_TICKS: i64 = 2_000;

/// One tick on a year ruler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YearTick {
    /// Calendar year of the tick.
    pub year: i32,
    /// Major ticks carry a label.
    pub major: bool,
    /// Position along the ruler axis, in the engine's coordinate space.
    pub position: f64,
}

/// Tick step and major step in years.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickSpacing {
    /// Years between consecutive ticks.
    pub step: i32,
    /// Years between labelled ticks; a multiple of `step`.
    pub major: i32,
}

impl TickSpacing {
    /// Creates a spacing; non-positive values are raised to one year.
    #[must_use]
    pub const fn new(step: i32, major: i32) -> Self {
        let step = if step < 1 { 1 } else { step };
        let major = if major < step { step } else { major };
        Self { step, major }
    }
}

/// Ticks for every multiple of `spacing.step` in `[min_year, max_year]`.
pub(crate) fn year_ticks(
    min_year: i32,
    max_year: i32,
    spacing: TickSpacing,
    mut position: impl FnMut(i32) -> f64,
) -> Vec<YearTick> {
    let (lo, hi) = if min_year <= max_year {
        (i64::from(min_year), i64::from(max_year))
    } else {
        (i64::from(max_year), i64::from(min_year))
    };
    let mut step = i64::from(spacing.step);
    let mut major = i64::from(spacing.major);
    while (hi - lo) / step + 1 > MAX_TICKS {
        step *= 10;
        major *= 10;
    }

    let mut ticks = Vec::new();
    let mut year = lo.div_euclid(step) * step;
    if year < lo {
        year += step;
    }
    while year <= hi {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "`year` lies within the i32 range [lo, hi]"
        )]
        let y = year as i32;
        ticks.push(YearTick {
            year: y,
            major: year.rem_euclid(major) == 0,
            position: position(y),
        });
        year += step;
    }
    ticks
}
