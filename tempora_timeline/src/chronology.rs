// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use tempora_date::ParsedDate;

use crate::TimelineEvent;

/// An event paired with its parsed dates and its position in the input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DatedEvent<'a> {
    /// Index into the slice passed to [`chronological`].
    pub index: usize,
    /// The event itself.
    pub event: &'a TimelineEvent,
    /// Parsed start date.
    pub start: ParsedDate,
    /// Parsed end date; equal to `start` when the event has no end or the end
    /// date is unreadable.
    pub end: ParsedDate,
}

/// Parses every event's dates and sorts by start, keeping ties in input order.
#[must_use]
pub fn chronological(events: &[TimelineEvent]) -> Vec<DatedEvent<'_>> {
    let mut dated: Vec<DatedEvent<'_>> = events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let start = event.start();
            let end = match &event.date_end {
                Some(_) => {
                    let end = event.end();
                    if end.is_fallback() { start } else { end }
                }
                None => start,
            };
            DatedEvent {
                index,
                event,
                start,
                end,
            }
        })
        .collect();
    // `sort_by` is stable.
    dated.sort_by(|a, b| a.start.cmp_chronological(&b.start));
    dated
}

/// Closed span of decimal years covered by a set of events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YearRange {
    /// Earliest decimal year.
    pub min: f64,
    /// Latest decimal year.
    pub max: f64,
}

impl YearRange {
    /// Builds a range, swapping reversed bounds.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Range of the start dates, or `None` for no events.
    #[must_use]
    pub fn of_starts(events: &[DatedEvent<'_>]) -> Option<Self> {
        Self::fold(events.iter().map(|e| e.start.decimal_year))
    }

    /// Range covering both start and end dates, or `None` for no events.
    #[must_use]
    pub fn of_spans(events: &[DatedEvent<'_>]) -> Option<Self> {
        Self::fold(
            events
                .iter()
                .flat_map(|e| [e.start.decimal_year, e.end.decimal_year]),
        )
    }

    /// Range of the integer start years, or `None` for no events.
    #[must_use]
    pub fn of_start_years(events: &[DatedEvent<'_>]) -> Option<Self> {
        Self::fold(events.iter().map(|e| f64::from(e.start.year)))
    }

    fn fold(mut years: impl Iterator<Item = f64>) -> Option<Self> {
        let first = years.next()?;
        let (min, max) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
        Some(Self { min, max })
    }

    /// `max - min`, or `1.0` when the range is degenerate.
    ///
    /// Callers divide by this, so it is never zero.
    #[must_use]
    pub fn total_years(&self) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 { span } else { 1.0 }
    }

    /// Returns `true` if `min == max`.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }
}
