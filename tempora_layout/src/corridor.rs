// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Museum corridor layout: events grouped into exhibit bays along a
//! horizontally scrolling wall.
//!
//! Chronologically sorted events are split into contiguous bays. A new bay
//! starts when either
//! - the next event starts at least `gap_threshold_years` after the current
//!   bay's end, or
//! - the current bay already holds `max_events_per_bay` events.
//!
//! A bay's end is the running maximum of its members' ends (an event without
//! an end date ends where it starts). Long silences between bays become
//! wider walls, but only with the square root of the gap and never beyond
//! `max_gap`, so millennia of nothing do not push the next bay off screen.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;
use tempora_date::{ParsedDate, format_year};
use tempora_timeline::{DatedEvent, Timeline, chronological};

/// Parameters of the corridor layout.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CorridorConfig {
    /// Years of silence that close a bay.
    pub gap_threshold_years: f64,
    /// Largest number of events in one bay.
    pub max_events_per_bay: usize,
    /// Bays with at most this many events can be compact.
    pub compact_max_events: usize,
    /// Bays spanning at most this many years can be compact.
    pub compact_max_span: f64,
    /// Bays with at least this many events are expanded.
    pub expanded_min_events: usize,
    /// Bays spanning at least this many years are expanded.
    pub expanded_min_span: f64,
    /// Base width of a compact bay.
    pub compact_width: f64,
    /// Base width of a standard bay.
    pub standard_width: f64,
    /// Base width of an expanded bay.
    pub expanded_width: f64,
    /// Width added for every event after the first.
    pub per_event_width: f64,
    /// Narrowest bay.
    pub min_bay_width: f64,
    /// Widest bay.
    pub max_bay_width: f64,
    /// Fixed part of the wall between bays.
    pub gap_base: f64,
    /// Wall width per square-rooted year of silence.
    pub gap_scale: f64,
    /// Widest wall between bays.
    pub max_gap: f64,
    /// Space before the first and after the last bay.
    pub padding: f64,
}

impl Default for CorridorConfig {
    fn default() -> Self {
        Self {
            gap_threshold_years: 15.0,
            max_events_per_bay: 8,
            compact_max_events: 2,
            compact_max_span: 5.0,
            expanded_min_events: 6,
            expanded_min_span: 30.0,
            compact_width: 280.0,
            standard_width: 420.0,
            expanded_width: 560.0,
            per_event_width: 80.0,
            min_bay_width: 280.0,
            max_bay_width: 900.0,
            gap_base: 40.0,
            gap_scale: 12.0,
            max_gap: 240.0,
            padding: 80.0,
        }
    }
}

impl CorridorConfig {
    /// Size class for a bay of `count` events spanning `span` years.
    #[must_use]
    pub fn size_class(&self, count: usize, span: f64) -> BaySize {
        if count <= self.compact_max_events && span <= self.compact_max_span {
            BaySize::Compact
        } else if count >= self.expanded_min_events || span >= self.expanded_min_span {
            BaySize::Expanded
        } else {
            BaySize::Standard
        }
    }

    /// Width of a bay, clamped to `[min_bay_width, max_bay_width]`.
    #[must_use]
    pub fn bay_width(&self, size: BaySize, count: usize) -> f64 {
        let base = match size {
            BaySize::Compact => self.compact_width,
            BaySize::Standard => self.standard_width,
            BaySize::Expanded => self.expanded_width,
        };
        let extra = count_f64(count.saturating_sub(1)) * self.per_event_width;
        let (lo, hi) = ordered(self.min_bay_width, self.max_bay_width);
        (base + extra).clamp(lo, hi)
    }

    /// Wall width for `years` of silence between two bays.
    #[must_use]
    pub fn gap_width(&self, years: f64) -> f64 {
        let years = if years.is_nan() { 0.0 } else { years.max(0.0) };
        (self.gap_base + self.gap_scale * libm::sqrt(years)).min(self.max_gap)
    }
}

/// Visual size of a bay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaySize {
    /// Few events over a short span.
    Compact,
    /// Everything in between.
    Standard,
    /// Many events or a long span.
    Expanded,
}

/// A group of chronologically adjacent events.
#[derive(Clone, Debug, PartialEq)]
pub struct ExhibitBay {
    /// `"bay-{index}"`.
    pub id: String,
    /// Indices into [`Timeline::events`], in chronological order.
    pub events: SmallVec<[usize; 8]>,
    /// Start of the earliest member.
    pub start_date: ParsedDate,
    /// Latest end of any member.
    pub end_date: ParsedDate,
    /// Year or year range shown over the bay.
    pub label: String,
    /// Size class.
    pub size_class: BaySize,
    /// `end_date - start_date` in decimal years.
    pub year_span: f64,
    /// Years between the previous bay's end and this bay's start; `None` for
    /// the first bay.
    pub gap_from_previous: Option<f64>,
    /// Left edge.
    pub x_position: f64,
    /// Width.
    pub width: f64,
}

impl ExhibitBay {
    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x_position + self.width
    }
}

/// Output of [`layout_corridor`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CorridorLayout {
    /// Bays from left to right.
    pub bays: Vec<ExhibitBay>,
    /// Right edge of the last bay plus padding; zero without bays.
    pub total_width: f64,
}

impl CorridorLayout {
    /// Returns `true` if there are no bays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bays.is_empty()
    }

    /// Index of the bay holding `event`.
    #[must_use]
    pub fn bay_of(&self, event: usize) -> Option<usize> {
        self.bays.iter().position(|bay| bay.events.contains(&event))
    }

    /// Index of the bay under the center of a viewport scrolled to `scroll_x`.
    ///
    /// When the center falls on a wall, the nearest bay wins.
    #[must_use]
    pub fn active_bay_at(&self, scroll_x: f64, viewport_width: f64) -> Option<usize> {
        let center = scroll_x + viewport_width * 0.5;
        let distance = |bay: &ExhibitBay| {
            if center < bay.x_position {
                bay.x_position - center
            } else if center > bay.right() {
                center - bay.right()
            } else {
                0.0
            }
        };
        self.bays
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| distance(a).total_cmp(&distance(b)))
            .map(|(index, _)| index)
    }
}

struct OpenBay<'a> {
    events: SmallVec<[&'a DatedEvent<'a>; 8]>,
    end: ParsedDate,
}

/// Splits sorted events into bays by the gap and size rules.
fn partition<'a>(dated: &'a [DatedEvent<'a>], config: &CorridorConfig) -> Vec<OpenBay<'a>> {
    let max_events = config.max_events_per_bay.max(1);
    let mut bays: Vec<OpenBay<'a>> = Vec::new();
    for event in dated {
        let end = if event.end.decimal_year > event.start.decimal_year {
            event.end
        } else {
            event.start
        };
        match bays.last_mut() {
            Some(bay)
                if bay.events.len() < max_events
                    && event.start.decimal_year - bay.end.decimal_year
                        < config.gap_threshold_years =>
            {
                bay.events.push(event);
                if end.decimal_year > bay.end.decimal_year {
                    bay.end = end;
                }
            }
            _ => bays.push(OpenBay {
                events: SmallVec::from_elem(event, 1),
                end,
            }),
        }
    }
    bays
}

fn bay_label(start: &ParsedDate, end: &ParsedDate) -> String {
    if start.year == end.year {
        format!("{}", format_year(start.year))
    } else {
        format!("{}–{}", format_year(start.year), format_year(end.year))
    }
}

/// Lays out `timeline` as a corridor of exhibit bays.
#[must_use]
pub fn layout_corridor(timeline: &Timeline, config: &CorridorConfig) -> CorridorLayout {
    let dated = chronological(&timeline.events);
    let open = partition(&dated, config);
    if open.is_empty() {
        return CorridorLayout::default();
    }

    let mut bays = Vec::with_capacity(open.len());
    let mut x = config.padding;
    let mut previous_end: Option<f64> = None;
    for (index, bay) in open.into_iter().enumerate() {
        let Some(first) = bay.events.first() else {
            continue;
        };
        let start_date = first.start;
        let end_date = bay.end;
        let year_span = end_date.decimal_year - start_date.decimal_year;
        let count = bay.events.len();

        let gap_from_previous =
            previous_end.map(|end| (start_date.decimal_year - end).max(0.0));
        if let Some(years) = gap_from_previous {
            x += config.gap_width(years);
        }

        let size_class = config.size_class(count, year_span);
        let width = config.bay_width(size_class, count);
        bays.push(ExhibitBay {
            id: format!("bay-{index}"),
            events: bay.events.iter().map(|e| e.index).collect(),
            start_date,
            end_date,
            label: bay_label(&start_date, &end_date),
            size_class,
            year_span,
            gap_from_previous,
            x_position: x,
            width,
        });
        x += width;
        previous_end = Some(end_date.decimal_year);
    }

    CorridorLayout {
        bays,
        total_width: x + config.padding,
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

fn count_f64(count: usize) -> f64 {
    count as f64
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use tempora_timeline::TimelineEvent;

    use super::*;

    fn at_years(years: &[&str]) -> Timeline {
        Timeline::new(
            years
                .iter()
                .enumerate()
                .map(|(i, y)| TimelineEvent::new(format!("e{i}"), "misc", *y))
                .collect(),
            vec![],
        )
    }

    #[test]
    fn gap_threshold_splits_bays() {
        let layout = layout_corridor(
            &at_years(&["1900", "1905", "1950", "1955"]),
            &CorridorConfig::default(),
        );
        assert_eq!(layout.bays.len(), 2);
        assert_eq!(layout.bays[0].events.as_slice(), [0, 1]);
        assert_eq!(layout.bays[1].events.as_slice(), [2, 3]);
        assert_eq!(layout.bays[0].gap_from_previous, None);
        assert_eq!(layout.bays[1].gap_from_previous, Some(45.0));
        assert_eq!(layout.bays[1].id, "bay-1");
        assert_eq!(layout.bays[0].label, "1900–1905");
    }

    #[test]
    fn max_events_splits_bays() {
        let years: Vec<String> = (0..10).map(|i| format!("{}", 2000 + i)).collect();
        let refs: Vec<&str> = years.iter().map(String::as_str).collect();
        let config = CorridorConfig {
            max_events_per_bay: 4,
            ..CorridorConfig::default()
        };
        let layout = layout_corridor(&at_years(&refs), &config);
        let sizes: Vec<usize> = layout.bays.iter().map(|b| b.events.len()).collect();
        assert_eq!(sizes, [4, 4, 2]);
        assert_eq!(layout.bays[1].gap_from_previous, Some(1.0));
    }

    #[test]
    fn long_event_extends_bay_end() {
        let timeline = Timeline::new(
            vec![
                TimelineEvent::new("war", "war", "1900").with_end("1930"),
                TimelineEvent::new("short", "misc", "1902"),
                TimelineEvent::new("later", "misc", "1940"),
            ],
            vec![],
        );
        let layout = layout_corridor(&timeline, &CorridorConfig::default());
        assert_eq!(layout.bays.len(), 1, "1940 is within 15 years of 1930");
        assert_eq!(layout.bays[0].end_date.year, 1940);
    }

    #[test]
    fn widths_are_clamped_and_classed() {
        let config = CorridorConfig::default();
        assert_eq!(config.size_class(1, 0.0), BaySize::Compact);
        assert_eq!(config.size_class(3, 2.0), BaySize::Standard);
        assert_eq!(config.size_class(2, 40.0), BaySize::Expanded);
        assert_eq!(config.size_class(7, 1.0), BaySize::Expanded);
        assert_eq!(config.bay_width(BaySize::Compact, 1), config.min_bay_width);
        assert_eq!(config.bay_width(BaySize::Expanded, 100), config.max_bay_width);
        assert_eq!(config.bay_width(BaySize::Standard, 3), 420.0 + 160.0);
    }

    #[test]
    fn gaps_are_compressed_and_capped() {
        let config = CorridorConfig::default();
        assert_eq!(config.gap_width(0.0), config.gap_base);
        assert_eq!(config.gap_width(100.0), 40.0 + 120.0);
        assert_eq!(config.gap_width(1e9), config.max_gap);
        assert!(config.gap_width(50.0) < config.gap_width(60.0));
        assert_eq!(config.gap_width(f64::NAN), config.gap_base);
    }

    #[test]
    fn bays_are_positioned_left_to_right() {
        let config = CorridorConfig::default();
        let layout = layout_corridor(&at_years(&["1900", "1905", "1950", "1955"]), &config);
        let [a, b] = &layout.bays[..] else {
            panic!("expected two bays");
        };
        assert_eq!(a.x_position, config.padding);
        assert_eq!(b.x_position, a.right() + config.gap_width(45.0));
        assert_eq!(layout.total_width, b.right() + config.padding);
    }

    #[test]
    fn single_event_is_one_minimum_bay() {
        let config = CorridorConfig::default();
        let layout = layout_corridor(&at_years(&["-500"]), &config);
        assert_eq!(layout.bays.len(), 1);
        assert_eq!(layout.bays[0].width, config.min_bay_width);
        assert_eq!(layout.bays[0].label, "500 BCE");
        assert_eq!(layout.bays[0].gap_from_previous, None);
    }

    #[test]
    fn active_bay_follows_viewport_center() {
        let config = CorridorConfig::default();
        let layout = layout_corridor(&at_years(&["1900", "1905", "1950", "1955"]), &config);
        let second = &layout.bays[1];
        assert_eq!(layout.active_bay_at(0.0, 400.0), Some(0));
        assert_eq!(
            layout.active_bay_at(second.x_position, 2.0 * second.width),
            Some(1)
        );
        assert_eq!(layout.active_bay_at(1e9, 100.0), Some(1));
        assert_eq!(CorridorLayout::default().active_bay_at(0.0, 100.0), None);
        assert_eq!(layout.bay_of(3), Some(1));
    }

    #[test]
    fn no_events_no_bays() {
        let layout = layout_corridor(&Timeline::default(), &CorridorConfig::default());
        assert!(layout.is_empty());
        assert_eq!(layout.total_width, 0.0);
    }
}
