// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Library shelf layout: one book per populated span of years.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use peniko::color::Rgba8;
use tempora_date::format_year;
use tempora_timeline::{Timeline, YearRange, chronological};

use crate::palette::Palette;

/// Parameters of the shelf layout.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShelfConfig {
    /// `(minimum events per year, segment years)`, densest first.
    pub density_breakpoints: [(f64, i32); 3],
    /// Segment used below the last breakpoint.
    pub sparsest_segment: i32,
    /// Narrowest spine.
    pub min_spine_width: f64,
    /// Widest spine.
    pub max_spine_width: f64,
    /// Spine width added per event.
    pub chapter_width: f64,
    /// Spine width added for a book whose events cover its whole segment.
    pub coverage_width: f64,
    /// Space between neighbouring books.
    pub book_spacing: f64,
    /// Extra space reserved for a gap indicator.
    pub gap_indicator_width: f64,
    /// Gaps wider than this many segments get an indicator.
    pub gap_indicator_segments: f64,
    /// Books with at most this many events are sparse.
    pub sparse_max_events: usize,
    /// Books with at least this many events are dense.
    pub dense_min_events: usize,
    /// Space before the first and after the last book.
    pub padding: f64,
    /// Binding colors, cycled by book index.
    #[cfg_attr(feature = "serde", serde(skip, default = "Palette::books"))]
    pub palette: Palette,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            density_breakpoints: [(2.0, 5), (0.5, 10), (0.1, 25)],
            sparsest_segment: 50,
            min_spine_width: 36.0,
            max_spine_width: 120.0,
            chapter_width: 6.0,
            coverage_width: 24.0,
            book_spacing: 6.0,
            gap_indicator_width: 28.0,
            gap_indicator_segments: 1.0,
            sparse_max_events: 2,
            dense_min_events: 8,
            padding: 40.0,
            palette: Palette::books(),
        }
    }
}

impl ShelfConfig {
    /// Segment size for an average density in events per year.
    #[must_use]
    pub fn segment_size(&self, events_per_year: f64) -> i32 {
        self.density_breakpoints
            .iter()
            .find(|(min_density, _)| events_per_year >= *min_density)
            .map_or(self.sparsest_segment, |(_, years)| *years)
            .max(1)
    }

    /// Density class of a book holding `count` events.
    #[must_use]
    pub fn density(&self, count: usize) -> BookDensity {
        if count <= self.sparse_max_events {
            BookDensity::Sparse
        } else if count >= self.dense_min_events {
            BookDensity::Dense
        } else {
            BookDensity::Normal
        }
    }
}

/// How full a book is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BookDensity {
    /// Few events.
    Sparse,
    /// Typical.
    Normal,
    /// Many events.
    Dense,
}

/// An event marker on a book spine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chapter {
    /// Index into [`Timeline::events`].
    pub event: usize,
    /// Position of the event within the book's segment, in `[0, 1]`.
    pub relative_position: f64,
}

/// A populated segment of years.
#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    /// Position on the shelf.
    pub index: usize,
    /// First year of the segment, a multiple of the segment size.
    pub start_year: i32,
    /// First year after the segment.
    pub end_year: i32,
    /// Events of the segment, in chronological order.
    pub chapters: Vec<Chapter>,
    /// Spine width.
    pub width: f64,
    /// Left edge.
    pub x: f64,
    /// Binding color.
    pub color: Rgba8,
    /// Density class.
    pub density: BookDensity,
    /// Years since the previous book's start; `None` for the first book.
    pub gap_before: Option<i32>,
    /// Whether a gap indicator precedes the book.
    pub has_gap_indicator: bool,
    /// Whether the book is open.
    pub is_open: bool,
    /// Spine label.
    pub label: String,
}

/// Output of [`layout_shelf`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShelfLayout {
    /// Years per book.
    pub segment_size: i32,
    /// Events per year over the whole dataset.
    pub average_density: f64,
    /// Books from left to right.
    pub books: Vec<Book>,
    /// Right edge of the last book plus padding; zero without books.
    pub total_width: f64,
}

impl ShelfLayout {
    /// Returns `true` if there are no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The open book, if any.
    #[must_use]
    pub fn open_book(&self) -> Option<&Book> {
        self.books.iter().find(|book| book.is_open)
    }

    /// Index of the book holding `event`.
    #[must_use]
    pub fn book_of(&self, event: usize) -> Option<usize> {
        self.books
            .iter()
            .position(|book| book.chapters.iter().any(|c| c.event == event))
    }
}

/// Lays out `timeline` as a shelf of books.
///
/// `open_book` is the start year of the book shown open, if any.
#[must_use]
pub fn layout_shelf(timeline: &Timeline, config: &ShelfConfig, open_book: Option<i32>) -> ShelfLayout {
    let dated = chronological(&timeline.events);
    let Some(range) = YearRange::of_start_years(&dated) else {
        return ShelfLayout::default();
    };
    let average_density = count_f64(dated.len()) / range.total_years();
    let segment = config.segment_size(average_density);
    let segment_years = f64::from(segment);

    let mut books: Vec<Book> = Vec::new();
    let mut spans: Vec<(f64, f64)> = Vec::new();
    for event in &dated {
        let start_year = event.start.year.div_euclid(segment) * segment;
        let book_start = f64::from(start_year);
        let chapter = Chapter {
            event: event.index,
            relative_position: ((event.start.decimal_year - book_start) / segment_years)
                .clamp(0.0, 1.0),
        };
        let end = event.end.decimal_year.max(event.start.decimal_year);
        match books.last_mut().zip(spans.last_mut()) {
            Some((book, span)) if book.start_year == start_year => {
                book.chapters.push(chapter);
                span.1 = span.1.max(end);
            }
            _ => {
                books.push(Book {
                    index: books.len(),
                    start_year,
                    end_year: start_year.saturating_add(segment),
                    chapters: Vec::from([chapter]),
                    width: 0.0,
                    x: 0.0,
                    color: config.palette.color(books.len()),
                    density: BookDensity::Sparse,
                    gap_before: None,
                    has_gap_indicator: false,
                    is_open: open_book == Some(start_year),
                    label: format!(
                        "{}–{}",
                        format_year(start_year),
                        format_year(start_year.saturating_add(segment - 1))
                    ),
                });
                spans.push((event.start.decimal_year, end));
            }
        }
    }

    let (min_spine, max_spine) = if config.min_spine_width <= config.max_spine_width {
        (config.min_spine_width, config.max_spine_width)
    } else {
        (config.max_spine_width, config.min_spine_width)
    };
    let mut x = config.padding;
    let mut previous_start: Option<i32> = None;
    for (book, (first, last)) in books.iter_mut().zip(&spans) {
        let count = book.chapters.len();
        let coverage = ((last - first) / segment_years).clamp(0.0, 1.0);
        book.width = (min_spine
            + count_f64(count) * config.chapter_width
            + coverage * config.coverage_width)
            .clamp(min_spine, max_spine);
        book.density = config.density(count);

        if let Some(previous) = previous_start {
            let gap = book.start_year.saturating_sub(previous);
            book.gap_before = Some(gap);
            book.has_gap_indicator =
                f64::from(gap) > segment_years * config.gap_indicator_segments;
            x += config.book_spacing;
            if book.has_gap_indicator {
                x += config.gap_indicator_width;
            }
        }
        book.x = x;
        x += book.width;
        previous_start = Some(book.start_year);
    }

    ShelfLayout {
        segment_size: segment,
        average_density,
        books,
        total_width: x + config.padding,
    }
}

fn count_f64(count: usize) -> f64 {
    count as f64
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use tempora_timeline::TimelineEvent;

    use super::*;

    fn events(dates: impl IntoIterator<Item = String>) -> Timeline {
        Timeline::new(
            dates
                .into_iter()
                .enumerate()
                .map(|(i, d)| TimelineEvent::new(format!("e{i}"), "misc", d))
                .collect(),
            vec![],
        )
    }

    #[test]
    fn density_breakpoints() {
        let config = ShelfConfig::default();
        assert_eq!(config.segment_size(10.0), 5);
        assert_eq!(config.segment_size(2.0), 5);
        assert_eq!(config.segment_size(1.0), 10);
        assert_eq!(config.segment_size(0.2), 25);
        assert_eq!(config.segment_size(0.05), 50);
        assert_eq!(config.segment_size(f64::NAN), 50);
    }

    #[test]
    fn dense_data_uses_five_year_books() {
        // 100 events over ten years.
        let timeline = events((0..100).map(|i| format!("{}", 2000 + i / 10)));
        let layout = layout_shelf(&timeline, &ShelfConfig::default(), None);
        assert_eq!(layout.segment_size, 5);
        assert_eq!(layout.books.len(), 2);
        assert_eq!(layout.books[0].start_year, 2000);
        assert_eq!(layout.books[0].chapters.len(), 50);
        assert_eq!(layout.books[0].density, BookDensity::Dense);
    }

    #[test]
    fn sparse_data_uses_fifty_year_books() {
        // 10 events over two hundred years.
        let timeline = events((0..10).map(|i| format!("{}", 1800 + i * 20)));
        let layout = layout_shelf(&timeline, &ShelfConfig::default(), None);
        assert_eq!(layout.segment_size, 50);
        let starts: Vec<i32> = layout.books.iter().map(|b| b.start_year).collect();
        assert_eq!(starts, [1800, 1850, 1900, 1950]);
    }

    #[test]
    fn bce_years_bucket_euclidean() {
        let timeline = events(["-1".into(), "-49".into(), "-51".into(), "49".into()]);
        let config = ShelfConfig {
            density_breakpoints: [(f64::INFINITY, 5); 3],
            ..ShelfConfig::default()
        };
        let layout = layout_shelf(&timeline, &config, None);
        let starts: Vec<i32> = layout.books.iter().map(|b| b.start_year).collect();
        assert_eq!(starts, [-100, -50, 0]);
        assert_eq!(layout.books[1].chapters.len(), 2);
        assert_eq!(layout.books[0].label, "100 BCE–51 BCE");
    }

    #[test]
    fn chapters_are_placed_within_segment() {
        let timeline = events(["1900".into(), "1925-07-02".into(), "1949-12-31".into()]);
        let layout = layout_shelf(&timeline, &ShelfConfig::default(), None);
        assert_eq!(layout.segment_size, 50);
        let book = &layout.books[0];
        assert_eq!(book.chapters[0].relative_position, 0.0);
        assert!((book.chapters[1].relative_position - 0.51).abs() < 0.01);
        assert!(book.chapters.iter().all(|c| (0.0..=1.0).contains(&c.relative_position)));
    }

    #[test]
    fn gaps_between_populated_books() {
        let timeline = events(["1800".into(), "1810".into(), "1990".into()]);
        let config = ShelfConfig::default();
        let layout = layout_shelf(&timeline, &config, None);
        assert_eq!(layout.segment_size, 50);
        let [a, b] = &layout.books[..] else {
            panic!("expected two books");
        };
        assert_eq!(a.gap_before, None);
        assert_eq!(b.gap_before, Some(150));
        assert!(b.has_gap_indicator);
        assert_eq!(
            b.x,
            a.x + a.width + config.book_spacing + config.gap_indicator_width
        );
        assert_eq!(layout.total_width, b.x + b.width + config.padding);
    }

    #[test]
    fn width_is_clamped() {
        let config = ShelfConfig::default();
        let timeline = events((0..200).map(|i| format!("{}", 2000 + i % 3)));
        let layout = layout_shelf(&timeline, &config, None);
        assert_eq!(layout.books[0].width, config.max_spine_width);

        let layout = layout_shelf(&events(["1500".into()]), &config, None);
        assert_eq!(
            layout.books[0].width,
            config.min_spine_width + config.chapter_width
        );
    }

    #[test]
    fn colors_cycle_and_open_book_is_marked() {
        let timeline = events((0..8).map(|i| format!("{}", 1000 + i * 100)));
        let config = ShelfConfig::default();
        let layout = layout_shelf(&timeline, &config, Some(1200));
        assert_eq!(layout.books[0].color, layout.books[config.palette.len()].color);
        assert_eq!(layout.open_book().map(|b| b.start_year), Some(1200));
        assert_eq!(layout.book_of(2), Some(2));
    }

    #[test]
    fn no_events_no_books() {
        let layout = layout_shelf(&Timeline::default(), &ShelfConfig::default(), None);
        assert!(layout.is_empty());
        assert_eq!(layout.total_width, 0.0);
    }
}
