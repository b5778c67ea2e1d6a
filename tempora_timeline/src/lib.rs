// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tempora Timeline: the data every Tempora view reads.
//!
//! A [`Timeline`] is a flat list of [`TimelineEvent`]s plus the
//! [`TimelineGroup`]s they may belong to. Layout engines never mutate it; they
//! read it through two helpers:
//!
//! - [`chronological`]: events paired with their parsed start/end dates, in a
//!   stable chronological order (ties keep their input order).
//! - [`YearRange`]: the span of years a set of events covers, with a
//!   degenerate span widened to one year so callers can divide by it.
//!
//! [`TimelineStore`] holds a loaded timeline together with the selected event
//! id. It is the single writer of selection state; views report a selection
//! change through [`TimelineStore::select_event`] and observe
//! [`TimelineStore::selection_revision`] to know when to re-render.
//!
//! ## Minimal example
//!
//! ```rust
//! use tempora_timeline::{Timeline, TimelineStore, YearRange, chronological};
//!
//! let json = r#"{
//!     "events": [
//!         { "id": "moon", "title": "Moon landing", "type": "space", "date_start": "1969-07-20" },
//!         { "id": "pyramids", "title": "Great Pyramid", "type": "building", "date_start": "-2560" }
//!     ],
//!     "groups": []
//! }"#;
//!
//! let timeline = Timeline::from_json(json).unwrap();
//! let ordered = chronological(&timeline.events);
//! assert_eq!(ordered[0].event.id, "pyramids");
//!
//! let range = YearRange::of_starts(&ordered).unwrap();
//! assert!(range.total_years() > 4000.0);
//!
//! let mut store = TimelineStore::new(timeline);
//! assert!(store.select_event(Some("moon")));
//! assert_eq!(store.selected_event_id(), Some("moon"));
//! ```
//!
//! Loading logs data-quality problems (unreadable dates, unknown groups)
//! through the `log` facade at `warn` level; it only fails on input that
//! cannot form a timeline at all (see [`TimelineError`]).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod chronology;
mod event;
mod load;
mod store;

pub use chronology::{DatedEvent, YearRange, chronological};
pub use event::{Timeline, TimelineEvent, TimelineGroup};
pub use load::TimelineError;
pub use store::TimelineStore;
