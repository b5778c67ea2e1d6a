// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic datasets shared by the Tempora benchmarks.

use tempora_timeline::{Timeline, TimelineEvent, TimelineGroup};

const KINDS: [&str; 6] = ["war", "art", "science", "politics", "religion", "trade"];

/// Small xorshift generator; benchmarks need repeatable data, not quality randomness.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

/// `events` events spread over `span_years` years ending in 2000, in `groups` groups.
///
/// Roughly a third of the events carry an end date and a fifth sit on the trunk.
pub fn synthetic_timeline(events: usize, span_years: u32, groups: usize, seed: u64) -> Timeline {
    let mut rng = XorShift(seed | 1);
    let first_year = 2000 - i64::from(span_years);
    let group_list: Vec<TimelineGroup> = (0..groups)
        .map(|g| TimelineGroup::new(format!("g{g}"), format!("Group {g}")))
        .collect();

    let events = (0..events)
        .map(|i| {
            let year = first_year + rng.below(u64::from(span_years) + 1) as i64;
            let month = 1 + rng.below(12);
            let day = 1 + rng.below(28);
            let kind = KINDS[rng.below(KINDS.len() as u64) as usize];
            let mut event =
                TimelineEvent::new(format!("e{i}"), kind, format!("{year}-{month:02}-{day:02}"))
                    .with_title(format!("Event {i}"));
            if rng.below(3) == 0 {
                event = event.with_end(format!("{}", year + 1 + rng.below(20) as i64));
            }
            if groups > 0 && rng.below(5) != 0 {
                event = event.in_group(format!("g{}", rng.below(groups as u64)));
            }
            event
        })
        .collect();

    Timeline::new(events, group_list)
}
