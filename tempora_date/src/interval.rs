// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::iter::FusedIterator;
use core::ops::RangeInclusive;

use crate::ParsedDate;

/// Lazy, inclusive, ascending sequence of integer years.
///
/// Produced by [`each_year_of_interval`].
#[derive(Clone, Debug)]
pub struct YearsInterval {
    years: RangeInclusive<i32>,
}

impl YearsInterval {
    /// First year of the interval.
    #[must_use]
    pub fn start(&self) -> i32 {
        *self.years.start()
    }

    /// Last year of the interval.
    #[must_use]
    pub fn end(&self) -> i32 {
        *self.years.end()
    }
}

impl Iterator for YearsInterval {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.years.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.years.size_hint()
    }
}

impl DoubleEndedIterator for YearsInterval {
    fn next_back(&mut self) -> Option<i32> {
        self.years.next_back()
    }
}

impl FusedIterator for YearsInterval {}

/// Every integer year from `start.year` to `end.year`, inclusive and ascending.
///
/// Reversed bounds are swapped, so the sequence is never empty.
#[must_use]
pub fn each_year_of_interval(start: &ParsedDate, end: &ParsedDate) -> YearsInterval {
    let (lo, hi) = if start.year <= end.year {
        (start.year, end.year)
    } else {
        (end.year, start.year)
    };
    YearsInterval { years: lo..=hi }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_year, parse_date};

    #[test]
    fn inclusive_ascending() {
        let mut years = each_year_of_interval(&parse_date("1999-05-01"), &parse_date("2001"));
        assert_eq!(years.next(), Some(1999));
        assert_eq!(years.next(), Some(2000));
        assert_eq!(years.next(), Some(2001));
        assert_eq!(years.next(), None);
        assert_eq!(years.next(), None);
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        let years = each_year_of_interval(&from_year(5), &from_year(3));
        assert_eq!(years.start(), 3);
        assert_eq!(years.end(), 5);
        assert_eq!(years.count(), 3);
    }

    #[test]
    fn single_year() {
        let years = each_year_of_interval(&from_year(-10), &from_year(-10));
        assert_eq!(years.size_hint(), (1, Some(1)));
    }
}
