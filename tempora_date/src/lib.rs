// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tempora Date: lenient historical date parsing.
//!
//! Timeline data spans prehistory to the present, so dates arrive as strings
//! of uneven precision: a bare year (`"1969"`), a BCE year (`"-3000"`), or a
//! full calendar date (`"1969-07-20"`). This crate turns each of them into a
//! [`ParsedDate`] whose [`decimal_year`](ParsedDate::decimal_year) is the one
//! quantity layout code sorts and interpolates on.
//!
//! Parsing never fails. Input that cannot be read at all produces a
//! [`DatePrecision::Fallback`] date at year 0 so a single bad record cannot
//! take down the layout of a whole dataset; callers that care can check
//! [`ParsedDate::is_fallback`] and report it.
//!
//! ## Minimal example
//!
//! ```rust
//! use tempora_date::{DatePrecision, parse_date};
//!
//! let landing = parse_date("1969-07-20");
//! assert_eq!(landing.year, 1969);
//! assert_eq!(landing.precision, DatePrecision::Day);
//!
//! let bronze_age = parse_date("-3000");
//! assert!(bronze_age.decimal_year < landing.decimal_year);
//!
//! let broken = parse_date("sometime in spring");
//! assert!(broken.is_fallback());
//! ```
//!
//! ## Year arithmetic
//!
//! ```rust
//! use tempora_date::{difference_in_years, each_year_of_interval, from_year, parse_date};
//!
//! let a = parse_date("1905");
//! let b = parse_date("1950");
//! assert_eq!(difference_in_years(&b, &a), 45);
//!
//! let years: Vec<i32> = each_year_of_interval(&from_year(-1), &from_year(2)).collect();
//! assert_eq!(years, [-1, 0, 1, 2]);
//! ```
//!
//! Years are signed integers: `"-3000"` is 3000 BCE and sorts before `"-2999"`.
//! Leap years follow the proleptic Gregorian rules applied to the signed year.
//!
//! This crate is `no_std`.

#![no_std]

mod calendar;
mod interval;
mod parse;

use core::cmp::Ordering;
use core::fmt;

pub use interval::{YearsInterval, each_year_of_interval};
pub use parse::parse_date;

/// How much of a date string was understood.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DatePrecision {
    /// Only the year was present (or readable).
    #[default]
    Year,
    /// Year and month.
    Month,
    /// Year, month and day.
    Day,
    /// Nothing was readable; the date degenerated to year 0.
    Fallback,
}

/// A date reduced to a comparable position on the year axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ParsedDate {
    /// Signed year; negative values are BCE.
    pub year: i32,
    /// Year plus the elapsed fraction of that year.
    pub decimal_year: f64,
    /// Which components contributed to [`ParsedDate::decimal_year`].
    pub precision: DatePrecision,
}

impl ParsedDate {
    /// The degenerate date produced for unreadable input.
    pub const FALLBACK: Self = Self {
        year: 0,
        decimal_year: 0.0,
        precision: DatePrecision::Fallback,
    };

    /// Returns `true` if this date came from unreadable input.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.precision == DatePrecision::Fallback
    }

    /// Total chronological order on [`ParsedDate::decimal_year`].
    ///
    /// Combined with a stable sort this keeps equal dates in input order.
    #[must_use]
    pub fn cmp_chronological(&self, other: &Self) -> Ordering {
        self.decimal_year.total_cmp(&other.decimal_year)
    }
}

/// Builds a year-precision date for `year`.
#[must_use]
pub fn from_year(year: i32) -> ParsedDate {
    ParsedDate {
        year,
        decimal_year: f64::from(year),
        precision: DatePrecision::Year,
    }
}

/// Whole years from `earlier` to `later`, truncated toward zero.
///
/// Negative when `later` precedes `earlier`.
#[must_use]
pub fn difference_in_years(later: &ParsedDate, earlier: &ParsedDate) -> i32 {
    let diff = libm::trunc(later.decimal_year - earlier.decimal_year);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Float-to-int casts saturate; year differences fit in i32 for any parsed input"
    )]
    {
        diff as i32
    }
}

/// Display adapter for a year label: `"1969"`, `"3000 BCE"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearLabel(pub i32);

impl fmt::Display for YearLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "{} BCE", self.0.unsigned_abs())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Formats `year` as a human-readable label.
#[must_use]
pub fn format_year(year: i32) -> YearLabel {
    YearLabel(year)
}
