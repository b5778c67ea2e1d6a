// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::calendar::{days_in_month, days_in_year, ordinal_day};
use crate::{DatePrecision, ParsedDate};

/// Longest digit run accepted as a year; keeps the value well inside `i32`.
const MAX_YEAR_DIGITS: usize = 9;

/// Parses a date string into a [`ParsedDate`].
///
/// Accepted shapes are `YYYY`, `-YYYY`, `YYYY-MM` and `YYYY-MM-DD` (with any
/// number of year digits). Surrounding whitespace, a leading `+`, and a time
/// suffix introduced by `T` or a space are tolerated.
///
/// Anything after the year that cannot be read lowers the precision instead
/// of failing: `"1969-13-01"` is the year 1969. Input without a readable year
/// yields [`ParsedDate::FALLBACK`].
#[must_use]
pub fn parse_date(input: &str) -> ParsedDate {
    let trimmed = input.trim();
    let date_part = trimmed.split(['T', ' ']).next().unwrap_or_default();

    let (negative, unsigned) = match date_part.as_bytes().first() {
        Some(b'-') => (true, &date_part[1..]),
        Some(b'+') => (false, &date_part[1..]),
        _ => (false, date_part),
    };

    let mut parts = unsigned.split('-');
    let Some(year) = parts.next().and_then(parse_year) else {
        return ParsedDate::FALLBACK;
    };
    let year = if negative { -year } else { year };

    let Some(month) = parts.next().and_then(|m| parse_component(m, 12)) else {
        return year_only(year);
    };

    let day = parts
        .next()
        .and_then(|d| parse_component(d, days_in_month(year, month)));

    let (ordinal, precision) = match day {
        Some(day) => (ordinal_day(year, month, day), DatePrecision::Day),
        None => (ordinal_day(year, month, 1), DatePrecision::Month),
    };

    ParsedDate {
        year,
        decimal_year: f64::from(year) + f64::from(ordinal) / f64::from(days_in_year(year)),
        precision,
    }
}

fn year_only(year: i32) -> ParsedDate {
    ParsedDate {
        year,
        decimal_year: f64::from(year),
        precision: DatePrecision::Year,
    }
}

fn parse_year(digits: &str) -> Option<i32> {
    if digits.is_empty()
        || digits.len() > MAX_YEAR_DIGITS
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    digits.parse().ok()
}

/// Parses a 1-based calendar component no larger than `max`.
fn parse_component(digits: &str, max: u8) -> Option<u8> {
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u8 = digits.parse().ok()?;
    (1..=max).contains(&value).then_some(value)
}
