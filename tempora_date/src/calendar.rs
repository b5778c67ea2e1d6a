// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proleptic Gregorian calendar arithmetic on signed years.

const DAYS_BEFORE_MONTH: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

pub(crate) fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

pub(crate) fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// `month` is 1-based and must be in `1..=12`.
pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Zero-based ordinal of the given day within its year.
pub(crate) fn ordinal_day(year: i32, month: u8, day: u8) -> u16 {
    let idx = usize::from(month.clamp(1, 12) - 1);
    let mut ordinal = DAYS_BEFORE_MONTH[idx] + u16::from(day.max(1) - 1);
    if month > 2 && is_leap_year(year) {
        ordinal += 1;
    }
    ordinal
}
