// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `tempora_date` crate.
//!
//! These exercise parsing as layout code consumes it: ordering across eras,
//! stable ordering of ties, and graceful handling of bad records.

use tempora_date::{DatePrecision, ParsedDate, each_year_of_interval, parse_date};

#[test]
fn ordering_across_eras() {
    let inputs = ["1969-07-20", "-3000", "0", "-44-03-15", "1066", "2024-02-29"];
    let mut dates: Vec<ParsedDate> = inputs.iter().map(|s| parse_date(s)).collect();
    dates.sort_by(ParsedDate::cmp_chronological);
    let years: Vec<i32> = dates.iter().map(|d| d.year).collect();
    assert_eq!(years, [-3000, -44, 0, 1066, 1969, 2024]);
}

#[test]
fn stable_sort_keeps_ties_in_input_order() {
    let inputs = [("b", "1900"), ("a", "1850"), ("c", "1900"), ("d", "1900-01-01")];
    let mut tagged: Vec<(&str, ParsedDate)> =
        inputs.iter().map(|(tag, s)| (*tag, parse_date(s))).collect();
    tagged.sort_by(|x, y| x.1.cmp_chronological(&y.1));
    let order: Vec<&str> = tagged.iter().map(|(tag, _)| *tag).collect();
    assert_eq!(order, ["a", "b", "c", "d"]);
}

#[test]
fn parsing_is_pure() {
    let input = String::from("1815-06-18");
    let first = parse_date(&input);
    let second = parse_date(&input);
    assert_eq!(first, second);
    assert_eq!(input, "1815-06-18");
}

#[test]
fn fallback_dates_still_order() {
    let mut dates = [parse_date("1900"), parse_date("garbage"), parse_date("-5")];
    dates.sort_by(ParsedDate::cmp_chronological);
    assert_eq!(dates[0].year, -5);
    assert_eq!(dates[1].precision, DatePrecision::Fallback);
    assert_eq!(dates[2].year, 1900);
}

#[test]
fn year_interval_spans_partial_dates() {
    let years: Vec<i32> =
        each_year_of_interval(&parse_date("-2-06-01"), &parse_date("1-01-01")).collect();
    assert_eq!(years, [-2, -1, 0, 1]);
}
