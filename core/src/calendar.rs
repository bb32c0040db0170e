// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar arithmetic used by the expansion cascade.
//!
//! Every function here is pure. Inputs outside of the calendar domain (month 13,
//! ordinal 0, an inverted period) are programming errors and panic; a validated
//! [`RuleDefinition`](crate::RuleDefinition) never produces them.

use jiff::Span;
use jiff::civil::{Date, ISOWeekDate, Weekday};

/// Whether `year` is a leap year in the proleptic Gregorian calendar.
///
/// # Panics
///
/// Panics when `year` is outside of the supported calendar range.
#[must_use]
pub fn is_leap_year(year: i16) -> bool {
    first_of_month(year, 1).in_leap_year()
}

/// Number of days in `month` of `year`.
///
/// # Panics
///
/// Panics when `month` is not in `1..=12`.
#[must_use]
pub fn days_in_month(year: i16, month: i8) -> i8 {
    first_of_month(year, month).days_in_month()
}

/// Number of days in `year`, 365 or 366.
#[must_use]
pub fn days_in_year(year: i16) -> i16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// ISO 8601 week number of `date`, together with the ISO year the week belongs to.
///
/// Days at the edge of a calendar year may belong to a week of the neighbouring ISO
/// year, e.g. 1997-12-29 is in week 1 of 1998.
#[must_use]
pub fn iso_week_number(date: Date) -> (i8, i16) {
    let week_date = ISOWeekDate::from(date);
    (week_date.week(), week_date.year())
}

/// Number of ISO weeks in `iso_year`, 52 or 53.
///
/// # Panics
///
/// Panics when `iso_year` is outside of the supported calendar range.
#[must_use]
pub fn iso_weeks_in_year(iso_year: i16) -> i8 {
    // The Thursday of week 1 always lies in the calendar year of the same number
    ISOWeekDate::new(iso_year, 1, Weekday::Thursday)
        .unwrap_or_else(|_| panic!("ISO year out of range"))
        .weeks_in_year()
}

/// Find the `ordinal`-th `weekday` within the inclusive range `start..=end`.
///
/// Positive ordinals count from `start`, negative ones from `end`. Returns `None`
/// when the period holds fewer matching weekdays than requested.
///
/// # Panics
///
/// Panics when `ordinal` is zero or the period is inverted.
#[must_use]
pub fn nth_weekday_of_period(start: Date, end: Date, weekday: Weekday, ordinal: i8) -> Option<Date> {
    assert!(ordinal != 0, "ordinal must not be zero");
    assert!(start <= end, "period must not be inverted");

    let weeks = i64::from(ordinal.unsigned_abs()) - 1;
    let found = if ordinal > 0 {
        let lead = (weekday.to_monday_zero_offset() - start.weekday().to_monday_zero_offset())
            .rem_euclid(7);
        start.checked_add(days(i64::from(lead) + 7 * weeks)?).ok()?
    } else {
        let lag = (end.weekday().to_monday_zero_offset() - weekday.to_monday_zero_offset())
            .rem_euclid(7);
        end.checked_sub(days(i64::from(lag) + 7 * weeks)?).ok()?
    };
    (start..=end).contains(&found).then_some(found)
}

/// Resolve a possibly negative day-of-month `n` against `month` of `year`.
///
/// `-1` is the last day of the month. Values beyond the month's length yield `None`.
///
/// # Panics
///
/// Panics when `month` is not in `1..=12`.
#[must_use]
pub fn resolve_month_day(year: i16, month: i8, n: i8) -> Option<i8> {
    let len = days_in_month(year, month);
    match n {
        1.. if n <= len => Some(n),
        ..=-1 if n >= -len => Some(len + n + 1),
        _ => None,
    }
}

/// Resolve a possibly negative day-of-year `n` against `year`.
///
/// `-1` is December 31. Day 366 of a common year yields `None`.
#[must_use]
pub fn resolve_year_day(year: i16, n: i16) -> Option<Date> {
    let len = days_in_year(year);
    let ordinal = match n {
        1.. if n <= len => n,
        ..=-1 if n >= -len => len + n + 1,
        _ => return None,
    };
    first_of_month(year, 1)
        .with()
        .day_of_year(ordinal)
        .build()
        .ok()
}

fn first_of_month(year: i16, month: i8) -> Date {
    assert!((1..=12).contains(&month), "month out of range");
    Date::new(year, month, 1).unwrap_or_else(|_| panic!("year out of range"))
}

fn days(n: i64) -> Option<Span> {
    Span::new().try_days(n).ok()
}
