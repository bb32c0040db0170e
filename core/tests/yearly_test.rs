// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Yearly recurrences anchored at 1997-09-02 09:00.
//!
//! These are the classic reference scenarios of iCalendar recurrence engines.

mod common;

use cadence_core::{Frequency, Weekday, WeekdayNum};

use common::{assert_occurrences, draft};

fn weekdays(entries: &[&str]) -> Vec<WeekdayNum> {
    entries.iter().map(|s| s.parse().unwrap()).collect()
}

#[test]
fn yearly() {
    assert_occurrences(
        draft(Frequency::Yearly),
        &[
            "1997-09-02T09:00:00",
            "1998-09-02T09:00:00",
            "1999-09-02T09:00:00",
        ],
    );
}

#[test]
fn yearly_interval() {
    let mut draft = draft(Frequency::Yearly);
    draft.interval = Some(2);
    assert_occurrences(
        draft,
        &[
            "1997-09-02T09:00:00",
            "1999-09-02T09:00:00",
            "2001-09-02T09:00:00",
        ],
    );
}

#[test]
fn yearly_interval_large() {
    let mut draft = draft(Frequency::Yearly);
    draft.interval = Some(100);
    assert_occurrences(
        draft,
        &[
            "1997-09-02T09:00:00",
            "2097-09-02T09:00:00",
            "2197-09-02T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_month() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_month = vec![1, 3];
    assert_occurrences(
        draft,
        &[
            "1998-01-02T09:00:00",
            "1998-03-02T09:00:00",
            "1999-01-02T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_month_day() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_month_day = vec![1, 3];
    assert_occurrences(
        draft,
        &[
            "1997-09-03T09:00:00",
            "1997-10-01T09:00:00",
            "1997-10-03T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_month_and_month_day() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_month = vec![1, 3];
    draft.by_month_day = vec![5, 7];
    assert_occurrences(
        draft,
        &[
            "1998-01-05T09:00:00",
            "1998-01-07T09:00:00",
            "1998-03-05T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_weekday() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_weekday = vec![Weekday::Tuesday.into(), Weekday::Thursday.into()];
    assert_occurrences(
        draft,
        &[
            "1997-09-02T09:00:00",
            "1997-09-04T09:00:00",
            "1997-09-09T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_n_weekday() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_weekday = weekdays(&["1TU", "-1TH"]);
    assert_occurrences(
        draft,
        &[
            "1997-12-25T09:00:00",
            "1998-01-06T09:00:00",
            "1998-12-31T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_n_weekday_large() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_weekday = weekdays(&["3TU", "-3TH"]);
    assert_occurrences(
        draft,
        &[
            "1997-12-11T09:00:00",
            "1998-01-20T09:00:00",
            "1998-12-17T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_month_and_weekday() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_month = vec![1, 3];
    draft.by_weekday = weekdays(&["TU", "TH"]);
    assert_occurrences(
        draft,
        &[
            "1998-01-01T09:00:00",
            "1998-01-06T09:00:00",
            "1998-01-08T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_month_and_n_weekday() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_month = vec![1, 3];
    draft.by_weekday = weekdays(&["1TU", "-1TH"]);
    assert_occurrences(
        draft,
        &[
            "1998-01-06T09:00:00",
            "1998-01-29T09:00:00",
            "1998-03-03T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_month_and_n_weekday_large() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_month = vec![1, 3];
    draft.by_weekday = weekdays(&["3TU", "-3TH"]);
    assert_occurrences(
        draft,
        &[
            "1998-01-15T09:00:00",
            "1998-01-20T09:00:00",
            "1998-03-12T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_month_day_and_weekday() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_month_day = vec![1, 3];
    draft.by_weekday = weekdays(&["TU", "TH"]);
    assert_occurrences(
        draft,
        &[
            "1998-01-01T09:00:00",
            "1998-02-03T09:00:00",
            "1998-03-03T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_month_and_month_day_and_weekday() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_month = vec![1, 3];
    draft.by_month_day = vec![1, 3];
    draft.by_weekday = weekdays(&["TU", "TH"]);
    assert_occurrences(
        draft,
        &[
            "1998-01-01T09:00:00",
            "1998-03-03T09:00:00",
            "2001-03-01T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_year_day() {
    let mut draft = draft(Frequency::Yearly);
    draft.count = Some(4);
    draft.by_year_day = vec![1, 100, 200, 365];
    assert_occurrences(
        draft,
        &[
            "1997-12-31T09:00:00",
            "1998-01-01T09:00:00",
            "1998-04-10T09:00:00",
            "1998-07-19T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_year_day_neg() {
    let mut draft = draft(Frequency::Yearly);
    draft.count = Some(4);
    draft.by_year_day = vec![-365, -266, -166, -1];
    assert_occurrences(
        draft,
        &[
            "1997-12-31T09:00:00",
            "1998-01-01T09:00:00",
            "1998-04-10T09:00:00",
            "1998-07-19T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_month_and_year_day() {
    let mut draft = draft(Frequency::Yearly);
    draft.count = Some(4);
    draft.by_month = vec![4, 7];
    draft.by_year_day = vec![1, 100, 200, 365];
    assert_occurrences(
        draft,
        &[
            "1998-04-10T09:00:00",
            "1998-07-19T09:00:00",
            "1999-04-10T09:00:00",
            "1999-07-19T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_month_and_year_day_neg() {
    let mut draft = draft(Frequency::Yearly);
    draft.count = Some(4);
    draft.by_month = vec![4, 7];
    draft.by_year_day = vec![-365, -266, -166, -1];
    assert_occurrences(
        draft,
        &[
            "1998-04-10T09:00:00",
            "1998-07-19T09:00:00",
            "1999-04-10T09:00:00",
            "1999-07-19T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_week_no() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_week_no = vec![20];
    assert_occurrences(
        draft,
        &[
            "1998-05-11T09:00:00",
            "1998-05-12T09:00:00",
            "1998-05-13T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_week_no_and_month() {
    // Only the December days of week 1 survive the month filter
    let mut draft = draft(Frequency::Yearly);
    draft.by_week_no = vec![1];
    draft.by_month = vec![12];
    draft.count = Some(6);
    assert_occurrences(
        draft,
        &[
            "1997-12-29T09:00:00",
            "1997-12-30T09:00:00",
            "1997-12-31T09:00:00",
            "2001-12-31T09:00:00",
            "2002-12-30T09:00:00",
            "2002-12-31T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_week_no_and_weekday() {
    // Week 1 of 1998 starts on 1997-12-29
    let mut draft = draft(Frequency::Yearly);
    draft.by_week_no = vec![1];
    draft.by_weekday = weekdays(&["MO"]);
    assert_occurrences(
        draft,
        &[
            "1997-12-29T09:00:00",
            "1999-01-04T09:00:00",
            "2000-01-03T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_week_no_and_weekday_large() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_week_no = vec![52];
    draft.by_weekday = weekdays(&["SU"]);
    assert_occurrences(
        draft,
        &[
            "1997-12-28T09:00:00",
            "1998-12-27T09:00:00",
            "2000-01-02T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_week_no_and_weekday_last() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_week_no = vec![-1];
    draft.by_weekday = weekdays(&["SU"]);
    assert_occurrences(
        draft,
        &[
            "1997-12-28T09:00:00",
            "1999-01-03T09:00:00",
            "2000-01-02T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_week_no_and_weekday_53() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_week_no = vec![53];
    draft.by_weekday = weekdays(&["MO"]);
    assert_occurrences(
        draft,
        &[
            "1998-12-28T09:00:00",
            "2004-12-27T09:00:00",
            "2009-12-28T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_hour() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_hour = vec![6, 18];
    assert_occurrences(
        draft,
        &[
            "1997-09-02T18:00:00",
            "1998-09-02T06:00:00",
            "1998-09-02T18:00:00",
        ],
    );
}

#[test]
fn yearly_by_minute() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_minute = vec![6, 18];
    assert_occurrences(
        draft,
        &[
            "1997-09-02T09:06:00",
            "1997-09-02T09:18:00",
            "1998-09-02T09:06:00",
        ],
    );
}

#[test]
fn yearly_by_second() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_second = vec![6, 18];
    assert_occurrences(
        draft,
        &[
            "1997-09-02T09:00:06",
            "1997-09-02T09:00:18",
            "1998-09-02T09:00:06",
        ],
    );
}

#[test]
fn yearly_by_hour_and_minute() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_hour = vec![6, 18];
    draft.by_minute = vec![6, 18];
    assert_occurrences(
        draft,
        &[
            "1997-09-02T18:06:00",
            "1997-09-02T18:18:00",
            "1998-09-02T06:06:00",
        ],
    );
}

#[test]
fn yearly_by_hour_and_second() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_hour = vec![6, 18];
    draft.by_second = vec![6, 18];
    assert_occurrences(
        draft,
        &[
            "1997-09-02T18:00:06",
            "1997-09-02T18:00:18",
            "1998-09-02T06:00:06",
        ],
    );
}

#[test]
fn yearly_by_minute_and_second() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_minute = vec![6, 18];
    draft.by_second = vec![6, 18];
    assert_occurrences(
        draft,
        &[
            "1997-09-02T09:06:06",
            "1997-09-02T09:06:18",
            "1997-09-02T09:18:06",
        ],
    );
}

#[test]
fn yearly_by_hour_and_minute_and_second() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_hour = vec![6, 18];
    draft.by_minute = vec![6, 18];
    draft.by_second = vec![6, 18];
    assert_occurrences(
        draft,
        &[
            "1997-09-02T18:06:06",
            "1997-09-02T18:06:18",
            "1997-09-02T18:18:06",
        ],
    );
}

#[test]
fn yearly_by_set_pos() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_month_day = vec![15];
    draft.by_hour = vec![6, 18];
    draft.by_set_pos = vec![3, -3];
    assert_occurrences(
        draft,
        &[
            "1997-11-15T18:00:00",
            "1998-02-15T06:00:00",
            "1998-11-15T18:00:00",
        ],
    );
}

#[test]
fn yearly_by_set_pos_last_monday_of_february() {
    let mut draft = draft(Frequency::Yearly);
    draft.by_month = vec![2];
    draft.by_weekday = weekdays(&["MO"]);
    draft.by_set_pos = vec![-1];
    assert_occurrences(
        draft,
        &[
            "1998-02-23T09:00:00",
            "1999-02-22T09:00:00",
            "2000-02-28T09:00:00",
        ],
    );
}

#[test]
fn yearly_on_leap_day_skips_common_years() {
    let mut draft = draft(Frequency::Yearly);
    draft.anchor = common::at("2024-02-29T09:00:00");
    assert_occurrences(
        draft,
        &[
            "2024-02-29T09:00:00",
            "2028-02-29T09:00:00",
            "2032-02-29T09:00:00",
        ],
    );
}

#[test]
fn yearly_by_month_day_31_skips_short_months() {
    let mut draft = draft(Frequency::Yearly);
    draft.anchor = common::at("1997-01-01T09:00:00");
    draft.count = Some(4);
    draft.by_month_day = vec![31];
    assert_occurrences(
        draft,
        &[
            "1997-01-31T09:00:00",
            "1997-03-31T09:00:00",
            "1997-05-31T09:00:00",
            "1997-07-31T09:00:00",
        ],
    );
}

#[test]
fn yearly_until_is_inclusive() {
    let mut draft = draft(Frequency::Yearly);
    draft.count = None;
    draft.until = Some(common::at("2000-09-02T09:00:00"));
    assert_occurrences(
        draft.clone(),
        &[
            "1997-09-02T09:00:00",
            "1998-09-02T09:00:00",
            "1999-09-02T09:00:00",
            "2000-09-02T09:00:00",
        ],
    );

    draft.until = Some(common::at("2000-09-02T08:59:00"));
    assert_occurrences(
        draft,
        &[
            "1997-09-02T09:00:00",
            "1998-09-02T09:00:00",
            "1999-09-02T09:00:00",
        ],
    );
}
