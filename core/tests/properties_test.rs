// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Properties every expansion must satisfy regardless of the rule.

mod common;

use std::thread;

use cadence_core::{Frequency, Occurrence, RuleDefinition, RuleDraft, Weekday, WeekdayNum};
use jiff::ToSpan;

use common::{anchor, assert_strictly_ascending, at, draft, draft_at};

fn sample_rules() -> Vec<RuleDefinition> {
    let mut drafts = vec![
        RuleDraft::new(Frequency::Yearly, anchor()),
        RuleDraft::new(Frequency::Monthly, anchor()),
        RuleDraft::new(Frequency::Weekly, anchor()),
        RuleDraft::new(Frequency::Daily, anchor()),
        RuleDraft::new(Frequency::Hourly, anchor()),
    ];

    let mut busy = RuleDraft::new(Frequency::Yearly, anchor());
    busy.by_month = vec![1, 3, 12];
    busy.by_weekday = vec![
        WeekdayNum::nth(1, Weekday::Tuesday),
        WeekdayNum::nth(-1, Weekday::Thursday),
        Weekday::Saturday.into(),
    ];
    busy.by_hour = vec![6, 18];
    busy.by_minute = vec![0, 30];
    drafts.push(busy);

    let mut positions = RuleDraft::new(Frequency::Monthly, anchor());
    positions.by_month_day = vec![1, 15, -1];
    positions.by_hour = vec![8, 12];
    positions.by_set_pos = vec![1, -1, -2];
    drafts.push(positions);

    drafts.into_iter().map(|d| d.build().unwrap()).collect()
}

#[test]
fn occurrences_are_strictly_ascending() {
    for rule in sample_rules() {
        let occurrences: Vec<Occurrence> = rule.first(200).collect();
        assert_eq!(occurrences.len(), 200, "{rule:?}");
        assert_strictly_ascending(&occurrences);
    }
}

#[test]
fn occurrences_never_precede_anchor() {
    for rule in sample_rules() {
        assert!(rule.first(50).all(|dt| dt >= rule.anchor()), "{rule:?}");
    }
}

#[test]
fn count_yields_exactly_n() {
    for n in [0, 1, 7, 100] {
        for frequency in [Frequency::Yearly, Frequency::Weekly, Frequency::Minutely] {
            let mut draft = RuleDraft::new(frequency, anchor());
            draft.count = Some(n);
            let rule = draft.build().unwrap();
            assert_eq!(rule.iter().count(), n as usize, "{frequency} x {n}");
        }
    }
}

#[test]
fn until_bounds_without_skipping() {
    let until = at("1998-03-01T00:00:00");
    let mut bounded = RuleDraft::new(Frequency::Weekly, anchor());
    bounded.by_weekday = vec![Weekday::Monday.into(), Weekday::Friday.into()];
    let unbounded = bounded.clone().build().unwrap();
    bounded.until = Some(until);
    let bounded = bounded.build().unwrap();

    let expected: Vec<_> = unbounded.iter().take_while(|dt| *dt <= until).collect();
    let actual: Vec<_> = bounded.iter().collect();
    assert!(!actual.is_empty());
    assert!(actual.iter().all(|dt| *dt <= until));
    assert_eq!(actual, expected);
}

#[test]
fn last_month_day_is_always_month_end() {
    let mut draft = draft_at(Frequency::Monthly, "1999-01-01T12:00:00");
    draft.by_month_day = vec![-1];
    let rule = draft.build().unwrap();
    for dt in rule.first(60) {
        let next = dt.date().tomorrow().unwrap();
        assert_eq!(next.day(), 1, "{dt} is not the last day of its month");
    }
}

#[test]
fn last_year_day_is_always_december_31() {
    let mut draft = draft_at(Frequency::Yearly, "1999-01-01T00:00:00");
    draft.by_year_day = vec![-1];
    let rule = draft.build().unwrap();
    for dt in rule.first(20) {
        assert_eq!((dt.month(), dt.day()), (12, 31), "{dt}");
    }
}

#[test]
fn iterating_twice_is_identical() {
    for rule in sample_rules() {
        let first: Vec<_> = rule.first(100).collect();
        let second: Vec<_> = rule.first(100).collect();
        assert_eq!(first, second);
    }
}

#[test]
fn definitions_can_be_shared_across_threads() {
    let rule = draft(Frequency::Daily).build().unwrap();
    let expected: Vec<_> = rule.iter().collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| rule.iter().collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn between_matches_filtered_iteration() {
    let mut draft = RuleDraft::new(Frequency::Daily, anchor());
    draft.by_hour = vec![9, 21];
    let rule = draft.build().unwrap();

    let start = anchor() + 10.days();
    let end = start + 5.days();
    let window: Vec<_> = rule.between(start, end).collect();
    let filtered: Vec<_> = rule
        .iter()
        .skip_while(|dt| *dt < start)
        .take_while(|dt| *dt <= end)
        .collect();
    assert_eq!(window, filtered);
    assert_eq!(window.first(), Some(&start));
    assert_eq!(window.last(), Some(&end));
    assert_eq!(window.len(), 11);
}

#[test]
fn contains_agrees_with_iteration() {
    let mut draft = RuleDraft::new(Frequency::Monthly, anchor());
    draft.by_weekday = vec![WeekdayNum::nth(-1, Weekday::Friday)];
    let rule = draft.build().unwrap();

    for dt in rule.first(12) {
        assert!(rule.contains(dt), "{dt}");
        assert!(!rule.contains(dt + 1.days()), "{dt} + 1 day");
    }
}

#[test]
fn impossible_rule_with_until_terminates() {
    let mut draft = RuleDraft::new(Frequency::Monthly, anchor());
    draft.by_month_day = vec![31];
    draft.by_month = vec![2, 4];
    draft.until = Some(at("2100-01-01T00:00:00"));
    let rule = draft.build().unwrap();
    assert_eq!(rule.iter().next(), None);
}
