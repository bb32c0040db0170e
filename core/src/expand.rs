// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, DateTime, Time};

use crate::calendar::{
    iso_week_number, iso_weeks_in_year, nth_weekday_of_period, resolve_month_day,
    resolve_year_day,
};
use crate::period::Period;
use crate::rule::{Frequency, RuleDefinition, Weekday, WeekdayNum};

/// Expands one [`Period`] of a rule into the date-times it contributes.
///
/// The cascade starts from every day of the period and narrows it down in a fixed
/// order: month, ISO week number, month day and year day, weekday. The surviving days
/// are then crossed with the hours, minutes and seconds of the rule, and finally
/// `by_set_pos` picks positions out of the sorted result. Stages whose `by_*` set is
/// empty fall back to a default derived from the anchor.
#[derive(Debug, Clone, Copy)]
pub struct Expander<'r> {
    rule: &'r RuleDefinition,
}

impl<'r> Expander<'r> {
    #[expect(missing_docs)]
    #[must_use]
    pub const fn new(rule: &'r RuleDefinition) -> Self {
        Self { rule }
    }

    /// The sorted, deduplicated date-times of `period` matching every rule.
    ///
    /// The anchor and the limit are not applied here.
    #[must_use]
    pub fn expand(&self, period: Period) -> Vec<DateTime> {
        let mut days: Vec<Date> = period.days().collect();
        self.select_months(&mut days);
        self.select_week_numbers(&mut days);
        self.select_month_and_year_days(&mut days);
        self.select_weekdays(period, &mut days);

        let mut set = self.expand_times(period, &days);
        set.sort_unstable();
        set.dedup();
        self.select_positions(set)
    }

    fn select_months(&self, days: &mut Vec<Date>) {
        let rule = self.rule;
        if !rule.by_month().is_empty() {
            days.retain(|day| rule.by_month().binary_search(&day.month()).is_ok());
        } else if rule.frequency() == Frequency::Yearly && !rule.has_day_rules() {
            let month = rule.anchor().month();
            days.retain(|day| day.month() == month);
        }
    }

    fn select_week_numbers(&self, days: &mut Vec<Date>) {
        let by_week_no = self.rule.by_week_no();
        if by_week_no.is_empty() {
            return;
        }

        days.retain(|&day| {
            let (week, iso_year) = iso_week_number(day);
            let from_end = week - iso_weeks_in_year(iso_year) - 1;
            by_week_no.binary_search(&week).is_ok() || by_week_no.binary_search(&from_end).is_ok()
        });
    }

    fn select_month_and_year_days(&self, days: &mut Vec<Date>) {
        let rule = self.rule;
        let by_year_day = rule.by_year_day();
        if !by_year_day.is_empty() {
            days.retain(|&day| {
                by_year_day
                    .iter()
                    .any(|&n| resolve_year_day(day.year(), n) == Some(day))
            });
        }

        let by_month_day = rule.by_month_day();
        if !by_month_day.is_empty() {
            days.retain(|&day| {
                by_month_day
                    .iter()
                    .any(|&n| resolve_month_day(day.year(), day.month(), n) == Some(day.day()))
            });
        }

        let defaults_to_anchor_day = matches!(rule.frequency(), Frequency::Yearly | Frequency::Monthly);
        if defaults_to_anchor_day && !rule.has_day_rules() {
            let day_of_month = rule.anchor().day();
            days.retain(|day| day.day() == day_of_month);
        }
    }

    fn select_weekdays(&self, period: Period, days: &mut Vec<Date>) {
        let rule = self.rule;
        if rule.by_weekday().is_empty() {
            if rule.frequency() == Frequency::Weekly && !rule.has_day_rules() {
                let weekday = rule.anchor().weekday();
                days.retain(|day| day.weekday() == weekday);
            }
            return;
        }

        // Numbered weekdays count within the month when a yearly rule names months
        let monthly_scope = rule.frequency() == Frequency::Yearly && !rule.by_month().is_empty();
        days.retain(|&day| {
            let scope = if monthly_scope {
                (day.first_of_month(), day.last_of_month())
            } else {
                (period.first_day(), period.last_day())
            };
            rule.by_weekday()
                .iter()
                .any(|&entry| weekday_matches(entry, day, scope))
        });
    }

    fn expand_times(&self, period: Period, days: &[Date]) -> Vec<DateTime> {
        let rule = self.rule;
        let anchor = rule.anchor();
        let hours = time_component(period.pinned_hour(), rule.by_hour(), anchor.hour());
        let minutes = time_component(period.pinned_minute(), rule.by_minute(), anchor.minute());
        let seconds = time_component(period.pinned_second(), rule.by_second(), anchor.second());

        let mut set = Vec::with_capacity(days.len() * hours.len() * minutes.len() * seconds.len());
        for &day in days {
            for &hour in &hours {
                for &minute in &minutes {
                    for &second in &seconds {
                        if let Ok(time) = Time::new(hour, minute, second, 0) {
                            set.push(DateTime::from_parts(day, time));
                        }
                    }
                }
            }
        }
        set
    }

    fn select_positions(&self, set: Vec<DateTime>) -> Vec<DateTime> {
        let by_set_pos = self.rule.by_set_pos();
        if by_set_pos.is_empty() {
            return set;
        }

        let len = set.len();
        set.into_iter()
            .enumerate()
            .filter(|&(index, _)| {
                let (Ok(pos), Ok(from_end)) = (
                    i16::try_from(index + 1),
                    i16::try_from(len - index).map(|n| -n),
                ) else {
                    return false;
                };
                by_set_pos.binary_search(&pos).is_ok() || by_set_pos.binary_search(&from_end).is_ok()
            })
            .map(|(_, dt)| dt)
            .collect()
    }
}

fn weekday_matches(entry: WeekdayNum, day: Date, (start, end): (Date, Date)) -> bool {
    if Weekday::from(day.weekday()) != entry.weekday {
        return false;
    }
    match entry.ordinal {
        None => true,
        Some(n) => nth_weekday_of_period(start, end, entry.weekday.into(), n) == Some(day),
    }
}

/// Values of one time component: taken from the period when it pins the component,
/// otherwise the rule's set or the anchor's value when the set is empty.
fn time_component(pinned: Option<i8>, set: &[i8], default: i8) -> Vec<i8> {
    match pinned {
        Some(value) if set.is_empty() || set.binary_search(&value).is_ok() => vec![value],
        Some(_) => Vec::new(),
        None if set.is_empty() => vec![default],
        None => set.to_vec(),
    }
}
