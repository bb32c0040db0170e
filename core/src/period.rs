// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::iter::FusedIterator;

use jiff::Span;
use jiff::civil::{Date, DateTime, time};

use crate::rule::{Frequency, RuleDefinition, Weekday};

/// One unit of a rule's frequency, the scope the expansion cascade works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// A calendar year.
    Year(i16),

    /// A calendar month.
    Month {
        /// The year of the month
        year: i16,
        /// The month, 1 to 12
        month: i8,
    },

    /// Seven days beginning with the rule's week start.
    Week(Date),

    /// A single day.
    Day(Date),

    /// A wall-clock hour, truncated.
    Hour(DateTime),

    /// A wall-clock minute, truncated.
    Minute(DateTime),

    /// A single second.
    Second(DateTime),
}

impl Period {
    /// The period of `frequency` containing `at`.
    #[must_use]
    pub fn containing(frequency: Frequency, at: DateTime, week_start: Weekday) -> Self {
        let date = at.date();
        match frequency {
            Frequency::Yearly => Self::Year(date.year()),
            Frequency::Monthly => Self::Month {
                year: date.year(),
                month: date.month(),
            },
            Frequency::Weekly => {
                let start: jiff::civil::Weekday = week_start.into();
                let back = (date.weekday().to_monday_zero_offset() - start.to_monday_zero_offset())
                    .rem_euclid(7);
                // Weeks starting before the supported range are clamped to its first day
                let first = date
                    .checked_sub(Span::new().days(back))
                    .unwrap_or(Date::MIN);
                Self::Week(first)
            }
            Frequency::Daily => Self::Day(date),
            Frequency::Hourly => Self::Hour(DateTime::from_parts(date, time(at.hour(), 0, 0, 0))),
            Frequency::Minutely => {
                Self::Minute(DateTime::from_parts(date, time(at.hour(), at.minute(), 0, 0)))
            }
            Frequency::Secondly => Self::Second(DateTime::from_parts(
                date,
                time(at.hour(), at.minute(), at.second(), 0),
            )),
        }
    }

    /// The period `steps` units after this one.
    ///
    /// Returns `None` when the result leaves the supported calendar range.
    #[must_use]
    pub fn advance(self, steps: u32) -> Option<Self> {
        let steps = i64::from(steps);
        match self {
            Self::Year(year) => {
                let year = i16::try_from(i64::from(year) + steps).ok()?;
                Date::new(year, 1, 1).ok().map(|_| Self::Year(year))
            }
            Self::Month { year, month } => {
                let total = i64::from(year) * 12 + i64::from(month) - 1 + steps;
                let year = i16::try_from(total.div_euclid(12)).ok()?;
                let month = i8::try_from(total.rem_euclid(12) + 1).ok()?;
                Date::new(year, month, 1)
                    .ok()
                    .map(|_| Self::Month { year, month })
            }
            Self::Week(start) => {
                let span = Span::new().try_days(steps.checked_mul(7)?).ok()?;
                start.checked_add(span).ok().map(Self::Week)
            }
            Self::Day(date) => {
                let span = Span::new().try_days(steps).ok()?;
                date.checked_add(span).ok().map(Self::Day)
            }
            Self::Hour(at) => {
                let span = Span::new().try_hours(steps).ok()?;
                at.checked_add(span).ok().map(Self::Hour)
            }
            Self::Minute(at) => {
                let span = Span::new().try_minutes(steps).ok()?;
                at.checked_add(span).ok().map(Self::Minute)
            }
            Self::Second(at) => {
                let span = Span::new().try_seconds(steps).ok()?;
                at.checked_add(span).ok().map(Self::Second)
            }
        }
    }

    /// The first day of the period.
    #[must_use]
    pub fn first_day(self) -> Date {
        match self {
            Self::Year(year) => jiff::civil::date(year, 1, 1),
            Self::Month { year, month } => jiff::civil::date(year, month, 1),
            Self::Week(date) | Self::Day(date) => date,
            Self::Hour(at) | Self::Minute(at) | Self::Second(at) => at.date(),
        }
    }

    /// The last day of the period.
    #[must_use]
    pub fn last_day(self) -> Date {
        match self {
            Self::Year(year) => jiff::civil::date(year, 12, 31),
            Self::Month { .. } => self.first_day().last_of_month(),
            Self::Week(start) => start
                .checked_add(Span::new().days(6))
                .unwrap_or(Date::MAX),
            Self::Day(date) => date,
            Self::Hour(at) | Self::Minute(at) | Self::Second(at) => at.date(),
        }
    }

    /// Every day of the period, ascending.
    pub fn days(self) -> impl Iterator<Item = Date> {
        let last = self.last_day();
        self.first_day()
            .series(Span::new().days(1))
            .take_while(move |day| *day <= last)
    }

    /// The earliest instant of the period.
    #[must_use]
    pub fn start(self) -> DateTime {
        match self {
            Self::Hour(at) | Self::Minute(at) | Self::Second(at) => at,
            _ => self.first_day().to_datetime(time(0, 0, 0, 0)),
        }
    }

    /// The hour fixed by the period, if the frequency is hourly or finer.
    #[must_use]
    pub fn pinned_hour(self) -> Option<i8> {
        match self {
            Self::Hour(at) | Self::Minute(at) | Self::Second(at) => Some(at.hour()),
            _ => None,
        }
    }

    /// The minute fixed by the period, if the frequency is minutely or finer.
    #[must_use]
    pub fn pinned_minute(self) -> Option<i8> {
        match self {
            Self::Minute(at) | Self::Second(at) => Some(at.minute()),
            _ => None,
        }
    }

    /// The second fixed by the period, if the frequency is secondly.
    #[must_use]
    pub fn pinned_second(self) -> Option<i8> {
        match self {
            Self::Second(at) => Some(at.second()),
            _ => None,
        }
    }
}

/// Walks the periods of a rule: the one containing the anchor first, then one every
/// `interval` units of the frequency.
///
/// The walk ends once a period would leave the supported calendar range.
#[derive(Debug, Clone)]
pub struct PeriodAdvancer {
    next: Option<Period>,
    interval: u32,
    steps: u64,
}

impl PeriodAdvancer {
    /// Start at the period containing the rule's anchor.
    #[must_use]
    pub fn new(rule: &RuleDefinition) -> Self {
        Self {
            next: Some(Period::containing(
                rule.frequency(),
                rule.anchor(),
                rule.week_start(),
            )),
            interval: rule.interval(),
            steps: 0,
        }
    }

    /// Number of periods yielded so far.
    #[must_use]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// The period the next call to [`Iterator::next`] yields, without advancing.
    #[must_use]
    pub const fn peek(&self) -> Option<Period> {
        self.next
    }
}

impl Iterator for PeriodAdvancer {
    type Item = Period;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.advance(self.interval);
        self.steps += 1;
        Some(current)
    }
}

impl FusedIterator for PeriodAdvancer {}
