// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};
use std::str::FromStr;

use jiff::civil::{DateTime, time};
use serde::{Deserialize, Serialize};

use crate::error::{RuleError, RuleField};

/// Base frequency of a recurrence.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
#[expect(missing_docs)]
pub enum Frequency {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Day of the week, ordered from Monday.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    Serialize,
    Deserialize,
)]
#[expect(missing_docs)]
pub enum Weekday {
    #[strum(serialize = "MO")]
    #[serde(rename = "MO")]
    Monday,
    #[strum(serialize = "TU")]
    #[serde(rename = "TU")]
    Tuesday,
    #[strum(serialize = "WE")]
    #[serde(rename = "WE")]
    Wednesday,
    #[strum(serialize = "TH")]
    #[serde(rename = "TH")]
    Thursday,
    #[strum(serialize = "FR")]
    #[serde(rename = "FR")]
    Friday,
    #[strum(serialize = "SA")]
    #[serde(rename = "SA")]
    Saturday,
    #[strum(serialize = "SU")]
    #[serde(rename = "SU")]
    Sunday,
}

impl From<Weekday> for jiff::civil::Weekday {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Monday => Self::Monday,
            Weekday::Tuesday => Self::Tuesday,
            Weekday::Wednesday => Self::Wednesday,
            Weekday::Thursday => Self::Thursday,
            Weekday::Friday => Self::Friday,
            Weekday::Saturday => Self::Saturday,
            Weekday::Sunday => Self::Sunday,
        }
    }
}

impl From<jiff::civil::Weekday> for Weekday {
    fn from(value: jiff::civil::Weekday) -> Self {
        match value {
            jiff::civil::Weekday::Monday => Self::Monday,
            jiff::civil::Weekday::Tuesday => Self::Tuesday,
            jiff::civil::Weekday::Wednesday => Self::Wednesday,
            jiff::civil::Weekday::Thursday => Self::Thursday,
            jiff::civil::Weekday::Friday => Self::Friday,
            jiff::civil::Weekday::Saturday => Self::Saturday,
            jiff::civil::Weekday::Sunday => Self::Sunday,
        }
    }
}

/// A weekday entry of `by_weekday`, optionally numbered.
///
/// Without an ordinal it matches every such weekday of the period. With ordinal `n`
/// it matches only the n-th one, counting from the end when `n` is negative. The
/// textual form is `TU`, `1TU`, `+2MO` or `-1TH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekdayNum {
    /// The n-th occurrence within the period, `None` for every occurrence
    pub ordinal: Option<i8>,
    /// The weekday
    pub weekday: Weekday,
}

impl WeekdayNum {
    /// Every `weekday` of the period.
    #[must_use]
    pub const fn every(weekday: Weekday) -> Self {
        Self {
            ordinal: None,
            weekday,
        }
    }

    /// The `ordinal`-th `weekday` of the period.
    #[must_use]
    pub const fn nth(ordinal: i8, weekday: Weekday) -> Self {
        Self {
            ordinal: Some(ordinal),
            weekday,
        }
    }
}

impl From<Weekday> for WeekdayNum {
    fn from(weekday: Weekday) -> Self {
        Self::every(weekday)
    }
}

impl Display for WeekdayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ordinal {
            Some(n) => write!(f, "{n}{}", self.weekday),
            None => write!(f, "{}", self.weekday),
        }
    }
}

impl FromStr for WeekdayNum {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RuleError::InvalidWeekday(s.to_string());
        let s = s.trim();
        let split = s.len().checked_sub(2).ok_or_else(invalid)?;
        let (ordinal, code) = match (s.get(..split), s.get(split..)) {
            (Some(ordinal), Some(code)) => (ordinal, code),
            _ => return Err(invalid()),
        };

        let weekday = code
            .to_ascii_uppercase()
            .parse::<Weekday>()
            .map_err(|_| invalid())?;
        let ordinal = match ordinal {
            "" => None,
            // i8 parsing accepts a leading plus sign
            n => Some(n.parse::<i8>().map_err(|_| invalid())?),
        };
        Ok(Self { ordinal, weekday })
    }
}

impl TryFrom<String> for WeekdayNum {
    type Error = RuleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WeekdayNum> for String {
    fn from(value: WeekdayNum) -> Self {
        value.to_string()
    }
}

/// The cap of a recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit {
    /// Stop after this many occurrences.
    Count(u32),
    /// Stop after this inclusive bound.
    Until(DateTime),
}

/// Structured, unvalidated form of a recurrence rule.
///
/// This is what rule files deserialize into; call [`RuleDraft::build`] to validate it.
/// Missing `by_*` fields default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDraft {
    /// The base frequency
    pub frequency: Frequency,

    /// The start of the recurrence, the reference for default `by_*` values
    pub anchor: DateTime,

    /// Number of periods between two recurrence periods, defaults to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,

    /// Stop after this many occurrences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,

    /// Inclusive upper bound of the occurrences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<DateTime>,

    /// Months, 1 to 12
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub by_month: Vec<i8>,

    /// Days of the month, negative counts from the end
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub by_month_day: Vec<i8>,

    /// Days of the year, negative counts from the end
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub by_year_day: Vec<i16>,

    /// ISO week numbers, negative counts from the end
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub by_week_no: Vec<i8>,

    /// Weekdays, optionally numbered
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub by_weekday: Vec<WeekdayNum>,

    /// Hours of the day
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub by_hour: Vec<i8>,

    /// Minutes of the hour
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub by_minute: Vec<i8>,

    /// Seconds of the minute
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub by_second: Vec<i8>,

    /// Positions within the expanded set of a period, negative counts from the end
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub by_set_pos: Vec<i16>,

    /// First day of the week, defaults to Monday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_start: Option<Weekday>,
}

impl RuleDraft {
    /// A draft with the given frequency and anchor and nothing else set.
    #[must_use]
    pub const fn new(frequency: Frequency, anchor: DateTime) -> Self {
        Self {
            frequency,
            anchor,
            interval: None,
            count: None,
            until: None,
            by_month: Vec::new(),
            by_month_day: Vec::new(),
            by_year_day: Vec::new(),
            by_week_no: Vec::new(),
            by_weekday: Vec::new(),
            by_hour: Vec::new(),
            by_minute: Vec::new(),
            by_second: Vec::new(),
            by_set_pos: Vec::new(),
            week_start: None,
        }
    }

    /// Validate the draft and build an immutable [`RuleDefinition`].
    ///
    /// # Errors
    ///
    /// Fails when the interval is zero, when both `count` and `until` are set, or when
    /// a `by_*` value lies outside of its allowed range.
    pub fn build(self) -> Result<RuleDefinition, RuleError> {
        RuleDefinition::new(self)
    }
}

impl TryFrom<RuleDraft> for RuleDefinition {
    type Error = RuleError;

    fn try_from(draft: RuleDraft) -> Result<Self, Self::Error> {
        Self::new(draft)
    }
}

/// A validated, immutable recurrence rule.
///
/// All `by_*` sets are sorted ascending and free of duplicates. The definition is
/// `Send + Sync` and may be iterated from several threads at once, see
/// [`RuleDefinition::iter`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleDefinition {
    frequency: Frequency,
    interval: u32,
    anchor: DateTime,
    limit: Option<Limit>,
    by_month: Box<[i8]>,
    by_month_day: Box<[i8]>,
    by_year_day: Box<[i16]>,
    by_week_no: Box<[i8]>,
    by_weekday: Box<[WeekdayNum]>,
    by_hour: Box<[i8]>,
    by_minute: Box<[i8]>,
    by_second: Box<[i8]>,
    by_set_pos: Box<[i16]>,
    week_start: Weekday,
}

impl RuleDefinition {
    /// Validate `draft` and build the definition from it.
    ///
    /// The anchor is truncated to whole seconds.
    ///
    /// # Errors
    ///
    /// See [`RuleDraft::build`].
    pub fn new(draft: RuleDraft) -> Result<Self, RuleError> {
        let interval = draft.interval.unwrap_or(1);
        if interval == 0 {
            return Err(RuleError::InvalidInterval(interval));
        }

        let limit = match (draft.count, draft.until) {
            (Some(_), Some(_)) => return Err(RuleError::CountWithUntil),
            (Some(count), None) => Some(Limit::Count(count)),
            (None, Some(until)) => Some(Limit::Until(until)),
            (None, None) => None,
        };

        let by_weekday = draft
            .by_weekday
            .into_iter()
            .map(|mut entry| {
                match entry.ordinal {
                    Some(0) => entry.ordinal = None,
                    Some(n) if !RuleField::ByWeekday.accepts(n.into()) => {
                        return Err(RuleError::OutOfRange {
                            field: RuleField::ByWeekday,
                            value: n.into(),
                        });
                    }
                    _ => {}
                }
                Ok(entry)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rule = Self {
            frequency: draft.frequency,
            interval,
            anchor: truncate_subsec(draft.anchor),
            limit,
            by_month: checked(RuleField::ByMonth, draft.by_month)?,
            by_month_day: checked(RuleField::ByMonthDay, draft.by_month_day)?,
            by_year_day: checked(RuleField::ByYearDay, draft.by_year_day)?,
            by_week_no: checked(RuleField::ByWeekNo, draft.by_week_no)?,
            by_weekday: sort_and_dedup(by_weekday),
            by_hour: checked(RuleField::ByHour, draft.by_hour)?,
            by_minute: checked(RuleField::ByMinute, draft.by_minute)?,
            by_second: checked(RuleField::BySecond, draft.by_second)?,
            by_set_pos: checked(RuleField::BySetPos, draft.by_set_pos)?,
            week_start: draft.week_start.unwrap_or(Weekday::Monday),
        };
        tracing::debug!(
            frequency = %rule.frequency,
            interval = rule.interval,
            anchor = %rule.anchor,
            limit = ?rule.limit,
            "built recurrence rule"
        );
        Ok(rule)
    }

    /// The equivalent draft, e.g. to tweak the rule and build it again.
    #[must_use]
    pub fn draft(&self) -> RuleDraft {
        RuleDraft {
            frequency: self.frequency,
            anchor: self.anchor,
            interval: Some(self.interval),
            count: self.count(),
            until: self.until(),
            by_month: self.by_month.to_vec(),
            by_month_day: self.by_month_day.to_vec(),
            by_year_day: self.by_year_day.to_vec(),
            by_week_no: self.by_week_no.to_vec(),
            by_weekday: self.by_weekday.to_vec(),
            by_hour: self.by_hour.to_vec(),
            by_minute: self.by_minute.to_vec(),
            by_second: self.by_second.to_vec(),
            by_set_pos: self.by_set_pos.to_vec(),
            week_start: Some(self.week_start),
        }
    }

    /// The base frequency.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Number of frequency units between two periods, at least 1.
    #[must_use]
    pub const fn interval(&self) -> u32 {
        self.interval
    }

    /// The start of the recurrence.
    #[must_use]
    pub const fn anchor(&self) -> DateTime {
        self.anchor
    }

    /// The cap of the recurrence, `None` when unbounded.
    #[must_use]
    pub const fn limit(&self) -> Option<Limit> {
        self.limit
    }

    /// The occurrence count cap, if any.
    #[must_use]
    pub const fn count(&self) -> Option<u32> {
        match self.limit {
            Some(Limit::Count(count)) => Some(count),
            _ => None,
        }
    }

    /// The inclusive upper bound, if any.
    #[must_use]
    pub const fn until(&self) -> Option<DateTime> {
        match self.limit {
            Some(Limit::Until(until)) => Some(until),
            _ => None,
        }
    }

    #[expect(missing_docs)]
    #[must_use]
    pub fn by_month(&self) -> &[i8] {
        &self.by_month
    }

    #[expect(missing_docs)]
    #[must_use]
    pub fn by_month_day(&self) -> &[i8] {
        &self.by_month_day
    }

    #[expect(missing_docs)]
    #[must_use]
    pub fn by_year_day(&self) -> &[i16] {
        &self.by_year_day
    }

    #[expect(missing_docs)]
    #[must_use]
    pub fn by_week_no(&self) -> &[i8] {
        &self.by_week_no
    }

    #[expect(missing_docs)]
    #[must_use]
    pub fn by_weekday(&self) -> &[WeekdayNum] {
        &self.by_weekday
    }

    #[expect(missing_docs)]
    #[must_use]
    pub fn by_hour(&self) -> &[i8] {
        &self.by_hour
    }

    #[expect(missing_docs)]
    #[must_use]
    pub fn by_minute(&self) -> &[i8] {
        &self.by_minute
    }

    #[expect(missing_docs)]
    #[must_use]
    pub fn by_second(&self) -> &[i8] {
        &self.by_second
    }

    #[expect(missing_docs)]
    #[must_use]
    pub fn by_set_pos(&self) -> &[i16] {
        &self.by_set_pos
    }

    /// First day of the week for weekly periods.
    #[must_use]
    pub const fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Whether any rule selects individual days (week number, year day, month day or
    /// weekday). Without one, the anchor supplies the default day.
    #[must_use]
    pub fn has_day_rules(&self) -> bool {
        !(self.by_week_no.is_empty()
            && self.by_year_day.is_empty()
            && self.by_month_day.is_empty()
            && self.by_weekday.is_empty())
    }
}

fn checked<T>(field: RuleField, values: Vec<T>) -> Result<Box<[T]>, RuleError>
where
    T: Copy + Ord + Into<i32>,
{
    if let Some(&value) = values.iter().find(|v| !field.accepts((**v).into())) {
        return Err(RuleError::OutOfRange {
            field,
            value: value.into(),
        });
    }
    Ok(sort_and_dedup(values))
}

fn sort_and_dedup<T: Ord>(mut values: Vec<T>) -> Box<[T]> {
    values.sort_unstable();
    values.dedup();
    values.into_boxed_slice()
}

fn truncate_subsec(dt: DateTime) -> DateTime {
    DateTime::from_parts(dt.date(), time(dt.hour(), dt.minute(), dt.second(), 0))
}
