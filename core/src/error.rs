// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised while building a [`RuleDefinition`](crate::RuleDefinition).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The interval must be a positive integer.
    #[error("interval must be at least 1, got {0}")]
    InvalidInterval(u32),

    /// `count` and `until` are mutually exclusive.
    #[error("count and until must not both be set")]
    CountWithUntil,

    /// A numeric field lies outside of its allowed range.
    #[error("invalid {field} value {value}, expected {}", .field.expected())]
    OutOfRange {
        /// The offending field
        field: RuleField,
        /// The rejected value
        value: i32,
    },

    /// A weekday entry could not be understood.
    #[error("invalid weekday: {0}")]
    InvalidWeekday(String),
}

/// Fields of a rule that carry range restrictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[expect(missing_docs)]
pub enum RuleField {
    #[strum(serialize = "BYMONTH")]
    ByMonth,
    #[strum(serialize = "BYMONTHDAY")]
    ByMonthDay,
    #[strum(serialize = "BYYEARDAY")]
    ByYearDay,
    #[strum(serialize = "BYWEEKNO")]
    ByWeekNo,
    #[strum(serialize = "BYDAY")]
    ByWeekday,
    #[strum(serialize = "BYHOUR")]
    ByHour,
    #[strum(serialize = "BYMINUTE")]
    ByMinute,
    #[strum(serialize = "BYSECOND")]
    BySecond,
    #[strum(serialize = "BYSETPOS")]
    BySetPos,
}

impl RuleField {
    /// Human readable description of the accepted values.
    #[must_use]
    pub const fn expected(self) -> &'static str {
        match self {
            Self::ByMonth => "1..=12",
            Self::ByMonthDay => "-31..=-1 or 1..=31",
            Self::ByYearDay | Self::BySetPos => "-366..=-1 or 1..=366",
            Self::ByWeekNo => "-53..=-1 or 1..=53",
            Self::ByWeekday => "an ordinal in -53..=-1 or 1..=53",
            Self::ByHour => "0..=23",
            Self::ByMinute | Self::BySecond => "0..=59",
        }
    }

    /// Whether `value` is acceptable for this field.
    #[must_use]
    pub const fn accepts(self, value: i32) -> bool {
        const fn signed(value: i32, max: i32) -> bool {
            value != 0 && -max <= value && value <= max
        }

        match self {
            Self::ByMonth => 1 <= value && value <= 12,
            Self::ByMonthDay => signed(value, 31),
            Self::ByYearDay | Self::BySetPos => signed(value, 366),
            Self::ByWeekNo | Self::ByWeekday => signed(value, 53),
            Self::ByHour => 0 <= value && value <= 23,
            Self::ByMinute | Self::BySecond => 0 <= value && value <= 59,
        }
    }
}
