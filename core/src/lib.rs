// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Expand calendar recurrence rules into ordered occurrences.
//!
//! A [`RuleDefinition`] describes a recurrence the way an iCalendar `RRULE` does: a
//! frequency, an interval, an anchor and a set of `BY*` filters. Build one from a
//! [`RuleDraft`] and pull occurrences from it lazily:
//!
//! ```
//! use cadence_core::{Frequency, RuleDraft};
//! use jiff::civil::datetime;
//!
//! let mut draft = RuleDraft::new(Frequency::Yearly, datetime(1997, 9, 2, 9, 0, 0, 0));
//! draft.by_month = vec![1, 3];
//! draft.count = Some(3);
//! let rule = draft.build()?;
//!
//! let dates: Vec<_> = rule.iter().map(|dt| dt.date().to_string()).collect();
//! assert_eq!(dates, ["1998-01-02", "1998-03-02", "1999-01-02"]);
//! # Ok::<(), cadence_core::RuleError>(())
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(
    clippy::option_option,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::match_bool
)]

pub mod calendar;
mod error;
mod expand;
mod iter;
mod period;
mod rule;

pub use crate::error::{RuleError, RuleField};
pub use crate::expand::Expander;
pub use crate::iter::{Occurrence, Occurrences};
pub use crate::period::{Period, PeriodAdvancer};
pub use crate::rule::{Frequency, Limit, RuleDefinition, RuleDraft, Weekday, WeekdayNum};
