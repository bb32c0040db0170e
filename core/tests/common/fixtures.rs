// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for rule drafts.

use cadence_core::{Frequency, RuleDraft};
use jiff::civil::DateTime;

/// The anchor most reference scenarios start from, 1997-09-02 09:00.
pub fn anchor() -> DateTime {
    at("1997-09-02T09:00:00")
}

/// Parses a civil date-time, e.g. `1997-09-02T09:00:00`.
///
/// # Panics
///
/// Panics if the string is not a valid civil date-time.
pub fn at(s: &str) -> DateTime {
    s.parse().expect("valid civil datetime")
}

/// A draft with the given frequency, anchored at [`anchor`] and capped to 3
/// occurrences.
pub fn draft(frequency: Frequency) -> RuleDraft {
    let mut draft = RuleDraft::new(frequency, anchor());
    draft.count = Some(3);
    draft
}

/// A draft with the given frequency and anchor and nothing else set.
#[allow(dead_code)]
pub fn draft_at(frequency: Frequency, anchor: &str) -> RuleDraft {
    RuleDraft::new(frequency, at(anchor))
}
