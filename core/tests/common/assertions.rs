// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use cadence_core::{Occurrence, RuleDraft};

/// Builds `draft` and asserts that it yields exactly `expected`.
///
/// Timestamps are written the way `jiff` displays civil date-times, e.g.
/// `1997-09-02T09:00:00`.
///
/// # Panics
///
/// Panics if the draft is invalid or the occurrences differ.
pub fn assert_occurrences(draft: RuleDraft, expected: &[&str]) {
    let rule = draft.build().expect("rule should be valid");
    let actual: Vec<String> = rule.iter().map(|dt| dt.to_string()).collect();
    assert_eq!(actual, expected, "occurrences of {rule:?}");
}

/// Asserts that occurrences are strictly ascending, hence unique.
#[allow(dead_code)]
pub fn assert_strictly_ascending(occurrences: &[Occurrence]) {
    for pair in occurrences.windows(2) {
        if let [earlier, later] = pair {
            assert!(earlier < later, "{earlier} should come before {later}");
        }
    }
}
