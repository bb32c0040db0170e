// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Rule draft factories anchored on the classic 1997-09-02 09:00 start
//! - Assertion helpers comparing occurrences against expected timestamps

mod assertions;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::{assert_occurrences, assert_strictly_ascending};
#[allow(unused_imports)]
pub use fixtures::{anchor, at, draft, draft_at};
