// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::VecDeque;
use std::iter::FusedIterator;

use jiff::civil::DateTime;

use crate::expand::Expander;
use crate::period::PeriodAdvancer;
use crate::rule::RuleDefinition;

/// A single occurrence of a rule, a wall-clock date-time.
pub type Occurrence = DateTime;

/// A lazy, ascending cursor over the occurrences of a [`RuleDefinition`].
///
/// The cursor expands one period at a time and holds at most that period's candidates.
/// Dropping it cancels the iteration. A rule without a limit whose filters can never
/// match keeps walking periods until the end of the supported calendar range, so cap
/// such rules with [`Iterator::take`] or [`RuleDefinition::between`].
#[derive(Debug, Clone)]
pub struct Occurrences<'r> {
    rule: &'r RuleDefinition,
    state: State,
    emitted: u64,
}

#[derive(Debug, Clone)]
enum State {
    Positioned {
        periods: PeriodAdvancer,
        pending: VecDeque<Occurrence>,
    },
    Exhausted,
}

enum Step {
    Emit(Occurrence),
    Continue,
    Exhaust(&'static str),
}

impl<'r> Occurrences<'r> {
    fn new(rule: &'r RuleDefinition) -> Self {
        Self {
            rule,
            state: State::Positioned {
                periods: PeriodAdvancer::new(rule),
                pending: VecDeque::new(),
            },
            emitted: 0,
        }
    }

    /// The rule being iterated.
    #[must_use]
    pub const fn rule(&self) -> &'r RuleDefinition {
        self.rule
    }

    /// Whether the cursor has reached its end.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted)
    }

    fn step(&mut self) -> Step {
        let rule = self.rule;
        let State::Positioned { periods, pending } = &mut self.state else {
            return Step::Exhaust("already exhausted");
        };

        if rule.count().is_some_and(|count| self.emitted >= u64::from(count)) {
            return Step::Exhaust("count reached");
        }

        if let Some(candidate) = pending.pop_front() {
            return if candidate < rule.anchor() {
                Step::Continue
            } else if rule.until().is_some_and(|until| candidate > until) {
                Step::Exhaust("until passed")
            } else {
                Step::Emit(candidate)
            };
        }

        let Some(period) = periods.peek() else {
            return Step::Exhaust("calendar range ended");
        };
        if rule.until().is_some_and(|until| period.start() > until) {
            return Step::Exhaust("until passed");
        }
        periods.next();

        pending.extend(Expander::new(rule).expand(period));
        tracing::trace!(?period, candidates = pending.len(), "expanded period");
        Step::Continue
    }
}

impl Iterator for Occurrences<'_> {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }

        loop {
            match self.step() {
                Step::Emit(occurrence) => {
                    self.emitted = self.emitted.saturating_add(1);
                    return Some(occurrence);
                }
                Step::Continue => {}
                Step::Exhaust(reason) => {
                    let periods = match &self.state {
                        State::Positioned { periods, .. } => periods.steps(),
                        State::Exhausted => 0,
                    };
                    tracing::debug!(
                        reason,
                        emitted = self.emitted,
                        periods,
                        "recurrence exhausted"
                    );
                    self.state = State::Exhausted;
                    return None;
                }
            }
        }
    }
}

impl FusedIterator for Occurrences<'_> {}

impl<'r> IntoIterator for &'r RuleDefinition {
    type Item = Occurrence;
    type IntoIter = Occurrences<'r>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl RuleDefinition {
    /// A fresh cursor over the occurrences, starting at the anchor.
    ///
    /// Every call restarts from the beginning.
    #[must_use]
    pub fn iter(&self) -> Occurrences<'_> {
        Occurrences::new(self)
    }

    /// The first `n` occurrences.
    pub fn first(&self, n: usize) -> impl Iterator<Item = Occurrence> + '_ {
        self.iter().take(n)
    }

    /// Occurrences within the inclusive window `start..=end`.
    ///
    /// Stops pulling as soon as an occurrence passes `end`; an inverted window is empty.
    pub fn between(
        &self,
        start: DateTime,
        end: DateTime,
    ) -> impl Iterator<Item = Occurrence> + '_ {
        let limit = if start <= end { usize::MAX } else { 0 };
        self.iter()
            .take(limit)
            .skip_while(move |occurrence| *occurrence < start)
            .take_while(move |occurrence| *occurrence <= end)
    }

    /// The first occurrence after `dt`, or at `dt` when `inclusive`.
    #[must_use]
    pub fn after(&self, dt: DateTime, inclusive: bool) -> Option<Occurrence> {
        self.iter().find(|occurrence| match inclusive {
            true => *occurrence >= dt,
            false => *occurrence > dt,
        })
    }

    /// The last occurrence before `dt`, or at `dt` when `inclusive`.
    #[must_use]
    pub fn before(&self, dt: DateTime, inclusive: bool) -> Option<Occurrence> {
        self.iter()
            .take_while(|occurrence| match inclusive {
                true => *occurrence <= dt,
                false => *occurrence < dt,
            })
            .last()
    }

    /// Whether `dt` is an occurrence of the rule.
    #[must_use]
    pub fn contains(&self, dt: DateTime) -> bool {
        self.after(dt, true) == Some(dt)
    }
}
