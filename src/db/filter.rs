// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed query filters for schedule-based scans.
//!
//! A [`Filter`] is a conjunction of [`Predicate`]s. The empty filter matches
//! every document.

use std::collections::BTreeSet;

use crate::models::{Document, ScheduleDetails};

/// A single condition on a document's schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Meets on at least one of the given days.
    DaysIn(BTreeSet<String>),
    /// Starts at or after the given "HH:MM" time.
    StartTimeGte(String),
    /// Ends at or before the given "HH:MM" time.
    EndTimeLte(String),
}

impl Predicate {
    fn matches(&self, schedule: &ScheduleDetails) -> bool {
        match self {
            Predicate::DaysIn(days) => schedule.days.iter().any(|d| days.contains(d)),
            Predicate::StartTimeGte(time) => schedule.start_time.as_str() >= time.as_str(),
            Predicate::EndTimeLte(time) => schedule.end_time.as_str() <= time.as_str(),
        }
    }
}

/// Conjunction of predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    /// Filter that matches everything.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn days_in<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predicates
            .push(Predicate::DaysIn(days.into_iter().map(Into::into).collect()));
        self
    }

    pub fn start_time_gte(mut self, time: impl Into<String>) -> Self {
        self.predicates.push(Predicate::StartTimeGte(time.into()));
        self
    }

    pub fn end_time_lte(mut self, time: impl Into<String>) -> Self {
        self.predicates.push(Predicate::EndTimeLte(time.into()));
        self
    }

    /// True when no predicates were added, i.e. the filter matches everything.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Evaluate against a document. A missing schedule counts as empty days
    /// and empty times.
    pub fn matches<D: Document>(&self, doc: &D) -> bool {
        if self.is_empty() {
            return true;
        }
        let empty = ScheduleDetails::default();
        let schedule = doc.schedule().unwrap_or(&empty);
        self.predicates.iter().all(|p| p.matches(schedule))
    }
}
