// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod teacher;

pub use activity::{Activity, ScheduleDetails};
pub use teacher::{Role, Teacher};

/// List-valued fields that updates can push to or pull from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Participants,
}

/// A record that can live in a [`RecordStore`](crate::db::RecordStore).
pub trait Document: Clone {
    /// Unique key within the store (`_id`).
    fn id(&self) -> &str;

    /// Schedule used by filters and the distinct-days aggregation.
    ///
    /// Documents without one are filtered as if every field were empty.
    fn schedule(&self) -> Option<&ScheduleDetails> {
        None
    }

    /// Mutable access to a list field, or `None` if this shape has no such field.
    fn list_field_mut(&mut self, _field: ListField) -> Option<&mut Vec<String>> {
        None
    }
}
