// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer (in-memory collections).

pub mod filter;
pub mod seed;
pub mod store;

pub use filter::{Filter, Predicate};
pub use store::{DistinctValue, RecordStore, Update, UpdateResult};

use std::sync::Arc;

use crate::error::Result;
use crate::models::{Activity, ListField, Teacher};

/// Collection names as constants.
pub mod collections {
    pub const ACTIVITIES: &str = "activities";
    pub const TEACHERS: &str = "teachers";
}

/// The database behind a single lock, for hosts that share it across tasks.
pub type SharedDatabase = Arc<tokio::sync::Mutex<Database>>;

/// Both collections of the registration backend.
///
/// Created empty; call [`Database::init_database`] once at startup.
#[derive(Debug, Clone)]
pub struct Database {
    pub activities: RecordStore<Activity>,
    pub teachers: RecordStore<Teacher>,
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

impl Database {
    pub fn new() -> Self {
        Self {
            activities: RecordStore::new(collections::ACTIVITIES),
            teachers: RecordStore::new(collections::TEACHERS),
        }
    }

    /// Seed each collection from the initial data if it is empty.
    ///
    /// Collections that already hold documents are left untouched, so
    /// calling this more than once is a no-op.
    pub fn init_database(&mut self) -> Result<()> {
        if self.activities.is_empty() {
            for activity in seed::initial_activities() {
                self.activities.insert(activity)?;
            }
            tracing::info!(count = self.activities.len(), "Seeded activities");
        }

        if self.teachers.is_empty() {
            for teacher in seed::initial_teachers()? {
                self.teachers.insert(teacher)?;
            }
            tracing::info!(count = self.teachers.len(), "Seeded teacher accounts");
        }

        Ok(())
    }

    /// Append a student email to an activity's participants.
    ///
    /// Capacity and duplicate checks are the caller's job.
    pub fn enroll(&mut self, activity: &str, email: &str) -> UpdateResult {
        self.activities
            .update(activity, &Update::push(ListField::Participants, email))
    }

    /// Remove a student email from an activity's participants.
    pub fn unenroll(&mut self, activity: &str, email: &str) -> UpdateResult {
        self.activities
            .update(activity, &Update::pull(ListField::Participants, email))
    }

    /// Move into a [`SharedDatabase`].
    pub fn into_shared(self) -> SharedDatabase {
        Arc::new(tokio::sync::Mutex::new(self))
    }
}
