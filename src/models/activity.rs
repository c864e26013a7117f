// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Extracurricular activity model.

use serde::{Deserialize, Serialize};

use crate::models::{Document, ListField};

/// Activity record (document ID is the activity name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity name (also used as document ID)
    #[serde(rename = "_id")]
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Human-readable schedule, e.g. "Mondays and Fridays, 3:15 PM - 4:45 PM"
    pub schedule: String,
    /// Machine-readable schedule used by filters
    #[serde(default)]
    pub schedule_details: ScheduleDetails,
    /// Capacity (not enforced by the store)
    pub max_participants: u32,
    /// Student emails in enrollment order
    #[serde(default)]
    pub participants: Vec<String>,
}

/// Weekly meeting days and times.
///
/// Times are zero-padded "HH:MM" so string order is chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDetails {
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
}

impl ScheduleDetails {
    pub fn new(days: &[&str], start_time: &str, end_time: &str) -> Self {
        Self {
            days: days.iter().map(|d| d.to_string()).collect(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }
}

impl Document for Activity {
    fn id(&self) -> &str {
        &self.name
    }

    fn schedule(&self) -> Option<&ScheduleDetails> {
        Some(&self.schedule_details)
    }

    fn list_field_mut(&mut self, field: ListField) -> Option<&mut Vec<String>> {
        match field {
            ListField::Participants => Some(&mut self.participants),
        }
    }
}
