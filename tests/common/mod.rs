// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use mergington_activities::db::seed;
use mergington_activities::models::{Activity, ScheduleDetails};
use mergington_activities::Database;

/// Database with the seed activities loaded and no teacher accounts.
///
/// Skips password hashing so filter tests stay fast.
#[allow(dead_code)]
pub fn activities_db() -> Database {
    let mut db = Database::new();
    for activity in seed::initial_activities() {
        db.activities
            .insert(activity)
            .expect("Seed activity should have an _id");
    }
    db
}

/// Create a standalone activity for store tests.
#[allow(dead_code)]
pub fn sample_activity(name: &str) -> Activity {
    Activity {
        name: name.to_string(),
        description: format!("{} for testing", name),
        schedule: "Mondays, 3:00 PM - 4:00 PM".to_string(),
        schedule_details: ScheduleDetails::new(&["Monday"], "15:00", "16:00"),
        max_participants: 10,
        participants: vec!["first@mergington.edu".to_string()],
    }
}

/// Sorted activity names from a query result.
#[allow(dead_code)]
pub fn names(activities: &[&Activity]) -> Vec<String> {
    let mut names: Vec<String> = activities.iter().map(|a| a.name.clone()).collect();
    names.sort();
    names
}
