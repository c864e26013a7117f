// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mergington activities store bootstrap.
//!
//! Builds the in-memory collections, seeds them, and reports what was loaded.

use anyhow::Context;
use mergington_activities::config::{Config, LogFormat};
use mergington_activities::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;

    init_logging(config.log_format);
    tracing::info!(seed = config.seed_on_startup, "Starting Mergington activities store");

    let shared = Database::new().into_shared();
    let mut db = shared.lock().await;

    if config.seed_on_startup {
        db.init_database().context("Failed to seed database")?;
    }

    let days = db.activities.distinct_days();
    tracing::info!(
        activities = db.activities.count(None),
        teachers = db.teachers.count(None),
        collections = ?[db.activities.name(), db.teachers.name()],
        days = %serde_json::to_string(&days)?,
        "Database ready"
    );

    Ok(())
}

/// Initialize logging: JSON for log collectors, pretty for terminals.
fn init_logging(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mergington_activities=debug,info"));

    match format {
        LogFormat::Json => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(false)
                .with_current_span(true)
                .flatten_event(true);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}
