// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Mergington High School activities: in-memory persistence layer.
//!
//! This crate stores extracurricular activities (schedule, capacity, roster)
//! and teacher accounts, and answers the schedule queries the registration
//! API needs.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use db::{Database, Filter, SharedDatabase, Update, UpdateResult};
pub use error::{Result, StoreError};
pub use services::hash_password;
