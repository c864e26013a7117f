// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Store error types.

/// Errors raised by the record store and the seeding path.
///
/// Lookups, filters and list updates never fail; a missing document shows up
/// as `None` or a zero modification count instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Document has no _id")]
    MissingId,

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
