//! Shared primitive IDs.

/// Storage-assigned contact identifier (SQLite rowid).
pub type ContactId = i64;
