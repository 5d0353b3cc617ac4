/// SQLite-backed implementation.
pub mod sqlite;

use std::path::PathBuf;

use crate::{
    contact::{Contact, ContactDraft},
    types::ContactId,
};

/// Failure of a store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database file could not be opened.
    #[error("cannot open contact database at {}: {source}", path.display())]
    Connect {
        /// Database file that failed to open.
        path: PathBuf,
        /// Underlying SQLite error.
        #[source]
        source: rusqlite::Error,
    },
    /// A statement failed on an open connection.
    #[error("contact database statement failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl StoreError {
    /// True when the failure happened while acquiring a connection.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Connect { .. })
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Data-access contract for the persisted contact set.
///
/// Every call is its own atomic unit: one statement, committed before returning.
pub trait ContactStore {
    /// Appends one row with a storage-assigned id.
    fn insert(&self, draft: ContactDraft) -> StoreResult<()>;
    /// Deleting an id that does not exist is not an error.
    fn delete(&self, id: ContactId) -> StoreResult<()>;
    /// Every row, in the engine's default order.
    fn list_all(&self) -> StoreResult<Vec<Contact>>;
    /// Rows whose name contains `fragment`; an empty fragment matches every row.
    fn search(&self, fragment: &str) -> StoreResult<Vec<Contact>>;
}
