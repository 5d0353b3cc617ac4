//! SQLite-backed contact store.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, Row, params};

use crate::{
    contact::{Contact, ContactDraft},
    types::ContactId,
};

use super::{ContactStore, StoreError, StoreResult};

const INSERT_SQL: &str = "INSERT INTO TB_CONTATOS \
     (T_NOMECONTATO, T_TELEFONECONTATO, T_EMAILCONTATO, T_INFORMACOES) \
     VALUES (?1, ?2, ?3, ?4)";
const DELETE_SQL: &str = "DELETE FROM TB_CONTATOS WHERE N_IDCONTATO = ?1";
const LIST_SQL: &str = "SELECT N_IDCONTATO, T_NOMECONTATO, T_TELEFONECONTATO FROM TB_CONTATOS";
const SEARCH_SQL: &str = "SELECT N_IDCONTATO, T_NOMECONTATO, T_TELEFONECONTATO FROM TB_CONTATOS \
     WHERE T_NOMECONTATO LIKE ?1 ESCAPE '\\'";

enum Source {
    File(PathBuf),
    Memory(Connection),
}

/// SQLite implementation of [`crate::persist::ContactStore`].
///
/// File-backed stores hold only a path: each operation opens its own
/// connection, runs one statement in autocommit mode, and closes it again.
pub struct SqliteContactStore {
    source: Source,
}

impl SqliteContactStore {
    /// Points a store at `path` without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::File(path.into()),
        }
    }

    /// Points a store at `path` and creates the contacts table if missing.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let store = Self::new(path);
        store.ensure_schema()?;
        Ok(store)
    }

    /// Opens a store over a single in-memory connection.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::Connect {
            path: PathBuf::from(":memory:"),
            source,
        })?;
        let store = Self {
            source: Source::Memory(conn),
        };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Backing database file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            Source::File(path) => Some(path),
            Source::Memory(_) => None,
        }
    }

    /// Creates the contacts table if it does not exist yet.
    pub fn ensure_schema(&self) -> StoreResult<()> {
        self.with_connection(|conn| conn.execute_batch(include_str!("schema.sql")))
    }

    fn with_connection<T>(
        &self,
        f: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> StoreResult<T> {
        match &self.source {
            Source::File(path) => {
                let conn = Connection::open(path).map_err(|source| StoreError::Connect {
                    path: path.clone(),
                    source,
                })?;
                let out = f(&conn)?;
                conn.close().map_err(|(_, err)| StoreError::Sqlite(err))?;
                Ok(out)
            }
            Source::Memory(conn) => Ok(f(conn)?),
        }
    }

    fn query_contacts(&self, sql: &str, pattern: Option<&str>) -> StoreResult<Vec<Contact>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(sql)?;
            let rows = match pattern {
                Some(pattern) => stmt.query_map(params![pattern], contact_from_row)?,
                None => stmt.query_map([], contact_from_row)?,
            };

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }
}

impl ContactStore for SqliteContactStore {
    fn insert(&self, draft: ContactDraft) -> StoreResult<()> {
        tracing::debug!(name = %draft.name, "inserting contact");
        self.with_connection(|conn| {
            conn.execute(
                INSERT_SQL,
                params![draft.name, draft.phone, draft.email, draft.notes],
            )
        })?;
        Ok(())
    }

    fn delete(&self, id: ContactId) -> StoreResult<()> {
        let removed = self.with_connection(|conn| conn.execute(DELETE_SQL, params![id]))?;
        tracing::debug!(id, removed, "deleted contact");
        Ok(())
    }

    fn list_all(&self) -> StoreResult<Vec<Contact>> {
        self.query_contacts(LIST_SQL, None)
    }

    fn search(&self, fragment: &str) -> StoreResult<Vec<Contact>> {
        let pattern = contains_pattern(fragment);
        tracing::debug!(%pattern, "searching contacts");
        self.query_contacts(SEARCH_SQL, Some(&pattern))
    }
}

fn contact_from_row(row: &Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
    })
}

/// Wraps `fragment` for a literal `LIKE` substring match.
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
