//! Local contact book: a SQLite-backed store and a terminal window around it.
//!
//! # Examples
//!
//! Store-level usage with [`persist::sqlite::SqliteContactStore`]:
//! ```
//! use contact_book::{
//!     contact::ContactDraft,
//!     persist::{ContactStore, sqlite::SqliteContactStore},
//! };
//!
//! let store = SqliteContactStore::open_in_memory().expect("open");
//! store.insert(ContactDraft::new("Ana", "555-0100")).expect("insert");
//! let found = store.search("an").expect("search");
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].id, 1);
//! ```
//!
//! Driving the window state without a terminal:
//! ```
//! use contact_book::{
//!     config::FailurePolicy,
//!     persist::sqlite::SqliteContactStore,
//!     view::{ContactView, notice::Outcome},
//! };
//!
//! let store = SqliteContactStore::open_in_memory().expect("open");
//! let mut view = ContactView::new(store, FailurePolicy::Degrade);
//! view.fields_mut().name = "Bruno".to_string();
//! view.fields_mut().phone = "555-0200".to_string();
//! assert_eq!(view.insert().expect("insert"), Outcome::Rendered { rows: 1 });
//! assert!(view.fields().name.is_empty());
//! ```
#![warn(missing_docs)]

/// Command-line arguments.
pub mod cli;
/// Headless commands.
pub mod commands;
/// Resolved settings and the connection-failure policy.
pub mod config;
/// Contact records and drafts.
pub mod contact;
/// Tracing subscriber setup.
pub mod logging;
/// Store abstraction and SQLite implementation.
pub mod persist;
/// Shared primitive types.
pub mod types;
/// Terminal front end.
pub mod ui;
/// Window state and actions.
pub mod view;
