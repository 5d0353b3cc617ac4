//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{config::FailurePolicy, types::ContactId};

/// Local contact book backed by a SQLite file.
#[derive(Debug, Parser)]
#[command(name = "contact-book", version, about)]
pub struct Cli {
    /// Database file (defaults to contacts.db next to the executable).
    #[arg(long, global = true, env = "CONTACT_BOOK_DB")]
    pub db: Option<PathBuf>,

    /// Behavior when the database cannot be opened.
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = FailurePolicy::Degrade,
        env = "CONTACT_BOOK_ON_CONNECT_FAILURE"
    )]
    pub on_connect_failure: FailurePolicy,

    /// Log file for the interactive window (defaults to contact-book.log next to the executable).
    #[arg(long, global = true, env = "CONTACT_BOOK_LOG")]
    pub log_file: Option<PathBuf>,

    /// Command to run; the interactive window when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands. Everything except `ui` prints contacts as JSON lines.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Open the interactive contact window.
    Ui,
    /// Print every contact.
    List,
    /// Print contacts whose name contains NAME.
    Search {
        /// Name fragment.
        name: String,
    },
    /// Add a contact.
    Add {
        /// Contact name.
        name: String,
        /// Phone number, stored as typed.
        phone: String,
    },
    /// Delete a contact by id.
    Delete {
        /// Contact id as shown by `list`.
        id: ContactId,
    },
}
