//! Headless commands: the same guards as the window, output as JSON lines.

use std::io::{self, Write};

use crate::{
    cli::Commands,
    config::FailurePolicy,
    contact::{Contact, ContactDraft},
    persist::{ContactStore, StoreError},
    view::notice::Notice,
};

/// Failure of a headless command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Input was refused before reaching the store.
    #[error("{0}")]
    Refused(Notice),
    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Writing the output failed.
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
    /// Output serialization failed.
    #[error("cannot encode contact: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Runs a headless command against `store`, writing contacts to `out`.
///
/// [`Commands::Ui`] opens the window and is not handled here.
pub fn execute<S: ContactStore, W: Write>(
    store: &S,
    policy: FailurePolicy,
    command: Commands,
    out: &mut W,
) -> Result<(), CommandError> {
    match command {
        Commands::Ui => Ok(()),
        Commands::List => {
            let contacts = policy.settle(store.list_all())?;
            write_contacts(out, &contacts)
        }
        Commands::Search { name } => {
            let fragment = name.trim();
            if fragment.is_empty() {
                return Err(CommandError::Refused(Notice::MissingSearchName));
            }
            let contacts = policy.settle(store.search(fragment))?;
            write_contacts(out, &contacts)
        }
        Commands::Add { name, phone } => {
            let draft = ContactDraft::new(name, phone);
            if !draft.is_complete() {
                return Err(CommandError::Refused(Notice::MissingContactData));
            }
            policy.settle(store.insert(draft))?;
            Ok(())
        }
        Commands::Delete { id } => {
            policy.settle(store.delete(id))?;
            Ok(())
        }
    }
}

/// Writes one JSON object per line.
pub fn write_contacts<W: Write>(out: &mut W, contacts: &[Contact]) -> Result<(), CommandError> {
    for contact in contacts {
        serde_json::to_writer(&mut *out, contact)?;
        writeln!(out)?;
    }
    Ok(())
}
