//! Contact record and insert draft types.

use serde::{Deserialize, Serialize};

use crate::types::ContactId;

/// Contact as surfaced to the user: id, name and phone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Storage-assigned identifier.
    pub id: ContactId,
    /// Contact name, stored verbatim.
    pub name: String,
    /// Phone number, stored verbatim without normalization.
    pub phone: String,
}

/// Insert payload used to create a new [`Contact`].
///
/// `email` and `notes` map to reserved columns of the on-disk schema. Nothing in
/// the interface edits them; [`ContactDraft::new`] leaves both empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDraft {
    /// Contact name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Reserved email column.
    pub email: String,
    /// Reserved free-form notes column.
    pub notes: String,
}

impl ContactDraft {
    /// Builds a draft with empty reserved columns.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            ..Self::default()
        }
    }

    /// True when both name and phone are non-empty.
    ///
    /// The store accepts incomplete drafts; callers check this first.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.phone.is_empty()
    }
}
