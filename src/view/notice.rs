//! User-facing warnings and action outcomes.

use std::fmt;

use crate::contact::Contact;

/// Blocking message shown when an action is refused before reaching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Insert attempted with an empty name or phone.
    MissingContactData,
    /// Delete attempted with no row selected.
    NothingToDelete,
    /// Obtain attempted with no row selected.
    NothingToShow,
    /// Search attempted with an empty name fragment.
    MissingSearchName,
}

impl Notice {
    /// Dialog title.
    pub fn title(self) -> &'static str {
        "Error"
    }

    /// Dialog body.
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingContactData => "Please fill in every field!",
            Self::NothingToDelete => "Please select the contact to delete!",
            Self::NothingToShow => "Please select the contact to show!",
            Self::MissingSearchName => "Type a name to search for!",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of one user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The table was redrawn with this many rows.
    Rendered {
        /// Rows now displayed.
        rows: usize,
    },
    /// The action was refused; the notice must be acknowledged.
    Warned(Notice),
    /// The selected contact was surfaced.
    Shown(Contact),
}
