//! Window state and the actions bound to its buttons.

/// Entry text and focus.
pub mod fields;
/// Warnings and action outcomes.
pub mod notice;

use crate::{
    config::FailurePolicy,
    contact::{Contact, ContactDraft},
    persist::{ContactStore, StoreResult},
};

use self::{
    fields::{Focus, InputFields},
    notice::{Notice, Outcome},
};

/// Application state passed to every event handler.
///
/// `rows` is a render-only copy of the last list or search result. It is
/// replaced wholesale on every fetch, and the selection is cleared with it.
pub struct ContactView<S> {
    store: S,
    policy: FailurePolicy,
    fields: InputFields,
    rows: Vec<Contact>,
    selected: Option<usize>,
}

impl<S: ContactStore> ContactView<S> {
    /// Creates an empty view. Call [`ContactView::render_all`] to populate it.
    pub fn new(store: S, policy: FailurePolicy) -> Self {
        Self {
            store,
            policy,
            fields: InputFields::default(),
            rows: Vec::new(),
            selected: None,
        }
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Entry text and focus.
    pub fn fields(&self) -> &InputFields {
        &self.fields
    }

    /// Mutable entry text and focus, for key handling.
    pub fn fields_mut(&mut self) -> &mut InputFields {
        &mut self.fields
    }

    /// Rows of the last list or search.
    pub fn rows(&self) -> &[Contact] {
        &self.rows
    }

    /// Index of the selected row.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selected row, if any.
    pub fn selected_contact(&self) -> Option<&Contact> {
        self.selected.and_then(|idx| self.rows.get(idx))
    }

    /// Selects row `idx`, clamped to the displayed rows.
    pub fn select(&mut self, idx: Option<usize>) {
        self.selected = match idx {
            Some(_) if self.rows.is_empty() => None,
            Some(idx) => Some(idx.min(self.rows.len() - 1)),
            None => None,
        };
    }

    /// Selects the row below, or the first row when nothing is selected.
    pub fn select_next(&mut self) {
        let next = self.selected.map_or(0, |idx| idx + 1);
        self.select(Some(next));
    }

    /// Selects the row above, or the first row when nothing is selected.
    pub fn select_previous(&mut self) {
        let prev = self.selected.map_or(0, |idx| idx.saturating_sub(1));
        self.select(Some(prev));
    }

    /// Replaces the table with every stored contact.
    pub fn render_all(&mut self) -> StoreResult<Outcome> {
        let rows = self.policy.settle(self.store.list_all())?;
        Ok(self.replace_rows(rows))
    }

    /// Stores the name and phone entries as a new contact.
    pub fn insert(&mut self) -> StoreResult<Outcome> {
        let draft = ContactDraft::new(self.fields.name.as_str(), self.fields.phone.as_str());
        if !draft.is_complete() {
            return Ok(Outcome::Warned(Notice::MissingContactData));
        }

        self.policy.settle(self.store.insert(draft))?;
        let outcome = self.render_all()?;

        self.fields.clear_entry();
        self.fields.focus = Focus::Id;
        Ok(outcome)
    }

    /// Deletes the selected contact.
    pub fn delete(&mut self) -> StoreResult<Outcome> {
        let Some(id) = self.selected_contact().map(|c| c.id) else {
            return Ok(Outcome::Warned(Notice::NothingToDelete));
        };

        self.policy.settle(self.store.delete(id))?;
        self.render_all()
    }

    /// Surfaces the selected contact on the diagnostic log.
    pub fn obtain(&self) -> StoreResult<Outcome> {
        let Some(contact) = self.selected_contact() else {
            return Ok(Outcome::Warned(Notice::NothingToShow));
        };

        tracing::info!(
            id = contact.id,
            name = %contact.name,
            phone = %contact.phone,
            "contact obtained"
        );
        Ok(Outcome::Shown(contact.clone()))
    }

    /// Replaces the table with contacts whose name contains the search entry.
    pub fn search(&mut self) -> StoreResult<Outcome> {
        let fragment = self.fields.search.trim();
        if fragment.is_empty() {
            return Ok(Outcome::Warned(Notice::MissingSearchName));
        }

        let rows = self.policy.settle(self.store.search(fragment))?;
        Ok(self.replace_rows(rows))
    }

    fn replace_rows(&mut self, rows: Vec<Contact>) -> Outcome {
        self.rows = rows;
        self.selected = None;
        Outcome::Rendered {
            rows: self.rows.len(),
        }
    }
}
