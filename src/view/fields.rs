//! Input fields and keyboard focus.

/// Focusable widgets, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Display-only id field.
    #[default]
    Id,
    /// Name entry.
    Name,
    /// Phone entry.
    Phone,
    /// Contact table.
    Table,
    /// Search panel name entry.
    Search,
}

impl Focus {
    const ORDER: [Focus; 5] = [Focus::Id, Focus::Name, Focus::Phone, Focus::Table, Focus::Search];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next widget in tab order, wrapping around.
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Previous widget in tab order, wrapping around.
    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }

    /// True for entries that accept typed text.
    pub fn is_editable(self) -> bool {
        matches!(self, Self::Name | Self::Phone | Self::Search)
    }
}

/// Text held by the window's entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputFields {
    /// Id entry. Never edited by the user.
    pub id: String,
    /// Name entry.
    pub name: String,
    /// Phone entry.
    pub phone: String,
    /// Search panel entry.
    pub search: String,
    /// Widget receiving keystrokes.
    pub focus: Focus,
}

impl InputFields {
    fn focused_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Name => Some(&mut self.name),
            Focus::Phone => Some(&mut self.phone),
            Focus::Search => Some(&mut self.search),
            Focus::Id | Focus::Table => None,
        }
    }

    /// Appends `ch` to the focused entry. Ignored when it is not editable.
    pub fn type_char(&mut self, ch: char) {
        if let Some(text) = self.focused_mut() {
            text.push(ch);
        }
    }

    /// Removes the last character of the focused entry.
    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_mut() {
            text.pop();
        }
    }

    /// Clears the id, name and phone entries. The search entry is kept.
    pub fn clear_entry(&mut self) {
        self.id.clear();
        self.name.clear();
        self.phone.clear();
    }

    /// Moves focus forward in tab order.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus backward in tab order.
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }
}
