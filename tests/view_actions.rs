use std::cell::Cell;

use tempfile::TempDir;

use contact_book::{
    config::FailurePolicy,
    contact::{Contact, ContactDraft},
    persist::{ContactStore, StoreResult, sqlite::SqliteContactStore},
    types::ContactId,
    view::{
        ContactView,
        fields::Focus,
        notice::{Notice, Outcome},
    },
};

/// Counts store calls so tests can prove an action never reached the store.
struct CountingStore {
    inner: SqliteContactStore,
    calls: Cell<usize>,
}

impl CountingStore {
    fn new() -> Self {
        Self {
            inner: SqliteContactStore::open_in_memory().expect("open"),
            calls: Cell::new(0),
        }
    }

    fn bump(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl ContactStore for CountingStore {
    fn insert(&self, draft: ContactDraft) -> StoreResult<()> {
        self.bump();
        self.inner.insert(draft)
    }

    fn delete(&self, id: ContactId) -> StoreResult<()> {
        self.bump();
        self.inner.delete(id)
    }

    fn list_all(&self) -> StoreResult<Vec<Contact>> {
        self.bump();
        self.inner.list_all()
    }

    fn search(&self, fragment: &str) -> StoreResult<Vec<Contact>> {
        self.bump();
        self.inner.search(fragment)
    }
}

fn view() -> ContactView<CountingStore> {
    ContactView::new(CountingStore::new(), FailurePolicy::Degrade)
}

fn add(view: &mut ContactView<CountingStore>, name: &str, phone: &str) {
    view.fields_mut().name = name.to_string();
    view.fields_mut().phone = phone.to_string();
    let outcome = view.insert().expect("insert");
    assert!(matches!(outcome, Outcome::Rendered { .. }));
}

#[test]
fn insert_renders_and_resets_entry() {
    let mut view = view();
    view.fields_mut().id = "stale".to_string();
    view.fields_mut().search = "keep".to_string();
    view.fields_mut().focus = Focus::Phone;

    add(&mut view, "Ana", "555-0100");

    assert_eq!(view.rows().len(), 1);
    assert_eq!(view.rows()[0].name, "Ana");
    let fields = view.fields();
    assert!(fields.id.is_empty() && fields.name.is_empty() && fields.phone.is_empty());
    assert_eq!(fields.search, "keep");
    assert_eq!(fields.focus, Focus::Id);
}

#[test]
fn incomplete_insert_warns_without_touching_store() {
    let mut view = view();
    for (name, phone) in [("", "555"), ("Ana", ""), ("", "")] {
        view.fields_mut().name = name.to_string();
        view.fields_mut().phone = phone.to_string();
        assert_eq!(
            view.insert().expect("insert"),
            Outcome::Warned(Notice::MissingContactData)
        );
    }
    assert_eq!(view.store().calls.get(), 0);
    assert!(view.store().inner.list_all().expect("list").is_empty());
}

#[test]
fn delete_without_selection_warns_once() {
    let mut view = view();
    add(&mut view, "Ana", "555-0100");
    let calls = view.store().calls.get();

    assert_eq!(view.delete().expect("delete"), Outcome::Warned(Notice::NothingToDelete));
    assert_eq!(view.store().calls.get(), calls);
    assert_eq!(view.store().inner.list_all().expect("list").len(), 1);
}

#[test]
fn delete_removes_selected_row() {
    let mut view = view();
    add(&mut view, "Ana", "555-0100");
    add(&mut view, "Bruno", "555-0200");

    view.select(Some(0));
    assert_eq!(view.delete().expect("delete"), Outcome::Rendered { rows: 1 });
    assert_eq!(view.rows()[0].name, "Bruno");
    assert_eq!(view.selected(), None);
}

#[test]
fn obtain_requires_selection() {
    let mut view = view();
    add(&mut view, "Ana", "555-0100");

    assert_eq!(view.obtain().expect("obtain"), Outcome::Warned(Notice::NothingToShow));

    view.select(Some(0));
    let calls = view.store().calls.get();
    assert_eq!(
        view.obtain().expect("obtain"),
        Outcome::Shown(Contact {
            id: 1,
            name: "Ana".to_string(),
            phone: "555-0100".to_string(),
        })
    );
    assert_eq!(view.store().calls.get(), calls);
}

#[test]
fn search_needs_a_trimmed_fragment() {
    let mut view = view();
    add(&mut view, "Ana", "555-0100");
    add(&mut view, "Bruno", "555-0200");
    let calls = view.store().calls.get();

    view.fields_mut().search = "   ".to_string();
    assert_eq!(view.search().expect("search"), Outcome::Warned(Notice::MissingSearchName));
    assert_eq!(view.store().calls.get(), calls);
    assert_eq!(view.rows().len(), 2);

    view.fields_mut().search = " an ".to_string();
    assert_eq!(view.search().expect("search"), Outcome::Rendered { rows: 1 });
    assert_eq!(view.rows()[0].name, "Ana");

    assert_eq!(view.render_all().expect("render"), Outcome::Rendered { rows: 2 });
}

#[test]
fn selection_is_clamped_and_cleared_on_render() {
    let mut view = view();
    view.select_next();
    assert_eq!(view.selected(), None);

    add(&mut view, "Ana", "1");
    add(&mut view, "Bruno", "2");

    view.select(Some(9));
    assert_eq!(view.selected(), Some(1));
    view.select_previous();
    view.select_previous();
    assert_eq!(view.selected(), Some(0));
    view.select_next();
    assert_eq!(view.selected_contact().map(|c| c.name.as_str()), Some("Bruno"));

    view.render_all().expect("render");
    assert_eq!(view.selected(), None);
}

#[test]
fn degrade_policy_turns_connect_failure_into_empty_rows() {
    let tmp = TempDir::new().expect("tmp");
    let store = SqliteContactStore::new(tmp.path().join("nope").join("contacts.db"));
    let mut view = ContactView::new(store, FailurePolicy::Degrade);

    view.fields_mut().name = "Ana".to_string();
    view.fields_mut().phone = "1".to_string();
    assert_eq!(view.insert().expect("degraded insert"), Outcome::Rendered { rows: 0 });
    assert!(view.rows().is_empty());
}

#[test]
fn propagate_policy_returns_connect_failure() {
    let tmp = TempDir::new().expect("tmp");
    let store = SqliteContactStore::new(tmp.path().join("nope").join("contacts.db"));
    let mut view = ContactView::new(store, FailurePolicy::Propagate);

    let err = view.render_all().expect_err("propagated");
    assert!(err.is_connect());
}
