use std::{
    io::{self, Write},
    ops::ControlFlow,
};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::{
    persist::{ContactStore, StoreResult},
    view::{
        ContactView,
        notice::{Notice, Outcome},
    },
};

use super::{
    keymap::{Command, command_for},
    screen::{self, Frame},
};

/// Routes `command` to the matching view action.
///
/// Commands that only move focus, selection or text return `Ok(None)`.
pub fn dispatch<S: ContactStore>(
    view: &mut ContactView<S>,
    command: Command,
) -> StoreResult<Option<Outcome>> {
    let outcome = match command {
        Command::Insert => view.insert()?,
        Command::Delete => view.delete()?,
        Command::Obtain => view.obtain()?,
        Command::Search => view.search()?,
        Command::ShowAll => view.render_all()?,
        Command::FocusNext => {
            view.fields_mut().focus_next();
            return Ok(None);
        }
        Command::FocusPrevious => {
            view.fields_mut().focus_previous();
            return Ok(None);
        }
        Command::SelectNext => {
            view.select_next();
            return Ok(None);
        }
        Command::SelectPrevious => {
            view.select_previous();
            return Ok(None);
        }
        Command::Type(ch) => {
            view.fields_mut().type_char(ch);
            return Ok(None);
        }
        Command::Backspace => {
            view.fields_mut().backspace();
            return Ok(None);
        }
        Command::Quit => return Ok(None),
    };
    Ok(Some(outcome))
}

/// Status line and pending dialog between key presses.
#[derive(Debug, Default)]
pub struct LoopState {
    /// Text of the status line.
    pub status: String,
    /// Dialog waiting to be acknowledged.
    pub modal: Option<Notice>,
}

impl LoopState {
    /// Handles one key event. Breaks when the user quits.
    ///
    /// While a dialog is open the key only dismisses it; no command runs.
    pub fn handle<S: ContactStore>(
        &mut self,
        view: &mut ContactView<S>,
        key: KeyEvent,
    ) -> ControlFlow<()> {
        if key.kind != KeyEventKind::Press {
            return ControlFlow::Continue(());
        }
        if self.modal.take().is_some() {
            return ControlFlow::Continue(());
        }

        let Some(command) = command_for(key, view.fields().focus) else {
            return ControlFlow::Continue(());
        };
        if command == Command::Quit {
            return ControlFlow::Break(());
        }
        let result = dispatch(view, command);
        self.record(command, result);
        ControlFlow::Continue(())
    }

    /// Records the result of one dispatched command.
    ///
    /// A failed action is aborted and reported; the window stays open.
    pub fn record(&mut self, command: Command, result: StoreResult<Option<Outcome>>) {
        match result {
            Ok(Some(Outcome::Rendered { rows })) => {
                self.status = format!("{rows} contact(s) listed");
            }
            Ok(Some(Outcome::Warned(notice))) => self.modal = Some(notice),
            Ok(Some(Outcome::Shown(contact))) => {
                self.status = format!(
                    "ID: {}  Name: {}  Phone: {}",
                    contact.id, contact.name, contact.phone
                );
            }
            Ok(None) => {}
            Err(err) => {
                tracing::error!(error = %err, ?command, "action aborted");
                self.status = format!("error: {err}");
            }
        }
    }
}

struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Runs the window until the user quits.
///
/// Everything happens on the calling thread: each key press is handled to
/// completion, store call included, before the next one is read.
pub fn run<S: ContactStore>(view: &mut ContactView<S>) -> io::Result<()> {
    let mut out = io::stdout();
    let _guard = TerminalGuard::enter(&mut out)?;
    let mut state = LoopState::default();

    let initial = dispatch(view, Command::ShowAll);
    state.record(Command::ShowAll, initial);

    loop {
        let frame = Frame {
            fields: view.fields(),
            rows: view.rows(),
            selected: view.selected(),
            status: &state.status,
            modal: state.modal,
        };
        screen::draw(&mut out, &frame, terminal::size()?)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if state.handle(view, key).is_break() {
            break;
        }
    }

    tracing::debug!("window closed");
    Ok(())
}
