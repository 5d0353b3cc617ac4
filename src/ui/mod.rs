//! Terminal rendering of the contact window.

/// Event loop and command dispatch.
pub mod app;
/// Key bindings.
pub mod keymap;
/// Fixed-size frame layout and drawing.
pub mod screen;
