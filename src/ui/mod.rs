//! UI layer: rendering and interaction entry points (CLI/TUI).

mod auth_view;
mod chat_rows;
mod event_source;
mod form_field;
mod home_view;
pub mod shell;
mod styles;
mod terminal;
mod view;

pub use chat_rows::chat_row_text;
pub(crate) use event_source::CrosstermEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
