//! Domain layer: core entities and business rules.

pub mod auth_form;
pub mod chat;
pub mod chat_list_state;
pub mod chat_registry;
pub mod events;
pub mod navigation;
pub mod sample_data;
pub mod shell_state;
pub mod text_field;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
