//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the auth forms, the shortening form and the URL list while
//! reading/writing shared state from Leptos context providers.

pub mod create_url_form;
pub mod login_form;
pub mod register_form;
pub mod toast_stack;
pub mod url_card;
pub mod url_list;
