//! Reusable TUI widgets.

pub mod form;
pub mod status_bar;

pub use form::{display_value, draw_form, field_hint};
pub use status_bar::{StatusBarContext, draw_status_bar};
