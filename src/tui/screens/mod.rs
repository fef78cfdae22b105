//! TUI screen implementations.

pub mod home;
pub mod login;

pub use home::{HomeState, draw_home};
pub use login::{LoginState, draw_login};
