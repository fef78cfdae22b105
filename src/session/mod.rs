//! Authentication session: the login form controller and the persisted
//! session it hands credentials to.

mod controller;
mod user;

pub use controller::LoginController;
pub use user::{AUTH_DATA_KEY, AUTH_MODE_KEY, UserSession};

use crate::model::{AuthMode, Credentials};
use crate::storage::StorageError;

/// A signed-in user: the submitted credentials and the mode used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub credentials: Credentials,
    pub mode: AuthMode,
}

/// Receives credentials from the login form and remembers them.
pub trait SessionCollaborator {
    /// Records `credentials` and `mode` as the current session and persists them.
    fn save(
        &mut self,
        credentials: Credentials,
        mode: AuthMode,
    ) -> impl Future<Output = Result<(), StorageError>>;

    /// Forgets the current session, in memory and in storage.
    fn clear(&mut self) -> impl Future<Output = Result<(), StorageError>>;

    /// Returns the current session, if signed in.
    fn current_session(&self) -> Option<&Session>;
}
