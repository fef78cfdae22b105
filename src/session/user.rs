use tracing::{info, warn};

use super::{Session, SessionCollaborator};
use crate::model::{AuthMode, Credentials};
use crate::storage::{KeyValueStore, StorageError};

/// Store key holding the credentials as JSON.
pub const AUTH_DATA_KEY: &str = "user_auth_data";
/// Store key holding the mode (`login` or `signup`).
pub const AUTH_MODE_KEY: &str = "user_auth_mode";

/// The signed-in user, kept in memory and mirrored to a [`KeyValueStore`].
///
/// Memory is updated before the store is written, so a failed write leaves
/// the in-memory session ahead of what is persisted.
#[derive(Debug)]
pub struct UserSession<S> {
    store: S,
    session: Option<Session>,
}

impl<S: KeyValueStore> UserSession<S> {
    /// Creates a signed-out session without reading the store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: None,
        }
    }

    /// Loads any previously saved session from `store`.
    ///
    /// Both keys must be present. Unreadable data is logged and treated as
    /// signed out.
    pub async fn restore(store: S) -> Self {
        let session = match load_session(&store).await {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "could not load saved session; starting signed out");
                None
            }
        };
        if let Some(ref s) = session {
            info!(email = %s.credentials.email, mode = %s.mode, "restored saved session");
        }
        Self { store, session }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> SessionCollaborator for UserSession<S> {
    async fn save(&mut self, credentials: Credentials, mode: AuthMode) -> Result<(), StorageError> {
        let data = serde_json::to_string(&credentials)?;
        self.session = Some(Session { credentials, mode });

        self.store.set(AUTH_DATA_KEY, &data).await?;
        self.store.set(AUTH_MODE_KEY, mode.as_str()).await?;
        info!(%mode, "saved session");
        Ok(())
    }

    async fn clear(&mut self) -> Result<(), StorageError> {
        self.session = None;

        self.store.remove(AUTH_DATA_KEY).await?;
        self.store.remove(AUTH_MODE_KEY).await?;
        info!("cleared session");
        Ok(())
    }

    fn current_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

async fn load_session<S: KeyValueStore>(store: &S) -> Result<Option<Session>, StorageError> {
    let data = store.get(AUTH_DATA_KEY).await?;
    let mode = store.get(AUTH_MODE_KEY).await?;

    let (Some(data), Some(mode)) = (data, mode) else {
        return Ok(None);
    };

    let credentials: Credentials = serde_json::from_str(&data)?;
    let mode = AuthMode::parse(&mode).ok_or_else(|| StorageError::CorruptValue {
        key: AUTH_MODE_KEY.to_string(),
        reason: format!("unknown mode {mode:?}"),
    })?;
    Ok(Some(Session { credentials, mode }))
}
