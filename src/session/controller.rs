use tracing::{info, warn};

use super::SessionCollaborator;
use crate::model::{AuthMode, Credentials, FieldName, FormError, FormState, toggle_mode};
use crate::storage::StorageError;

/// State behind the login/signup screen.
///
/// Owns the current [`AuthMode`] and [`FormState`] and replaces the form
/// snapshot wholesale on every edit or mode switch.
#[derive(Debug, Clone, Default)]
pub struct LoginController {
    mode: AuthMode,
    form: FormState,
    password_visible: bool,
    confirm_password_visible: bool,
}

impl LoginController {
    /// Starts in login mode with a blank form and hidden passwords.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Replaces the value of `name` and revalidates that field.
    pub fn update_field(&mut self, name: FieldName, value: &str) {
        self.form = self.form.update_field(name, value);
    }

    /// Entry point for callers that address fields by their external string
    /// identifier (`email`, `password`, `confirmPassword`) rather than
    /// [`FieldName`]. Otherwise identical to [`update_field`](Self::update_field).
    ///
    /// An unknown identifier is a caller bug: it is logged and the form is
    /// left unchanged.
    pub fn update_field_by_id(&mut self, id: &str, value: &str) -> Result<(), FormError> {
        let name = id.parse::<FieldName>().inspect_err(|e| {
            warn!(error = %e, "rejected update for unknown field");
        })?;
        self.update_field(name, value);
        Ok(())
    }

    /// Switches between login and signup.
    ///
    /// Leaving signup clears the confirmation field.
    pub fn toggle_mode(&mut self) {
        let (mode, form) = toggle_mode(self.mode, &self.form);
        self.mode = mode;
        self.form = form;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn toggle_confirm_password_visibility(&mut self) {
        self.confirm_password_visible = !self.confirm_password_visible;
    }

    pub fn is_password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn is_confirm_password_visible(&self) -> bool {
        self.confirm_password_visible
    }

    /// Whether the value of `name` should be shown in clear text.
    pub fn is_revealed(&self, name: FieldName) -> bool {
        match name {
            FieldName::Email => true,
            FieldName::Password => self.password_visible,
            FieldName::ConfirmPassword => self.confirm_password_visible,
        }
    }

    /// Fields shown and validated in the current mode.
    pub fn active_fields(&self) -> &'static [FieldName] {
        self.mode.active_fields()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.form.is_submit_enabled(self.mode)
    }

    /// The email and password as currently entered.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.form.field(FieldName::Email).value(),
            self.form.field(FieldName::Password).value(),
        )
    }

    /// Hands the entered credentials and current mode to `session`.
    ///
    /// The caller is responsible for only submitting when
    /// [`is_submit_enabled`](Self::is_submit_enabled) holds. Errors from the
    /// session are returned as-is.
    pub async fn submit<C: SessionCollaborator>(&self, session: &mut C) -> Result<(), StorageError> {
        let credentials = self.credentials();
        info!(email = %credentials.email, mode = %self.mode, "auth attempt");
        session.save(credentials, self.mode).await
    }
}
