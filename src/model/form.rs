//! Form state for the login/signup screen.
//!
//! [`FormState`] is a value: every transition returns a new snapshot and
//! leaves the previous one untouched.

use super::field::{Field, FieldName};
use super::mode::AuthMode;
use super::validation::{ValidationRule, validate};

/// Minimum password length accepted by the form.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Snapshot of the three form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: [Field; 3],
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Creates a form with all fields empty, invalid and untouched.
    pub fn new() -> Self {
        Self {
            fields: [
                Field::new(vec![ValidationRule::IsEmail]),
                Field::new(vec![ValidationRule::MinLength(MIN_PASSWORD_LENGTH)]),
                Field::new(vec![ValidationRule::EqualTo(FieldName::Password)]),
            ],
        }
    }

    /// Returns the field with the given name.
    pub fn field(&self, name: FieldName) -> &Field {
        &self.fields[name.index()]
    }

    /// Sets `name` to `value`, marks it touched and revalidates it.
    ///
    /// Cross-field rules read the snapshot that already holds `value`.
    /// Other fields are not revalidated, so a confirmation that matched an
    /// earlier password keeps its validity until it is edited again.
    pub fn update_field(&self, name: FieldName, value: &str) -> FormState {
        let mut next = self.clone();
        let field = &mut next.fields[name.index()];
        field.value = value.to_string();
        field.touched = true;

        let valid = validate(value, next.field(name).rules(), &next);
        next.fields[name.index()].valid = valid;
        next
    }

    /// Returns a snapshot with `name` cleared back to its initial state.
    pub fn reset_field(&self, name: FieldName) -> FormState {
        let mut next = self.clone();
        next.fields[name.index()].reset();
        next
    }

    /// Whether every field that matters in `mode` is valid.
    pub fn is_submit_enabled(&self, mode: AuthMode) -> bool {
        mode.active_fields()
            .iter()
            .all(|name| self.field(*name).is_valid())
    }
}

/// Switches mode, clearing the confirmation field when leaving signup.
pub fn toggle_mode(mode: AuthMode, form: &FormState) -> (AuthMode, FormState) {
    let next = mode.toggled();
    match next {
        AuthMode::Signup => (next, form.clone()),
        AuthMode::Login => (next, form.reset_field(FieldName::ConfirmPassword)),
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn filled(email: &str, password: &str, confirm: &str) -> FormState {
        FormState::new()
            .update_field(FieldName::Email, email)
            .update_field(FieldName::Password, password)
            .update_field(FieldName::ConfirmPassword, confirm)
    }

    // --- Initial state ---

    #[test]
    fn new_form_is_blank() {
        let form = FormState::new();
        for name in FieldName::all() {
            let field = form.field(*name);
            assert_eq!(field.value(), "");
            assert!(!field.is_valid());
            assert!(!field.is_touched());
        }
    }

    #[test]
    fn new_form_rules() {
        let form = FormState::new();
        assert_eq!(form.field(FieldName::Email).rules(), &[ValidationRule::IsEmail]);
        assert_eq!(
            form.field(FieldName::Password).rules(),
            &[ValidationRule::MinLength(6)]
        );
        assert_eq!(
            form.field(FieldName::ConfirmPassword).rules(),
            &[ValidationRule::EqualTo(FieldName::Password)]
        );
    }

    #[test]
    fn new_form_cannot_submit() {
        assert!(!FormState::new().is_submit_enabled(AuthMode::Login));
        assert!(!FormState::new().is_submit_enabled(AuthMode::Signup));
    }

    // --- update_field ---

    #[test]
    fn update_sets_value_touched_and_validity() {
        let form = FormState::new().update_field(FieldName::Email, "test@example.com");
        let email = form.field(FieldName::Email);
        assert_eq!(email.value(), "test@example.com");
        assert!(email.is_touched());
        assert!(email.is_valid());
    }

    #[test]
    fn update_invalid_value_is_touched_but_invalid() {
        let form = FormState::new().update_field(FieldName::Password, "123");
        assert!(form.field(FieldName::Password).is_touched());
        assert!(!form.field(FieldName::Password).is_valid());
    }

    #[test]
    fn update_leaves_previous_snapshot_unchanged() {
        let before = FormState::new();
        let after = before.update_field(FieldName::Email, "a@b.com");
        assert_eq!(before, FormState::new());
        assert_ne!(before, after);
    }

    #[test]
    fn update_does_not_touch_siblings() {
        let form = FormState::new().update_field(FieldName::Email, "a@b.com");
        assert!(!form.field(FieldName::Password).is_touched());
        assert!(!form.field(FieldName::ConfirmPassword).is_touched());
    }

    #[test]
    fn touched_stays_true_when_cleared() {
        let form = FormState::new()
            .update_field(FieldName::Email, "a")
            .update_field(FieldName::Email, "");
        assert!(form.field(FieldName::Email).is_touched());
    }

    #[test]
    fn confirm_password_matches_current_password() {
        let form = FormState::new().update_field(FieldName::Password, "password123");
        let form = form.update_field(FieldName::ConfirmPassword, "different");
        assert!(!form.field(FieldName::ConfirmPassword).is_valid());
        let form = form.update_field(FieldName::ConfirmPassword, "password123");
        assert!(form.field(FieldName::ConfirmPassword).is_valid());
    }

    #[test]
    fn confirm_password_validity_goes_stale_when_password_changes() {
        let form = FormState::new()
            .update_field(FieldName::Password, "secret1")
            .update_field(FieldName::ConfirmPassword, "secret1");
        assert!(form.field(FieldName::ConfirmPassword).is_valid());

        // Editing the password does not revalidate the confirmation.
        let form = form.update_field(FieldName::Password, "other12");
        assert!(form.field(FieldName::ConfirmPassword).is_valid());
        assert_ne!(
            form.field(FieldName::ConfirmPassword).value(),
            form.field(FieldName::Password).value()
        );

        // Editing the confirmation picks up the new password.
        let form = form.update_field(FieldName::ConfirmPassword, "secret1");
        assert!(!form.field(FieldName::ConfirmPassword).is_valid());
    }

    #[quickcheck]
    fn validity_is_function_of_value(value: String) -> bool {
        let a = FormState::new().update_field(FieldName::Password, &value);
        let b = FormState::new()
            .update_field(FieldName::Password, "something else")
            .update_field(FieldName::Password, &value);
        a.field(FieldName::Password) == b.field(FieldName::Password)
    }

    // --- is_submit_enabled ---

    #[test]
    fn login_ignores_confirm_password() {
        let form = filled("a@b.com", "secret1", "nope");
        assert!(!form.field(FieldName::ConfirmPassword).is_valid());
        assert!(form.is_submit_enabled(AuthMode::Login));
    }

    #[test]
    fn signup_requires_confirm_password() {
        let form = filled("a@b.com", "secret1", "nope");
        assert!(!form.is_submit_enabled(AuthMode::Signup));
    }

    #[test]
    fn signup_enabled_when_all_valid() {
        let form = filled("a@b.com", "secret1", "secret1");
        assert!(form.is_submit_enabled(AuthMode::Signup));
    }

    #[test]
    fn invalid_email_blocks_both_modes() {
        let form = filled("a@b.io", "secret1", "secret1");
        assert!(!form.is_submit_enabled(AuthMode::Login));
        assert!(!form.is_submit_enabled(AuthMode::Signup));
    }

    #[test]
    fn short_password_blocks_both_modes() {
        let form = filled("a@b.com", "12345", "12345");
        assert!(!form.is_submit_enabled(AuthMode::Login));
        assert!(!form.is_submit_enabled(AuthMode::Signup));
    }

    // --- toggle_mode ---

    #[test]
    fn login_to_signup_keeps_fields() {
        let form = filled("a@b.com", "secret1", "secret1");
        let (mode, next) = toggle_mode(AuthMode::Login, &form);
        assert_eq!(mode, AuthMode::Signup);
        assert_eq!(next, form);
    }

    #[test]
    fn signup_to_login_resets_confirm_password_only() {
        let form = filled("a@b.com", "secret1", "secret1");
        let (mode, next) = toggle_mode(AuthMode::Signup, &form);
        assert_eq!(mode, AuthMode::Login);
        assert_eq!(next.field(FieldName::Email), form.field(FieldName::Email));
        assert_eq!(next.field(FieldName::Password), form.field(FieldName::Password));

        let confirm = next.field(FieldName::ConfirmPassword);
        assert_eq!(confirm.value(), "");
        assert!(!confirm.is_valid());
        assert!(!confirm.is_touched());
        assert_eq!(confirm.rules(), &[ValidationRule::EqualTo(FieldName::Password)]);
    }

    #[test]
    fn round_trip_through_login_clears_confirm_password() {
        let form = FormState::new()
            .update_field(FieldName::Password, "x")
            .update_field(FieldName::ConfirmPassword, "x");
        let confirm = form.field(FieldName::ConfirmPassword);
        assert!(confirm.is_valid() && confirm.is_touched());

        let (mode, form) = toggle_mode(AuthMode::Signup, &form);
        let (mode, form) = toggle_mode(mode, &form);
        assert_eq!(mode, AuthMode::Signup);
        assert_eq!(
            form.field(FieldName::ConfirmPassword),
            FormState::new().field(FieldName::ConfirmPassword)
        );
    }
}
