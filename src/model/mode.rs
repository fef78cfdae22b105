use std::fmt;

use serde::{Deserialize, Serialize};

use super::field::FieldName;

/// Whether the form signs in to an existing account or creates a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

static LOGIN_FIELDS: &[FieldName] = &[FieldName::Email, FieldName::Password];

static SIGNUP_FIELDS: &[FieldName] = &[
    FieldName::Email,
    FieldName::Password,
    FieldName::ConfirmPassword,
];

impl AuthMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    /// Fields whose validity gates submission in this mode.
    pub fn active_fields(&self) -> &'static [FieldName] {
        match self {
            AuthMode::Login => LOGIN_FIELDS,
            AuthMode::Signup => SIGNUP_FIELDS,
        }
    }

    /// Returns the persisted representation of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Signup => "signup",
        }
    }

    /// Parses the persisted representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "login" => Some(AuthMode::Login),
            "signup" => Some(AuthMode::Signup),
            _ => None,
        }
    }

    /// Returns the heading and submit label for this mode.
    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Sign Up",
        }
    }
}

#[mutants::skip]
impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_login() {
        assert_eq!(AuthMode::default(), AuthMode::Login);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Signup);
        assert_eq!(AuthMode::Signup.toggled(), AuthMode::Login);
    }

    #[test]
    fn login_ignores_confirm_password() {
        assert!(!AuthMode::Login
            .active_fields()
            .contains(&FieldName::ConfirmPassword));
    }

    #[test]
    fn signup_uses_all_fields() {
        assert_eq!(AuthMode::Signup.active_fields(), FieldName::all());
    }

    #[test]
    fn parse_persisted_strings() {
        assert_eq!(AuthMode::parse("login"), Some(AuthMode::Login));
        assert_eq!(AuthMode::parse("signup"), Some(AuthMode::Signup));
        assert_eq!(AuthMode::parse("Signup"), None);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&AuthMode::Signup).unwrap(), "\"signup\"");
        let mode: AuthMode = serde_json::from_str("\"login\"").unwrap();
        assert_eq!(mode, AuthMode::Login);
    }
}
