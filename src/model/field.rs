use std::fmt;
use std::str::FromStr;

use super::validation::{FormError, ValidationRule};

/// Identifies one of the three inputs on the login/signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldName {
    #[default]
    Email,
    Password,
    ConfirmPassword,
}

static ALL_FIELDS: &[FieldName] = &[
    FieldName::Email,
    FieldName::Password,
    FieldName::ConfirmPassword,
];

impl FieldName {
    /// Returns all fields in form order.
    pub fn all() -> &'static [FieldName] {
        ALL_FIELDS
    }

    /// Returns the external identifier used by the view layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }

    /// Returns the label shown above the input.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Email => "Email",
            FieldName::Password => "Password",
            FieldName::ConfirmPassword => "Confirm Password",
        }
    }

    /// Whether the field holds a secret and is masked unless revealed.
    pub fn is_secret(&self) -> bool {
        matches!(self, FieldName::Password | FieldName::ConfirmPassword)
    }

    pub(crate) fn index(self) -> usize {
        match self {
            FieldName::Email => 0,
            FieldName::Password => 1,
            FieldName::ConfirmPassword => 2,
        }
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_FIELDS
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[mutants::skip]
impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single input under validation.
///
/// `valid` and `touched` can only change through [`FormState`](super::FormState)
/// transitions, so `valid` always reflects the last validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub(crate) value: String,
    pub(crate) valid: bool,
    pub(crate) touched: bool,
    rules: Vec<ValidationRule>,
}

impl Field {
    /// Creates an empty, invalid, untouched field with the given rules.
    pub fn new(rules: Vec<ValidationRule>) -> Self {
        Self {
            value: String::new(),
            valid: false,
            touched: false,
            rules,
        }
    }

    /// Current text content.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Result of the last validation pass.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Whether the field has been edited since creation or the last reset.
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    /// Clears value, validity and touch state. Rules are kept.
    pub(crate) fn reset(&mut self) {
        self.value.clear();
        self.valid = false;
        self.touched = false;
    }
}
