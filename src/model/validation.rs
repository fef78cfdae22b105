use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::field::FieldName;
use super::form::FormState;

/// Errors raised by the form layer for out-of-contract input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

/// Email shape with a top-level domain limited to `com`, `net`, `org` or `info`.
///
/// Matched unanchored and case-sensitively, so any substring of the input
/// that has this shape is enough.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[a-z0-9!#$%&'*+/=?^_`{|}~\-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~\-]+)*@(?:[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?\.)+(?:com|net|org|info)",
    )
    .expect("valid hardcoded regex")
});

/// A single predicate applied to a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// Value must look like an email address.
    IsEmail,
    /// Value must be at least this long, counted in UTF-16 code units.
    MinLength(usize),
    /// Value must equal the current value of another field.
    EqualTo(FieldName),
}

impl ValidationRule {
    /// Evaluates this rule against `value`, reading sibling values from `snapshot`.
    pub fn check(&self, value: &str, snapshot: &FormState) -> bool {
        match self {
            ValidationRule::IsEmail => EMAIL_RE.is_match(value),
            ValidationRule::MinLength(n) => value.encode_utf16().count() >= *n,
            ValidationRule::EqualTo(other) => value == snapshot.field(*other).value(),
        }
    }
}

#[mutants::skip]
impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationRule::IsEmail => f.write_str("enter a valid email address"),
            ValidationRule::MinLength(n) => write!(f, "must be at least {n} characters"),
            ValidationRule::EqualTo(other) => {
                write!(f, "must match {}", other.label().to_lowercase())
            }
        }
    }
}

/// Returns `true` when `value` passes every rule in `rules`.
///
/// An empty rule set is vacuously valid.
pub fn validate(value: &str, rules: &[ValidationRule], snapshot: &FormState) -> bool {
    rules.iter().all(|rule| rule.check(value, snapshot))
}
