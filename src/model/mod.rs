mod credentials;
mod field;
mod form;
mod mode;
mod validation;

pub use credentials::Credentials;
pub use field::{Field, FieldName};
pub use form::{FormState, MIN_PASSWORD_LENGTH, toggle_mode};
pub use mode::AuthMode;
pub use validation::{FormError, ValidationRule, validate};
