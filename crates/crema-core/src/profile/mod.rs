//! Profile editing: the uncommitted draft and its validation rules.

pub mod model;
pub mod validator;

pub use model::ProfileDraft;
pub use validator::{FieldError, ProfileField, ValidationResult, validate};
