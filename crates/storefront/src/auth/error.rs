//! Authentication error types.

use thiserror::Error;

/// Errors that can occur when submitting the account form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Register mode: password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// The email has no `local@domain` shape.
    #[error("enter a valid email address")]
    InvalidEmail,

    /// A required field is empty.
    #[error("{0} is required")]
    MissingField(&'static str),
}
