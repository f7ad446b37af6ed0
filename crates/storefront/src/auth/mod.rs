//! Mock account form.
//!
//! Login and registration both succeed unconditionally after a short delay.
//! Nothing is stored or verified: this is a placeholder flow, not an
//! authentication system. The only checks are that the shown fields are
//! filled, the email looks like an address, and a registration's password
//! and confirmation match.

mod error;

pub use error::AuthError;

use core::fmt;
use core::str::FromStr;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::info;

/// Which form is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

/// An editable form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    /// Full name (register only).
    Name,
    Email,
    Password,
    /// Password confirmation (register only).
    ConfirmPassword,
}

impl AuthField {
    const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm password",
        }
    }

    /// Whether the field is shown in `mode`.
    #[must_use]
    pub const fn applies_to(self, mode: AuthMode) -> bool {
        match self {
            Self::Email | Self::Password => true,
            Self::Name | Self::ConfirmPassword => matches!(mode, AuthMode::Register),
        }
    }
}

impl FromStr for AuthField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "confirm" | "confirm-password" | "confirm_password" => Ok(Self::ConfirmPassword),
            other => Err(format!("unknown form field: {other}")),
        }
    }
}

impl fmt::Display for AuthField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A form that passed validation and may be completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub mode: AuthMode,
    pub email: String,
}

/// State of the account form.
///
/// Password fields are `SecretString`s so `Debug` output and logs never
/// contain them.
#[derive(Debug, Clone)]
pub struct AuthForm {
    mode: AuthMode,
    name: String,
    email: String,
    password: SecretString,
    confirm_password: SecretString,
    show_password: bool,
    show_confirm_password: bool,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new(AuthMode::Login)
    }
}

impl AuthForm {
    /// An empty form in `mode`.
    #[must_use]
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            name: String::new(),
            email: String::new(),
            password: SecretString::from(String::new()),
            confirm_password: SecretString::from(String::new()),
            show_password: false,
            show_confirm_password: false,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn password(&self) -> &SecretString {
        &self.password
    }

    #[must_use]
    pub const fn confirm_password(&self) -> &SecretString {
        &self.confirm_password
    }

    #[must_use]
    pub const fn shows_password(&self) -> bool {
        self.show_password
    }

    #[must_use]
    pub const fn shows_confirm_password(&self) -> bool {
        self.show_confirm_password
    }

    /// Whether every field is empty and both passwords are hidden.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.password.expose_secret().is_empty()
            && self.confirm_password.expose_secret().is_empty()
            && !self.show_password
            && !self.show_confirm_password
    }

    /// Switch between login and register, clearing every field.
    pub fn toggle_mode(&mut self) {
        *self = Self::new(self.mode.toggled());
    }

    /// Replace a field's value.
    pub fn set_field(&mut self, field: AuthField, value: impl Into<String>) {
        let value = value.into();
        match field {
            AuthField::Name => self.name = value,
            AuthField::Email => self.email = value,
            AuthField::Password => self.password = SecretString::from(value),
            AuthField::ConfirmPassword => self.confirm_password = SecretString::from(value),
        }
    }

    /// Flip plain-text display of a password field. Other fields are ignored.
    pub fn toggle_visibility(&mut self, field: AuthField) {
        match field {
            AuthField::Password => self.show_password = !self.show_password,
            AuthField::ConfirmPassword => {
                self.show_confirm_password = !self.show_confirm_password;
            }
            AuthField::Name | AuthField::Email => {}
        }
    }

    fn is_filled(&self, field: AuthField) -> bool {
        match field {
            AuthField::Name => !self.name.trim().is_empty(),
            AuthField::Email => !self.email.trim().is_empty(),
            AuthField::Password => !self.password.expose_secret().is_empty(),
            AuthField::ConfirmPassword => !self.confirm_password.expose_secret().is_empty(),
        }
    }

    /// Validate the form for submission. The form itself is never changed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingField` for an empty field shown in the
    /// current mode, `AuthError::InvalidEmail` for an email without a
    /// `local@domain` shape, and `AuthError::PasswordMismatch` when
    /// registering with a confirmation that differs from the password.
    pub fn submit(&self) -> Result<Submission, AuthError> {
        const FIELDS: [AuthField; 4] = [
            AuthField::Name,
            AuthField::Email,
            AuthField::Password,
            AuthField::ConfirmPassword,
        ];
        if let Some(missing) = FIELDS
            .into_iter()
            .filter(|field| field.applies_to(self.mode))
            .find(|&field| !self.is_filled(field))
        {
            return Err(AuthError::MissingField(missing.label()));
        }

        if !looks_like_email(&self.email) {
            return Err(AuthError::InvalidEmail);
        }

        if self.mode == AuthMode::Register
            && self.password.expose_secret() != self.confirm_password.expose_secret()
        {
            return Err(AuthError::PasswordMismatch);
        }

        info!(mode = ?self.mode, email = %self.email, "Account form submitted");
        Ok(Submission {
            mode: self.mode,
            email: self.email.clone(),
        })
    }
}

/// Non-empty text on both sides of an `@`.
fn looks_like_email(email: &str) -> bool {
    email
        .trim()
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
}
