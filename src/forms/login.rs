use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Maximum accepted length of an email address.
const EMAIL_MAX_LEN: u64 = 254;
/// Maximum accepted length of a password.
const PASSWORD_MAX_LEN: u64 = 128;

pub type LoginFormResult<T> = Result<T, LoginFormError>;

/// Errors raised while reading the login form.
#[derive(Debug, Error)]
pub enum LoginFormError {
    #[error("Please enter both email and password")]
    MissingCredentials,
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Payload submitted by the login page.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(max = EMAIL_MAX_LEN))]
    #[serde(default)]
    pub email: String,
    #[validate(length(max = PASSWORD_MAX_LEN))]
    #[serde(default)]
    pub password: String,
}

/// Sanitized credential pair ready for authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Trim the email and require both fields to be present.
    ///
    /// The password is taken verbatim.
    pub fn into_credentials(self) -> LoginFormResult<Credentials> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(LoginFormError::MissingCredentials);
        }

        self.validate()?;

        Ok(Credentials {
            email: email.to_string(),
            password: self.password,
        })
    }
}
