//! Login credential validation.
//!
//! Credentials are checked on the client before anything is sent to the
//! backend, so a malformed form never costs a round trip.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::LoginRequest;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern compiles")
});

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,
    #[error("email must be at most {max} characters")]
    TooLong { max: usize },
    #[error("email must look like name@example.com")]
    Malformed,
}

/// A syntactically plausible email address.
///
/// Only the shape is checked: one `@`, a non-empty local part, a dotted
/// domain and no whitespace. Deliverability is the backend's problem.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse an `Email`, trimming surrounding whitespace first.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 254 characters,
    /// or does not have the `local@domain.tld` shape.
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        if !EMAIL_SHAPE.is_match(trimmed) {
            return Err(EmailError::Malformed);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a login form was rejected before submission.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error(transparent)]
    Email(#[from] EmailError),
    #[error("password cannot be empty")]
    EmptyPassword,
}

/// A validated email/password pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: Email,
    password: String,
}

impl Credentials {
    /// # Errors
    ///
    /// Returns [`CredentialError`] when the email is malformed or the
    /// password is empty. The email is checked first.
    pub fn parse(email: &str, password: &str) -> Result<Self, CredentialError> {
        let email = Email::parse(email)?;
        if password.is_empty() {
            return Err(CredentialError::EmptyPassword);
        }
        Ok(Self {
            email,
            password: password.to_owned(),
        })
    }

    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    #[must_use]
    pub fn into_request(self) -> LoginRequest {
        LoginRequest {
            email: self.email.into_inner(),
            password: self.password,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
