//! Session ownership.
//!
//! [`SessionContext`] is the only writer of the [`Session`]. It is built once
//! by the session provider and handed to everything else, which may read it
//! or subscribe to it but can only change it through `login`, `logout`,
//! `invalidate` and the startup probe.

use std::{fmt, rc::Rc};

use shared::models::{AuthenticatedUser, CredentialError, Credentials};

use crate::api::{ApiError, SessionApi};
use crate::observable::{Observable, Subscription};

/// Who is logged in, and whether we still are finding out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub current_user: Option<AuthenticatedUser>,
    pub is_loading: bool,
}

impl Session {
    /// State at application start, before the probe resolves.
    pub const fn checking() -> Self {
        Self {
            current_user: None,
            is_loading: true,
        }
    }

    pub const fn signed_out() -> Self {
        Self {
            current_user: None,
            is_loading: false,
        }
    }

    pub const fn signed_in(user: AuthenticatedUser) -> Self {
        Self {
            current_user: Some(user),
            is_loading: false,
        }
    }

    pub const fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::checking()
    }
}

/// Why a login attempt did not produce a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] CredentialError),
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("unable to connect to server: {0}")]
    Network(String),
    #[error("login failed: {0}")]
    Server(String),
}

impl LoginError {
    /// Translation key for the message shown to the user.
    pub const fn translation_key(&self) -> &'static str {
        match self {
            Self::Validation(CredentialError::Email(_)) => "login.errors.email",
            Self::Validation(CredentialError::EmptyPassword) => "login.errors.password",
            Self::InvalidCredentials => "login.errors.invalid_credentials",
            Self::Network(_) => "login.errors.network",
            Self::Server(_) => "login.errors.server",
        }
    }
}

impl From<ApiError> for LoginError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => Self::InvalidCredentials,
            ApiError::Network(message) => Self::Network(message),
            ApiError::Status { message, .. } | ApiError::Decode(message) => Self::Server(message),
        }
    }
}

/// Handle to the application session. Clones share state.
#[derive(Clone)]
pub struct SessionContext {
    api: Rc<dyn SessionApi>,
    state: Observable<Session>,
}

impl SessionContext {
    pub fn new(api: Rc<dyn SessionApi>) -> Self {
        Self {
            api,
            state: Observable::new(Session::checking()),
        }
    }

    pub fn current(&self) -> Session {
        self.state.get()
    }

    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) -> Subscription {
        self.state.subscribe(listener)
    }

    /// Resolve the startup probe.
    ///
    /// A failed probe is treated exactly like "no session": the user lands on
    /// the login view and nothing is retried.
    pub async fn initialize(&self) {
        let next = match self.api.current_user().await {
            Ok(Some(user)) => {
                log::info!("restored session for user {}", user.id);
                Session::signed_in(user)
            }
            Ok(None) => Session::signed_out(),
            Err(err) => {
                log::warn!("session check failed, continuing signed out: {err}");
                Session::signed_out()
            }
        };
        self.state.set(next);
    }

    /// Validate `email`/`password`, then authenticate against the backend.
    ///
    /// Invalid input is rejected before any request is made. On failure the
    /// session is left exactly as it was.
    ///
    /// # Errors
    ///
    /// See [`LoginError`].
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, LoginError> {
        let credentials = Credentials::parse(email, password)?;
        let response = self.api.login(&credentials.into_request()).await?;
        log::info!("signed in as user {}", response.user.id);
        self.state.set(Session::signed_in(response.user.clone()));
        Ok(response.user)
    }

    /// End the session. The local session is cleared whatever the backend says.
    pub async fn logout(&self) {
        if let Err(err) = self.api.logout().await
            && !err.is_unauthorized()
        {
            log::error!("logout failed: {err}");
        }
        self.state.set(Session::signed_out());
    }

    /// Drop the session without a network call, e.g. after a 401 elsewhere.
    pub fn invalidate(&self) {
        if self.current() == Session::signed_out() {
            return;
        }
        log::info!("session invalidated");
        self.state.set(Session::signed_out());
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

/// Two handles are equal when they share the same session.
impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("session", &self.current())
            .finish_non_exhaustive()
    }
}
