use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuthenticatedUser, Timestamp};

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Metadata about the server-side session backing the cookie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionSummary {
    pub id: Uuid,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
}

/// Returned by login and refresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub user: AuthenticatedUser,
    pub session: SessionSummary,
    pub csrf_token: String,
}

/// Returned by `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeResponse {
    pub user: AuthenticatedUser,
    pub session: SessionSummary,
}
