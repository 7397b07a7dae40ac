use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::EnumIter;

use super::Resource;

/// Role assignments for a Procura account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Approver,
    Purchaser,
    Viewer,
}

impl UserRole {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Approver => "approver",
            Self::Purchaser => "purchaser",
            Self::Viewer => "viewer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "approver" => Ok(Self::Approver),
            "purchaser" => Ok(Self::Purchaser),
            "viewer" => Ok(Self::Viewer),
            _ => Err("unknown user role"),
        }
    }
}

/// The identity the backend attaches to the current session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub roles: Vec<UserRole>,
}

impl AuthenticatedUser {
    #[must_use]
    pub fn has_role(&self, role: UserRole) -> bool {
        self.roles.contains(&role)
    }

    /// Approvers and admins may approve or reject purchase orders.
    #[must_use]
    pub fn can_decide_orders(&self) -> bool {
        self.has_role(UserRole::Admin) || self.has_role(UserRole::Approver)
    }

    /// Everyone except read-only viewers may raise orders.
    #[must_use]
    pub fn can_raise_orders(&self) -> bool {
        self.roles.iter().any(|role| !matches!(role, UserRole::Viewer))
    }

    /// Name shown in the header; falls back to the email address.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// A user record as managed from the users page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl Resource for DirectoryUser {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn user(roles: Vec<UserRole>) -> AuthenticatedUser {
        AuthenticatedUser {
            id: 1,
            email: "buyer@example.com".to_string(),
            display_name: None,
            roles,
        }
    }

    #[test]
    fn user_role_roundtrip() {
        for role in UserRole::iter() {
            assert_eq!(UserRole::from_str(role.as_str()).unwrap(), role);
            assert_eq!(role.to_string(), role.as_str());
        }
        assert!(UserRole::from_str("guest").is_err());
    }

    #[test]
    fn approvers_and_admins_decide_orders() {
        assert!(user(vec![UserRole::Approver]).can_decide_orders());
        assert!(user(vec![UserRole::Admin]).can_decide_orders());
        assert!(!user(vec![UserRole::Purchaser]).can_decide_orders());
        assert!(!user(vec![]).can_decide_orders());
    }

    #[test]
    fn viewers_cannot_raise_orders() {
        assert!(!user(vec![UserRole::Viewer]).can_raise_orders());
        assert!(user(vec![UserRole::Viewer, UserRole::Purchaser]).can_raise_orders());
    }

    #[test]
    fn label_prefers_display_name() {
        let mut u = user(vec![]);
        assert_eq!(u.label(), "buyer@example.com");
        u.display_name = Some("Dana Buyer".to_string());
        assert_eq!(u.label(), "Dana Buyer");
    }

    #[test]
    fn authenticated_user_tolerates_missing_optional_fields() {
        let json = r#"{"id":1,"email":"a@b.io"}"#;
        let parsed: AuthenticatedUser = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, 1);
        assert!(parsed.roles.is_empty());
        assert!(parsed.display_name.is_none());
    }

    #[test]
    fn directory_user_defaults_to_active() {
        let json = r#"{"id":7,"name":"Ana","email":"ana@example.com","role":"approver"}"#;
        let parsed: DirectoryUser = serde_json::from_str(json).unwrap();
        assert!(parsed.active);
        assert_eq!(parsed.role, UserRole::Approver);
        assert_eq!(parsed.label(), "Ana");
    }
}
