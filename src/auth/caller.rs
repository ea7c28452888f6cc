use std::collections::BTreeSet;

use uuid::Uuid;

use super::jwt::Claims;
use crate::error::{AppError, Result};

const ANONYMOUS_NAME: &str = "Anónimo";

/// Capability lookup on an explicit caller value.
pub trait HasRole {
    fn has_role(&self, role: &str) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(BTreeSet<String>);

impl RoleSet {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(roles.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, role: &str) -> bool {
        self.0.contains(role)
    }
}

impl HasRole for RoleSet {
    fn has_role(&self, role: &str) -> bool {
        self.contains(role)
    }
}

/// Identity resolved for one request.
#[derive(Debug, Clone)]
pub struct CallerContext {
    pub user_id: Uuid,
    pub display_name: Option<String>,
    pub roles: RoleSet,
}

impl CallerContext {
    pub fn from_claims(claims: Claims) -> Result<Self> {
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))?;

        Ok(Self {
            user_id,
            display_name: claims.name,
            roles: RoleSet::new(claims.roles),
        })
    }

    /// Name shown in the chat UI.
    pub fn username(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(ANONYMOUS_NAME)
    }
}

impl HasRole for CallerContext {
    fn has_role(&self, role: &str) -> bool {
        self.roles.has_role(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str, name: Option<&str>, roles: &[&str]) -> Claims {
        Claims {
            sub: sub.to_string(),
            name: name.map(str::to_string),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            exp: 0,
        }
    }

    #[test]
    fn test_from_claims() {
        let id = Uuid::new_v4();
        let caller = CallerContext::from_claims(claims(&id.to_string(), Some("Ana"), &["admin"]))
            .unwrap();
        assert_eq!(caller.user_id, id);
        assert_eq!(caller.username(), "Ana");
        assert!(caller.has_role("admin"));
        assert!(!caller.has_role("tecnico"));
    }

    #[test]
    fn test_bad_subject_is_rejected() {
        let err = CallerContext::from_claims(claims("42", None, &[])).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_username_falls_back_to_anonymous() {
        let id = Uuid::new_v4().to_string();
        let nameless = CallerContext::from_claims(claims(&id, None, &[])).unwrap();
        let blank = CallerContext::from_claims(claims(&id, Some("  "), &[])).unwrap();
        assert_eq!(nameless.username(), "Anónimo");
        assert_eq!(blank.username(), "Anónimo");
    }
}
