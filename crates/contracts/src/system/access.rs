//! Route access decisions.
//!
//! [`evaluate`] is a pure function of the claims snapshot and the declared
//! requirement. It performs no I/O and is re-run whenever either changes.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::auth::UserInfo;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionParseError {
    #[error("permission '{0}' must have the form resource.action")]
    MissingSeparator(String),
    #[error("permission '{0}' has an empty resource or action")]
    EmptyPart(String),
}

/// A protected capability, written `resource.action` (e.g. `consumers.create`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    pub resource: String,
    pub action: String,
}

impl Permission {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    pub fn code(&self) -> String {
        format!("{}.{}", self.resource, self.action)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource, self.action)
    }
}

impl FromStr for Permission {
    type Err = PermissionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (resource, action) = s
            .split_once('.')
            .ok_or_else(|| PermissionParseError::MissingSeparator(s.to_string()))?;
        if resource.is_empty() || action.is_empty() {
            return Err(PermissionParseError::EmptyPart(s.to_string()));
        }
        Ok(Permission::new(resource, action))
    }
}

/// Authorization attributes of the current subject.
///
/// Replaced as a whole on login, logout and session restore. When
/// `is_authenticated` is false the stored roles and permissions are ignored
/// by every check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthClaims {
    pub is_authenticated: bool,
    pub roles: HashSet<String>,
    pub permissions: HashSet<String>,
    pub is_superuser: bool,
}

impl AuthClaims {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_user(user: &UserInfo) -> Self {
        Self {
            is_authenticated: true,
            roles: user.roles.iter().cloned().collect(),
            permissions: user.permissions.iter().cloned().collect(),
            is_superuser: user.is_superuser,
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.is_authenticated && self.roles.contains(role)
    }

    pub fn has_any_role(&self, roles: &[String]) -> bool {
        roles.iter().any(|role| self.has_role(role))
    }

    /// Superusers hold every permission.
    pub fn grants(&self, permission: &Permission) -> bool {
        if !self.is_authenticated {
            return false;
        }
        self.is_superuser || self.permissions.contains(&permission.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionMode {
    All,
    Any,
}

/// Declarative per-route requirement. An empty requirement only asks for
/// an authenticated subject.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessRequirement {
    pub roles: Vec<String>,
    pub permission: Option<Permission>,
    pub permission_set: Option<(PermissionMode, Vec<Permission>)>,
}

impl AccessRequirement {
    pub fn authenticated() -> Self {
        Self::default()
    }

    pub fn roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default().with_roles(roles)
    }

    pub fn permission(resource: &str, action: &str) -> Self {
        Self::default().with_permission(resource, action)
    }

    pub fn all_of(permissions: Vec<Permission>) -> Self {
        Self::default().with_permission_set(PermissionMode::All, permissions)
    }

    pub fn any_of(permissions: Vec<Permission>) -> Self {
        Self::default().with_permission_set(PermissionMode::Any, permissions)
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_permission(mut self, resource: &str, action: &str) -> Self {
        self.permission = Some(Permission::new(resource, action));
        self
    }

    pub fn with_permission_set(mut self, mode: PermissionMode, permissions: Vec<Permission>) -> Self {
        self.permission_set = Some((mode, permissions));
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Render,
    RedirectToLogin,
    RedirectToDenied,
}

impl AccessDecision {
    pub fn is_allowed(self) -> bool {
        self == AccessDecision::Render
    }
}

pub fn evaluate(claims: &AuthClaims, requirement: &AccessRequirement) -> AccessDecision {
    if !claims.is_authenticated {
        return AccessDecision::RedirectToLogin;
    }

    if !requirement.roles.is_empty() && !claims.has_any_role(&requirement.roles) {
        return AccessDecision::RedirectToDenied;
    }

    if let Some(permission) = &requirement.permission {
        if !claims.grants(permission) {
            return AccessDecision::RedirectToDenied;
        }
    }

    if let Some((mode, permissions)) = &requirement.permission_set {
        let passed = claims.is_superuser
            || match mode {
                PermissionMode::All => permissions.iter().all(|p| claims.grants(p)),
                PermissionMode::Any => permissions.iter().any(|p| claims.grants(p)),
            };
        if !passed {
            return AccessDecision::RedirectToDenied;
        }
    }

    AccessDecision::Render
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_with(permissions: &[&str], roles: &[&str]) -> AuthClaims {
        AuthClaims {
            is_authenticated: true,
            roles: roles.iter().map(|r| r.to_string()).collect(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            is_superuser: false,
        }
    }

    fn superuser() -> AuthClaims {
        AuthClaims {
            is_authenticated: true,
            is_superuser: true,
            ..AuthClaims::default()
        }
    }

    #[test]
    fn test_permission_parse() {
        let p: Permission = "consumers.create".parse().unwrap();
        assert_eq!(p, Permission::new("consumers", "create"));
        assert_eq!(p.to_string(), "consumers.create");
        assert_eq!(
            "consumers".parse::<Permission>(),
            Err(PermissionParseError::MissingSeparator("consumers".to_string()))
        );
        assert_eq!(
            ".view".parse::<Permission>(),
            Err(PermissionParseError::EmptyPart(".view".to_string()))
        );
    }

    #[test]
    fn test_unauthenticated_redirects_to_login_even_for_superuser() {
        let claims = AuthClaims {
            is_authenticated: false,
            is_superuser: true,
            ..AuthClaims::default()
        };
        assert_eq!(
            evaluate(&claims, &AccessRequirement::authenticated()),
            AccessDecision::RedirectToLogin
        );
        assert_eq!(
            evaluate(&claims, &AccessRequirement::permission("routes", "view")),
            AccessDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_stale_permissions_ignored_when_logged_out() {
        let mut claims = claims_with(&["routes.view"], &["dispatcher"]);
        claims.is_authenticated = false;
        assert!(!claims.grants(&Permission::new("routes", "view")));
        assert!(!claims.has_role("dispatcher"));
    }

    #[test]
    fn test_role_requirement() {
        let claims = claims_with(&[], &["dispatcher"]);
        assert_eq!(
            evaluate(&claims, &AccessRequirement::roles(["admin", "dispatcher"])),
            AccessDecision::Render
        );
        assert_eq!(
            evaluate(&claims, &AccessRequirement::roles(["admin"])),
            AccessDecision::RedirectToDenied
        );
    }

    #[test]
    fn test_single_permission() {
        let claims = claims_with(&["consumers.view"], &[]);
        assert_eq!(
            evaluate(&claims, &AccessRequirement::permission("consumers", "view")),
            AccessDecision::Render
        );
        assert_eq!(
            evaluate(&claims, &AccessRequirement::permission("consumers", "delete")),
            AccessDecision::RedirectToDenied
        );
    }

    #[test]
    fn test_superuser_bypasses_permission_checks() {
        let claims = superuser();
        assert!(evaluate(&claims, &AccessRequirement::permission("roles", "change")).is_allowed());
        assert!(evaluate(
            &claims,
            &AccessRequirement::all_of(vec![
                Permission::new("users", "view"),
                Permission::new("roles", "view"),
            ])
        )
        .is_allowed());
        assert!(evaluate(&claims, &AccessRequirement::any_of(vec![])).is_allowed());
    }

    #[test]
    fn test_superuser_still_needs_declared_role() {
        let claims = superuser();
        assert_eq!(
            evaluate(&claims, &AccessRequirement::roles(["dispatcher"])),
            AccessDecision::RedirectToDenied
        );
    }

    #[test]
    fn test_any_versus_all() {
        let claims = claims_with(&["routes.view"], &[]);
        let permissions = vec![
            Permission::new("routes", "view"),
            Permission::new("consumers", "view"),
        ];
        assert_eq!(
            evaluate(&claims, &AccessRequirement::any_of(permissions.clone())),
            AccessDecision::Render
        );
        assert_eq!(
            evaluate(&claims, &AccessRequirement::all_of(permissions)),
            AccessDecision::RedirectToDenied
        );
    }

    #[test]
    fn test_combined_requirement_checks_every_step() {
        let claims = claims_with(&["routes.view"], &["dispatcher"]);
        let requirement = AccessRequirement::roles(["dispatcher"])
            .with_permission("routes", "view")
            .with_permission_set(PermissionMode::All, vec![Permission::new("consumers", "view")]);
        assert_eq!(evaluate(&claims, &requirement), AccessDecision::RedirectToDenied);
    }

    #[test]
    fn test_claims_from_user() {
        let user = UserInfo {
            id: 3,
            username: "ravi".to_string(),
            full_name: None,
            email: None,
            roles: vec!["dispatcher".to_string()],
            permissions: vec!["consumers.view".to_string()],
            is_superuser: false,
        };
        let claims = AuthClaims::from_user(&user);
        assert!(claims.is_authenticated);
        assert!(claims.has_role("dispatcher"));
        assert!(claims.grants(&Permission::new("consumers", "view")));
        assert!(!claims.grants(&Permission::new("consumers", "delete")));
    }
}
