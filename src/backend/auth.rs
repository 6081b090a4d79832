//! Session identity and role checks for catalog mutations.
//!
//! The role and token are read once at startup (command line or
//! environment) into an [`AuthContext`], which is then passed to every
//! mutating backend call.

use serde::{Deserialize, Serialize};

use crate::util::error::{CatalogError, Result};

/// What a signed-in user may change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access to events and categories.
    Admin,
    /// May add new events, nothing else.
    Art,
    /// Read-only.
    #[default]
    Viewer,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Art => "Art",
            Self::Viewer => "Viewer",
        }
    }
}

/// The current session: an opaque token and the role it grants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub token: Option<String>,
    pub role: Role,
}

impl AuthContext {
    pub fn new(token: Option<String>, role: Role) -> Self {
        let token = token.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty());
        Self { token, role }
    }

    /// A read-only session with no token.
    pub fn viewer() -> Self {
        Self::default()
    }

    /// `true` when a non-empty token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn can_create_events(&self) -> bool {
        self.is_authenticated() && matches!(self.role, Role::Admin | Role::Art)
    }

    pub fn can_edit_events(&self) -> bool {
        self.is_authenticated() && self.role == Role::Admin
    }

    pub fn can_manage_categories(&self) -> bool {
        self.is_authenticated() && self.role == Role::Admin
    }

    fn require(&self, allowed: bool, action: &str) -> Result<()> {
        if allowed {
            return Ok(());
        }
        let reason = if self.is_authenticated() {
            format!("role {} may not {action}", self.role.label())
        } else {
            format!("a session token is required to {action}")
        };
        tracing::warn!("Rejected mutation: {reason}");
        Err(CatalogError::Unauthorized(reason))
    }

    pub fn require_create_event(&self) -> Result<()> {
        self.require(self.can_create_events(), "create events")
    }

    pub fn require_edit_event(&self) -> Result<()> {
        self.require(self.can_edit_events(), "edit or delete events")
    }

    pub fn require_manage_categories(&self) -> Result<()> {
        self.require(self.can_manage_categories(), "manage categories")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_is_unauthenticated() {
        let auth = AuthContext::new(Some("  ".into()), Role::Admin);
        assert!(!auth.is_authenticated());
        assert!(auth.require_create_event().is_err());
    }

    #[test]
    fn test_role_matrix() {
        let admin = AuthContext::new(Some("t".into()), Role::Admin);
        let art = AuthContext::new(Some("t".into()), Role::Art);
        let viewer = AuthContext::new(Some("t".into()), Role::Viewer);

        assert!(admin.can_create_events() && admin.can_edit_events() && admin.can_manage_categories());
        assert!(art.can_create_events());
        assert!(!art.can_edit_events());
        assert!(!art.can_manage_categories());
        assert!(!viewer.can_create_events());
    }

    #[test]
    fn test_rejection_message_names_role() {
        let art = AuthContext::new(Some("t".into()), Role::Art);
        let err = art.require_manage_categories().unwrap_err();
        assert!(matches!(err, CatalogError::Unauthorized(_)));
        assert!(err.to_string().contains("Art"));
    }
}
