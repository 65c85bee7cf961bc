//! User rows and the per-request acting-user context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;
use uuid::Uuid;

/// Permission required to review portal requests (status updates)
pub const REVIEW_PORTAL_REQUESTS: &str = "portal-requests.review";

/// A user row. Administration of users lives upstream; this table backs
/// submitter/reviewer/owner references and search joins.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Primary key
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email, unique
    pub email: String,
    /// When the row was created
    pub created_at: DateTime<Utc>,
    /// When the row was last written
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker
    pub deleted_at: Option<DateTime<Utc>>,
}

/// The acting user attached to every authenticated request by the gateway
/// middleware. Lifecycle operations receive this explicitly; there is no
/// ambient current-user global.
#[derive(Clone, Serialize, Deserialize, Debug, ToSchema)]
pub struct UserContext {
    /// The user id
    pub user_id: Uuid,
    /// Display name
    pub name: String,
    /// Email
    pub email: String,
    /// Permission strings granted to the user
    pub permissions: HashSet<String>,
}

impl UserContext {
    /// Whether the user holds the given permission
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

impl Default for UserContext {
    fn default() -> Self {
        Self {
            user_id: Uuid::nil(),
            name: String::new(),
            email: String::new(),
            permissions: HashSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_lookup_is_exact() {
        let mut context = UserContext::default();
        context.permissions.insert(REVIEW_PORTAL_REQUESTS.to_string());

        assert!(context.has_permission(REVIEW_PORTAL_REQUESTS));
        assert!(!context.has_permission("portal-requests.delete"));
    }
}
