//! Portal and collaborator rows and their derived attributes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Delivery status of a portal asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "portal_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PortalStatus {
    /// Fully delivered
    Completed,
    /// Not started
    Pending,
    /// Being worked on
    InProgress,
}

/// A value which cannot be converted into a [PortalStatus]
#[derive(Debug, thiserror::Error)]
#[error("Invalid portal status value: {0}")]
pub struct InvalidPortalStatus(String);

impl FromStr for PortalStatus {
    type Err = InvalidPortalStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(PortalStatus::Completed),
            "pending" => Ok(PortalStatus::Pending),
            "in-progress" => Ok(PortalStatus::InProgress),
            s => Err(InvalidPortalStatus(s.to_string())),
        }
    }
}

/// Operating system family of the machine hosting a portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "machine_type")]
pub enum MachineType {
    /// Windows server
    Windows,
    /// Red Hat Enterprise Linux
    #[sqlx(rename = "RHEL")]
    #[serde(rename = "RHEL")]
    Rhel,
    /// Ubuntu
    Ubuntu,
    /// CentOS
    #[sqlx(rename = "CentOS")]
    #[serde(rename = "CentOS")]
    CentOs,
    /// Anything else
    Other,
    /// Not recorded
    #[sqlx(rename = "Not-Defined")]
    #[serde(rename = "Not-Defined")]
    NotDefined,
}

impl Default for MachineType {
    fn default() -> Self {
        MachineType::NotDefined
    }
}

/// A portal row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Portal {
    /// Primary key
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Owning user
    pub owner_id: Uuid,
    /// Canonical URL
    pub url: String,
    /// Host derived from the URL at creation, never independently edited
    pub domain: String,
    /// Whether the portal is live
    pub is_active: bool,
    /// Delivery status
    pub status: PortalStatus,
    /// Server IP address
    pub ip_address: Option<String>,
    /// Host operating system family
    pub machine_type: MachineType,
    /// Application framework
    pub framework: Option<String>,
    /// Framework version
    pub framework_version: Option<String>,
    /// Database engine
    pub database: Option<String>,
    /// Database version
    pub database_version: Option<String>,
    /// Whether the portal is reachable publicly
    pub is_public: bool,
    /// Whether server backups are configured
    pub server_backup: bool,
    /// Whether database backups are configured
    pub db_backup: bool,
    /// Whether the portal is slated for migration to a new server
    pub migrate_to_new_server: bool,
    /// When the row was created
    pub created_at: DateTime<Utc>,
    /// When the row was last written
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Wire representation of a portal
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PortalResponse {
    /// Portal id
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Owning user
    pub owner_id: Uuid,
    /// Canonical URL
    pub url: String,
    /// Derived host
    pub domain: String,
    /// Whether the portal is live
    pub is_active: bool,
    /// Delivery status
    pub status: PortalStatus,
    /// Server IP address
    pub ip_address: Option<String>,
    /// Host operating system family
    pub machine_type: MachineType,
    /// Application framework
    pub framework: Option<String>,
    /// Framework version
    pub framework_version: Option<String>,
    /// Database engine
    pub database: Option<String>,
    /// Database version
    pub database_version: Option<String>,
    /// Whether the portal is reachable publicly
    pub is_public: bool,
    /// Whether server backups are configured
    pub server_backup: bool,
    /// Whether database backups are configured
    pub db_backup: bool,
    /// Whether the portal is slated for migration
    pub migrate_to_new_server: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last write timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Portal> for PortalResponse {
    fn from(row: Portal) -> Self {
        PortalResponse {
            id: row.id,
            name: row.name,
            description: row.description,
            owner_id: row.owner_id,
            url: row.url,
            domain: row.domain,
            is_active: row.is_active,
            status: row.status,
            ip_address: row.ip_address,
            machine_type: row.machine_type,
            framework: row.framework,
            framework_version: row.framework_version,
            database: row.database,
            database_version: row.database_version,
            is_public: row.is_public,
            server_backup: row.server_backup,
            db_backup: row.db_backup,
            migrate_to_new_server: row.migrate_to_new_server,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Fields for a portal about to be created or fully replaced
#[derive(Debug, Clone)]
pub struct PortalFields {
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Owning user
    pub owner_id: Uuid,
    /// Canonical URL
    pub url: String,
    /// Host derived from the URL
    pub domain: String,
    /// Whether the portal is live
    pub is_active: bool,
    /// Delivery status
    pub status: PortalStatus,
    /// Server IP address
    pub ip_address: Option<String>,
    /// Host operating system family
    pub machine_type: MachineType,
    /// Application framework
    pub framework: Option<String>,
    /// Framework version
    pub framework_version: Option<String>,
    /// Database engine
    pub database: Option<String>,
    /// Database version
    pub database_version: Option<String>,
    /// Whether the portal is reachable publicly
    pub is_public: bool,
    /// Whether server backups are configured
    pub server_backup: bool,
    /// Whether database backups are configured
    pub db_backup: bool,
    /// Whether the portal is slated for migration
    pub migrate_to_new_server: bool,
}

/// Fields for a collaborator grant about to be created
#[derive(Debug, Clone)]
pub struct NewCollaborator {
    /// The portal
    pub portal_id: Uuid,
    /// The collaborating user
    pub user_id: Uuid,
    /// Grant status
    pub status: CollaboratorStatus,
    /// When the collaboration starts
    pub start_date: NaiveDate,
    /// When the collaboration ends, if bounded
    pub end_date: Option<NaiveDate>,
    /// Free-text notes
    pub notes: Option<String>,
}

/// Grant status of a collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "collaborator_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CollaboratorStatus {
    /// Grant is live
    Active,
    /// Grant awaits activation
    Pending,
}

impl Display for CollaboratorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollaboratorStatus::Active => write!(f, "active"),
            CollaboratorStatus::Pending => write!(f, "pending"),
        }
    }
}

/// A (portal, user) collaboration grant
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PortalCollaborator {
    /// Primary key
    pub id: Uuid,
    /// The portal
    pub portal_id: Uuid,
    /// The collaborating user
    pub user_id: Uuid,
    /// Grant status
    pub status: CollaboratorStatus,
    /// When the collaboration starts
    pub start_date: NaiveDate,
    /// When the collaboration ends, if bounded
    pub end_date: Option<NaiveDate>,
    /// Free-text notes
    pub notes: Option<String>,
    /// When the row was created
    pub created_at: DateTime<Utc>,
    /// When the row was last written
    pub updated_at: DateTime<Utc>,
}

impl PortalCollaborator {
    /// True iff the end date is set and strictly in the past. Informational
    /// only; nothing revokes an ended grant automatically.
    pub fn has_ended(&self, today: NaiveDate) -> bool {
        self.end_date.is_some_and(|end| end < today)
    }

    /// Build the wire representation as of `today`
    pub fn to_response(&self, today: NaiveDate) -> CollaboratorResponse {
        CollaboratorResponse {
            id: self.id,
            portal_id: self.portal_id,
            user_id: self.user_id,
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
            notes: self.notes.clone(),
            has_ended: self.has_ended(today),
        }
    }
}

/// Wire representation of a collaborator grant
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CollaboratorResponse {
    /// Grant id
    pub id: Uuid,
    /// The portal
    pub portal_id: Uuid,
    /// The collaborating user
    pub user_id: Uuid,
    /// Grant status
    pub status: CollaboratorStatus,
    /// When the collaboration starts
    pub start_date: NaiveDate,
    /// When the collaboration ends, if bounded
    pub end_date: Option<NaiveDate>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Derived: end date set and in the past
    pub has_ended: bool,
}

/// Derive the host portion of a portal URL, lowercased. `None` when the URL
/// does not parse or has no host.
pub fn domain_from_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    parsed.host_str().map(|host| host.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collaborator(end_date: Option<NaiveDate>) -> PortalCollaborator {
        PortalCollaborator {
            id: Uuid::new_v4(),
            portal_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            status: CollaboratorStatus::Active,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn domain_is_the_lowercased_host() {
        assert_eq!(
            domain_from_url("https://Wiki.Corp.Example.com/team/page?x=1"),
            Some("wiki.corp.example.com".to_string())
        );
        assert_eq!(
            domain_from_url("http://intranet:8080/home"),
            Some("intranet".to_string())
        );
    }

    #[test]
    fn unparseable_urls_yield_no_domain() {
        assert_eq!(domain_from_url("not a url"), None);
        assert_eq!(domain_from_url("mailto:ops@example.com"), None);
    }

    #[test]
    fn has_ended_requires_a_past_end_date() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

        assert!(!collaborator(None).has_ended(today));
        assert!(!collaborator(NaiveDate::from_ymd_opt(2025, 6, 15)).has_ended(today));
        assert!(!collaborator(NaiveDate::from_ymd_opt(2025, 12, 31)).has_ended(today));
        assert!(collaborator(NaiveDate::from_ymd_opt(2025, 6, 14)).has_ended(today));
    }

    #[test]
    fn portal_status_wire_values_are_kebab_case() {
        assert_eq!(
            serde_json::to_string(&PortalStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!("in-progress".parse::<PortalStatus>().unwrap(), PortalStatus::InProgress);
        assert!("In-Progress".parse::<PortalStatus>().is_err());
    }

    #[test]
    fn machine_type_wire_values_match_the_fixed_list() {
        assert_eq!(serde_json::to_string(&MachineType::Rhel).unwrap(), "\"RHEL\"");
        assert_eq!(serde_json::to_string(&MachineType::CentOs).unwrap(), "\"CentOS\"");
        assert_eq!(
            serde_json::to_string(&MachineType::NotDefined).unwrap(),
            "\"Not-Defined\""
        );
        let parsed: MachineType = serde_json::from_str("\"Windows\"").unwrap();
        assert_eq!(parsed, MachineType::Windows);
    }
}
