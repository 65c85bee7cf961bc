//! Portal request rows, wire DTOs, and the status/priority enums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Timestamp format used inside `[Status Update - ...]` audit markers
pub const STATUS_UPDATE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Review status of a portal request.
///
/// `Pending → Under Review → {Approved | Rejected | Cancelled} → Completed`
/// is the intended progression, but transitions are deliberately not
/// restricted to that graph: an authorized reviewer may write any status
/// from any prior status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "request_status")]
pub enum RequestStatus {
    /// Submitted, not yet picked up by a reviewer
    Pending,
    /// A reviewer is looking at it
    #[sqlx(rename = "Under Review")]
    #[serde(rename = "Under Review")]
    UnderReview,
    /// Accepted by a reviewer
    Approved,
    /// Declined by a reviewer
    Rejected,
    /// Withdrawn
    Cancelled,
    /// Work finished
    Completed,
}

impl RequestStatus {
    /// Every status value, in wire order
    pub const ALL: [RequestStatus; 6] = [
        RequestStatus::Pending,
        RequestStatus::UnderReview,
        RequestStatus::Approved,
        RequestStatus::Rejected,
        RequestStatus::Cancelled,
        RequestStatus::Completed,
    ];

    /// Whether a request in this status may still be edited by its submitter
    /// (fields and document set alike)
    pub fn is_editable(&self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::UnderReview)
    }
}

impl Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "Pending"),
            RequestStatus::UnderReview => write!(f, "Under Review"),
            RequestStatus::Approved => write!(f, "Approved"),
            RequestStatus::Rejected => write!(f, "Rejected"),
            RequestStatus::Cancelled => write!(f, "Cancelled"),
            RequestStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// A value which cannot be converted into a [RequestStatus]
#[derive(Debug, thiserror::Error)]
#[error("Invalid status value: {0}")]
pub struct InvalidStatus(String);

impl FromStr for RequestStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(RequestStatus::Pending),
            "Under Review" => Ok(RequestStatus::UnderReview),
            "Approved" => Ok(RequestStatus::Approved),
            "Rejected" => Ok(RequestStatus::Rejected),
            "Cancelled" => Ok(RequestStatus::Cancelled),
            "Completed" => Ok(RequestStatus::Completed),
            s => Err(InvalidStatus(s.to_string())),
        }
    }
}

/// Priority of a portal request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "request_priority")]
pub enum RequestPriority {
    /// Low priority
    Low,
    /// Default priority
    Medium,
    /// High priority
    High,
}

impl Display for RequestPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestPriority::Low => write!(f, "Low"),
            RequestPriority::Medium => write!(f, "Medium"),
            RequestPriority::High => write!(f, "High"),
        }
    }
}

impl Default for RequestPriority {
    fn default() -> Self {
        RequestPriority::Medium
    }
}

/// A value which cannot be converted into a [RequestPriority]
#[derive(Debug, thiserror::Error)]
#[error("Invalid priority value: {0}")]
pub struct InvalidPriority(String);

impl FromStr for RequestPriority {
    type Err = InvalidPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(RequestPriority::Low),
            "Medium" => Ok(RequestPriority::Medium),
            "High" => Ok(RequestPriority::High),
            s => Err(InvalidPriority(s.to_string())),
        }
    }
}

/// Sortable columns for request listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestSortField {
    /// Creation timestamp (the default)
    CreatedAt,
    /// Last update timestamp
    UpdatedAt,
    /// Priority, in `Low < Medium < High` order
    Priority,
    /// Status, in wire order
    Status,
    /// Review timestamp
    ReviewedAt,
}

impl RequestSortField {
    /// The column this field sorts on
    pub fn column(&self) -> &'static str {
        match self {
            RequestSortField::CreatedAt => "pr.created_at",
            RequestSortField::UpdatedAt => "pr.updated_at",
            RequestSortField::Priority => "pr.priority",
            RequestSortField::Status => "pr.status",
            RequestSortField::ReviewedAt => "pr.reviewed_at",
        }
    }
}

impl Default for RequestSortField {
    fn default() -> Self {
        RequestSortField::CreatedAt
    }
}

/// A value which cannot be converted into a [RequestSortField]
#[derive(Debug, thiserror::Error)]
#[error("Invalid sort field: {0}")]
pub struct InvalidSortField(String);

impl FromStr for RequestSortField {
    type Err = InvalidSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(RequestSortField::CreatedAt),
            "updated_at" => Ok(RequestSortField::UpdatedAt),
            "priority" => Ok(RequestSortField::Priority),
            "status" => Ok(RequestSortField::Status),
            "reviewed_at" => Ok(RequestSortField::ReviewedAt),
            s => Err(InvalidSortField(s.to_string())),
        }
    }
}

/// A portal request row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PortalRequest {
    /// Internal primary key
    pub id: Uuid,
    /// The portal this request targets
    pub portal_id: Uuid,
    /// The user who submitted it
    pub submitted_by: Uuid,
    /// Priority, defaulted to `Medium` at creation when omitted
    pub priority: RequestPriority,
    /// Current review status
    pub status: RequestStatus,
    /// Public request UUID, assigned once at creation and never reassigned
    pub uuid: Uuid,
    /// Free-text comments; the status-update path appends audit markers here
    pub comments: Option<String>,
    /// Reviewer's reason, set only during status review
    pub reason: Option<String>,
    /// When the request was last reviewed
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Who last reviewed it
    pub reviewed_by: Option<Uuid>,
    /// When the row was created
    pub created_at: DateTime<Utc>,
    /// When the row was last written
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker; set rows are excluded from default queries
    pub deleted_at: Option<DateTime<Utc>>,
}

impl PortalRequest {
    /// Human-facing reference derived from the public UUID
    pub fn reference(&self) -> String {
        reference_from_uuid(&self.uuid)
    }

    /// Whether the submitter may still mutate this request
    pub fn is_editable(&self) -> bool {
        self.status.is_editable()
    }
}

/// Fields for a request about to be created. Status is absent on purpose:
/// new requests always start `Pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPortalRequest {
    /// Public request UUID, assigned by the caller exactly once
    pub uuid: Uuid,
    /// The portal this request targets
    pub portal_id: Uuid,
    /// The submitting user
    pub submitted_by: Uuid,
    /// Priority
    pub priority: RequestPriority,
    /// Free-text comments
    pub comments: Option<String>,
}

/// Submitter-editable fields for an update. `None` leaves a field
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRequestFields {
    /// Move the request to another portal
    pub portal_id: Option<Uuid>,
    /// Change the priority
    pub priority: Option<RequestPriority>,
    /// Replace the comments text
    pub comments: Option<String>,
}

impl UpdateRequestFields {
    /// Whether the update carries any field at all
    pub fn is_empty(&self) -> bool {
        self.portal_id.is_none() && self.priority.is_none() && self.comments.is_none()
    }
}

/// A request row joined with its submitter and portal for display
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PortalRequestDetails {
    /// The request itself
    #[sqlx(flatten)]
    pub request: PortalRequest,
    /// Display name of the submitter
    pub submitter_name: String,
    /// Email of the submitter
    pub submitter_email: String,
    /// Name of the portal the request targets
    pub portal_name: String,
}

/// Wire representation of a portal request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PortalRequestResponse {
    /// Public request UUID
    pub uuid: Uuid,
    /// Derived reference, `REQ-` + the first 8 hex chars of the UUID, uppercased
    pub reference: String,
    /// The portal this request targets
    pub portal_id: Uuid,
    /// Name of that portal, when the row was fetched with relations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_name: Option<String>,
    /// The submitting user
    pub submitted_by: Uuid,
    /// Display name of the submitter, when fetched with relations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitter_name: Option<String>,
    /// Email of the submitter, when fetched with relations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitter_email: Option<String>,
    /// Priority
    pub priority: RequestPriority,
    /// Current status
    pub status: RequestStatus,
    /// Free-text comments including any appended audit markers
    pub comments: Option<String>,
    /// Reviewer's reason
    pub reason: Option<String>,
    /// When the request was last reviewed
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Who last reviewed it
    pub reviewed_by: Option<Uuid>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last write timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<PortalRequest> for PortalRequestResponse {
    fn from(row: PortalRequest) -> Self {
        let reference = row.reference();
        PortalRequestResponse {
            uuid: row.uuid,
            reference,
            portal_id: row.portal_id,
            portal_name: None,
            submitted_by: row.submitted_by,
            submitter_name: None,
            submitter_email: None,
            priority: row.priority,
            status: row.status,
            comments: row.comments,
            reason: row.reason,
            reviewed_at: row.reviewed_at,
            reviewed_by: row.reviewed_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<PortalRequestDetails> for PortalRequestResponse {
    fn from(row: PortalRequestDetails) -> Self {
        let mut response = PortalRequestResponse::from(row.request);
        response.portal_name = Some(row.portal_name);
        response.submitter_name = Some(row.submitter_name);
        response.submitter_email = Some(row.submitter_email);
        response
    }
}

/// Derive the human-facing reference from a public request UUID
pub fn reference_from_uuid(uuid: &Uuid) -> String {
    let hex = uuid.simple().to_string();
    format!("REQ-{}", hex[..8].to_ascii_uppercase())
}

/// Append a timestamped audit marker to a comments field.
///
/// The existing text is never rewritten; status updates only ever add
/// `\n\n[Status Update - <timestamp>]: <comment>` blocks after it.
pub fn append_status_comment(
    existing: Option<&str>,
    at: DateTime<Utc>,
    comment: &str,
) -> String {
    let stamp = at.format(STATUS_UPDATE_TIMESTAMP_FORMAT);
    match existing {
        Some(current) => format!("{current}\n\n[Status Update - {stamp}]: {comment}"),
        None => format!("\n\n[Status Update - {stamp}]: {comment}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn status_wire_strings_are_case_sensitive() {
        assert_eq!(
            "Under Review".parse::<RequestStatus>().unwrap(),
            RequestStatus::UnderReview
        );
        assert!("under review".parse::<RequestStatus>().is_err());
        assert!("UNDER REVIEW".parse::<RequestStatus>().is_err());
        assert!("Unknown".parse::<RequestStatus>().is_err());
    }

    #[test]
    fn status_display_round_trips() {
        for status in RequestStatus::ALL {
            assert_eq!(status.to_string().parse::<RequestStatus>().unwrap(), status);
        }
    }

    #[test]
    fn status_serde_uses_wire_names() {
        let json = serde_json::to_string(&RequestStatus::UnderReview).unwrap();
        assert_eq!(json, "\"Under Review\"");
        let parsed: RequestStatus = serde_json::from_str("\"Cancelled\"").unwrap();
        assert_eq!(parsed, RequestStatus::Cancelled);
    }

    #[test]
    fn only_pending_and_under_review_are_editable() {
        assert!(RequestStatus::Pending.is_editable());
        assert!(RequestStatus::UnderReview.is_editable());
        assert!(!RequestStatus::Approved.is_editable());
        assert!(!RequestStatus::Rejected.is_editable());
        assert!(!RequestStatus::Cancelled.is_editable());
        assert!(!RequestStatus::Completed.is_editable());
    }

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(RequestPriority::default(), RequestPriority::Medium);
    }

    #[test]
    fn priority_parse_is_case_sensitive() {
        assert_eq!("High".parse::<RequestPriority>().unwrap(), RequestPriority::High);
        assert!("high".parse::<RequestPriority>().is_err());
    }

    #[test]
    fn reference_uses_first_eight_hex_chars_uppercased() {
        let uuid = Uuid::parse_str("a1b2c3d4-0e5f-4e6a-8b7c-112233445566").unwrap();
        assert_eq!(reference_from_uuid(&uuid), "REQ-A1B2C3D4");
    }

    #[test]
    fn sort_field_parses_known_columns_only() {
        assert_eq!(
            "created_at".parse::<RequestSortField>().unwrap(),
            RequestSortField::CreatedAt
        );
        assert!("comments".parse::<RequestSortField>().is_err());
        assert!("".parse::<RequestSortField>().is_err());
    }

    #[test]
    fn appended_comment_keeps_existing_text_untouched() {
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        let first = append_status_comment(Some("original text"), at, "X");
        assert_eq!(
            first,
            "original text\n\n[Status Update - 2025-03-14 09:26:53]: X"
        );

        let later = Utc.with_ymd_and_hms(2025, 3, 14, 10, 0, 0).unwrap();
        let second = append_status_comment(Some(&first), later, "X");
        assert!(second.starts_with("original text\n\n"));
        assert_eq!(second.matches("]: X").count(), 2);
        assert!(second.contains("[Status Update - 2025-03-14 09:26:53]: X"));
        assert!(second.contains("[Status Update - 2025-03-14 10:00:00]: X"));
    }

    #[test]
    fn appended_comment_without_existing_text_starts_with_marker() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let result = append_status_comment(None, at, "approved as discussed");
        assert_eq!(
            result,
            "\n\n[Status Update - 2025-01-01 00:00:00]: approved as discussed"
        );
    }
}
