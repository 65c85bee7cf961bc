//! Document rows attached to portal requests, plus the stored-name and
//! display-size derivations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[cfg(test)]
mod tests;

/// Storage namespace for request documents
pub const DOCUMENT_STORAGE_PREFIX: &str = "portal-requests/documents";

/// A document row attached to a portal request
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PortalRequestDocument {
    /// Primary key
    pub id: Uuid,
    /// Owning request (internal id)
    pub portal_request_id: Uuid,
    /// Collision-resistant stored filename
    pub file_name: String,
    /// Storage key; the single source of truth for retrieval
    pub file_path: String,
    /// Filename as supplied by the client
    pub original_name: String,
    /// MIME type as supplied by the client
    pub mime_type: String,
    /// Size in bytes
    pub file_size: i64,
    /// Lowercased extension, empty when the original name had none
    pub extension: String,
    /// When the row was created
    pub created_at: DateTime<Utc>,
    /// When the row was last written
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker
    pub deleted_at: Option<DateTime<Utc>>,
}

impl PortalRequestDocument {
    /// Human-readable size, binary units
    pub fn formatted_size(&self) -> String {
        format_file_size(self.file_size)
    }

    /// Build the wire representation, resolving the public URL against the
    /// storage base
    pub fn to_response(&self, public_base_url: &str) -> DocumentResponse {
        DocumentResponse {
            id: self.id,
            original_name: self.original_name.clone(),
            file_name: self.file_name.clone(),
            mime_type: self.mime_type.clone(),
            extension: self.extension.clone(),
            file_size: self.file_size,
            formatted_size: self.formatted_size(),
            url: public_document_url(public_base_url, &self.file_path),
            created_at: self.created_at,
        }
    }
}

/// Metadata for a document about to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    /// Collision-resistant stored filename
    pub file_name: String,
    /// Storage key the blob was written under
    pub file_path: String,
    /// Filename as supplied by the client
    pub original_name: String,
    /// MIME type as supplied by the client
    pub mime_type: String,
    /// Size in bytes
    pub file_size: i64,
    /// Lowercased extension
    pub extension: String,
}

/// Wire representation of a document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DocumentResponse {
    /// Document id
    pub id: Uuid,
    /// Filename as supplied by the client
    pub original_name: String,
    /// Stored filename
    pub file_name: String,
    /// MIME type
    pub mime_type: String,
    /// Lowercased extension
    pub extension: String,
    /// Size in bytes
    pub file_size: i64,
    /// Human-readable size, e.g. `"2.00 MB"`
    pub formatted_size: String,
    /// Public URL of the stored file
    pub url: String,
    /// Upload timestamp
    pub created_at: DateTime<Utc>,
}

/// Join the public storage base URL with a storage key
pub fn public_document_url(public_base_url: &str, file_path: &str) -> String {
    format!("{}/{}", public_base_url.trim_end_matches('/'), file_path)
}

/// Derive the collision-resistant stored filename for an upload and its
/// lowercased extension.
///
/// The stored name is `slug(base) + "_" + unix-timestamp [+ "." + ext]`;
/// uniqueness comes from the timestamp, not a shared counter.
pub fn stored_file_name(original_name: &str, unix_timestamp: i64) -> (String, String) {
    let (base, extension) = match original_name.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() => (base, ext.to_ascii_lowercase()),
        _ => (original_name, String::new()),
    };

    let mut slug = slugify(base);
    if slug.is_empty() {
        slug = "file".to_string();
    }

    let file_name = if extension.is_empty() {
        format!("{slug}_{unix_timestamp}")
    } else {
        format!("{slug}_{unix_timestamp}.{extension}")
    };
    (file_name, extension)
}

/// Build the storage key for a stored filename
pub fn document_storage_path(file_name: &str) -> String {
    format!("{DOCUMENT_STORAGE_PREFIX}/{file_name}")
}

/// Lowercase a name and replace every non-alphanumeric run with a single
/// hyphen
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_separator = false;
    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_separator = false;
        } else {
            pending_separator = true;
        }
    }
    slug
}

/// Human-readable file size: binary units, two decimals above bytes
pub fn format_file_size(bytes: i64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let size = bytes.max(0) as f64;
    if size >= GB {
        format!("{:.2} GB", size / GB)
    } else if size >= MB {
        format!("{:.2} MB", size / MB)
    } else if size >= KB {
        format!("{:.2} KB", size / KB)
    } else {
        format!("{bytes} bytes")
    }
}
