//! Multipart readers for the request forms.
//!
//! The request endpoints accept `multipart/form-data` so that text fields
//! and attached files travel in one submission. Unknown parts are skipped,
//! which lets the form add decorative fields without breaking the API.

use anyhow::Context;
use axum::extract::Multipart;
use axum::extract::multipart::Field;
use model::request::RequestPriority;
use request_lifecycle::domain::model::DocumentUpload;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum FormError {
    /// A field carried a value the form does not accept. The message is
    /// written for the person filling in the form.
    #[error("{0}")]
    Invalid(String),
    /// The multipart stream itself could not be read.
    #[error(transparent)]
    Unreadable(#[from] anyhow::Error),
}

/// The create/update request form. Every field is optional at this layer;
/// the handlers decide which ones their operation requires.
#[derive(Debug, Default)]
pub struct RequestForm {
    pub portal_id: Option<Uuid>,
    pub priority: Option<RequestPriority>,
    pub comments: Option<String>,
    pub documents: Vec<DocumentUpload>,
}

pub async fn read_request_form(multipart: &mut Multipart) -> Result<RequestForm, FormError> {
    let mut form = RequestForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .context("expected to be able to read the next form field")?
    {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("portal_id") => {
                let Some(text) = text_value(field).await? else {
                    continue;
                };
                let portal_id = Uuid::parse_str(&text).map_err(|_| {
                    FormError::Invalid("The portal id must be a valid UUID.".to_string())
                })?;
                form.portal_id = Some(portal_id);
            }
            Some("priority") => {
                let Some(text) = text_value(field).await? else {
                    continue;
                };
                let priority = text
                    .parse::<RequestPriority>()
                    .map_err(|e| FormError::Invalid(e.to_string()))?;
                form.priority = Some(priority);
            }
            Some("comments") => {
                form.comments = text_value(field).await?;
            }
            Some("documents") | Some("documents[]") => {
                form.documents.push(read_file(field).await?);
            }
            _ => {}
        }
    }

    Ok(form)
}

/// The single-file form of the document endpoint. Returns `None` when the
/// submission carried no `document` part at all.
pub async fn read_document_form(
    multipart: &mut Multipart,
) -> Result<Option<DocumentUpload>, FormError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .context("expected to be able to read the next form field")?
    {
        let name = field.name().map(str::to_string);

        if name.as_deref() == Some("document") {
            upload = Some(read_file(field).await?);
        }
    }

    Ok(upload)
}

/// Text content of a field, trimmed, with blank submissions folded to `None`
/// so that an empty `<input>` behaves like an absent one.
async fn text_value(field: Field<'_>) -> Result<Option<String>, FormError> {
    let text = field
        .text()
        .await
        .context("expected the form field to be text")?;
    let trimmed = text.trim();

    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

async fn read_file(field: Field<'_>) -> Result<DocumentUpload, FormError> {
    let original_name = field
        .file_name()
        .map(str::to_string)
        .unwrap_or_else(|| "file".to_string());
    let content_type = field.content_type().map(str::to_string);
    let bytes = field
        .bytes()
        .await
        .context("expected to be able to read the uploaded file")?
        .to_vec();

    Ok(DocumentUpload {
        original_name,
        content_type,
        bytes,
    })
}
