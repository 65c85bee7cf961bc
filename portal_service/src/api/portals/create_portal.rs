use crate::api::context::ApiContext;
use crate::api::util::error_detail;
use axum::Extension;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use model::portal::{MachineType, PortalFields, PortalResponse, PortalStatus, domain_from_url};
use model::response::ApiResponse;
use model::user::UserContext;
use portal_db_client::portals::create_portal::create_portal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Body of the create and update portal endpoints. Updates are full
/// replacements, so both operations share one shape.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PortalPayload {
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Owning user. Defaults to the caller.
    pub owner_id: Option<Uuid>,
    /// Canonical URL; the portal's domain is derived from it
    pub url: String,
    /// Whether the portal is live. Defaults to true.
    pub is_active: Option<bool>,
    /// Delivery status. Defaults to pending.
    pub status: Option<PortalStatus>,
    /// Server IP address
    pub ip_address: Option<String>,
    /// Host operating system family. Defaults to Not-Defined.
    pub machine_type: Option<MachineType>,
    /// Application framework
    pub framework: Option<String>,
    /// Framework version
    pub framework_version: Option<String>,
    /// Database engine
    pub database: Option<String>,
    /// Database version
    pub database_version: Option<String>,
    /// Whether the portal is reachable publicly
    #[serde(default)]
    pub is_public: bool,
    /// Whether server backups are configured
    #[serde(default)]
    pub server_backup: bool,
    /// Whether database backups are configured
    #[serde(default)]
    pub db_backup: bool,
    /// Whether the portal is slated for migration
    #[serde(default)]
    pub migrate_to_new_server: bool,
}

impl PortalPayload {
    /// Validates the payload into storable fields. The error is a message
    /// written for the caller.
    pub fn into_fields(self, default_owner: Uuid) -> Result<PortalFields, String> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err("A portal name is required.".to_string());
        }

        let url = self.url.trim().to_string();
        if url.is_empty() {
            return Err("A portal URL is required.".to_string());
        }
        let Some(domain) = domain_from_url(&url) else {
            return Err("The portal URL is not a valid URL.".to_string());
        };

        Ok(PortalFields {
            name,
            description: self.description,
            owner_id: self.owner_id.unwrap_or(default_owner),
            url,
            domain,
            is_active: self.is_active.unwrap_or(true),
            status: self.status.unwrap_or(PortalStatus::Pending),
            ip_address: self.ip_address,
            machine_type: self.machine_type.unwrap_or_default(),
            framework: self.framework,
            framework_version: self.framework_version,
            database: self.database,
            database_version: self.database_version,
            is_public: self.is_public,
            server_backup: self.server_backup,
            db_backup: self.db_backup,
            migrate_to_new_server: self.migrate_to_new_server,
        })
    }
}

/// Registers a new portal.
#[utoipa::path(
    post,
    tag = "portals",
    operation_id = "create_portal",
    path = "/portals",
    request_body = PortalPayload,
    responses(
        (status = 201, description = "The registered portal", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 422, description = "The payload was rejected", body = ApiResponse),
        (status = 500, description = "The portal could not be stored", body = ApiResponse),
    )
)]
#[tracing::instrument(skip(ctx, user_context, payload), fields(user_id = %user_context.user_id))]
#[axum::debug_handler(state = ApiContext)]
pub async fn create_portal_handler(
    State(ctx): State<ApiContext>,
    Extension(user_context): Extension<UserContext>,
    Json(payload): Json<PortalPayload>,
) -> impl IntoResponse {
    let fields = match payload.into_fields(user_context.user_id) {
        Ok(fields) => fields,
        Err(message) => {
            return ApiResponse::builder()
                .message(&message)
                .is_success(false)
                .send(StatusCode::UNPROCESSABLE_ENTITY);
        }
    };

    match create_portal(&ctx.db, &fields).await {
        Ok(portal) => ApiResponse::builder()
            .message("Portal created successfully.")
            .data(&PortalResponse::from(portal))
            .send(StatusCode::CREATED),
        Err(e) => {
            tracing::error!(error = ?e, "unable to store the portal");
            ApiResponse::builder()
                .message("Unable to create the portal.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn payload() -> PortalPayload {
        PortalPayload {
            name: "Finance Portal".to_string(),
            description: None,
            owner_id: None,
            url: "https://finance.example.gov".to_string(),
            is_active: None,
            status: None,
            ip_address: None,
            machine_type: None,
            framework: None,
            framework_version: None,
            database: None,
            database_version: None,
            is_public: false,
            server_backup: false,
            db_backup: false,
            migrate_to_new_server: false,
        }
    }

    #[test]
    fn defaults_fill_in_for_absent_optional_fields() {
        let owner = Uuid::new_v4();

        let fields = payload().into_fields(owner).unwrap();

        assert_eq!(fields.owner_id, owner);
        assert_eq!(fields.domain, "finance.example.gov");
        assert!(fields.is_active);
        assert_eq!(fields.status, PortalStatus::Pending);
        assert_eq!(fields.machine_type, MachineType::NotDefined);
    }

    #[test]
    fn a_blank_name_is_rejected() {
        let mut body = payload();
        body.name = "   ".to_string();

        let error = body.into_fields(Uuid::new_v4()).unwrap_err();

        assert_eq!(error, "A portal name is required.");
    }

    #[test]
    fn an_unparseable_url_is_rejected() {
        let mut body = payload();
        body.url = "not a url".to_string();

        let error = body.into_fields(Uuid::new_v4()).unwrap_err();

        assert_eq!(error, "The portal URL is not a valid URL.");
    }

    #[test]
    fn an_explicit_owner_wins_over_the_caller() {
        let owner = Uuid::new_v4();
        let mut body = payload();
        body.owner_id = Some(owner);

        let fields = body.into_fields(Uuid::new_v4()).unwrap();

        assert_eq!(fields.owner_id, owner);
    }
}
