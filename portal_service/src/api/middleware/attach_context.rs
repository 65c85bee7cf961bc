use anyhow::Context as _;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Request, State},
    http::{HeaderMap, StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use model::user::UserContext;
use std::borrow::Cow;
use std::collections::HashSet;
use uuid::Uuid;

use crate::api::context::ApiContext;

/// The header key for the gateway's shared secret
static AUTH_KEY_HEADER: &str = "x-auth-key";
static USER_ID_HEADER: &str = "x-user-id";
static USER_NAME_HEADER: &str = "x-user-name";
static USER_EMAIL_HEADER: &str = "x-user-email";
static USER_PERMISSIONS_HEADER: &str = "x-user-permissions";

/// Shared secret the upstream gateway must present on every request
#[derive(Clone)]
pub struct InternalAuthKey(String);

impl InternalAuthKey {
    /// Name of the environment variable the key is read from
    pub const ENV_VAR: &'static str = "INTERNAL_AUTH_KEY";

    /// Read the key from the environment
    pub fn from_env() -> anyhow::Result<Self> {
        let value = std::env::var(Self::ENV_VAR)
            .with_context(|| format!("{} must be provided", Self::ENV_VAR))?;
        Ok(InternalAuthKey(value))
    }
}

impl AsRef<str> for InternalAuthKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Sentinel value which represents that we were able to validate the
/// gateway's shared secret in the header of the request
#[derive(Debug)]
pub struct ValidInternalKey(());

#[async_trait]
impl<S> FromRequestParts<S> for ValidInternalKey
where
    InternalAuthKey: FromRef<S>,
    S: Send + Sync + 'static,
{
    type Rejection = (StatusCode, Cow<'static, str>);

    #[tracing::instrument(ret, err(Debug), skip(parts, state))]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(auth_key) = parts
            .headers
            .get(AUTH_KEY_HEADER)
            .and_then(|header| header.to_str().ok())
        else {
            return Err((
                StatusCode::UNAUTHORIZED,
                format!("missing {} header", AUTH_KEY_HEADER).into(),
            ));
        };

        let expected_key = InternalAuthKey::from_ref(state);

        (expected_key.as_ref() == auth_key)
            .then_some(ValidInternalKey(()))
            .ok_or((StatusCode::UNAUTHORIZED, Cow::Borrowed("Unauthorized")))
    }
}

/// Validates the gateway's shared secret, mirrors the user it names into
/// the local users table, and attaches the [UserContext] every handler and
/// lifecycle operation reads.
#[axum::debug_middleware]
pub async fn handler(
    _valid_internal_key: ValidInternalKey,
    State(ctx): State<ApiContext>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let Some(user_id) = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|header| header.to_str().ok())
        .and_then(|value| Uuid::parse_str(value.trim()).ok())
    else {
        tracing::warn!("request carried no usable {} header", USER_ID_HEADER);
        return Err((
            StatusCode::UNAUTHORIZED,
            format!("missing or invalid {} header", USER_ID_HEADER),
        )
            .into_response());
    };

    let name = header_text(req.headers(), USER_NAME_HEADER).unwrap_or_default();
    let email = header_text(req.headers(), USER_EMAIL_HEADER).unwrap_or_default();
    let permissions = parse_permissions(req.headers());

    // The gateway owns identity; the local row only backs foreign keys and
    // search joins, refreshed on every request.
    let user =
        match portal_db_client::users::ensure_user::ensure_user(&ctx.db, user_id, &name, &email)
            .await
        {
            Ok(user) => user,
            Err(e) => {
                tracing::error!(error=?e, "unable to mirror the gateway user");
                return Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "unable to attach user context".to_string(),
                )
                    .into_response());
            }
        };

    req.extensions_mut().insert(UserContext {
        user_id: user.id,
        name: user.name,
        email: user.email,
        permissions,
    });

    Ok(next.run(req).await)
}

fn header_text(headers: &HeaderMap, name: &'static str) -> Option<String> {
    headers
        .get(name)
        .and_then(|header| header.to_str().ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_permissions(headers: &HeaderMap) -> HashSet<String> {
    header_text(headers, USER_PERMISSIONS_HEADER)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|permission| !permission.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
