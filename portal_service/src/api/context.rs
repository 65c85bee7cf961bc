use axum_macros::FromRef;
use portal_env::Environment;
use request_lifecycle::domain::service::RequestLifecycleServiceImpl;
use request_lifecycle::outbound::{
    clock::SystemClock, pg_store::PortalDb, s3_storage::S3DocumentStorage,
};
use sqlx::PgPool;

use crate::api::middleware::InternalAuthKey;

/// The concrete lifecycle service this binary wires together
pub type Lifecycle = RequestLifecycleServiceImpl<PortalDb, S3DocumentStorage, SystemClock>;

#[derive(Clone, FromRef)]
pub(crate) struct ApiContext {
    pub db: PgPool,
    pub lifecycle: Lifecycle,
    pub environment: Environment,
    pub internal_auth_key: InternalAuthKey,
    pub public_storage_base_url: String,
}
