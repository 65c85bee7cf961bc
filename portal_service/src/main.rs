use crate::api::context::ApiContext;
use crate::config::{Config, Environment};
use anyhow::Context;
use portal_db_client::PORTAL_DB_MIGRATIONS;
use portal_entrypoint::PortalEntrypoint;
use request_lifecycle::domain::service::RequestLifecycleServiceImpl;
use request_lifecycle::outbound::{
    clock::SystemClock, pg_store::PortalDb, s3_storage::S3DocumentStorage,
};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

mod api;
mod config;
mod constants;

#[tokio::main]
#[tracing::instrument(err)]
async fn main() -> anyhow::Result<()> {
    PortalEntrypoint::default().init();

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    tracing::trace!("initialized config");

    let (min_connections, max_connections): (u32, u32) = match config.environment {
        Environment::Production => (4, 10),
        Environment::Develop => (4, 10),
        Environment::Local => (1, 2),
    };

    let db = PgPoolOptions::new()
        .min_connections(min_connections)
        .max_connections(max_connections)
        .connect(&config.database_url)
        .await
        .context("could not connect to db")?;

    tracing::trace!(
        min_connections,
        max_connections,
        "initialized db connection"
    );

    PORTAL_DB_MIGRATIONS
        .run(&db)
        .await
        .context("could not run db migrations")?;

    tracing::trace!("migrations are up to date");

    let s3 = s3_client::S3::new(
        aws_sdk_s3::Client::new(
            &aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region("us-east-1")
                .load()
                .await,
        ),
        config.document_bucket.clone(),
    );
    tracing::trace!("initialized s3 client");

    let lifecycle = RequestLifecycleServiceImpl::new(
        PortalDb::new(db.clone()),
        S3DocumentStorage::new(s3),
        SystemClock,
    );

    let app_state = ApiContext {
        db,
        lifecycle,
        environment: config.environment,
        internal_auth_key: config.internal_auth_key.clone(),
        public_storage_base_url: config.public_storage_base_url.clone(),
    };

    let service = api::service(app_state, config.max_upload_bytes);

    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .context("failed to bind to port")?;

    tracing::info!(
        "portal service is up and running with environment {:?} on port {}",
        &config.environment,
        &config.port
    );

    axum::serve(listener, service)
        .await
        .context("error starting service")?;

    Ok(())
}
