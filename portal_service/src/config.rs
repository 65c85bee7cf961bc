use crate::api::middleware::InternalAuthKey;
use anyhow::Context;
pub use portal_env::Environment;

/// Default cap on multipart upload bodies, 10 MiB
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// The configuration parameters for the application.
///
/// These are pulled from environment variables once at startup; a missing
/// required variable fails the boot with a message naming it.
pub struct Config {
    /// The connection URL for the Postgres database this application should use.
    pub database_url: String,
    /// The port to listen for HTTP requests on.
    pub port: usize,
    /// The environment we are in
    pub environment: Environment,
    /// Shared secret the upstream gateway must present
    pub internal_auth_key: InternalAuthKey,
    /// The S3 bucket request documents are stored in
    pub document_bucket: String,
    /// Public base URL document paths are resolved against
    pub public_storage_base_url: String,
    /// Cap on multipart upload bodies, in bytes
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be provided")?;
        let port: usize = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .context("PORT must be a number")?;
        let environment = Environment::new_or_prod();

        let internal_auth_key = InternalAuthKey::from_env()?;

        let document_bucket =
            std::env::var("DOCUMENT_BUCKET").context("DOCUMENT_BUCKET must be provided")?;

        let public_storage_base_url = std::env::var("PUBLIC_STORAGE_BASE_URL")
            .context("PUBLIC_STORAGE_BASE_URL must be provided")?;

        let max_upload_bytes = match std::env::var("MAX_UPLOAD_BYTES") {
            Ok(raw) => raw
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a number of bytes")?,
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Config {
            database_url,
            port,
            environment,
            internal_auth_key,
            document_bucket,
            public_storage_base_url,
            max_upload_bytes,
        })
    }
}
