//! Outbound adapters wiring the lifecycle ports to Postgres, S3 and the
//! system clock.

/// Contains the system clock adapter.
pub mod clock;

/// Contains the Postgres request store adapter.
pub mod pg_store;

/// Contains the S3 document storage adapter.
pub mod s3_storage;
