//! SQL layer for the portal request tracker. One module per resource, one
//! file per operation; every query excludes soft-deleted rows unless a
//! function says otherwise.

pub mod collaborators;
pub mod documents;
pub mod portals;
pub mod requests;
pub mod statistics;
pub mod users;

/// Schema migrations, embedded so the service can run them at startup
pub static PORTAL_DB_MIGRATIONS: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Dynamically bound values for partial-update queries
#[derive(Debug, Clone)]
pub enum Parameters {
    /// A uuid column value
    Uuid(uuid::Uuid),
    /// A request priority value
    Priority(model::request::RequestPriority),
    /// A text column value
    String(String),
}
