//! Queries for the local mirror of gateway-authenticated users.

pub mod ensure_user;
pub mod get_user;
