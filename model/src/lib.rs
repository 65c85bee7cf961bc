//! Shared types for the portal request tracker: database rows, wire DTOs,
//! enums, and the derived-attribute helpers used across crates.

pub mod document;
pub mod pagination;
pub mod portal;
pub mod request;
pub mod response;
pub mod statistics;
pub mod user;
