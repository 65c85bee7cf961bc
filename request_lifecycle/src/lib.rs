#![deny(missing_docs)]
//! This crate contains the domain for the portal request lifecycle: raising
//! requests with attached documents, editing them while they remain open,
//! and recording reviewer decisions.

/// Contains the domain logic for the request lifecycle.
pub mod domain;

/// Contains the outbound adapters for the request lifecycle.
pub mod outbound;
