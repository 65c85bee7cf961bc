//! The request lifecycle domain: values, ports and the service.

/// Contains the domain values and failure modes.
pub mod model;

/// Contains the ports the service drives.
pub mod port;

/// Contains the service logic.
pub mod service;
