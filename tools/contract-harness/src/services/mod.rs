//! Per-service verification runners that start the service in-process.

#[cfg(feature = "provider")]
pub mod provider;
