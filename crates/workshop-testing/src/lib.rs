//! Test utilities for the workshop services.
//!
//! Provides the contract loader, an in-process server spawner and a mock
//! provider built from a contract interaction.
//! Import from tests only — never in production code.

pub mod fixture;
pub mod mock_provider;
pub mod server;
