//! Plumbing shared by every HTTP service in the workspace.

pub mod health;
pub mod middleware;
pub mod tracing;
