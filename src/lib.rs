//! Argus options: layered per-service settings for release monitoring.
//!
//! Resolves whether a service is checked, how often, and whether versions
//! are compared with semantic versioning, from the service's own options,
//! shared service defaults and global hard defaults. Also validates those
//! values and dumps what a user actually set.

pub mod config;
pub mod options;
pub mod webhook;
