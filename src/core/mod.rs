//! core
//!
//! Core value types and configuration.
//!
//! # Modules
//!
//! - [`remote`] - Remotes, remote sets, and display ordering
//! - [`refs`] - Resolved refs and remote-tracking refs
//! - [`types`] - Commit and branch-configuration records, shared errors
//! - [`config`] - Configuration schema and loading
//!
//! Nothing in this module touches the repository or the network.

pub mod config;
pub mod refs;
pub mod remote;
pub mod types;
