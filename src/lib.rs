//! gitobjects - Git remote, ref, and branch-configuration value types
//!
//! Small value types that represent git remotes, refs, remote-tracking refs,
//! commits, and branch configuration, plus a read-only git layer that
//! populates them and the `gobj` CLI that presents them.
//!
//! # Architecture
//!
//! - [`core`] - Value types, parsing, ordering, and configuration
//! - [`git`] - Single interface for all Git reads
//! - [`cli`] - Command-line interface layer
//! - [`ui`] - Output utilities
//!
//! # Example
//!
//! ```
//! use gitobjects::core::refs::parse_tracking_ref;
//! use gitobjects::core::remote::{Remote, RemoteSet};
//!
//! let mut remotes: RemoteSet = vec![
//!     Remote::new("origin", "git@github.com:me/project.git"),
//!     Remote::new("upstream", "https://github.com/org/project.git"),
//! ]
//! .into_iter()
//! .collect();
//! remotes.sort();
//! assert_eq!(remotes.names(), vec!["upstream", "origin"]);
//!
//! let tracking = parse_tracking_ref("refs/remotes/upstream/main").unwrap();
//! assert_eq!(tracking.remote_name(), "upstream");
//! ```

pub mod cli;
pub mod core;
pub mod git;
pub mod ui;
