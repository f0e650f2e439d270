//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. No other module should import
//! `git2`. Everything here is read-only.
//!
//! # Responsibilities
//!
//! - Repository discovery
//! - Remote enumeration in display order
//! - Branch configuration (`branch.<name>.*`)
//! - Ref resolution and remote-tracking ref listing
//! - Commit ranges
//!
//! # Example
//!
//! ```ignore
//! use gitobjects::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let config = git.branch_config("main")?;
//! if let Some(tracking) = config.tracking_ref() {
//!     println!("main tracks {tracking}");
//! }
//! ```

mod interface;

pub use interface::{Git, GitError};
