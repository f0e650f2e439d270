//! core::types
//!
//! Passive records populated by the git layer, plus the error type shared by
//! the value types in [`crate::core`].
//!
//! # Types
//!
//! - [`Commit`] - A single commit's sha, title, and body
//! - [`BranchConfig`] - Per-branch remote/merge configuration
//! - [`ObjectError`] - Parse failures for tracking refs and remote URLs
//!
//! # Example
//!
//! ```
//! use gitobjects::core::types::Commit;
//!
//! let commit = Commit::from_message(
//!     "abc123def4567890abc123def4567890abc12345",
//!     "Add remote sorting\n\nRemotes are ordered by priority.\n",
//! );
//! assert_eq!(commit.title, "Add remote sorting");
//! assert_eq!(commit.body, "Remotes are ordered by priority.");
//! ```

use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::core::refs::TrackingRef;

/// Errors from parsing git value types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObjectError {
    /// The text does not have the `refs/remotes/<remote>/<branch>` shape.
    #[error("invalid tracking ref: {text}")]
    MalformedTrackingRef {
        /// The offending input
        text: String,
    },

    /// A remote address could not be parsed.
    #[error("invalid remote url '{url}': {message}")]
    InvalidUrl {
        /// The offending input
        url: String,
        /// Why parsing failed
        message: String,
    },
}

/// A single commit's metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Commit {
    /// Full commit hash
    pub sha: String,
    /// First line of the commit message
    pub title: String,
    /// Remainder of the commit message, trimmed
    pub body: String,
}

impl Commit {
    /// Build a commit record from a raw commit message.
    ///
    /// The first line becomes the title; everything after it, with
    /// surrounding whitespace removed, becomes the body.
    pub fn from_message(sha: impl Into<String>, message: &str) -> Self {
        let (title, body) = match message.split_once('\n') {
            Some((title, rest)) => (title, rest.trim()),
            None => (message, ""),
        };

        Self {
            sha: sha.into(),
            title: title.trim_end().to_string(),
            body: body.to_string(),
        }
    }

    /// Get an abbreviated form of the sha.
    ///
    /// Counts characters, not bytes. Returns the full sha if `len` exceeds
    /// its length.
    pub fn short_sha(&self, len: usize) -> &str {
        match self.sha.char_indices().nth(len) {
            Some((end, _)) => &self.sha[..end],
            None => &self.sha,
        }
    }
}

/// Per-branch remote and merge configuration.
///
/// Mirrors the `branch.<name>.*` keys in git config. Every field is optional
/// because a branch may have no upstream at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BranchConfig {
    /// Name of the remote the branch tracks (`branch.<name>.remote`)
    pub remote_name: Option<String>,
    /// Remote address, when `branch.<name>.remote` is a URL rather than a name
    pub remote_url: Option<Url>,
    /// Base branch to target when no explicit base is given
    /// (`branch.<name>.merge-base`)
    pub merge_base: Option<String>,
    /// Upstream ref on the remote (`branch.<name>.merge`)
    pub merge_ref: Option<String>,
}

impl BranchConfig {
    /// The remote-tracking ref for this branch's upstream.
    ///
    /// Returns `None` unless a remote name is configured and the merge ref
    /// names a branch (`refs/heads/...`).
    ///
    /// # Example
    ///
    /// ```
    /// use gitobjects::core::types::BranchConfig;
    ///
    /// let config = BranchConfig {
    ///     remote_name: Some("origin".into()),
    ///     merge_ref: Some("refs/heads/feature/x".into()),
    ///     ..Default::default()
    /// };
    /// let tracking = config.tracking_ref().unwrap();
    /// assert_eq!(tracking.to_string(), "refs/remotes/origin/feature/x");
    /// ```
    pub fn tracking_ref(&self) -> Option<TrackingRef> {
        let remote = self.remote_name.as_deref()?;
        let branch = self.merge_ref.as_deref()?.strip_prefix("refs/heads/")?;
        Some(TrackingRef::new(remote, branch))
    }
}
