//! core::refs
//!
//! Resolved refs and remote-tracking refs.
//!
//! A tracking ref has the canonical form `refs/remotes/<remote>/<branch>`.
//! The branch part may itself contain `/`; the remote part may not.
//!
//! # Example
//!
//! ```
//! use gitobjects::core::refs::parse_tracking_ref;
//!
//! let tracking = parse_tracking_ref("refs/remotes/origin/feature/x").unwrap();
//! assert_eq!(tracking.remote_name(), "origin");
//! assert_eq!(tracking.branch_name(), "feature/x");
//! assert_eq!(tracking.to_string(), "refs/remotes/origin/feature/x");
//!
//! assert!(parse_tracking_ref("origin/main").is_err());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::ObjectError;

const TRACKING_PREFIX: &str = "refs/remotes/";

/// A resolved commit reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ref {
    /// Hash of the commit the ref points to
    pub hash: String,
    /// Full ref name, e.g. `refs/heads/main`
    pub name: String,
}

/// A ref for a remote-tracking branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrackingRef {
    remote_name: String,
    branch_name: String,
}

impl TrackingRef {
    pub(crate) fn new(remote_name: impl Into<String>, branch_name: impl Into<String>) -> Self {
        Self {
            remote_name: remote_name.into(),
            branch_name: branch_name.into(),
        }
    }

    /// Name of the remote.
    pub fn remote_name(&self) -> &str {
        &self.remote_name
    }

    /// Name of the branch on the remote.
    pub fn branch_name(&self) -> &str {
        &self.branch_name
    }
}

/// Parse a remote-tracking ref of the form `refs/remotes/<remote>/<branch>`.
///
/// The text is split on `/` into at most four parts: the third is the remote
/// and the fourth, which keeps any further slashes, is the branch. The first
/// two parts are positional only and are not compared against `refs` and
/// `remotes`.
///
/// # Errors
///
/// Returns [`ObjectError::MalformedTrackingRef`] when the text has fewer than
/// four slash-separated parts.
pub fn parse_tracking_ref(text: &str) -> Result<TrackingRef, ObjectError> {
    let mut parts = text.splitn(4, '/');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(_), Some(remote), Some(branch)) => Ok(TrackingRef::new(remote, branch)),
        _ => Err(ObjectError::MalformedTrackingRef {
            text: text.to_string(),
        }),
    }
}

impl FromStr for TrackingRef {
    type Err = ObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tracking_ref(s)
    }
}

impl TryFrom<String> for TrackingRef {
    type Error = ObjectError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse_tracking_ref(&s)
    }
}

impl From<TrackingRef> for String {
    fn from(tracking: TrackingRef) -> Self {
        tracking.to_string()
    }
}

impl std::fmt::Display for TrackingRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}/{}",
            TRACKING_PREFIX, self.remote_name, self.branch_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parse {
        use super::*;

        #[test]
        fn simple_branch() {
            let tracking = parse_tracking_ref("refs/remotes/origin/main").unwrap();
            assert_eq!(tracking.remote_name(), "origin");
            assert_eq!(tracking.branch_name(), "main");
        }

        #[test]
        fn branch_keeps_slashes() {
            let tracking = parse_tracking_ref("refs/remotes/origin/feature/x").unwrap();
            assert_eq!(tracking.remote_name(), "origin");
            assert_eq!(tracking.branch_name(), "feature/x");

            let deep = parse_tracking_ref("refs/remotes/upstream/a/b/c/d").unwrap();
            assert_eq!(deep.branch_name(), "a/b/c/d");
        }

        #[test]
        fn too_few_segments_rejected() {
            let err = parse_tracking_ref("origin/main").unwrap_err();
            assert_eq!(
                err,
                ObjectError::MalformedTrackingRef {
                    text: "origin/main".into()
                }
            );
            assert!(parse_tracking_ref("refs/remotes/origin").is_err());
            assert!(parse_tracking_ref("").is_err());
        }

        #[test]
        fn leading_segments_not_validated() {
            let tracking = parse_tracking_ref("a/b/c/d").unwrap();
            assert_eq!(tracking.remote_name(), "c");
            assert_eq!(tracking.branch_name(), "d");
        }

        #[test]
        fn empty_segments_allowed() {
            let tracking = parse_tracking_ref("refs/remotes//").unwrap();
            assert_eq!(tracking.remote_name(), "");
            assert_eq!(tracking.branch_name(), "");
        }

        #[test]
        fn from_str_delegates() {
            let tracking: TrackingRef = "refs/remotes/github/dev".parse().unwrap();
            assert_eq!(tracking.remote_name(), "github");
        }
    }

    mod display {
        use super::*;

        #[test]
        fn canonical_form() {
            let tracking = TrackingRef::new("origin", "feature/x");
            assert_eq!(tracking.to_string(), "refs/remotes/origin/feature/x");
        }

        #[test]
        fn round_trip() {
            let tracking = TrackingRef::new("upstream", "release/1.2");
            let parsed = parse_tracking_ref(&tracking.to_string()).unwrap();
            assert_eq!(parsed, tracking);
        }
    }

    #[test]
    fn serde_as_string() {
        let tracking = TrackingRef::new("origin", "main");
        let json = serde_json::to_string(&tracking).unwrap();
        assert_eq!(json, "\"refs/remotes/origin/main\"");

        let parsed: TrackingRef = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tracking);

        assert!(serde_json::from_str::<TrackingRef>("\"origin/main\"").is_err());
    }
}
