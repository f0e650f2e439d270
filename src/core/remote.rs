//! core::remote
//!
//! Git remotes and their display ordering.
//!
//! # Ordering
//!
//! Remotes are displayed by a coarse priority score on their name:
//! `upstream` first, then `github`, then `origin`, then everything else.
//! Ties keep their input order, so sorting is always stable.
//!
//! # Addresses
//!
//! Remote addresses are parsed into [`Url`]s. Besides standard URLs, the
//! scp-like form git accepts (`git@host:owner/repo.git`) and absolute
//! filesystem paths are understood; see [`parse_remote_url`].
//!
//! # Example
//!
//! ```
//! use gitobjects::core::remote::{Remote, RemoteSet};
//!
//! let mut remotes: RemoteSet = ["origin", "fork", "upstream"]
//!     .into_iter()
//!     .map(|name| Remote::new(name, "https://github.com/owner/repo.git"))
//!     .collect();
//! remotes.sort();
//!
//! assert_eq!(remotes.names(), vec!["upstream", "origin", "fork"]);
//! ```

use std::cmp::Reverse;
use std::path::Path;

use serde::Serialize;
use url::Url;

use super::types::ObjectError;

/// Priority of a remote name for display ordering.
///
/// Case-insensitive exact match: `upstream` → 3, `github` → 2,
/// `origin` → 1, anything else → 0.
pub fn remote_name_sort_score(name: &str) -> u8 {
    match name.to_lowercase().as_str() {
        "upstream" => 3,
        "github" => 2,
        "origin" => 1,
        _ => 0,
    }
}

/// Parse a remote address as git understands it.
///
/// Accepted forms:
/// - Standard URLs (`https://`, `ssh://`, `git://`, `file://`, ...)
/// - `git+ssh://` and `git+https://`, normalized to `ssh://` and `https://`
/// - scp-like `[user@]host:path`, rewritten to `ssh://[user@]host/path`
/// - Absolute filesystem paths, as `file://` URLs
///
/// # Errors
///
/// Returns [`ObjectError::InvalidUrl`] for anything else.
///
/// # Example
///
/// ```
/// use gitobjects::core::remote::parse_remote_url;
///
/// let url = parse_remote_url("git@github.com:owner/repo.git").unwrap();
/// assert_eq!(url.as_str(), "ssh://git@github.com/owner/repo.git");
///
/// assert!(parse_remote_url("not a url").is_err());
/// ```
pub fn parse_remote_url(text: &str) -> Result<Url, ObjectError> {
    let invalid = |message: String| ObjectError::InvalidUrl {
        url: text.to_string(),
        message,
    };

    if text.contains("://") {
        let normalized = if let Some(rest) = text.strip_prefix("git+ssh://") {
            format!("ssh://{rest}")
        } else if let Some(rest) = text.strip_prefix("git+https://") {
            format!("https://{rest}")
        } else {
            text.to_string()
        };
        return Url::parse(&normalized).map_err(|e| invalid(e.to_string()));
    }

    if let Some((host, path)) = text.split_once(':') {
        let host_ok = !host.is_empty()
            && !host.contains('/')
            && !host.chars().any(char::is_whitespace);
        if host_ok && !path.is_empty() {
            let ssh = format!("ssh://{}/{}", host, path.trim_start_matches('/'));
            return Url::parse(&ssh).map_err(|e| invalid(e.to_string()));
        }
    }

    if Path::new(text).is_absolute() {
        return Url::from_file_path(text).map_err(|()| invalid("not a usable file path".into()));
    }

    Url::parse(text).map_err(|e| invalid(e.to_string()))
}

/// Host, owner, and repository name of a hosted remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSlug {
    pub host: String,
    pub owner: String,
    pub name: String,
}

impl std::fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.owner, self.name)
    }
}

/// A parsed git remote.
///
/// When only one address is known, `fetch_url` and `push_url` hold the same
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Remote {
    /// Remote name, e.g. `origin`
    pub name: String,
    /// Label recording which hosted repository the remote resolved to
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resolved: String,
    /// Address used for fetching
    pub fetch_url: Option<Url>,
    /// Address used for pushing
    pub push_url: Option<Url>,
}

impl Remote {
    /// Create a remote from a name and an address.
    ///
    /// An address that fails to parse leaves both `fetch_url` and `push_url`
    /// as `None`; use [`Remote::try_new`] to observe the failure.
    pub fn new(name: impl Into<String>, url: &str) -> Self {
        let name = name.into();
        match Self::try_new(name.clone(), url) {
            Ok(remote) => remote,
            Err(e) => {
                tracing::debug!(remote = %name, error = %e, "remote address did not parse");
                Self {
                    name,
                    resolved: String::new(),
                    fetch_url: None,
                    push_url: None,
                }
            }
        }
    }

    /// Create a remote, failing if the address does not parse.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::InvalidUrl`] if `url` is not a remote address.
    pub fn try_new(name: impl Into<String>, url: &str) -> Result<Self, ObjectError> {
        let parsed = parse_remote_url(url)?;
        Ok(Self {
            name: name.into(),
            resolved: String::new(),
            fetch_url: Some(parsed.clone()),
            push_url: Some(parsed),
        })
    }

    /// Replace the push address with a separately configured one.
    ///
    /// An unparseable push address clears `push_url`.
    pub fn with_push_url(mut self, url: &str) -> Self {
        self.push_url = match parse_remote_url(url) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::debug!(remote = %self.name, error = %e, "push address did not parse");
                None
            }
        };
        self
    }

    /// Attach a resolved label.
    pub fn with_resolved(mut self, resolved: impl Into<String>) -> Self {
        self.resolved = resolved.into();
        self
    }

    /// Host, owner, and repository name derived from the fetch address.
    ///
    /// Returns `None` for addresses without a host or whose path is not
    /// exactly `owner/repo`.
    ///
    /// # Example
    ///
    /// ```
    /// use gitobjects::core::remote::Remote;
    ///
    /// let remote = Remote::new("origin", "git@github.com:owner/repo.git");
    /// let slug = remote.repo_slug().unwrap();
    /// assert_eq!(slug.host, "github.com");
    /// assert_eq!(slug.owner, "owner");
    /// assert_eq!(slug.name, "repo");
    /// ```
    pub fn repo_slug(&self) -> Option<RepoSlug> {
        let url = self.fetch_url.as_ref()?;
        let host = url.host_str()?;
        let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();

        let [owner, repo] = segments.as_slice() else {
            return None;
        };
        let repo = repo.strip_suffix(".git").unwrap_or(*repo);
        if repo.is_empty() {
            return None;
        }

        Some(RepoSlug {
            host: host.to_string(),
            owner: owner.to_string(),
            name: repo.to_string(),
        })
    }
}

impl std::fmt::Display for Remote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An ordered collection of remotes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RemoteSet(Vec<Remote>);

impl RemoteSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a remote.
    pub fn push(&mut self, remote: Remote) {
        self.0.push(remote);
    }

    /// Sort for display: descending priority score, ties in input order.
    pub fn sort(&mut self) {
        self.0
            .sort_by_key(|remote| Reverse(remote_name_sort_score(&remote.name)));
    }

    /// Find a remote by exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&Remote> {
        self.0.iter().find(|remote| remote.name == name)
    }

    /// Remote names in current order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|remote| remote.name.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Remote> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Remote> for RemoteSet {
    fn from_iter<I: IntoIterator<Item = Remote>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for RemoteSet {
    type Item = Remote;
    type IntoIter = std::vec::IntoIter<Remote>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RemoteSet {
    type Item = &'a Remote;
    type IntoIter = std::slice::Iter<'a, Remote>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
