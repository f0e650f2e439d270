//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module is the **single doorway** to the repository. Every read of
//! remotes, refs, commits, and branch configuration flows through [`Git`],
//! which returns the value types from [`crate::core`] and normalizes git2
//! failures into [`GitError`].
//!
//! # Error Handling
//!
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::RefNotFound`]: Requested ref does not exist
//! - [`GitError::RevisionNotFound`]: A revision expression did not resolve
//! - [`GitError::NoCommits`]: A commit range is empty
//!
//! # Example
//!
//! ```ignore
//! use gitobjects::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! for remote in &git.remotes("resolved")? {
//!     println!("{remote}");
//! }
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::refs::{parse_tracking_ref, Ref, TrackingRef};
use crate::core::remote::{parse_remote_url, Remote, RemoteSet};
use crate::core::types::{BranchConfig, Commit, ObjectError};

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Requested ref does not exist.
    #[error("ref not found: {refname}")]
    RefNotFound {
        /// The ref that was not found
        refname: String,
    },

    /// A revision expression could not be resolved to a commit.
    #[error("revision not found: {revision}")]
    RevisionNotFound {
        /// The revision that was not found
        revision: String,
    },

    /// No commits exist between two revisions.
    #[error("could not find any commits between {base} and {head}")]
    NoCommits {
        /// Excluded side of the range
        base: String,
        /// Included side of the range
        head: String,
    },

    /// A value read from the repository did not parse.
    #[error(transparent)]
    Object(#[from] ObjectError),

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    /// Create a GitError from a git2::Error with the name being looked up.
    fn from_git2(err: git2::Error, context: &str) -> Self {
        match err.code() {
            git2::ErrorCode::NotFound if context.starts_with("refs/") => GitError::RefNotFound {
                refname: context.to_string(),
            },
            git2::ErrorCode::NotFound | git2::ErrorCode::InvalidSpec => {
                GitError::RevisionNotFound {
                    revision: context.to_string(),
                }
            }
            _ => GitError::Internal {
                message: format!("{}: {}", context, err.message()),
            },
        }
    }
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

/// How a `branch.<name>.remote` value should be interpreted.
#[derive(Debug, PartialEq, Eq)]
enum BranchRemote {
    Name(String),
    Url(url::Url),
    Ignored,
}

/// Classify a `branch.<name>.remote` value.
///
/// Values containing `:` are addresses, values starting with `.` or `/` are
/// local paths, anything else names a configured remote.
fn classify_branch_remote(value: &str) -> BranchRemote {
    if value.contains(':') {
        match parse_remote_url(value) {
            Ok(url) => BranchRemote::Url(url),
            Err(e) => {
                tracing::debug!(value, error = %e, "branch remote address did not parse");
                BranchRemote::Ignored
            }
        }
    } else if value.starts_with('.') || value.starts_with('/') {
        BranchRemote::Ignored
    } else {
        BranchRemote::Name(value.to_string())
    }
}

/// The Git interface.
///
/// All operations are reads; nothing here writes refs, objects, or config.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    // =========================================================================
    // Repository Opening
    // =========================================================================

    /// Open a repository at the given path.
    ///
    /// Uses `git2::Repository::discover`, so `path` can be any directory
    /// within the repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        tracing::debug!(git_dir = %repo.path().display(), "opened repository");
        Ok(Self { repo })
    }

    /// Get the .git directory path.
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    // =========================================================================
    // Config
    // =========================================================================

    /// Read a string from git config, returning `None` when unset.
    fn config_string(&self, key: &str) -> Result<Option<String>, GitError> {
        let config = self.repo.config()?;
        match config.get_string(key) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(GitError::from_git2(e, key)),
        }
    }

    // =========================================================================
    // Remotes
    // =========================================================================

    /// List all configured remotes in display order.
    ///
    /// Push addresses come from `remote.<name>.pushurl` when set; the
    /// resolved label is read from `remote.<name>.<resolved_key>`.
    pub fn remotes(&self, resolved_key: &str) -> Result<RemoteSet, GitError> {
        let names = self.repo.remotes()?;
        let mut remotes = RemoteSet::new();

        for name in names.iter().flatten() {
            let found = self
                .repo
                .find_remote(name)
                .map_err(|e| GitError::from_git2(e, name))?;

            let mut remote = Remote::new(name, found.url().unwrap_or_default());
            if let Some(push) = found.pushurl() {
                remote = remote.with_push_url(push);
            }
            if let Some(resolved) = self.config_string(&format!("remote.{name}.{resolved_key}"))? {
                remote = remote.with_resolved(resolved);
            }

            tracing::trace!(remote = %remote, fetch = ?remote.fetch_url, "found remote");
            remotes.push(remote);
        }

        remotes.sort();
        Ok(remotes)
    }

    // =========================================================================
    // Branch Configuration
    // =========================================================================

    /// Read the `branch.<name>.*` configuration for a branch.
    ///
    /// Missing keys leave the corresponding fields unset.
    pub fn branch_config(&self, branch: &str) -> Result<BranchConfig, GitError> {
        let mut config = BranchConfig {
            merge_ref: self.config_string(&format!("branch.{branch}.merge"))?,
            merge_base: self.config_string(&format!("branch.{branch}.merge-base"))?,
            ..Default::default()
        };

        if let Some(value) = self.config_string(&format!("branch.{branch}.remote"))? {
            match classify_branch_remote(&value) {
                BranchRemote::Name(name) => config.remote_name = Some(name),
                BranchRemote::Url(url) => config.remote_url = Some(url),
                BranchRemote::Ignored => {}
            }
        }

        Ok(config)
    }

    /// Get the current branch name, if on a branch.
    ///
    /// Returns `None` if HEAD is detached or unborn.
    pub fn current_branch(&self) -> Result<Option<String>, GitError> {
        let head = match self.repo.head() {
            Ok(h) => h,
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if head.is_branch() {
            return Ok(head.shorthand().map(String::from));
        }

        Ok(None)
    }

    // =========================================================================
    // Refs
    // =========================================================================

    /// Resolve a full ref name to the commit it points at.
    ///
    /// # Errors
    ///
    /// - [`GitError::RefNotFound`] if the ref doesn't exist
    pub fn resolve_ref(&self, refname: &str) -> Result<Ref, GitError> {
        let reference = self
            .repo
            .find_reference(refname)
            .map_err(|e| GitError::from_git2(e, refname))?;

        let commit = reference
            .peel_to_commit()
            .map_err(|e| GitError::from_git2(e, refname))?;

        Ok(Ref {
            hash: commit.id().to_string(),
            name: refname.to_string(),
        })
    }

    /// Resolve several refs, skipping any that do not exist.
    pub fn show_refs<S: AsRef<str>>(&self, refnames: &[S]) -> Result<Vec<Ref>, GitError> {
        let mut refs = Vec::with_capacity(refnames.len());
        for refname in refnames {
            match self.resolve_ref(refname.as_ref()) {
                Ok(r) => refs.push(r),
                Err(GitError::RefNotFound { refname })
                | Err(GitError::RevisionNotFound { revision: refname }) => {
                    tracing::debug!(%refname, "skipping missing ref");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(refs)
    }

    /// List every remote-tracking ref, excluding symbolic `HEAD` entries.
    ///
    /// Refs without both a remote and a branch segment (e.g.
    /// `refs/remotes/stray`) are skipped.
    pub fn tracking_refs(&self) -> Result<Vec<TrackingRef>, GitError> {
        let mut refs = Vec::new();

        for reference in self.repo.references_glob("refs/remotes/*")? {
            let reference = reference?;
            if reference.kind() == Some(git2::ReferenceType::Symbolic) {
                continue;
            }
            let Some(name) = reference.name() else {
                continue;
            };
            match parse_tracking_ref(name) {
                Ok(tracking) => refs.push(tracking),
                Err(e) => tracing::debug!(%name, error = %e, "skipping tracking ref"),
            }
        }

        refs.sort_by(|a, b| a.to_string().cmp(&b.to_string()));
        Ok(refs)
    }

    // =========================================================================
    // Commits
    // =========================================================================

    fn peel_commit(&self, revision: &str) -> Result<git2::Commit<'_>, GitError> {
        self.repo
            .revparse_single(revision)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| GitError::from_git2(e, revision))
    }

    /// List commits reachable from `head` but not from `base`, newest first.
    ///
    /// # Errors
    ///
    /// - [`GitError::RevisionNotFound`] if either revision doesn't resolve
    /// - [`GitError::NoCommits`] if the range is empty
    pub fn commits(&self, base: &str, head: &str) -> Result<Vec<Commit>, GitError> {
        let base_commit = self.peel_commit(base)?;
        let head_commit = self.peel_commit(head)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)?;
        revwalk.push(head_commit.id())?;
        revwalk.hide(base_commit.id())?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            commits.push(Commit::from_message(
                commit.id().to_string(),
                &String::from_utf8_lossy(commit.message_bytes()),
            ));
        }

        if commits.is_empty() {
            return Err(GitError::NoCommits {
                base: base.to_string(),
                head: head.to_string(),
            });
        }

        tracing::debug!(base, head, count = commits.len(), "listed commits");
        Ok(commits)
    }

    /// The commit at HEAD.
    pub fn last_commit(&self) -> Result<Commit, GitError> {
        let commit = self.peel_commit("HEAD")?;
        Ok(Commit::from_message(
            commit.id().to_string(),
            &String::from_utf8_lossy(commit.message_bytes()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod classify_branch_remote {
        use super::*;

        #[test]
        fn plain_name() {
            assert_eq!(
                classify_branch_remote("origin"),
                BranchRemote::Name("origin".into())
            );
        }

        #[test]
        fn url_value() {
            let BranchRemote::Url(url) = classify_branch_remote("https://github.com/o/r.git")
            else {
                panic!("expected url");
            };
            assert_eq!(url.host_str(), Some("github.com"));
        }

        #[test]
        fn scp_like_value() {
            assert!(matches!(
                classify_branch_remote("git@github.com:o/r.git"),
                BranchRemote::Url(_)
            ));
        }

        #[test]
        fn local_paths_ignored() {
            assert_eq!(classify_branch_remote("."), BranchRemote::Ignored);
            assert_eq!(classify_branch_remote("/srv/git/r"), BranchRemote::Ignored);
        }
    }

    mod error_mapping {
        use super::*;

        #[test]
        fn not_found_ref() {
            let err = git2::Error::new(
                git2::ErrorCode::NotFound,
                git2::ErrorClass::Reference,
                "missing",
            );
            assert!(matches!(
                GitError::from_git2(err, "refs/heads/nope"),
                GitError::RefNotFound { .. }
            ));
        }

        #[test]
        fn not_found_revision() {
            let err = git2::Error::new(
                git2::ErrorCode::NotFound,
                git2::ErrorClass::Reference,
                "missing",
            );
            assert!(matches!(
                GitError::from_git2(err, "nope~1"),
                GitError::RevisionNotFound { .. }
            ));
        }
    }
}
