//! Integration tests for the Git interface.
//!
//! These tests use real git repositories created via tempfile to verify
//! that the Git interface reads remotes, refs, commits, and branch
//! configuration correctly.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use gitobjects::git::{Git, GitError};

/// Test fixture that creates a real git repository.
struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new test repository with an initial commit on main.
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        run_git(dir.path(), &["init", "-b", "main"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test User"]);

        std::fs::write(dir.path().join("README.md"), "# Test Repo\n").unwrap();
        run_git(dir.path(), &["add", "README.md"]);
        run_git(dir.path(), &["commit", "-m", "Initial commit"]);

        Self { dir }
    }

    /// Get the path to the repository.
    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Open a Git interface to this repository.
    fn git(&self) -> Git {
        Git::open(self.path()).expect("failed to open test repo")
    }

    /// Run git in the repository.
    fn run(&self, args: &[&str]) {
        run_git(self.path(), args);
    }

    /// Create a file and commit it.
    fn commit_file(&self, path: &str, content: &str, message: &str) {
        std::fs::write(self.path().join(path), content).unwrap();
        self.run(&["add", path]);
        self.run(&["commit", "-m", message]);
    }

    /// Get HEAD OID using git directly.
    fn head_oid_raw(&self) -> String {
        let output = Command::new("git")
            .args(["rev-parse", "HEAD"])
            .current_dir(self.path())
            .output()
            .expect("git rev-parse failed");
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }
}

/// Run a git command in the given directory.
fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

// =============================================================================
// Repository Opening
// =============================================================================

#[test]
fn open_from_subdirectory() {
    let repo = TestRepo::new();
    let subdir = repo.path().join("subdir");
    std::fs::create_dir(&subdir).unwrap();

    assert!(Git::open(&subdir).is_ok());
}

#[test]
fn open_non_repository_fails() {
    let dir = TempDir::new().unwrap();
    let git = Git::open(dir.path());
    assert!(matches!(git, Err(GitError::NotARepo { .. })));
}

// =============================================================================
// Remotes
// =============================================================================

#[test]
fn no_remotes() {
    let repo = TestRepo::new();
    let remotes = repo.git().remotes("resolved").unwrap();
    assert!(remotes.is_empty());
}

#[test]
fn remotes_in_display_order() {
    let repo = TestRepo::new();
    for name in ["foo", "origin", "upstream", "bar", "github"] {
        let url = format!("https://example.com/{name}/repo.git");
        repo.run(&["remote", "add", name, &url]);
    }

    let remotes = repo.git().remotes("resolved").unwrap();
    let names = remotes.names();

    assert_eq!(&names[..3], &["upstream", "github", "origin"]);

    let mut tail = names[3..].to_vec();
    tail.sort();
    assert_eq!(tail, vec!["bar", "foo"]);
}

#[test]
fn fetch_and_push_share_address_without_pushurl() {
    let repo = TestRepo::new();
    repo.run(&["remote", "add", "origin", "git@github.com:me/project.git"]);

    let remotes = repo.git().remotes("resolved").unwrap();
    let origin = remotes.find_by_name("origin").unwrap();

    assert_eq!(origin.fetch_url, origin.push_url);
    assert_eq!(
        origin.fetch_url.as_ref().unwrap().as_str(),
        "ssh://git@github.com/me/project.git"
    );
    assert_eq!(origin.repo_slug().unwrap().to_string(), "github.com/me/project");
}

#[test]
fn pushurl_overrides_push_address() {
    let repo = TestRepo::new();
    repo.run(&["remote", "add", "origin", "https://github.com/org/project.git"]);
    repo.run(&[
        "remote",
        "set-url",
        "--push",
        "origin",
        "git@github.com:me/project.git",
    ]);

    let remotes = repo.git().remotes("resolved").unwrap();
    let origin = remotes.find_by_name("origin").unwrap();

    assert_eq!(
        origin.fetch_url.as_ref().unwrap().as_str(),
        "https://github.com/org/project.git"
    );
    assert_eq!(
        origin.push_url.as_ref().unwrap().as_str(),
        "ssh://git@github.com/me/project.git"
    );
}

#[test]
fn resolved_label_read_from_config() {
    let repo = TestRepo::new();
    repo.run(&["remote", "add", "origin", "https://github.com/org/project.git"]);
    repo.run(&["config", "remote.origin.resolved", "base"]);
    repo.run(&["config", "remote.origin.gh-resolved", "other"]);

    let git = repo.git();

    let default_key = git.remotes("resolved").unwrap();
    assert_eq!(default_key.find_by_name("origin").unwrap().resolved, "base");

    let custom_key = git.remotes("gh-resolved").unwrap();
    assert_eq!(custom_key.find_by_name("origin").unwrap().resolved, "other");
}

#[test]
fn unparseable_remote_address_keeps_name() {
    let repo = TestRepo::new();
    repo.run(&["remote", "add", "weird", "relative/path"]);

    let remotes = repo.git().remotes("resolved").unwrap();
    let weird = remotes.find_by_name("weird").unwrap();

    assert!(weird.fetch_url.is_none());
    assert!(weird.push_url.is_none());
}

// =============================================================================
// Branch Configuration
// =============================================================================

#[test]
fn branch_config_unset() {
    let repo = TestRepo::new();
    let config = repo.git().branch_config("main").unwrap();

    assert!(config.remote_name.is_none());
    assert!(config.remote_url.is_none());
    assert!(config.merge_ref.is_none());
    assert!(config.merge_base.is_none());
    assert!(config.tracking_ref().is_none());
}

#[test]
fn branch_config_with_named_remote() {
    let repo = TestRepo::new();
    repo.run(&["config", "branch.main.remote", "upstream"]);
    repo.run(&["config", "branch.main.merge", "refs/heads/main"]);
    repo.run(&["config", "branch.main.merge-base", "develop"]);

    let config = repo.git().branch_config("main").unwrap();

    assert_eq!(config.remote_name.as_deref(), Some("upstream"));
    assert_eq!(config.merge_ref.as_deref(), Some("refs/heads/main"));
    assert_eq!(config.merge_base.as_deref(), Some("develop"));
    assert_eq!(
        config.tracking_ref().unwrap().to_string(),
        "refs/remotes/upstream/main"
    );
}

#[test]
fn branch_config_with_url_remote() {
    let repo = TestRepo::new();
    repo.run(&[
        "config",
        "branch.main.remote",
        "https://github.com/org/project.git",
    ]);

    let config = repo.git().branch_config("main").unwrap();

    assert!(config.remote_name.is_none());
    assert_eq!(
        config.remote_url.unwrap().as_str(),
        "https://github.com/org/project.git"
    );
}

#[test]
fn branch_config_with_local_remote() {
    let repo = TestRepo::new();
    repo.run(&["config", "branch.main.remote", "."]);

    let config = repo.git().branch_config("main").unwrap();

    assert!(config.remote_name.is_none());
    assert!(config.remote_url.is_none());
}

#[test]
fn current_branch_is_main() {
    let repo = TestRepo::new();
    assert_eq!(repo.git().current_branch().unwrap().as_deref(), Some("main"));
}

#[test]
fn current_branch_detached() {
    let repo = TestRepo::new();
    let head = repo.head_oid_raw();
    repo.run(&["checkout", "--detach", &head]);

    assert_eq!(repo.git().current_branch().unwrap(), None);
}

// =============================================================================
// Refs
// =============================================================================

#[test]
fn resolve_branch_ref() {
    let repo = TestRepo::new();
    let r = repo.git().resolve_ref("refs/heads/main").unwrap();

    assert_eq!(r.name, "refs/heads/main");
    assert_eq!(r.hash, repo.head_oid_raw());
}

#[test]
fn resolve_missing_ref() {
    let repo = TestRepo::new();
    let result = repo.git().resolve_ref("refs/heads/nope");
    assert!(matches!(result, Err(GitError::RefNotFound { .. })));
}

#[test]
fn show_refs_skips_missing() {
    let repo = TestRepo::new();
    repo.run(&["branch", "feature"]);

    let refs = repo
        .git()
        .show_refs(&["refs/heads/main", "refs/heads/nope", "refs/heads/feature"])
        .unwrap();

    let names: Vec<_> = refs.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["refs/heads/main", "refs/heads/feature"]);
}

#[test]
fn show_refs_skips_short_missing_name() {
    let repo = TestRepo::new();

    let refs = repo.git().show_refs(&["refs/heads/main", "nope"]).unwrap();

    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].name, "refs/heads/main");
}

#[test]
fn tracking_refs_skip_symbolic_head() {
    let repo = TestRepo::new();
    repo.run(&["update-ref", "refs/remotes/origin/main", "HEAD"]);
    repo.run(&["update-ref", "refs/remotes/origin/feature/x", "HEAD"]);
    repo.run(&["update-ref", "refs/remotes/upstream/main", "HEAD"]);
    repo.run(&[
        "symbolic-ref",
        "refs/remotes/origin/HEAD",
        "refs/remotes/origin/main",
    ]);

    let refs = repo.git().tracking_refs().unwrap();
    let rendered: Vec<String> = refs.iter().map(|t| t.to_string()).collect();

    assert_eq!(
        rendered,
        vec![
            "refs/remotes/origin/feature/x",
            "refs/remotes/origin/main",
            "refs/remotes/upstream/main",
        ]
    );
    assert_eq!(refs[0].branch_name(), "feature/x");
}

// =============================================================================
// Commits
// =============================================================================

#[test]
fn commits_between_branches() {
    let repo = TestRepo::new();
    repo.run(&["checkout", "-b", "feature"]);
    repo.commit_file("a.txt", "a", "Add a\n\nFirst feature file.");
    repo.commit_file("b.txt", "b", "Add b");

    let commits = repo.git().commits("main", "feature").unwrap();

    assert_eq!(commits.len(), 2);
    assert_eq!(commits[0].title, "Add b");
    assert_eq!(commits[0].sha, repo.head_oid_raw());
    assert_eq!(commits[1].title, "Add a");
    assert_eq!(commits[1].body, "First feature file.");
}

#[test]
fn empty_range_is_an_error() {
    let repo = TestRepo::new();
    repo.run(&["branch", "feature"]);

    let result = repo.git().commits("feature", "main");
    assert!(matches!(result, Err(GitError::NoCommits { .. })));
}

#[test]
fn unknown_revision_is_an_error() {
    let repo = TestRepo::new();
    let result = repo.git().commits("does-not-exist", "main");
    assert!(matches!(result, Err(GitError::RevisionNotFound { .. })));
}

#[test]
fn last_commit_is_head() {
    let repo = TestRepo::new();
    repo.commit_file("c.txt", "c", "Latest change");

    let commit = repo.git().last_commit().unwrap();
    assert_eq!(commit.sha, repo.head_oid_raw());
    assert_eq!(commit.title, "Latest change");
    assert_eq!(commit.body, "");
}

#[test]
fn tracking_refs_skip_single_segment_ref() {
    let repo = TestRepo::new();
    repo.run(&["update-ref", "refs/remotes/origin/main", "HEAD"]);
    repo.run(&["update-ref", "refs/remotes/stray", "HEAD"]);

    let refs = repo.git().tracking_refs().unwrap();

    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].to_string(), "refs/remotes/origin/main");
}

#[test]
fn non_utf8_message_is_decoded_lossily() {
    let repo = TestRepo::new();
    std::fs::write(repo.path().join("l.txt"), "latin").unwrap();
    repo.run(&["add", "l.txt"]);

    let message_file = repo.path().join(".git").join("LATIN1_MSG");
    std::fs::write(&message_file, b"Caf\xe9 fix\n\nna\xefve body\n").unwrap();
    repo.run(&[
        "-c",
        "i18n.commitEncoding=ISO-8859-1",
        "commit",
        "-F",
        message_file.to_str().unwrap(),
    ]);

    let commit = repo.git().last_commit().unwrap();
    assert_eq!(commit.title, "Caf\u{FFFD} fix");
    assert_eq!(commit.body, "na\u{FFFD}ve body");

    let commits = repo.git().commits("HEAD~1", "HEAD").unwrap();
    assert_eq!(commits[0].title, "Caf\u{FFFD} fix");
}
