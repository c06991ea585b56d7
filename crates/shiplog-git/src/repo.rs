// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Git-backed commit source
//!
//! [`GitRepo`] wraps a `git2::Repository` and adapts it to the core's
//! [`CommitSource`] contract. Branch resolution tries the local branch
//! first and falls back to the `origin` remote-tracking branch; the result
//! is memoized per repository handle so every lookup within a run sees the
//! same commit, even if the underlying refs move.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use git2::{BranchType, Oid, Repository};
use tracing::debug;

use shiplog_core::{ChangelogError, Commit, CommitSource};

use crate::error::GitError;

/// A git repository opened for changelog generation
pub struct GitRepo {
    repo: Repository,
    resolved: RefCell<HashMap<String, String>>,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        debug!(path = %path.display(), "repository opened");
        Ok(Self {
            repo,
            resolved: RefCell::new(HashMap::new()),
        })
    }

    /// Discover and open a git repository containing the given path
    ///
    /// This walks up the directory tree to find a `.git` directory.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        debug!(path = %path.display(), "repository discovered");
        Ok(Self {
            repo,
            resolved: RefCell::new(HashMap::new()),
        })
    }

    /// Check if the repository is bare
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.repo.is_bare()
    }

    /// Get the repository path
    #[must_use]
    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    /// Get the working directory path (None for bare repos)
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Get the HEAD commit SHA
    ///
    /// # Errors
    ///
    /// Returns `GitError` if HEAD cannot be resolved.
    pub fn head_sha(&self) -> Result<String, GitError> {
        let head = self.repo.head()?;
        let oid = head.target().ok_or_else(|| GitError::ReferenceNotFound {
            reference: "HEAD".to_string(),
        })?;
        Ok(oid.to_string())
    }

    /// Resolve a branch name to a commit sha
    ///
    /// Tries the local branch first, then the `origin/<name>`
    /// remote-tracking branch. The first successful resolution is recorded
    /// in the handle's resolution cache; later lookups of the same name
    /// return the recorded sha without touching the refs again.
    ///
    /// # Errors
    ///
    /// Returns `GitError::ReferenceNotFound` when neither branch exists.
    pub fn resolve_branch(&self, name: &str) -> Result<String, GitError> {
        if let Some(sha) = self.resolved.borrow().get(name) {
            return Ok(sha.clone());
        }

        let oid = self
            .local_branch_target(name)
            .or_else(|| self.remote_branch_target(name))
            .ok_or_else(|| GitError::ReferenceNotFound {
                reference: name.to_string(),
            })?;

        let sha = oid.to_string();
        debug!(reference = name, %sha, "branch resolved");
        self.resolved
            .borrow_mut()
            .insert(name.to_string(), sha.clone());
        Ok(sha)
    }

    fn local_branch_target(&self, name: &str) -> Option<Oid> {
        self.repo
            .find_branch(name, BranchType::Local)
            .ok()
            .and_then(|branch| branch.get().target())
    }

    fn remote_branch_target(&self, name: &str) -> Option<Oid> {
        self.repo
            .find_branch(&format!("origin/{name}"), BranchType::Remote)
            .ok()
            .and_then(|branch| branch.get().target())
    }

    /// Load a commit by sha
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommitNotFound` for ids unknown to the repository.
    pub fn get_commit(&self, sha: &str) -> Result<Commit, GitError> {
        let git_commit = self.find_git_commit(sha)?;

        let time = git_commit.time();
        let timestamp = Utc
            .timestamp_opt(time.seconds(), 0)
            .single()
            .unwrap_or_else(Utc::now);

        Ok(extract_commit(&git_commit, timestamp))
    }

    /// Parent shas of a commit, without loading the full commit data
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommitNotFound` for ids unknown to the repository.
    pub fn parent_shas(&self, sha: &str) -> Result<Vec<String>, GitError> {
        let git_commit = self.find_git_commit(sha)?;
        Ok(git_commit.parent_ids().map(|id| id.to_string()).collect())
    }

    fn find_git_commit(&self, sha: &str) -> Result<git2::Commit<'_>, GitError> {
        let oid = Oid::from_str(sha).map_err(|_| GitError::CommitNotFound {
            sha: sha.to_string(),
        })?;
        self.repo
            .find_commit(oid)
            .map_err(|_| GitError::CommitNotFound {
                sha: sha.to_string(),
            })
    }
}

/// Extract commit metadata from a git2 commit
fn extract_commit(git_commit: &git2::Commit<'_>, timestamp: DateTime<Utc>) -> Commit {
    Commit {
        sha: git_commit.id().to_string(),
        message: git_commit.message().unwrap_or("").to_string(),
        author: git_commit.author().name().unwrap_or("Unknown").to_string(),
        author_email: git_commit.author().email().unwrap_or("").to_string(),
        timestamp,
        parents: git_commit.parent_ids().map(|id| id.to_string()).collect(),
    }
}

impl CommitSource for GitRepo {
    fn resolve_reference(&self, name: &str) -> Result<String, ChangelogError> {
        Ok(self.resolve_branch(name)?)
    }

    fn commit(&self, sha: &str) -> Result<Commit, ChangelogError> {
        Ok(self.get_commit(sha)?)
    }

    fn parents(&self, sha: &str) -> Result<Vec<String>, ChangelogError> {
        Ok(self.parent_shas(sha)?)
    }
}
