//! In-memory commit graph
//!
//! [`MemorySource`] implements [`CommitSource`] over a hash map and is the
//! test double for everything in this crate: unit tests, integration tests,
//! benchmarks, and the crate-level example all build their graphs with it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::commit::Commit;
use crate::error::ChangelogError;
use crate::source::CommitSource;

/// A commit graph held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    commits: HashMap<String, Commit>,
    refs: HashMap<String, String>,
    inserted: usize,
}

impl MemorySource {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully specified commit, keyed by its sha
    pub fn insert(&mut self, commit: Commit) {
        self.inserted += 1;
        self.commits.insert(commit.sha.clone(), commit);
    }

    /// Add a commit with fabricated author metadata
    ///
    /// Timestamps increase with insertion order so walks over the graph are
    /// deterministic.
    pub fn add(&mut self, sha: &str, message: &str, parents: &[&str]) {
        let seconds = 1_700_000_000 + self.inserted as i64 * 60;
        let timestamp = DateTime::from_timestamp(seconds, 0).unwrap_or_else(Utc::now);
        self.insert(Commit {
            sha: sha.to_string(),
            message: message.to_string(),
            author: "Dev".to_string(),
            author_email: "dev@example.com".to_string(),
            timestamp,
            parents: parents.iter().map(|p| (*p).to_string()).collect(),
        });
    }

    /// Bind a reference name to a commit sha
    pub fn insert_ref(&mut self, name: &str, sha: &str) {
        self.refs.insert(name.to_string(), sha.to_string());
    }

    /// Number of commits in the graph
    #[must_use]
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Whether the graph holds no commits
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

impl CommitSource for MemorySource {
    fn resolve_reference(&self, name: &str) -> Result<String, ChangelogError> {
        self.refs
            .get(name)
            .cloned()
            .ok_or_else(|| ChangelogError::ReferenceNotFound {
                reference: name.to_string(),
            })
    }

    fn commit(&self, sha: &str) -> Result<Commit, ChangelogError> {
        self.commits
            .get(sha)
            .cloned()
            .ok_or_else(|| ChangelogError::CommitNotFound {
                sha: sha.to_string(),
            })
    }

    fn parents(&self, sha: &str) -> Result<Vec<String>, ChangelogError> {
        self.commits
            .get(sha)
            .map(|c| c.parents.clone())
            .ok_or_else(|| ChangelogError::CommitNotFound {
                sha: sha.to_string(),
            })
    }
}
