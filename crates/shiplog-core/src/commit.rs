//! Commit model
//!
//! A [`Commit`] is a node in the history graph: an id, an ordered list of
//! parent ids, and the commit message whose first line drives change
//! classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single commit as loaded from a [`crate::source::CommitSource`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit SHA (40 hex characters)
    pub sha: String,
    /// Full commit message; the first line is the subject
    pub message: String,
    /// Author name
    pub author: String,
    /// Author email
    pub author_email: String,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
    /// Parent commit SHAs, first parent first
    ///
    /// Zero parents is a root commit, one a normal commit, two or more a
    /// merge commit.
    pub parents: Vec<String>,
}

impl Commit {
    /// Validate that a SHA is a valid 40-character hex string
    #[must_use]
    pub fn is_valid_sha(sha: &str) -> bool {
        sha.len() == 40 && sha.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Get the short SHA (first 7 characters)
    #[must_use]
    pub fn short_sha(&self) -> &str {
        &self.sha[..7.min(self.sha.len())]
    }

    /// Check if this is a merge commit (two or more parents)
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// Check if this is a root commit (no parents)
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// The subject line: the message up to the first line break
    ///
    /// A message without a line break is its own subject.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}
