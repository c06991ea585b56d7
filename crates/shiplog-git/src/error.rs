// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for shiplog-git

use shiplog_core::ChangelogError;
use thiserror::Error;

/// Errors that can occur during git operations
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Repository not found at the specified path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// A branch name resolved neither locally nor via origin remote tracking
    #[error("Reference not found: {reference}")]
    ReferenceNotFound {
        /// The branch name that could not be resolved
        reference: String,
    },

    /// A commit id is unknown to the repository
    #[error("Commit not found: {sha}")]
    CommitNotFound {
        /// The commit id that could not be loaded
        sha: String,
    },
}

impl From<GitError> for ChangelogError {
    fn from(err: GitError) -> Self {
        match err {
            GitError::ReferenceNotFound { reference } => {
                ChangelogError::ReferenceNotFound { reference }
            }
            GitError::CommitNotFound { sha } => ChangelogError::CommitNotFound { sha },
            other => ChangelogError::Traversal {
                detail: other.to_string(),
            },
        }
    }
}
