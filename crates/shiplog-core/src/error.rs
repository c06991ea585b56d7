// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for shiplog-core

use thiserror::Error;

/// Errors surfaced while assembling a changelog
///
/// The core performs no local recovery: any of these aborts the whole
/// `generate_changelog` call and propagates to the caller unchanged.
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// A branch name resolved neither locally nor via remote tracking
    #[error("reference not found: {reference}")]
    ReferenceNotFound {
        /// The reference name that could not be resolved
        reference: String,
    },

    /// A commit id is unknown to the backing store
    #[error("commit not found: {sha}")]
    CommitNotFound {
        /// The commit id that could not be loaded
        sha: String,
    },

    /// The commit graph could not be traversed
    #[error("history traversal failed: {detail}")]
    Traversal {
        /// Description of the underlying repository failure
        detail: String,
    },
}
