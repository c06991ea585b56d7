// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit graph access abstraction
//!
//! The core never talks to a repository directly. Resolving a branch name
//! to a commit id and loading commits with their parent links both go
//! through [`CommitSource`], which doubles as the seam for dependency
//! injection in tests (see [`crate::memory::MemorySource`]).

use crate::commit::Commit;
use crate::error::ChangelogError;

/// Read-only access to a commit graph
///
/// Implementations are expected to be synchronous and fallible; the core
/// treats every call as potentially slow and propagates failures unchanged.
pub trait CommitSource {
    /// Resolve a branch name to a commit sha
    ///
    /// # Errors
    ///
    /// Returns [`ChangelogError::ReferenceNotFound`] when no branch by that
    /// name exists, locally or remote-tracking.
    fn resolve_reference(&self, name: &str) -> Result<String, ChangelogError>;

    /// Load the commit identified by `sha`
    ///
    /// # Errors
    ///
    /// Returns [`ChangelogError::CommitNotFound`] for ids unknown to the
    /// backing store.
    fn commit(&self, sha: &str) -> Result<Commit, ChangelogError>;

    /// Parent shas of `sha`, in recorded order
    ///
    /// The default goes through [`CommitSource::commit`]; implementations
    /// with a cheaper parent lookup should override it.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CommitSource::commit`].
    fn parents(&self, sha: &str) -> Result<Vec<String>, ChangelogError> {
        Ok(self.commit(sha)?.parents)
    }
}
