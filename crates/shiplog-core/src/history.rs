// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Ancestor closures and ordered history walks
//!
//! Two traversals over a [`CommitSource`]: [`ancestor_set`] collects every
//! commit reachable from a starting point, and [`HistoryWalk`] yields those
//! commits lazily in depth-first post-order, so a merge commit appears only
//! after the history it merged.

use std::collections::HashSet;

use tracing::debug;

use crate::commit::Commit;
use crate::error::ChangelogError;
use crate::source::CommitSource;

/// Compute the ancestor closure of `start`, inclusive
///
/// Every commit reachable by following parent links transitively is
/// visited exactly once, so re-convergent merge paths cost nothing extra.
///
/// # Errors
///
/// Returns the collaborator's failure unchanged when a commit on the walk
/// cannot be loaded.
pub fn ancestor_set<S: CommitSource>(
    source: &S,
    start: &str,
) -> Result<HashSet<String>, ChangelogError> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut pending = vec![start.to_string()];

    while let Some(sha) = pending.pop() {
        if !seen.insert(sha.clone()) {
            continue;
        }
        for parent in source.parents(&sha)? {
            if !seen.contains(&parent) {
                pending.push(parent);
            }
        }
    }

    debug!(start, commits = seen.len(), "ancestor set built");
    Ok(seen)
}

enum Frame {
    Visit(String),
    Emit(Box<Commit>),
}

/// Lazy depth-first post-order walk over a commit graph
///
/// Each commit is yielded only after its parent subtrees have been fully
/// explored, first parent's subtree first, so history reads oldest to
/// newest and a merge commit follows the commits it merged. A commit is
/// never yielded twice within one walk; the seen-set lives in the walk
/// value, so constructing a new walk always starts from fresh state.
///
/// A collaborator failure is yielded as the final `Err` item, after which
/// the walk is exhausted.
pub struct HistoryWalk<'a, S: CommitSource> {
    source: &'a S,
    stack: Vec<Frame>,
    seen: HashSet<String>,
}

impl<'a, S: CommitSource> HistoryWalk<'a, S> {
    /// Start a walk at `start`
    pub fn new(source: &'a S, start: &str) -> Self {
        Self {
            source,
            stack: vec![Frame::Visit(start.to_string())],
            seen: HashSet::new(),
        }
    }
}

impl<S: CommitSource> Iterator for HistoryWalk<'_, S> {
    type Item = Result<Commit, ChangelogError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Emit(commit) => return Some(Ok(*commit)),
                Frame::Visit(sha) => {
                    if !self.seen.insert(sha.clone()) {
                        continue;
                    }
                    let commit = match self.source.commit(&sha) {
                        Ok(commit) => commit,
                        Err(err) => {
                            self.stack.clear();
                            return Some(Err(err));
                        }
                    };
                    let parents = commit.parents.clone();
                    self.stack.push(Frame::Emit(Box::new(commit)));
                    // Parents are pushed in reverse so the first parent's
                    // subtree is explored first.
                    for parent in parents.iter().rev() {
                        if !self.seen.contains(parent) {
                            self.stack.push(Frame::Visit(parent.clone()));
                        }
                    }
                }
            }
        }
        None
    }
}
