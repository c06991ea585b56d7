// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Change classification
//!
//! Maps a commit to its changelog representation. Non-merge commits always
//! become direct entries; merge commits only produce an entry when their
//! subject follows the pull-request merge grammar, and are dropped silently
//! otherwise (bot merges, plain `Merge branch ...` subjects).

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::commit::Commit;
use crate::record::ChangeRecord;

/// Grammar of a recognizable merge subject:
/// `Merge pull request #<number> from <owner>/<kind>/<description>`.
/// The owner and kind cannot contain slashes; the description keeps the
/// rest of the line, slashes included. The scan is unanchored.
const MERGE_SUBJECT_PATTERN: &str = r"Merge pull request #(\d+) from [^/]+/([^/]+)/(.+)";

static MERGE_SUBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MERGE_SUBJECT_PATTERN).expect("merge subject pattern compiles"));

/// Classify a commit into a change record
///
/// Pure function of its input: same commit, same outcome. `None` means the
/// commit contributes no changelog line, which is a normal outcome for
/// merge commits with unrecognized subjects, not an error.
#[must_use]
pub fn classify(commit: &Commit) -> Option<ChangeRecord> {
    let subject = commit.subject();

    if !commit.is_merge() {
        return Some(ChangeRecord::Direct {
            subject: subject.to_string(),
        });
    }

    match MERGE_SUBJECT.captures(subject) {
        Some(captures) => Some(ChangeRecord::Named {
            kind: captures[2].to_string(),
            description: captures[3].to_string(),
            request_number: captures[1].to_string(),
        }),
        None => {
            trace!(
                sha = commit.short_sha(),
                subject, "merge subject did not match the pull request grammar"
            );
            None
        }
    }
}
