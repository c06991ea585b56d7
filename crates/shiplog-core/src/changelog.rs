// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Changelog assembly
//!
//! Orchestrates the core: build the baseline's ancestor closure, walk the
//! target history in post-order, drop everything already released, and
//! classify the survivors. The baseline set completes before the target
//! walk begins; records come back in walk order.

use tracing::debug;

use crate::classify::classify;
use crate::error::ChangelogError;
use crate::history::{HistoryWalk, ancestor_set};
use crate::record::ChangeRecord;
use crate::source::CommitSource;

/// Generate a changelog from two resolved commit ids
///
/// Complete-or-nothing: a mid-walk failure aborts the call without
/// returning any partial record list.
///
/// # Errors
///
/// Propagates collaborator failures ([`ChangelogError::CommitNotFound`],
/// [`ChangelogError::Traversal`]) unchanged.
pub fn generate_changelog<S: CommitSource>(
    source: &S,
    baseline_sha: &str,
    target_sha: &str,
) -> Result<Vec<ChangeRecord>, ChangelogError> {
    let released = ancestor_set(source, baseline_sha)?;

    let mut records = Vec::new();
    for entry in HistoryWalk::new(source, target_sha) {
        let commit = entry?;
        if released.contains(&commit.sha) {
            continue;
        }
        if let Some(record) = classify(&commit) {
            records.push(record);
        }
    }

    debug!(
        baseline = baseline_sha,
        target = target_sha,
        records = records.len(),
        "changelog assembled"
    );
    Ok(records)
}

/// Generate a changelog from two reference names
///
/// Both names are resolved through the collaborator before any traversal
/// starts.
///
/// # Errors
///
/// [`ChangelogError::ReferenceNotFound`] when either name does not
/// resolve; otherwise as [`generate_changelog`].
pub fn changelog_from_refs<S: CommitSource>(
    source: &S,
    baseline: &str,
    target: &str,
) -> Result<Vec<ChangeRecord>, ChangelogError> {
    let baseline_sha = source.resolve_reference(baseline)?;
    let target_sha = source.resolve_reference(target)?;
    debug!(baseline, %baseline_sha, target, %target_sha, "references resolved");
    generate_changelog(source, &baseline_sha, &target_sha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySource;
    use similar_asserts::assert_eq;

    /// Baseline b2 covers {a1, b2}; the release adds a direct commit, a
    /// feature branch, and the merge of that branch.
    fn release_graph() -> MemorySource {
        let mut source = MemorySource::new();
        source.add("a1", "Initial import", &[]);
        source.add("b2", "Prepare release", &["a1"]);
        source.add("c3", "Add request tracing", &["b2"]);
        source.add("f1", "Start retry logic", &["b2"]);
        source.add("f2", "Finish retry logic", &["f1"]);
        source.add(
            "m1",
            "Merge pull request #12 from acme/feature/faster-retries",
            &["c3", "f2"],
        );
        source.insert_ref("production", "b2");
        source.insert_ref("release/next", "m1");
        source
    }

    #[test]
    fn test_generate_changelog_excludes_baseline_and_orders_by_walk() {
        let source = release_graph();
        let records = generate_changelog(&source, "b2", "m1").expect("changelog");
        assert_eq!(
            records,
            vec![
                ChangeRecord::Direct {
                    subject: "Add request tracing".to_string()
                },
                ChangeRecord::Direct {
                    subject: "Start retry logic".to_string()
                },
                ChangeRecord::Direct {
                    subject: "Finish retry logic".to_string()
                },
                ChangeRecord::Named {
                    kind: "feature".to_string(),
                    description: "faster-retries".to_string(),
                    request_number: "12".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_changelog_from_refs_resolves_both_names() {
        let source = release_graph();
        let records = changelog_from_refs(&source, "production", "release/next")
            .expect("changelog");
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_missing_baseline_reference_fails() {
        let source = release_graph();
        assert!(matches!(
            changelog_from_refs(&source, "prod", "release/next"),
            Err(ChangelogError::ReferenceNotFound { reference }) if reference == "prod"
        ));
    }

    #[test]
    fn test_missing_target_reference_fails() {
        let source = release_graph();
        assert!(matches!(
            changelog_from_refs(&source, "production", "release/none"),
            Err(ChangelogError::ReferenceNotFound { reference }) if reference == "release/none"
        ));
    }

    #[test]
    fn test_unrecognized_merge_produces_no_record_but_no_error() {
        let mut source = MemorySource::new();
        source.add("a1", "Initial import", &[]);
        source.add("b2", "Work", &["a1"]);
        source.add("m1", "Merge branch 'hotfix' into main", &["a1", "b2"]);

        let records = generate_changelog(&source, "a1", "m1").expect("changelog");
        assert_eq!(
            records,
            vec![ChangeRecord::Direct {
                subject: "Work".to_string()
            }]
        );
    }

    #[test]
    fn test_identical_refs_produce_empty_changelog() {
        let source = release_graph();
        let records = generate_changelog(&source, "m1", "m1").expect("changelog");
        assert!(records.is_empty());
    }

    #[test]
    fn test_broken_target_history_aborts_without_partial_output() {
        let mut source = MemorySource::new();
        source.add("a1", "Initial import", &[]);
        source.add("c3", "Orphaned", &["gone"]);

        assert!(matches!(
            generate_changelog(&source, "a1", "c3"),
            Err(ChangelogError::CommitNotFound { sha }) if sha == "gone"
        ));
    }
}
