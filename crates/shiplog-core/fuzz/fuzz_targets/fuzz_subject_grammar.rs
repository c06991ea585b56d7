#![no_main]

use chrono::{TimeZone, Utc};
use libfuzzer_sys::fuzz_target;
use shiplog_core::{ChangeRecord, Commit, classify};

fn commit(message: &str, parents: usize) -> Commit {
    Commit {
        sha: "8c3f2a917d55e0b4a6c1d2e3f4a5b6c7d8e9f0a1".to_string(),
        message: message.to_string(),
        author: "Fuzz".to_string(),
        author_email: "fuzz@example.com".to_string(),
        timestamp: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        parents: (0..parents).map(|i| format!("{i:040x}")).collect(),
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(message) = std::str::from_utf8(data) else {
        return;
    };

    // Non-merge commits always classify to the subject line.
    match classify(&commit(message, 1)) {
        Some(ChangeRecord::Direct { subject }) => {
            assert!(!subject.contains('\n'));
            assert!(message.starts_with(&subject));
        }
        other => panic!("non-merge commit must be direct, got {other:?}"),
    }

    // Merge commits either match the grammar or drop out, never panic.
    if let Some(ChangeRecord::Named {
        kind,
        description,
        request_number,
    }) = classify(&commit(message, 2))
    {
        assert!(!request_number.is_empty());
        assert!(request_number.chars().all(|c| c.is_ascii_digit()));
        assert!(!kind.is_empty());
        assert!(!kind.contains('/'));
        assert!(!description.is_empty());
    }
});
