// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! shiplog-cli: the shiplog binary's library surface
//!
//! Exposes configuration, rendering, and the [`run`] entry point so
//! integration tests can drive the binary's behavior without spawning a
//! process.

#![warn(missing_docs)]

use anyhow::Context;
use tracing::info;

pub mod config;
pub mod render;

pub use config::{Config, OutputFormat};

use shiplog_core::changelog_from_refs;
use shiplog_git::GitRepo;

/// Generate and render the changelog described by `config`
///
/// This is the whole program behind the argument parsing: open the
/// repository, compare the branches, render the records. The returned
/// string is what the binary prints to stdout.
///
/// # Errors
///
/// Any configuration, repository, or traversal failure is reported with
/// context; the binary's `main` is the single place that turns it into a
/// process exit.
pub fn run(config: &Config) -> anyhow::Result<String> {
    config.validate().context("invalid configuration")?;

    let repo = GitRepo::discover(&config.repo).with_context(|| {
        format!(
            "failed to open a git repository at {}",
            config.repo.display()
        )
    })?;

    let records = changelog_from_refs(&repo, &config.baseline, &config.target)
        .context("failed to generate changelog")?;
    info!(
        baseline = %config.baseline,
        target = %config.target,
        changes = records.len(),
        "changelog generated"
    );

    render::render(&records, config.format)
}
