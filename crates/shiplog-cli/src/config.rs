//! Configuration for the shiplog binary
//!
//! Command-line options for changelog generation: which repository to
//! read, which branches to compare, and how to render the result.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// shiplog - release changelog generation from git history
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "shiplog")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Release branch whose unreleased history is reported
    ///
    /// The branch is resolved locally first, then as origin/<name>.
    pub target: String,

    /// Production branch defining already-released commits
    ///
    /// Every commit reachable from this branch is excluded from the
    /// changelog.
    #[arg(short, long, default_value = "production", env = "SHIPLOG_BASELINE")]
    pub baseline: String,

    /// Path to the repository
    ///
    /// Any directory inside the working tree works; discovery walks up to
    /// the enclosing repository.
    #[arg(short, long, default_value = ".", env = "SHIPLOG_REPO")]
    pub repo: PathBuf,

    /// Output format for the generated changelog
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so stdout stays clean for the rendered
    /// changelog.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Supported changelog renderings
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per change: `+ <subject>` or `<kind> <description> (#<n>)`
    #[default]
    Text,
    /// Pretty-printed JSON array of change records
    Json,
}

impl Config {
    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the repository path does not exist or is not a
    /// directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.repo.exists() {
            return Err(ConfigError::RepoPathNotFound(self.repo.clone()));
        }
        if !self.repo.is_dir() {
            return Err(ConfigError::RepoPathNotDirectory(self.repo.clone()));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository path not found
    #[error("Repository path not found: {0}")]
    RepoPathNotFound(PathBuf),

    /// Repository path is not a directory
    #[error("Repository path is not a directory: {0}")]
    RepoPathNotDirectory(PathBuf),
}
