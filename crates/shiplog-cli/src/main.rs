//! shiplog: release changelog generation from git history
//!
//! This binary crate compares a release branch against a production branch
//! and prints one changelog line per unreleased change.

use clap::Parser;
use tracing::error;

use shiplog_cli::Config;

fn main() {
    let config = Config::parse();

    // Logs go to stderr; stdout carries only the rendered changelog.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match shiplog_cli::run(&config) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            error!("changelog generation failed");
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
