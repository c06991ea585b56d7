//! Changelog rendering
//!
//! Maps change records to their user-facing forms. The text format is one
//! line per change; JSON is the serde form of the record list,
//! pretty-printed.

use shiplog_core::ChangeRecord;

use crate::config::OutputFormat;

/// Render a single record as its text line
#[must_use]
pub fn text_line(record: &ChangeRecord) -> String {
    match record {
        ChangeRecord::Direct { subject } => format!("+ {subject}"),
        ChangeRecord::Named {
            kind,
            description,
            request_number,
        } => format!("{kind} {description} (#{request_number})"),
    }
}

/// Render the whole changelog in the requested format
///
/// # Errors
///
/// JSON serialization failures surface as `anyhow` errors; the text
/// format cannot fail.
pub fn render(records: &[ChangeRecord], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for record in records {
                out.push_str(&text_line(record));
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(records)?;
            out.push('\n');
            Ok(out)
        }
    }
}
