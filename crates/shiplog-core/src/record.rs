//! Structured change records
//!
//! A [`ChangeRecord`] is the output unit of changelog generation. Rendering
//! (text lines, JSON) is a caller concern; the core only guarantees the
//! field values.

use serde::{Deserialize, Serialize};

/// One entry of a generated changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChangeRecord {
    /// A commit applied directly to the branch
    Direct {
        /// Subject line of the commit message
        subject: String,
    },
    /// A merged pull request following the `<kind>/<description>` branch
    /// naming convention
    Named {
        /// Change kind taken from the branch name (feature, fix, ...)
        kind: String,
        /// Free-form description; may itself contain slashes
        description: String,
        /// Pull request number, digits only
        request_number: String,
    },
}
