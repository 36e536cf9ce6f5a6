//! Outcome of a single registry check.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pass/Error result of one check, serialized as `{"status": "PASS"}` or
/// `{"status": "ERROR", "comment": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Error { comment: String },
}

impl Verdict {
    pub fn error(comment: impl Into<String>) -> Self {
        Verdict::Error {
            comment: comment.into(),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    /// Human-readable comment, if any.
    pub fn comment(&self) -> Option<&str> {
        match self {
            Verdict::Pass => None,
            Verdict::Error { comment } => Some(comment),
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Error { .. } => "ERROR",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Error { comment } => write!(f, "ERROR: {}", comment),
        }
    }
}
