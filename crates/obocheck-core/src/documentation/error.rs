//! Failure kinds of the documentation check. `Display` is the dashboard comment.

use thiserror::Error;

use crate::verdict::Verdict;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentationError {
    #[error("Missing homepage and description")]
    MissingBoth,
    #[error("Missing homepage")]
    MissingHomepage,
    #[error("Missing description")]
    MissingDescription,
    /// Transport failure or status above 400; the comment does not say which.
    #[error("homepage URL ({url}) does not resolve")]
    UnresolvedHomepage { url: String },
}

impl From<DocumentationError> for Verdict {
    fn from(e: DocumentationError) -> Self {
        Verdict::error(e.to_string())
    }
}
