//! Documentation check: a record must have a homepage and a description, and
//! the homepage must resolve (final GET status <= 400).

mod error;

pub use error::DocumentationError;

use crate::config::HttpConfig;
use crate::probe::{self, CurlProbe, UrlProbe};
use crate::record::Record;
use crate::verdict::Verdict;

/// Stateless checker; one GET per [`check`](Self::check) when both fields are set.
#[derive(Debug, Clone, Default)]
pub struct DocumentationChecker<P = CurlProbe> {
    probe: P,
}

impl DocumentationChecker<CurlProbe> {
    /// Checker backed by libcurl with the given HTTP settings.
    pub fn from_http_config(http: HttpConfig) -> Self {
        Self::new(CurlProbe::new(http))
    }
}

impl<P: UrlProbe> DocumentationChecker<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Run the check. Every failure is reported in the verdict; nothing is returned as `Err`.
    pub fn check(&self, record: &Record) -> Verdict {
        let verdict = match self.evaluate(record) {
            Ok(()) => Verdict::Pass,
            Err(e) => Verdict::from(e),
        };
        tracing::debug!(
            id = record.id().unwrap_or("-"),
            status = verdict.status(),
            comment = verdict.comment().unwrap_or(""),
            "documentation check"
        );
        verdict
    }

    /// Same as [`check`](Self::check) but keeps the error kind.
    pub fn evaluate(&self, record: &Record) -> Result<(), DocumentationError> {
        let home = match (record.homepage(), record.description()) {
            (None, None) => return Err(DocumentationError::MissingBoth),
            (None, Some(_)) => return Err(DocumentationError::MissingHomepage),
            (Some(_), None) => return Err(DocumentationError::MissingDescription),
            (Some(home), Some(_)) => home,
        };
        self.check_homepage(home)
    }

    fn check_homepage(&self, home: &str) -> Result<(), DocumentationError> {
        let unresolved = || DocumentationError::UnresolvedHomepage {
            url: home.to_string(),
        };
        match self.probe.status(home) {
            Ok(status) if probe::resolves(status) => Ok(()),
            Ok(status) => {
                tracing::debug!(url = home, status, "homepage returned error status");
                Err(unresolved())
            }
            Err(e) => {
                tracing::debug!(url = home, error = %e, "homepage request failed");
                Err(unresolved())
            }
        }
    }
}
