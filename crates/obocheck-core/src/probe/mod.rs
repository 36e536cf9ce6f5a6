//! Homepage reachability probe.
//!
//! [`UrlProbe`] is the one network capability the documentation check needs:
//! issue a GET and report the final HTTP status. [`CurlProbe`] is the libcurl
//! implementation; tests substitute their own.

mod libcurl;

pub use libcurl::CurlProbe;

use std::fmt;

/// Highest status code that still counts as "resolves". 400 itself is accepted.
pub const MAX_RESOLVING_STATUS: u32 = 400;

/// True if a response with this status means the URL resolves.
pub fn resolves(status: u32) -> bool {
    status <= MAX_RESOLVING_STATUS
}

/// Issues one GET for `url` and returns the status of the final response.
pub trait UrlProbe: Send + Sync {
    fn status(&self, url: &str) -> Result<u32, ProbeError>;
}

impl<P: UrlProbe + ?Sized> UrlProbe for &P {
    fn status(&self, url: &str) -> Result<u32, ProbeError> {
        (**self).status(url)
    }
}

impl<P: UrlProbe + ?Sized> UrlProbe for Box<P> {
    fn status(&self, url: &str) -> Result<u32, ProbeError> {
        (**self).status(url)
    }
}

/// Why a probe produced no usable status.
#[derive(Debug)]
pub enum ProbeError {
    /// Not parseable as a URL, or not http/https.
    InvalidUrl(String),
    /// Curl reported an error (DNS, connect, TLS, timeout, too many redirects, ...).
    Transport(curl::Error),
    /// Transfer finished without an HTTP status line.
    NoStatus,
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::InvalidUrl(reason) => write!(f, "invalid URL: {}", reason),
            ProbeError::Transport(e) => write!(f, "{}", e),
            ProbeError::NoStatus => write!(f, "no HTTP status in response"),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::Transport(e) => Some(e),
            ProbeError::InvalidUrl(_) | ProbeError::NoStatus => None,
        }
    }
}

impl From<curl::Error> for ProbeError {
    fn from(e: curl::Error) -> Self {
        ProbeError::Transport(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_boundary_is_inclusive() {
        assert!(resolves(200));
        assert!(resolves(302));
        assert!(resolves(399));
        assert!(resolves(400));
        assert!(!resolves(401));
        assert!(!resolves(404));
        assert!(!resolves(500));
    }

    #[test]
    fn invalid_url_display() {
        let e = ProbeError::InvalidUrl("relative URL without a base".into());
        assert_eq!(e.to_string(), "invalid URL: relative URL without a base");
        assert!(std::error::Error::source(&e).is_none());
    }
}
