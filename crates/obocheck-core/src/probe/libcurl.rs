//! GET probe over libcurl (the `curl` crate).

use curl::easy::Easy;
use url::Url;

use super::{ProbeError, UrlProbe};
use crate::config::HttpConfig;

/// Blocking GET probe. Runs in the current thread; call from `spawn_blocking`
/// if used from async code.
#[derive(Debug, Clone, Default)]
pub struct CurlProbe {
    http: HttpConfig,
}

impl CurlProbe {
    pub fn new(http: HttpConfig) -> Self {
        Self { http }
    }

    fn configure(&self, easy: &mut Easy, url: &str) -> Result<(), ProbeError> {
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(self.http.follow_redirects)?;
        if self.http.follow_redirects {
            easy.max_redirections(self.http.max_redirects)?;
        }
        easy.connect_timeout(self.http.connect_timeout())?;
        easy.timeout(self.http.timeout())?;
        if let Some(agent) = &self.http.user_agent {
            easy.useragent(agent)?;
        }
        Ok(())
    }
}

/// Reject what curl would otherwise guess at (bare hosts, ftp://, file://).
fn validate_url(url: &str) -> Result<Url, ProbeError> {
    let parsed = Url::parse(url).map_err(|e| ProbeError::InvalidUrl(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ProbeError::InvalidUrl(format!(
            "unsupported scheme `{}`",
            other
        ))),
    }
}

impl UrlProbe for CurlProbe {
    fn status(&self, url: &str) -> Result<u32, ProbeError> {
        let parsed = validate_url(url)?;

        let mut easy = Easy::new();
        self.configure(&mut easy, parsed.as_str())?;

        {
            let mut transfer = easy.transfer();
            // Body is irrelevant; drain it.
            transfer.write_function(|data| Ok(data.len()))?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if code == 0 {
            return Err(ProbeError::NoStatus);
        }
        tracing::debug!(
            url,
            host = parsed.host_str().unwrap_or(""),
            status = code,
            redirects = easy.redirect_count().unwrap_or(0),
            "homepage probe"
        );
        Ok(code)
    }
}
