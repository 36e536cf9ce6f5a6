//! `obocheck probe <url>` – GET a URL the way the homepage check does.

use anyhow::{bail, Context, Result};
use obocheck_core::config::ObocheckConfig;
use obocheck_core::probe::{self, CurlProbe, UrlProbe};

pub async fn run_probe(cfg: &ObocheckConfig, url: &str) -> Result<()> {
    let curl_probe = CurlProbe::new(cfg.http.clone());
    let result = tokio::task::spawn_blocking({
        let url = url.to_string();
        move || curl_probe.status(&url)
    })
    .await
    .context("probe task join")?;

    match result {
        Ok(status) if probe::resolves(status) => {
            println!("{}: HTTP {} (resolves)", url, status);
            Ok(())
        }
        Ok(status) => {
            println!("{}: HTTP {} (does not resolve)", url, status);
            bail!("{} does not resolve", url)
        }
        Err(e) => {
            println!("{}: request failed: {}", url, e);
            bail!("{} does not resolve", url)
        }
    }
}
