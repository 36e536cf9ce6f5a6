//! `obocheck check <PATH>...` – run the documentation check over record files.

use anyhow::{bail, Context, Result};
use obocheck_core::config::ObocheckConfig;
use obocheck_core::documentation::DocumentationChecker;
use obocheck_core::record;
use obocheck_core::verdict::Verdict;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::cli::OutputFormat;

/// Load and check one record. A record that cannot be loaded gets an ERROR verdict.
fn check_path(checker: &DocumentationChecker, path: &Path) -> Verdict {
    match record::load_path(path) {
        Ok(rec) => checker.check(&rec),
        Err(e) => {
            tracing::warn!(path = %path.display(), "record load failed: {:#}", e);
            Verdict::error(format!("could not load record: {:#}", e))
        }
    }
}

pub(crate) fn format_text(path: &Path, verdict: &Verdict) -> String {
    match verdict {
        Verdict::Pass => format!("PASS  {}", path.display()),
        Verdict::Error { comment } => format!("ERROR {}: {}", path.display(), comment),
    }
}

pub(crate) fn format_json(path: &Path, verdict: &Verdict) -> Result<String> {
    let mut value = serde_json::to_value(verdict)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert(
            "path".to_string(),
            serde_json::Value::String(path.display().to_string()),
        );
    }
    Ok(serde_json::to_string(&value)?)
}

/// Concurrency limit clamped to what a tokio semaphore can hold.
pub(crate) fn permit_count(jobs: usize) -> usize {
    jobs.clamp(1, Semaphore::MAX_PERMITS)
}

pub async fn run_check(
    cfg: &ObocheckConfig,
    inputs: &[PathBuf],
    jobs: usize,
    format: OutputFormat,
) -> Result<()> {
    let paths = record::collect_paths(inputs)?;
    if paths.is_empty() {
        bail!("no record files found");
    }

    let checker = Arc::new(DocumentationChecker::from_http_config(cfg.http.clone()));
    let jobs = permit_count(jobs);
    let permits = Arc::new(Semaphore::new(jobs));
    tracing::info!(records = paths.len(), jobs, "starting documentation check");

    let mut handles = Vec::with_capacity(paths.len());
    for path in paths {
        let checker = Arc::clone(&checker);
        let permits = Arc::clone(&permits);
        handles.push(tokio::spawn(async move {
            let _permit = permits.acquire_owned().await.context("check semaphore")?;
            let verdict = tokio::task::spawn_blocking({
                let path = path.clone();
                move || check_path(&checker, &path)
            })
            .await
            .context("check task join")?;
            anyhow::Ok((path, verdict))
        }));
    }

    // Handles are awaited in input order so output order is stable.
    let total = handles.len();
    let mut failed = 0usize;
    for handle in handles {
        let (path, verdict) = handle.await.context("check task join")??;
        if !verdict.is_pass() {
            failed += 1;
        }
        let line = match format {
            OutputFormat::Text => format_text(&path, &verdict),
            OutputFormat::Json => format_json(&path, &verdict)?,
        };
        println!("{}", line);
    }

    tracing::info!(total, failed, "documentation check finished");
    if failed > 0 {
        bail!(
            "{} of {} record(s) failed the documentation check",
            failed,
            total
        );
    }
    Ok(())
}
