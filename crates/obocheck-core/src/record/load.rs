//! Read registry records from disk: markdown pages with YAML front matter,
//! bare YAML documents, or JSON objects.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::Record;

const FRONT_MATTER_DELIM: &str = "---";

const RECORD_EXTENSIONS: &[&str] = &["md", "markdown", "yml", "yaml", "json"];

/// Load one record, picking the parser from the file extension.
pub fn load_path(path: &Path) -> Result<Record> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let ext = extension(path);
    let record = match ext.as_deref() {
        Some("md" | "markdown") => parse_front_matter(&text),
        Some("yml" | "yaml") => parse_yaml(&text),
        Some("json") => parse_json(&text),
        _ => bail!("unsupported record format: {}", path.display()),
    };
    record.with_context(|| format!("load record {}", path.display()))
}

/// Parse the YAML front matter of a registry page into a record.
pub fn parse_front_matter(text: &str) -> Result<Record> {
    parse_yaml(split_front_matter(text)?)
}

/// Return the text between the leading `---` line and the next `---` line.
pub fn split_front_matter(text: &str) -> Result<&str> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split_inclusive('\n');
    match lines.next() {
        Some(first) if first.trim() == FRONT_MATTER_DELIM => {}
        _ => bail!("missing front matter start delimiter"),
    }
    let start = text.find('\n').map(|i| i + 1).unwrap_or(text.len());
    let mut offset = start;
    for line in lines {
        if line.trim() == FRONT_MATTER_DELIM {
            return Ok(&text[start..offset]);
        }
        offset += line.len();
    }
    bail!("missing front matter end delimiter")
}

fn parse_yaml(text: &str) -> Result<Record> {
    let value: Value = serde_yaml::from_str(text).context("invalid YAML")?;
    Record::from_value(value)
}

fn parse_json(text: &str) -> Result<Record> {
    let value: Value = serde_json::from_str(text).context("invalid JSON")?;
    Record::from_value(value)
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

fn is_record_file(path: &Path) -> bool {
    path.is_file()
        && extension(path)
            .map(|e| RECORD_EXTENSIONS.contains(&e.as_str()))
            .unwrap_or(false)
}

/// Expand the given inputs into record files. Directories contribute their
/// record files (non-recursive, sorted by path); plain paths pass through.
pub fn collect_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found = Vec::new();
            for entry in
                fs::read_dir(input).with_context(|| format!("read dir {}", input.display()))?
            {
                let path = entry?.path();
                if is_record_file(&path) {
                    found.push(path);
                }
            }
            found.sort();
            tracing::debug!(dir = %input.display(), count = found.len(), "collected records");
            out.extend(found);
        } else {
            out.push(input.clone());
        }
    }
    Ok(out)
}
