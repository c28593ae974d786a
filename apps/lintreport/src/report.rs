//! Report composition: loads linter results and drives a formatter.
//!
//! A results document is either a single outcome object or an array of them:
//!
//! ```json
//! [
//!   {"filename": "a.css", "messages": [{"line": 1, "col": 2, "type": "error", "message": "..."}]},
//!   {"filename": "b.css", "error": "Could not read file"}
//! ]
//! ```

use crate::error::{ReportError, Result};
use crate::formatters::Formatter;
use crate::models::FileOutcome;
use glob::glob;
use rayon::prelude::*;
use serde_json::Value as Json;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Outcomes gathered from result files plus patterns that matched nothing.
#[derive(Debug, Default)]
pub struct Loaded {
    pub outcomes: Vec<FileOutcome>,
    pub unmatched: Vec<String>,
}

/// Render a complete report: `start_format`, one fragment per outcome in
/// input order, then `end_format`.
///
/// Fragments are rendered in parallel; each call is independent.
pub fn compose_report(formatter: &dyn Formatter, outcomes: &[FileOutcome]) -> String {
    let fragments: Vec<String> = outcomes
        .par_iter()
        .map(|o| render_outcome(formatter, o))
        .collect();
    let mut out = formatter.start_format();
    for frag in &fragments {
        out.push_str(frag);
    }
    out.push_str(&formatter.end_format());
    out
}

fn render_outcome(formatter: &dyn Formatter, outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::ReadError { filename, error } => formatter.read_error(filename, error),
        FileOutcome::Linted(results) => formatter.format_results(results, &results.filename),
    }
}

/// Parse one results document. `origin` names the source in errors.
///
/// Entries are decoded one at a time so an error names the offending entry.
/// Malformed diagnostics inside an entry never fail it; they degrade to
/// defaults or are dropped.
pub fn parse_outcomes(text: &str, origin: &str) -> Result<Vec<FileOutcome>> {
    let doc: Json = serde_json::from_str(text).map_err(|source| ReportError::Parse {
        path: origin.to_string(),
        source,
    })?;
    match doc {
        Json::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| decode_outcome(item, &format!("{origin}[{i}]")))
            .collect(),
        other => Ok(vec![decode_outcome(other, origin)?]),
    }
}

fn decode_outcome(value: Json, origin: &str) -> Result<FileOutcome> {
    serde_json::from_value(value).map_err(|source| ReportError::Parse {
        path: origin.to_string(),
        source,
    })
}

/// Expand `patterns` relative to `repo_root` and load every matched file.
///
/// Paths keep pattern order (glob yields each pattern's matches sorted);
/// a path matched by several patterns is read once.
pub fn load_outcomes(repo_root: &Path, patterns: &[String]) -> Result<Loaded> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut targets: Vec<PathBuf> = Vec::new();
    let mut unmatched = Vec::new();
    for pat in patterns {
        let abs_glob = repo_root.join(pat);
        let pattern = abs_glob.to_string_lossy().to_string();
        let entries = glob(&pattern).map_err(|source| ReportError::Pattern {
            pattern: pat.clone(),
            source,
        })?;
        let mut matched = false;
        for path in entries.flatten() {
            if !path.is_file() {
                continue;
            }
            matched = true;
            if seen.insert(path.clone()) {
                targets.push(path);
            }
        }
        if !matched {
            unmatched.push(pat.clone());
        }
    }
    tracing::debug!(files = targets.len(), "loading result files");

    let per_file: Vec<Vec<FileOutcome>> = targets
        .par_iter()
        .map(|path| -> Result<Vec<FileOutcome>> {
            let origin = path.to_string_lossy().to_string();
            let data = fs::read_to_string(path).map_err(|source| ReportError::Read {
                path: origin.clone(),
                source,
            })?;
            let outcomes = parse_outcomes(&data, &origin)?;
            tracing::debug!(file = %origin, outcomes = outcomes.len(), "parsed results");
            Ok(outcomes)
        })
        .collect::<Result<_>>()?;

    Ok(Loaded {
        outcomes: per_file.into_iter().flatten().collect(),
        unmatched,
    })
}

/// Rewrite absolute filenames under `repo_root` as paths relative to it.
/// Filenames outside the root, and relative ones, are left untouched.
pub fn relativize(repo_root: &Path, outcomes: &mut [FileOutcome]) {
    for outcome in outcomes.iter_mut() {
        let name = outcome.filename_mut();
        let path = Path::new(name.as_str());
        if !path.is_absolute() {
            continue;
        }
        if let Some(rel) = pathdiff::diff_paths(path, repo_root) {
            if !rel.components().any(|c| c == Component::ParentDir) {
                *name = rel.to_string_lossy().to_string();
            }
        }
    }
}
