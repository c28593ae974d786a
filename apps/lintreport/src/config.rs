//! Configuration discovery and effective settings resolution.
//!
//! lintreport reads `lintreport.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `format`: `checkstyle-xml`
//! - `output`: `human`
//! - `out`: none (report goes to stdout)
//! - `inputs`: none (results are read from stdin)
//! - `relative`: false
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::formatters::CheckstyleXml;
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

const CONFIG_FILES: [&str; 3] = ["lintreport.toml", "lintreport.yaml", "lintreport.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `lintreport.toml|yaml`.
pub struct ReportConfig {
    pub format: Option<String>,
    pub output: Option<String>,
    pub out: Option<String>,
    #[serde(default)]
    pub inputs: Option<Vec<String>>,
    pub relative: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub format: String,
    pub output: String,
    /// Report destination, resolved against `repo_root`; `None` is stdout.
    pub out: Option<PathBuf>,
    pub inputs: Vec<String>,
    pub relative: bool,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `lintreport.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Join a relative path onto the current directory, dropping `.` segments.
/// Falls back to the path as given when the current directory is unavailable.
pub fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => return path.to_path_buf(),
        }
    };
    joined
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect()
}

/// Load `ReportConfig` from `lintreport.toml` or `lintreport.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<ReportConfig> {
    let toml_path = root.join("lintreport.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: ReportConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["lintreport.yaml", "lintreport.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: ReportConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// Non-empty `cli_inputs` replace the configured input patterns entirely.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_format: Option<&str>,
    cli_output: Option<&str>,
    cli_out: Option<&str>,
    cli_inputs: &[String],
    cli_relative: Option<bool>,
) -> Effective {
    // Absolute root so filenames can be diffed against it later.
    let start = absolutize(Path::new(cli_repo_root.unwrap_or(".")));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let format = cli_format
        .map(|s| s.to_string())
        .or(cfg.format)
        .unwrap_or_else(|| CheckstyleXml::ID.to_string());

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    // CLI paths stay relative to the working directory; config paths are
    // relative to the repo root.
    let out = match cli_out {
        Some(p) => Some(PathBuf::from(p)),
        None => cfg.out.map(|p| repo_root.join(p)),
    };

    let inputs = if cli_inputs.is_empty() {
        cfg.inputs.unwrap_or_default()
    } else {
        cli_inputs.to_vec()
    };

    let relative = cli_relative.or(cfg.relative).unwrap_or(false);

    Effective {
        repo_root,
        format,
        output,
        out,
        inputs,
        relative,
    }
}
