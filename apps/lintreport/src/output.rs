//! Output rendering for the report and formatters commands.
//!
//! Reports are written verbatim to stdout or a file. Summaries and formatter
//! listings support `human` (default) and `json` outputs.

use crate::error::{ReportError, Result};
use crate::formatters::FormatterRegistry;
use crate::models::Summary;
use crate::utils::use_colors;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write the rendered report to `out`, or stdout when `None`.
pub fn write_report(report: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| ReportError::Write {
                    path: parent.to_string_lossy().to_string(),
                    source,
                })?;
            }
            fs::write(path, report).map_err(|source| ReportError::Write {
                path: path.to_string_lossy().to_string(),
                source,
            })
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(report.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| ReportError::Write {
                    path: "<stdout>".into(),
                    source,
                })
        }
    }
}

/// Print a report summary in the requested format.
pub fn print_summary(summary: &Summary, target: &Path, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_summary_json(summary, target))
                .unwrap_or_default()
        ),
        _ => {
            let line = format!(
                "— Summary — files={} errors={} warnings={} rollups={} read_errors={}",
                summary.files, summary.errors, summary.warnings, summary.rollups, summary.read_errors
            );
            let target = target.to_string_lossy();
            if use_colors(output) {
                println!("{} {}", "📝 wrote:".green().bold(), target.bold());
                println!("{}", line.bold());
            } else {
                println!("📝 wrote: {}", target);
                println!("{}", line);
            }
        }
    }
}

/// Print registered formatters.
pub fn print_formatters(registry: &FormatterRegistry, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_formatters_json(registry)).unwrap_or_default()
        ),
        _ => {
            let color = use_colors(output);
            for f in registry.iter() {
                if color {
                    println!("{}  {}", f.id().bold(), f.name());
                } else {
                    println!("{}  {}", f.id(), f.name());
                }
            }
        }
    }
}

/// Compose summary JSON object (pure) for testing/snapshot purposes.
pub fn compose_summary_json(summary: &Summary, target: &Path) -> JsonVal {
    json!({
        "report": target.to_string_lossy(),
        "summary": summary,
    })
}

/// Compose formatter listing JSON (pure) for testing/snapshot purposes.
pub fn compose_formatters_json(registry: &FormatterRegistry) -> JsonVal {
    let items: Vec<_> = registry
        .iter()
        .map(|f| json!({"id": f.id(), "name": f.name()}))
        .collect();
    json!({ "formatters": items })
}
