//! Shared data models for lint results consumed by report formatters.
//!
//! Results arrive as JSON produced by a linter. Deserialization is lenient so
//! that a malformed diagnostic degrades to empty fields instead of aborting
//! the whole report.

mod lenient;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Identifies the lint rule that produced a diagnostic.
pub struct RuleRef {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
}

impl RuleRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single lint message with location, severity and originating rule.
pub struct Diagnostic {
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub line: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub col: u64,
    /// Raw severity token, `error` or `warning`.
    #[serde(rename = "type", default, deserialize_with = "lenient::string_or_empty")]
    pub severity: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub message: String,
    /// Aggregated summary entries are not tied to a line and are left out of
    /// per-error output.
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub rollup: bool,
    #[serde(default, deserialize_with = "lenient::opt_rule")]
    pub rule: Option<RuleRef>,
}

impl Diagnostic {
    pub fn new(line: u64, col: u64, severity: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            line,
            col,
            severity: severity.into(),
            message: message.into(),
            rollup: false,
            rule: None,
        }
    }

    pub fn error(line: u64, col: u64, message: impl Into<String>) -> Self {
        Self::new(line, col, "error", message)
    }

    pub fn warning(line: u64, col: u64, message: impl Into<String>) -> Self {
        Self::new(line, col, "warning", message)
    }

    pub fn with_rule(mut self, rule: RuleRef) -> Self {
        self.rule = Some(rule);
        self
    }

    pub fn as_rollup(mut self) -> Self {
        self.rollup = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// All diagnostics reported for one file, in linter order.
pub struct FileResult {
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub filename: String,
    #[serde(default, deserialize_with = "lenient::diagnostics")]
    pub messages: Vec<Diagnostic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
/// What the linter produced for one input file.
///
/// A document carrying an `error` key is a read failure; anything else is
/// treated as a regular result set.
pub enum FileOutcome {
    ReadError {
        #[serde(default, deserialize_with = "lenient::string_or_empty")]
        filename: String,
        #[serde(deserialize_with = "lenient::string_or_empty")]
        error: String,
    },
    Linted(FileResult),
}

impl FileOutcome {
    pub fn filename(&self) -> &str {
        match self {
            FileOutcome::ReadError { filename, .. } => filename,
            FileOutcome::Linted(r) => &r.filename,
        }
    }

    pub fn filename_mut(&mut self) -> &mut String {
        match self {
            FileOutcome::ReadError { filename, .. } => filename,
            FileOutcome::Linted(r) => &mut r.filename,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
/// Aggregated counts over a report, used by printers.
pub struct Summary {
    pub files: usize,
    pub errors: usize,
    pub warnings: usize,
    pub rollups: usize,
    pub read_errors: usize,
}

impl Summary {
    /// Count non-rollup diagnostics by severity plus read failures.
    pub fn from_outcomes(outcomes: &[FileOutcome]) -> Self {
        let mut s = Summary {
            files: outcomes.len(),
            ..Summary::default()
        };
        for outcome in outcomes {
            match outcome {
                FileOutcome::ReadError { .. } => s.read_errors += 1,
                FileOutcome::Linted(r) => {
                    for m in &r.messages {
                        if m.rollup {
                            s.rollups += 1;
                            continue;
                        }
                        match m.severity.as_str() {
                            "error" => s.errors += 1,
                            "warning" => s.warnings += 1,
                            _ => {}
                        }
                    }
                }
            }
        }
        s
    }

    pub fn has_failures(&self) -> bool {
        self.errors > 0 || self.read_errors > 0
    }
}
