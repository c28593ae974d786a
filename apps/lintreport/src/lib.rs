//! lintreport core library.
//!
//! This crate turns lint results into report formats consumed by other
//! tooling, most notably Checkstyle XML for CI dashboards.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `error`: Errors raised while loading results or writing reports.
//! - `formatters`: The `Formatter` interface, its registry and the
//!   `checkstyle-xml` formatter.
//! - `models`: Diagnostics, rule references and per-file results.
//! - `output`: Report writing plus human/JSON printers.
//! - `report`: Result loading and report composition.
//! - `utils`: Colored message prefixes.
//! - `xml`: XML attribute escaping.
pub mod cli;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod output;
pub mod report;
pub mod utils;
pub mod xml;
