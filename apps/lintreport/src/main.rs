//! lintreport CLI binary entry point.
//! Loads lint results, renders them with a registered formatter and writes
//! the report.

use clap::Parser;
use lintreport::cli::{Cli, Commands};
use lintreport::config::{self, Effective};
use lintreport::error::{ReportError, Result};
use lintreport::formatters::FormatterRegistry;
use lintreport::models::Summary;
use lintreport::utils::{error_prefix, info_prefix, note_prefix};
use lintreport::{output, report};
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Render the report described by `eff`. Returns the report summary.
fn run_report(eff: &Effective, registry: &FormatterRegistry) -> Result<Summary> {
    let formatter = registry
        .get(&eff.format)
        .ok_or_else(|| ReportError::UnknownFormatter(eff.format.clone()))?;

    let mut outcomes = if eff.inputs.is_empty() {
        eprintln!(
            "{} no inputs given; reading results from stdin",
            note_prefix(&eff.output)
        );
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| ReportError::Read {
                path: "<stdin>".into(),
                source,
            })?;
        report::parse_outcomes(&buf, "<stdin>")?
    } else {
        let loaded = report::load_outcomes(&eff.repo_root, &eff.inputs)?;
        for pat in &loaded.unmatched {
            eprintln!("{} pattern matched no files: {}", note_prefix(&eff.output), pat);
        }
        loaded.outcomes
    };

    if eff.relative {
        report::relativize(&eff.repo_root, &mut outcomes);
    }

    tracing::debug!(formatter = formatter.id(), files = outcomes.len(), "rendering report");
    let rendered = report::compose_report(formatter, &outcomes);
    output::write_report(&rendered, eff.out.as_deref())?;

    let summary = Summary::from_outcomes(&outcomes);
    if let Some(path) = eff.out.as_deref() {
        output::print_summary(&summary, path, &eff.output);
    }
    Ok(summary)
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let registry = FormatterRegistry::with_defaults();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Formatters { output } => {
            let eff = config::resolve_effective(None, None, output.as_deref(), None, &[], None);
            output::print_formatters(&registry, &eff.output);
        }
        Commands::Report {
            repo_root,
            format,
            output,
            out,
            relative,
            fail_on_error,
            inputs,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                format.as_deref(),
                output.as_deref(),
                out.as_deref(),
                &inputs,
                if relative { Some(true) } else { None },
            );
            if !registry.contains(&eff.format) {
                let known: Vec<&str> = registry.iter().map(|f| f.id()).collect();
                eprintln!(
                    "{} Available formatters: [{}]",
                    info_prefix(&eff.output),
                    known.join(", ")
                );
            }
            match run_report(&eff, &registry) {
                Ok(summary) => {
                    if fail_on_error && summary.has_failures() {
                        std::process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("{} {}", error_prefix(&eff.output), e);
                    std::process::exit(2);
                }
            }
        }
    }
}
