//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lintreport",
    version,
    about = "Render lint results as report formats",
    long_about = "lintreport — turns linter result JSON into reports such as Checkstyle XML.\n\nConfiguration precedence: CLI > lintreport.toml > defaults.",
    after_help = "Examples:\n  lintreport report build/lint/*.json --out reports/checkstyle.xml\n  csslint --format=json a.css | lintreport report\n  lintreport formatters --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current lintreport version.")]
    Version,
    /// Render a report from lint results
    #[command(
        about = "Render a report",
        long_about = "Read lint results (files matched by INPUTS, configured inputs, or stdin) and render them with the selected formatter.",
        after_help = "Examples:\n  lintreport report results.json\n  lintreport report 'out/**/*.json' --relative --out checkstyle.xml"
    )]
    Report {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Formatter id (default: checkstyle-xml)")]
        format: Option<String>,
        #[arg(long, help = "Summary mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Write the report to this path instead of stdout")]
        out: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Rewrite absolute filenames relative to the repo root")]
        relative: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero when the report contains errors")]
        fail_on_error: bool,
        #[arg(help = "Glob patterns of result JSON files, relative to the repo root")]
        inputs: Vec<String>,
    },
    /// List available formatters
    #[command(
        about = "List formatters",
        long_about = "Print the id and display name of every registered formatter."
    )]
    Formatters {
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
