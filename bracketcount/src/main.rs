//! # bracketcount
//!
//! Build-step CLI that writes a bracket count report for a project.
//!
//! ## Overview
//!
//! bracketcount is built on top of bracketcountlib. It follows the usual
//! project layout of a build: sources live under `<project>/src` and build
//! output goes to `<project>/build`. The report is written to
//! `<project>/build/brackets_count.txt` unless configured otherwise, ready
//! for a packaging step to pick up.
//!
//! ## Usage
//!
//! ```bash
//! # Count brackets in ./src, write ./build/brackets_count.txt
//! bracketcount
//!
//! # Another project, custom report name
//! bracketcount ../my-app --output-file-name brackets.txt
//!
//! # Read the report name from a JSON config file
//! bracketcount --config brackets.json
//!
//! # Also print the report
//! bracketcount --print
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use bracketcountlib::{run, ReportConfig, ReportSummary};
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Source directory inside the project
const SOURCE_DIR: &str = "src";

/// Build output directory inside the project
const BUILD_DIR: &str = "build";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("bracketcount")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count opening brackets in a project's sources and write a report")
        .arg(
            Arg::new("project")
                .help("Project directory (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("src")
                .short('s')
                .long("src")
                .help("Directory to scan (defaults to <project>/src)"),
        )
        .arg(
            Arg::new("build-dir")
                .short('b')
                .long("build-dir")
                .help("Build output directory (defaults to <project>/build)"),
        )
        .arg(
            Arg::new("output-file-name")
                .short('o')
                .long("output-file-name")
                .help("Report file name inside the build directory [default: brackets_count.txt]"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("JSON config file, e.g. {\"outputFileName\": \"brackets.txt\"}"),
        )
        .arg(
            Arg::new("print")
                .short('p')
                .long("print")
                .action(ArgAction::SetTrue)
                .help("Also print the report to stdout"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug)"),
        )
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Resolved inputs for one run
#[derive(Debug)]
struct Invocation {
    source_root: PathBuf,
    destination: PathBuf,
    print: bool,
}

/// Build the report config: config file first, then the command-line override
fn build_config(matches: &ArgMatches) -> anyhow::Result<ReportConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::new(),
    };

    if let Some(name) = matches.get_one::<String>("output-file-name") {
        anyhow::ensure!(!name.trim().is_empty(), "--output-file-name must not be empty");
        config = config.output_file_name(name.as_str());
    }

    Ok(config)
}

fn resolve_invocation(matches: &ArgMatches) -> anyhow::Result<Invocation> {
    let project = matches
        .get_one::<String>("project")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let source_root = matches
        .get_one::<String>("src")
        .map(PathBuf::from)
        .unwrap_or_else(|| project.join(SOURCE_DIR));
    let build_dir = matches
        .get_one::<String>("build-dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| project.join(BUILD_DIR));

    let config = build_config(matches)?;

    Ok(Invocation {
        source_root,
        destination: config.output_path(build_dir),
        print: matches.get_flag("print"),
    })
}

/// One-line summary for stderr
fn format_summary(summary: &ReportSummary, source_root: &Path) -> String {
    let bold = Style::new().for_stderr().bold();
    let dim = Style::new().for_stderr().dim();
    let plural = if summary.file_count == 1 { "" } else { "s" };

    format!(
        "{} brackets in {} file{} under {} {}",
        bold.apply_to(summary.total.total()),
        summary.file_count,
        plural,
        source_root.display(),
        dim.apply_to(format!("-> {}", summary.destination.display())),
    )
}

fn execute(matches: &ArgMatches) -> anyhow::Result<()> {
    let invocation = resolve_invocation(matches)?;
    debug!(?invocation, "resolved invocation");

    let summary = run(&invocation.source_root, &invocation.destination).with_context(|| {
        format!(
            "bracket count of '{}' failed",
            invocation.source_root.display()
        )
    })?;

    if invocation.print {
        print!("{}", summary.text);
    }
    eprintln!("{}", format_summary(&summary, &invocation.source_root));

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_tracing(matches.get_count("verbose"));

    match execute(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let red = Style::new().for_stderr().red().bold();
            eprintln!("{} {:#}", red.apply_to("Error:"), err);
            ExitCode::FAILURE
        }
    }
}
