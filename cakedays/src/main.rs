#![forbid(unsafe_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use cakedays::core::Settings;
use cakedays::{io, plan_roster_file};
use clap::{ArgAction, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "cakedays")]
#[command(version)]
#[command(about = "Get CSV output with details of employee birthday cakes for the current year")]
struct Cli {
    /// Roster file: one `Name,yyyy-mm-dd` per line (.txt or .csv)
    file: PathBuf,

    /// Year to schedule (defaults to the current year)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1900..=2198))]
    year: Option<u16>,

    /// Directory the CSV is written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    quiet: bool,
}

fn default_log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(cli.verbose, cli.quiet)));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Validate the roster, print the title, then plan and report.  Errors
/// raised while reading the roster therefore appear under the title.
fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    if let Some(year) = cli.year {
        Settings::instance().set_processing_year(year);
    }

    io::validate_roster_path(&cli.file)?;
    io::write_banner(out)?;
    out.flush()?;

    let today = chrono::Local::now().date_naive();
    let planned = plan_roster_file(&cli.file, &cli.output_dir, today)?;
    let csv_path = std::fs::canonicalize(&planned.csv_path)
        .with_context(|| format!("resolving {}", planned.csv_path.display()))?;

    io::write_report(out, &planned.schedule, &csv_path)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);
    tracing::debug!(?cli, "parsed arguments");

    let stdout = std::io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Exception: {e:#}");
            ExitCode::FAILURE
        }
    }
}
