//! sheetpair - Paired-series transforms over two spreadsheets

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing_subscriber::EnvFilter;

use sheetpair::config::{Config, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use sheetpair::pipeline;
use sheetpair::report::{Outcome, Reporter};

/// Multiply, divide and concatenate the series of two spreadsheets and report the result
#[derive(Parser, Debug)]
#[command(name = "sheetpair")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// First spreadsheet (left operand)
    first_file: PathBuf,

    /// Second spreadsheet (right operand)
    second_file: PathBuf,

    /// Collector URL the report is posted to
    #[arg(long, env = "SHEETPAIR_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Identifier sent with the report
    #[arg(long, env = "SHEETPAIR_ID", default_value = "")]
    id: String,

    /// For Excel files: which sheet to read
    #[arg(long)]
    sheet: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Print the JSON payload instead of posting it
    #[arg(long)]
    dry_run: bool,

    /// Pretty-print the payload (with --dry-run)
    #[arg(long)]
    pretty: bool,

    /// Disable colored status output
    #[arg(long)]
    no_color: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<bool> {
    let color = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    let mut config = Config::new(cli.first_file, cli.second_file)
        .with_endpoint(cli.endpoint)
        .with_id(cli.id)
        .with_timeout_secs(cli.timeout)
        .with_dry_run(cli.dry_run)
        .with_pretty(cli.pretty);
    if let Some(sheet) = cli.sheet {
        config = config.with_sheet_name(sheet);
    }

    let payload = pipeline::compute(&config).with_context(|| {
        format!(
            "Failed to compute report from {} and {}",
            config.first_file.display(),
            config.second_file.display()
        )
    })?;

    if config.dry_run {
        let json = if config.pretty {
            payload.to_json_pretty()?
        } else {
            payload.to_json()?
        };
        println!("{}", json);
        return Ok(true);
    }

    let reporter = Reporter::new(&config.endpoint, Duration::from_secs(config.timeout_secs))
        .context("Failed to build HTTP client")?;
    let outcome = reporter
        .submit(&payload)
        .with_context(|| format!("Failed to post report to {}", reporter.endpoint()))?;

    print_outcome(&outcome, color)?;
    Ok(outcome.is_success())
}

fn print_outcome(outcome: &Outcome, color: ColorChoice) -> Result<()> {
    let mut stdout = StandardStream::stdout(color);
    let fg = if outcome.is_success() {
        Color::Green
    } else {
        Color::Red
    };
    stdout.set_color(ColorSpec::new().set_fg(Some(fg)))?;
    writeln!(stdout, "{}", outcome)?;
    stdout.reset()?;
    Ok(())
}
