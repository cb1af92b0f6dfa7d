//! http-probe command-line entry point.
//!
//! Races `HEAD` requests against every URL given and prints the outcome as
//! JSON on stdout. A one-line summary goes to stderr.
//!
//! ```text
//! http-probe --timeout 2s https://deb.debian.org https://ftp.debian.org
//! http-probe --mode first --config probe.toml https://a.example https://b.example
//! ```

use clap::{Parser, ValueEnum};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use http_probe::config::{load_config, ProbeConfig};
use http_probe::observability::logging;
use http_probe::{ProbeError, Race};

#[derive(Parser)]
#[command(name = "http-probe")]
#[command(about = "Find the fastest responding URLs", long_about = None)]
struct Cli {
    /// Selection timeout (e.g. 30s, 250ms). Overrides the config file.
    #[arg(short, long, value_parser = parse_timeout)]
    timeout: Option<Duration>,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Selection policy.
    #[arg(short, long, value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// URLs to probe.
    #[arg(required = true, num_args = 1..)]
    urls: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Every URL that answered, in the order they answered
    All,
    /// The fastest URL
    First,
    /// Position of the fastest URL in the argument list
    Index,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), e);
                return ExitCode::from(2);
            }
        },
        None => ProbeConfig::default(),
    };

    logging::init(&config.observability.log_level);

    let mut race = Race::new(&cli.urls).settings(config.probe.clone());
    if let Some(timeout) = cli.timeout {
        race = race.timeout(timeout);
    }

    let (report, error) = match cli.mode {
        Mode::All => {
            let survey = race.all().await;
            eprintln!(
                "{} responses: error={}",
                survey.probes.len(),
                describe(survey.error.as_ref())
            );
            (json!(survey.probes), None)
        }
        Mode::First => match race.first().await {
            Ok(endpoint) => (json!({ "url": endpoint }), None),
            Err(e) => (json!({ "url": null }), Some(e)),
        },
        Mode::Index => match race.first_index().await {
            Ok(idx) => (json!({ "index": idx }), None),
            Err(e) => (json!({ "index": null }), Some(e)),
        },
    };

    if cli.mode != Mode::All {
        let found = usize::from(error.is_none());
        eprintln!("{} responses: error={}", found, describe(error.as_ref()));
    }

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };
    match rendered {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error: failed to encode output: {e}");
            return ExitCode::FAILURE;
        }
    }

    if error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// A humantime duration that leaves room for at least one request.
fn parse_timeout(arg: &str) -> Result<Duration, String> {
    let timeout = humantime::parse_duration(arg).map_err(|e| e.to_string())?;
    if timeout.is_zero() {
        return Err("must be greater than zero".to_string());
    }
    Ok(timeout)
}

fn describe(error: Option<&ProbeError>) -> String {
    error.map_or_else(|| "none".to_string(), ToString::to_string)
}
