//! The `volley` binary
//!
//! Seeds the probe table, runs the burst schedule against an embedded
//! SQLite database, and always closes the connection on the way out.
//! Outcomes land in the log stream; read it for contention symptoms
//! (unexpected commit failures, lock-wait warnings). The exit status is
//! non-zero only when the run could not be executed at all.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use volley_client::SqliteClient;
use volley_core::{ProbeConfig, Result, SystemClock, CONFIG_FILE_NAME};
use volley_driver::{policy, run_bursts, seed_items};

#[derive(Debug, Parser)]
#[command(
    name = "volley",
    about = "Write-transaction burst probe for embedded SQL databases"
)]
struct Args {
    /// Database file to probe (created if absent).
    #[arg(default_value = "volley.db")]
    database: PathBuf,

    /// Probe configuration file. Without this flag, `volley.toml` in the
    /// working directory is used when present, else built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "probe run failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut client = SqliteClient::open(&args.database)?;

    seed_items(&client, &config);
    run_bursts(&mut client, &config, &SystemClock);

    // Cleanup runs on every path that reaches a client; close failures are
    // logged, never escalated.
    policy::ignore_and_log("close connection", client.close());
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ProbeConfig> {
    match path {
        Some(path) => ProbeConfig::load(path),
        None => {
            let fallback = Path::new(CONFIG_FILE_NAME);
            if fallback.exists() {
                ProbeConfig::load(fallback)
            } else {
                Ok(ProbeConfig::default())
            }
        }
    }
}
