//! dsmadmc Runner - Main entry point
//!
//! Thin front end over the library pipeline: read the JSON parameter
//! file the host engine hands over, run the invocation, print the flat
//! JSON envelope on stdout and exit with the mapped code.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use dsmadmc_runner::cli::Cli;
use dsmadmc_runner::host::{run_module, HostContext};
use dsmadmc_runner::params::RawParams;
use dsmadmc_runner::runner::SystemRunner;

/// Initialize the logger with appropriate settings
fn init_logger() {
    use env_logger::Builder;
    use std::io::Write;

    Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env() // Allows RUST_LOG env var to override
        .init();
}

/// Read and deserialize the parameter file ("-" for stdin).
fn read_params(path: &Path) -> Result<RawParams> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read parameters from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read parameter file {:?}", path))?
    };

    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse parameter file {:?}", path))
}

fn main() -> Result<()> {
    init_logger();
    info!("dsmadmc runner starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    let params = read_params(&cli.params_file)?;
    let ctx = HostContext {
        check_mode: cli.check,
    };

    let response = run_module(params, &ctx, &SystemRunner);
    println!("{}", response.to_json());

    std::process::exit(response.exit_code());
}
