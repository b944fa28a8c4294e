use clap::Parser;
use std::path::PathBuf;

/// dsmadmc runner - executes or simulates dsmadmc with validated parameters
#[derive(Parser)]
#[command(name = "dsmadmc-runner")]
#[command(about = "Compiles, executes or simulates dsmadmc administrative commands")]
#[command(version)]
pub struct Cli {
    /// Path to the JSON parameter file ("-" reads from stdin)
    pub params_file: PathBuf,

    /// Advisory/no-op mode: report what would run without side effects.
    ///
    /// The run is skipped unless simulated output is configured, in
    /// which case a simulated result is reported instead.
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
