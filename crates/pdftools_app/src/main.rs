mod platform;

use std::process::ExitCode;

use clap::Parser;

fn main() -> anyhow::Result<ExitCode> {
    let cli = platform::cli::Cli::parse();
    platform::run_app(cli)
}
