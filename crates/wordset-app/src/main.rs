use std::io;
use std::process::ExitCode;

use clap::Parser;
use wordset_config::Config;

pub mod cli;
pub mod commands;
pub mod logging;

use self::cli::Cli;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::new();
    logging::init(&config.log, cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match commands::run(cli.command.unwrap_or_default(), &config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("exiting with failure: {e:#}");
            ExitCode::FAILURE
        }
    }
}
