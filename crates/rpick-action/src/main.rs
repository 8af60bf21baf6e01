use std::{io, process::ExitCode};

use clap::{Parser, error::ErrorKind};

use rpick_github::GithubInventory;
use rpick_observe::init_logger;

mod app;
mod cli;
mod commands;
mod inputs;
mod outputs;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = app::fail(&e.to_string(), &mut io::stdout().lock());
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logger(&cli.logger_config()) {
        eprintln!("logger init failed: {e}");
    }

    let outcome = app::execute(&cli, |inputs| GithubInventory::new(inputs.github.clone())).await;
    match app::report(&outcome, &mut io::stdout().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
