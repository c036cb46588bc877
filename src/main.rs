use std::process::ExitCode;

use clap::Parser;

use marsbots::{bot, cli::Cli, extension::builtin};

#[tokio::main]
async fn main() -> ExitCode {
    let options = Cli::parse().into_launch_options();
    let registry = builtin::registry();

    match bot::start::start(options, &registry).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
