//! Main application entry point.

use clap::Parser;
use ideae_app::Cli;

fn main() {
    env_logger::init();
    log::info!("Starting Ideae");

    let cli = Cli::parse();
    match cli.run() {
        Ok(output) => println!("{output}"),
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
