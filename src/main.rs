use std::{io, process::ExitCode};

use clap::Parser;
use log::debug;

use cloudmarks::{App, Cli, ContainerStore, Result, Status};

pub fn initialize_logger(verbose: bool) {
    // Logs go to stderr; stdout is reserved for bookmark output
    let default_filter = if verbose { "warn,cloudmarks=debug,mark=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    debug!("Logger initialized");
}

fn run(cli: &Cli) -> Result<Status> {
    let config = cli.config()?;
    debug!("Effective configuration: {:?}", config);

    let store = ContainerStore::new(config.open_container()?);
    let app = App::new(store);
    app.run(cli.request(), &mut io::stdout().lock())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    match run(&cli) {
        Ok(status) => status.exit_code(),
        Err(e) => {
            debug!("Request failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
