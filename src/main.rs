//! diego-enabler - toggle and list the Diego runtime flag on platform applications

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod toggle;

use cli::app::Runtime;
use cli::{Cli, Commands, GlobalOptions};
use error::{Error, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        report(&err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::EnableDiego { app_name } => cli::diego::set(&opts, &app_name, true).await,
        Commands::DisableDiego { app_name } => cli::diego::set(&opts, &app_name, false).await,
        Commands::HasDiegoEnabled { app_name } => cli::diego::has_enabled(&opts, &app_name).await,
        Commands::DiegoApps => cli::app::list(&opts, Runtime::Diego).await,
        Commands::DeaApps => cli::app::list(&opts, Runtime::Dea).await,
    }
}

fn report(err: &Error) {
    output::say_failed();
    match err {
        Error::AppNotFound(_) | Error::Diverged { .. } => eprintln!("{}", err),
        _ => eprintln!("Error: {}", err),
    }
    for line in err.output_lines() {
        eprintln!("{}", line);
    }
}
