//! CLI command definitions and handlers

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

pub mod app;
pub mod args;
pub mod context;
pub mod diego;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// Enable, disable and list the Diego runtime flag on platform applications
#[derive(Parser, Debug)]
#[command(name = "diego-enabler")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format for app listings (table, json)
    #[arg(
        long,
        global = true,
        env = "DIEGO_ENABLER_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "DIEGO_ENABLER_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API endpoint from the config file
    #[arg(long, global = true, env = "DIEGO_ENABLER_API", hide_env = true)]
    pub api: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "DIEGO_ENABLER_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = COMMANDS[0].help)]
    EnableDiego {
        /// Application name
        #[arg(value_name = "APP_NAME")]
        app_name: String,
    },

    #[command(about = COMMANDS[1].help)]
    DisableDiego {
        /// Application name
        #[arg(value_name = "APP_NAME")]
        app_name: String,
    },

    #[command(about = COMMANDS[2].help)]
    HasDiegoEnabled {
        /// Application name
        #[arg(value_name = "APP_NAME")]
        app_name: String,
    },

    #[command(about = COMMANDS[3].help)]
    DiegoApps,

    #[command(about = COMMANDS[4].help)]
    DeaApps,
}

/// Name, help text and usage line of one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: &'static str,
    pub help: &'static str,
    pub usage: &'static str,
}

/// Every command the tool answers to.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "enable-diego",
        help: "enable Diego support for an app",
        usage: "diego-enabler enable-diego APP_NAME",
    },
    CommandInfo {
        name: "disable-diego",
        help: "disable Diego support for an app",
        usage: "diego-enabler disable-diego APP_NAME",
    },
    CommandInfo {
        name: "has-diego-enabled",
        help: "Check if Diego support is enabled for an app",
        usage: "diego-enabler has-diego-enabled APP_NAME",
    },
    CommandInfo {
        name: "diego-apps",
        help: "Lists all apps running on the Diego runtime that are visible to the user",
        usage: "diego-enabler diego-apps",
    },
    CommandInfo {
        name: "dea-apps",
        help: "Lists all apps running on the DEA runtime that are visible to the user",
        usage: "diego-enabler dea-apps",
    },
];

/// Usage line for a command invoked with the wrong arguments.
///
/// Returns `None` when the parse error is not an argument-count problem or
/// no known command name appears in `args`.
pub fn invalid_usage(args: &[String], kind: ErrorKind) -> Option<&'static str> {
    let wrong_arity = matches!(
        kind,
        ErrorKind::MissingRequiredArgument
            | ErrorKind::UnknownArgument
            | ErrorKind::TooManyValues
            | ErrorKind::WrongNumberOfValues
    );
    if !wrong_arity {
        return None;
    }

    args.iter().find_map(|arg| {
        COMMANDS
            .iter()
            .find(|cmd| cmd.name == arg.as_str())
            .map(|cmd| cmd.usage)
    })
}

/// Parse the process arguments, exiting on bad input.
///
/// A known command with the wrong number of arguments prints its usage line
/// and exits non-zero without doing anything. Other parse failures, help and
/// version requests are handled by clap.
pub fn parse() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // The rejected argument may not be valid UTF-8.
            let args: Vec<String> = std::env::args_os()
                .skip(1)
                .map(|a| a.to_string_lossy().into_owned())
                .collect();
            match invalid_usage(&args, err.kind()) {
                Some(usage) => {
                    eprintln!("Invalid Usage:\n  {}", usage);
                    std::process::exit(1);
                }
                None => err.exit(),
            }
        }
    }
}
