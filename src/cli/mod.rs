//! CLI module for the admin client.
//!
//! # Usage
//!
//! ```ignore
//! use lostfound_admin::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! runtime.block_on(run_cli_command(command, &config))?;
//! ```

pub mod args;
pub mod commands;
pub mod version;

pub use args::{parse_args, CliCommand, ListTarget};
pub use commands::USAGE;
pub use version::{handle_version_command, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::{Report, Result};

use crate::error::{AdminError, ApiError};
use crate::startup::AdminConfig;

/// Run a parsed command against the configured backend.
///
/// The `Version` command never returns as it calls `std::process::exit(0)`.
pub async fn run_cli_command(command: CliCommand, config: &AdminConfig) -> Result<()> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => println!("{}", USAGE),
        CliCommand::Routes { flat } => {
            println!("{}", commands::render_routes(&config.routes, &[], flat)?);
        }
        CliCommand::Login { name, password } => {
            let password = match password {
                Some(password) => password,
                None => commands::prompt_password()?,
            };
            let client = commands::build_client(config)?;
            println!("{}", commands::login(&client, &name, &password).await?);
        }
        CliCommand::Info => {
            let client = commands::build_client(config)?;
            println!("{}", commands::info(&client, &config.routes).await?);
        }
        CliCommand::List(target) => {
            let client = commands::build_client(config)?;
            println!("{}", commands::list(&client, target).await?);
        }
        CliCommand::Invalid(message) => {
            return Err(eyre!("{}\n\n{}", message, USAGE));
        }
    }
    Ok(())
}

/// Terminal message for a failed command, with a recovery hint when the
/// failure is one of ours.
pub fn describe_error(report: &Report) -> String {
    if let Some(err) = report.downcast_ref::<AdminError>() {
        return err.user_message();
    }
    if let Some(err) = report.downcast_ref::<ApiError>() {
        return format!("{}\n{}", err, err.category().recovery_hint());
    }
    report.to_string()
}
