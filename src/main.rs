use lostfound_admin::cli::{
    describe_error, handle_version_command, parse_args, run_cli_command, CliCommand,
};
use lostfound_admin::startup::{init_tracing, AdminConfig};

use color_eyre::Result;

fn main() -> Result<()> {
    let command = parse_args(std::env::args());

    // Handle --version before any initialization
    if command == CliCommand::Version {
        handle_version_command();
    }

    color_eyre::install()?;

    let config = AdminConfig::load()?;
    init_tracing(&config.log_level);
    tracing::debug!(api = %config.api_base_url, ?command, "Starting");

    let runtime = tokio::runtime::Runtime::new()?;
    if let Err(report) = runtime.block_on(run_cli_command(command, &config)) {
        tracing::debug!(error = ?report, "Command failed");
        eprintln!("Error: {}", describe_error(&report));
        std::process::exit(1);
    }
    Ok(())
}
