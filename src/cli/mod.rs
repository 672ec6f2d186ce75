pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    match &cli.command {
        Some(command @ types::Commands::Process { .. }) => {
            commands::handle_process_command(command);
        }
        None => {
            // Default to processing stdin when no subcommand is given
            log::debug!("No command given, processing stdin with defaults");
            commands::handle_default_command();
        }
    }
}
