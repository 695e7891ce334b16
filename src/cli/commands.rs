//! Command execution and usage handling

use clap::error::ErrorKind;
use clap::CommandFactory;
use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::exitcode;
use crate::infrastructure::di::ServiceContainer;

/// Dispatch the parsed command and return the process exit code.
///
/// Delegate exit codes pass through unchanged; `help` and a missing
/// command both print usage, with exit codes 0 and 1 respectively.
pub fn execute_command(cli: &Cli, services: &ServiceContainer) -> CliResult<i32> {
    match &cli.command {
        Some(Commands::Import { args }) => Ok(services.router.import(args)?),
        Some(Commands::Fetch { args }) => Ok(services.router.fetch(args)?),
        Some(Commands::Help { .. }) => {
            print_usage();
            Ok(exitcode::OK)
        }
        None => {
            print_usage();
            Ok(exitcode::USAGE)
        }
    }
}

/// Print usage text to stdout.
pub fn print_usage() {
    let mut cmd = Cli::command();
    println!("{}", cmd.render_help());
}

/// Map a clap parse error to an exit code.
///
/// `--help`/`--version` print their own output and exit 0; anything else
/// (unknown subcommand, stray flags) degrades to usage on stdout and 1.
pub fn handle_parse_error(err: clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            exitcode::OK
        }
        kind => {
            debug!("argument parsing failed: {:?}", kind);
            print_usage();
            exitcode::USAGE
        }
    }
}
