use chess_moves::cli::{init_tracing, run, Cli, Command};
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::error;

// Author: Renier Barnard

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command.unwrap_or(Command::Interactive), &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            e.print_stderr();
            ExitCode::FAILURE
        }
    }
}
