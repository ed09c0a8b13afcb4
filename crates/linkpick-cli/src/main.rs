use linkpick_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    if let Err(file_err) = logging::init_logging() {
        match logging::init_logging_stderr() {
            Ok(()) => tracing::warn!("file logging unavailable, using stderr: {file_err:#}"),
            Err(err) => eprintln!("linkpick: logging disabled: {err:#}"),
        }
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("linkpick error: {:#}", err);
        std::process::exit(1);
    }
}
