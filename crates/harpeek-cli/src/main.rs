use harpeek_core::logging;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    // Initialize logging as early as possible; a broken log dir must not stop the report.
    if let Err(err) = logging::init_logging() {
        if logging::init_logging_stderr() {
            tracing::warn!("file logging unavailable, using stderr: {:#}", err);
        }
    }

    cli::run_from_args()
}
