use zootopia_core::logging;

mod cli;

use crate::cli::Outcome;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    match cli::run_from_args() {
        Ok(Outcome::Written(report)) => {
            tracing::debug!(?report, "run finished");
        }
        Ok(Outcome::Quit) => {
            tracing::info!("user quit");
        }
        Err(err) => {
            eprintln!("zootopia error: {:#}", err);
            std::process::exit(1);
        }
    }
}
