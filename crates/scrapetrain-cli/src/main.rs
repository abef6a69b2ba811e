use scrapetrain_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the log file is unusable.
    if let Err(err) = logging::init_logging() {
        eprintln!("scrapetrain: file logging unavailable ({:#}), logging to stderr", err);
        logging::init_logging_stderr();
    }

    if let Err(err) = Cli::run_from_args() {
        eprintln!("scrapetrain error: {:#}", err);
        std::process::exit(1);
    }
}
