use clap::Parser;
use wishlinks_core::logging;

mod cli;
mod signal;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible; stdout stays reserved for the URL.
    if let Err(err) = logging::init_logging(cli.verbose) {
        logging::init_logging_stderr(cli.verbose);
        tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
    }

    let lookup = tokio::task::spawn_blocking(move || cli.run());
    let outcome = tokio::select! {
        joined = lookup => joined.map_err(anyhow::Error::from).and_then(|r| r),
        name = signal::shutdown_signal() => {
            tracing::info!("received {}, aborting", name);
            Err(anyhow::anyhow!("interrupted by {}", name))
        }
    };

    match outcome {
        Ok(url) => println!("{}", url),
        Err(err) => {
            tracing::error!("{:#}", err);
            eprintln!("wishlinks error: {:#}", err);
            std::process::exit(1);
        }
    }
}
