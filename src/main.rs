//! tandem CLI entry point
//!
//! # Examples
//!
//! ```bash
//! # Which documents mention either keyword?
//! tandem search deep world --docs corpus/docs.txt --noise corpus/noise.txt
//!
//! # Index statistics
//! tandem stats --docs corpus/docs.txt --noise corpus/noise.txt
//!
//! # Show configuration
//! tandem show-config
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tandem::cli::{output, run, Cli};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tandem=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
