//! Command-line entry point for the tally language server.
//!
//! Usage:
//!   tally-lsp [--log-level <filter>]   - Serve LSP over stdin/stdout

use clap::{Arg, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("tally-lsp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Frequency-ranked word completion language server (stdio)")
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Tracing filter for stderr diagnostics (e.g. 'debug', 'tally_lsp=trace')")
                .default_value("info"),
        )
        .get_matches();

    let filter = matches.get_one::<String>("log-level").unwrap();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = tally_lsp::server::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
