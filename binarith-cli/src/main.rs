use std::io;

use binarith_cli::{log_level, run, session, Cli};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run(&cli, &mut stdin.lock(), &mut stdout.lock());

    // Exit status stays 0; failures are only reported.
    if let Err(err) = result {
        eprintln!("{}", session::error_message(&err));
    }
}
