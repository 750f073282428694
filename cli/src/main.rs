use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use restful_cli::{Cli, Dispatcher, UreqTransport};
use restful_core::ClientConfig;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so stdout carries only the command's output.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let dispatcher = Dispatcher::new(ClientConfig::default(), UreqTransport::new());
    let mut out = io::stdout().lock();
    let outcome = dispatcher.dispatch(&cli.into_request(), &mut out)?;
    out.flush()?;

    Ok(outcome.into())
}
