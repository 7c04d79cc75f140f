use anyhow::{Context, Result};
use clap::Parser;
use common_greet::{greet, DEFAULT_NAME, VERSION};
use std::ffi::OsString;
use std::io::Write;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "common-greet")]
#[command(about = "Print a greeting from the common module")]
#[command(version = VERSION)]
struct Cli {
    /// Name to greet
    #[arg(default_value = DEFAULT_NAME)]
    name: OsString,
}

/// Diagnostics go to stderr so stdout only ever carries the greeting.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    // Invalid UTF-8 is replaced rather than rejected.
    let name = cli.name.to_string_lossy();
    debug!(%name, "Rendering greeting");

    writeln!(out, "{}", greet(&name)).context("Failed to write greeting to stdout")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = run(cli, &mut std::io::stdout().lock()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
