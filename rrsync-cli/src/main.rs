//! rrsync — Radio Record stations playlist sync CLI.
//!
//! # Usage
//!
//! ```text
//! rrsync [OUTPUT]
//! ```
//!
//! Backs up `OUTPUT` (default `rr_stations.xspf`), rewrites it from the
//! stations catalog and prints which stations were added or removed.

mod commands;

use anyhow::Result;
use clap::Parser;

use commands::sync::SyncArgs;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "rrsync",
    version,
    about = "Build an XSPF playlist from the Radio Record stations catalog",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    sync: SyncArgs,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    cli.sync.run()
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
