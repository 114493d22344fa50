//! Tutorial runner CLI
//!
//! Runs one pre-built query against the tutorial keyspace and logs the result.
//!
//! ## Usage
//!
//! ```bash
//! tutorial-runner get
//! tutorial-runner get_indexed_slices
//! RUST_LOG=debug tutorial-runner multiget_slice
//! ```

use clap::Parser;
use tracing::{debug, error};
use tutorial_core::config::ClusterConfig;
use tutorial_runner::{ConnectionContext, run};

#[derive(Parser)]
#[command(name = "tutorial-runner")]
#[command(about = "Runs one of the column-family tutorial queries")]
struct Cli {
    /// get, get_slice, get_range_slices, get_slice_acc, get_slice_sc,
    /// multiget_slice or get_indexed_slices (case-insensitive)
    command: String,
}

fn main() {
    tutorial_core::logging::init();
    let cli = Cli::parse();

    let config = ClusterConfig::default();
    let context = match ConnectionContext::open(&config) {
        Ok(context) => context,
        Err(e) => {
            error!("Unable to open connection context: {}", e);
            return;
        }
    };

    let outcome = run(&cli.command, context);
    debug!(?outcome, "Finished");
}
