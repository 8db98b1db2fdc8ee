//! Logging initialization for the CLI
//!
//! Maps repeated `-v` flags to an `EnvFilter` level; `RUST_LOG` wins when
//! set. Diagnostics go to stderr so machine-readable output on stdout
//! stays clean.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub fn init(verbosity: u8, quiet: bool) -> Result<()> {
    let default_directive = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
