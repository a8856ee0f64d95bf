//! Tracing subscriber setup
//!
//! Logs go to stderr so `--json` output on stdout stays parseable.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{CliError, Result};

/// Install the global subscriber.
///
/// `verbose` forces `DEBUG`; otherwise `RUST_LOG` decides, defaulting to `warn`.
pub fn init(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::default().add_directive(LevelFilter::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn")).map_err(
            |e| CliError::Logging {
                message: e.to_string(),
            },
        )?
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Logging {
            message: e.to_string(),
        })
}
