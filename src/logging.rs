use tracing_subscriber::EnvFilter;

use crate::error::{PlanError, Result};

/// Install the global `tracing` subscriber.
///
/// Output goes to stderr so reports on stdout stay clean. `RUST_LOG` wins when
/// set; otherwise the level is `debug` with `verbose` and `warn` without.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| PlanError::Logging(e.to_string()))
}
