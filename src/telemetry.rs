//! Tracing initialization.
//!
//! Logs go to stderr so stdout stays clean for `--json` output. `RUST_LOG`
//! overrides the level chosen by `-v`:
//!
//! ```bash
//! RUST_LOG=s3publish=debug,aws_smithy_runtime=trace s3publish publish --env=staging
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the tracing subscriber for structured logging.
pub fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let env_filter = create_env_filter(verbose)?;
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    Ok(())
}

/// Default level for a `-v` count
fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Creates an environment filter for tracing.
fn create_env_filter(verbose: u8) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level_for(verbose)))
        .map_err(|e| anyhow::anyhow!("Failed to create env filter: {e}"))
}
