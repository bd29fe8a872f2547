//! Logging bootstrap for the bookstore service.

use tracing_subscriber::EnvFilter;

use bookstore_kernel::settings::{LogFormat, TelemetrySettings};

/// Install the global tracing subscriber once at startup.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match settings.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    installed.map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}
