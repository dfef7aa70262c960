#![forbid(unsafe_code)]

use crate::cli::LogFormat;
use crate::commands::AdminError;
use tracing_subscriber::EnvFilter;

/// RUST_LOG wins; otherwise the configured level applies. Logs go to stderr so
/// command output on stdout stays machine-readable.
pub fn init(level: &str, format: LogFormat) -> Result<(), AdminError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|err| AdminError::Logging(format!("invalid log level {level:?}: {err}")))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|err| AdminError::Logging(err.to_string()))
}
