//! Tracing setup for the CLI.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initialize the global subscriber.
///
/// The default level comes from the `-v` count; the config filter, then the
/// `TAC_LOG` env var, override it. Logs go to stderr so they never mix with
/// command feedback on stdout.
pub fn init(verbosity: u8, logging: &LoggingConfig) {
    if !logging.stdout {
        return;
    }

    let default: Directive = logging
        .filter
        .as_deref()
        .and_then(|filter| filter.parse().ok())
        .unwrap_or_else(|| level_from_verbosity(verbosity).into());
    let filter = EnvFilter::builder()
        .with_default_directive(default)
        .with_env_var("TAC_LOG")
        .from_env_lossy();

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn level_from_verbosity(verbosity: u8) -> tracing::metadata::LevelFilter {
    match verbosity {
        0 => tracing::metadata::LevelFilter::ERROR,
        1 => tracing::metadata::LevelFilter::INFO,
        _ => tracing::metadata::LevelFilter::DEBUG,
    }
}
