//! Logging setup for the shell.
//!
//! Events go to stderr so they never interleave with command output on
//! stdout.

use anyhow::{anyhow, Context};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LEVEL: &str = "warn";

/// Builds the filter: explicit directive, else `RUST_LOG`, else [`DEFAULT_LEVEL`].
pub fn filter(level: Option<&str>) -> anyhow::Result<EnvFilter> {
    match level {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log level '{}'", directive)),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))),
    }
}

/// Installs the global subscriber.
pub fn init(level: Option<&str>) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(filter(level)?)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn explicit_level_is_used() {
        let filter = filter(Some("debug")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn per_crate_directives_are_accepted() {
        assert!(filter(Some("meeple_seeker=debug,warn")).is_ok());
    }

    #[test]
    fn malformed_level_is_an_error() {
        let err = filter(Some("meeple=loud")).unwrap_err();
        assert!(err.to_string().contains("invalid log level"));
    }
}
