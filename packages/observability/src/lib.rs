//! # Observability
//!
//! Logging initialization shared by the vault CLI crates.
//!
//! Binaries call [`init_with_config`] once at startup and use standard
//! `tracing` macros everywhere else. Library crates never install a
//! subscriber themselves.
//!
//! ## Default mode
//!
//! Compact human-readable lines on stderr, filtered by `RUST_LOG` or the
//! configured default level. Stdout stays reserved for command output.
//!
//! ## Dev mode
//!
//! With the `dev` feature enabled, structured JSONL is appended to
//! `~/.vault/logs/dev.jsonl` so several invocations can be followed with
//! `tail -f ~/.vault/logs/dev.jsonl | jq`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! fn main() {
//!     observability::init_with_config(observability::LogConfig {
//!         service_name: "cli".into(),
//!         default_level: "warn".into(),
//!         ..Default::default()
//!     });
//!
//!     tracing::info!("ready");
//! }
//! ```

#[cfg(feature = "dev")]
mod dev;

use std::path::PathBuf;

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Name of the service (e.g., "cli").
    /// Recorded in the dev-mode startup line.
    pub service_name: String,

    /// Default log level filter (e.g., "debug", "info", "warn").
    /// Can be overridden by `RUST_LOG` environment variable.
    pub default_level: String,

    /// Optional custom log file path.
    /// Defaults to `~/.vault/logs/dev.jsonl` in dev mode.
    pub log_path: Option<PathBuf>,

    /// Also emit logs to stderr when writing to the dev log file.
    pub also_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            service_name: "unknown".into(),
            default_level: "info".into(),
            log_path: None,
            also_stderr: false,
        }
    }
}

/// Initialize the observability layer with custom configuration.
///
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
pub fn init_with_config(config: LogConfig) {
    #[cfg(feature = "dev")]
    {
        dev::init_dev_subscriber(&config);
        return;
    }

    #[cfg(not(feature = "dev"))]
    {
        use tracing_subscriber::util::SubscriberInitExt;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter(&config.default_level))
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
            .finish()
            .try_init();
    }
}

/// Build the level filter from `RUST_LOG`, falling back to `default_level`.
fn env_filter(default_level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level))
}

/// Re-export tracing macros for convenience.
/// Services can use `observability::info!()` or `tracing::info!()`.
pub use tracing::{debug, error, info, instrument, trace, warn};

/// Re-export Level for advanced filtering.
pub use tracing::Level;
