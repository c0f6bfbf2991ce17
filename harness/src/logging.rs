//! Subscriber setup for the `glucopath` binary.
//!
//! Libraries only emit `tracing` events; this module is the single place a
//! global subscriber gets installed. Output goes to stderr so stdout stays
//! reserved for the plan itself.
//!
//! - `info`: plan outcome, termination
//! - `debug`: one event per expansion
//! - `trace`: per-candidate decisions

use std::io;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging settings.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level for the glucopath crates. `RUST_LOG` overrides it when set.
    pub level: Level,
    /// Include timestamps.
    pub with_timestamps: bool,
    /// Include the module path of each event.
    pub with_target: bool,
    /// Colorize output. Ignored for JSON.
    pub with_ansi: bool,
    pub format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// The global subscriber could not be installed.
#[derive(Debug, thiserror::Error)]
#[error("failed to install log subscriber: {detail}")]
pub struct LoggingError {
    pub detail: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Map `-v`/`-q` counts to a level.
    ///
    /// Default is `warn`; each `-v` steps toward `trace`, `-q` drops to
    /// `error`.
    #[must_use]
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let level = if quiet {
            Level::ERROR
        } else {
            match verbose {
                0 => Level::WARN,
                1 => Level::INFO,
                2 => Level::DEBUG,
                _ => Level::TRACE,
            }
        };
        Self {
            level,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.with_timestamps = enable;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns [`LoggingError`] if a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = build_env_filter(config.level);
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_target(config.with_target),
            )
            .try_init(),
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                registry.with(layer).try_init()
            } else {
                registry.with(layer.without_time()).try_init()
            }
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                registry.with(layer).try_init()
            } else {
                registry.with(layer.without_time()).try_init()
            }
        }
    };

    result.map_err(|e| LoggingError {
        detail: e.to_string(),
    })
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!(
            "warn,glucopath={level},glucopath_harness={level},\
             glucopath_search={level},glucopath_kernel={level}"
        ))
    })
}
