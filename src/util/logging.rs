//! Logging setup for host processes
//!
//! The library itself only emits `tracing` events; hosts that do not
//! already run a `tracing` subscriber can use this module to get console
//! output. Initialization is `Once`-guarded and respects `RUST_LOG` when
//! it is set.

use std::env;
use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Console logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display.
    pub level: Level,

    /// Include the module target (e.g. `tracegate::runner`) in logs.
    pub include_target: bool,

    /// Include file and line number information.
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }
}

/// Parses a log level from a string, defaulting to INFO for unknown
/// values.
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Initializes the `tracing` subscriber. Only the first call has an
/// effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        if env::var("RUST_LOG").is_err() {
            filter = filter.add_directive(
                format!("tracegate={}", config.level)
                    .parse()
                    .expect("static directive"),
            );
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(config.include_target)
                    .with_file(config.include_location)
                    .with_line_number(config.include_location)
                    .with_writer(std::io::stderr),
            )
            .init();
    });
}

/// Initializes logging with the default configuration.
pub fn init_default() {
    init_logging(LoggingConfig::default());
}

/// Initializes logging from `TRACEGATE_LOG_LEVEL`, falling back to the
/// default configuration.
pub fn init_from_env() {
    let level_str = env::var("TRACEGATE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    init_logging(LoggingConfig::with_level(parse_level(&level_str)));
}
