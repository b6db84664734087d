//! Logging and tracing configuration
//!
//! This module provides centralized logging configuration for the roster
//! simulator binary and for embedders that want the same defaults.

use std::io;
use tracing::Level;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Whether to emit JSON-formatted log lines
    pub json_format: bool,
    /// Log file directory; file logging is enabled when set
    pub log_directory: Option<String>,
    /// Log file prefix for the rolling appender
    pub log_file_prefix: String,
    /// Whether to enable span events
    pub enable_span_events: bool,
    /// Custom environment filter overriding the level
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            log_directory: None,
            log_file_prefix: "employee-roster-simulator".to_string(),
            enable_span_events: false,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON formatting
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Enable rolling file logging into the given directory
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// Enable span events
    pub fn with_span_events(mut self) -> Self {
        self.enable_span_events = true;
        self
    }

    /// Set a custom environment filter
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Initialize the global tracing subscriber
    pub fn init(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = if let Some(filter) = &self.env_filter {
            EnvFilter::try_new(filter)?
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(format!(
                    "{}={}",
                    env!("CARGO_PKG_NAME").replace('-', "_"),
                    self.level
                ))
            })
        };

        let registry = Registry::default().with(env_filter);

        if let Some(log_dir) = &self.log_directory {
            let file_appender = rolling::daily(log_dir, &self.log_file_prefix);
            let (file_writer, _guard) = non_blocking(file_appender);

            // File output is always JSON; the console stays readable.
            let file_layer = fmt::layer().json().with_writer(file_writer).with_span_events(
                if self.enable_span_events { FmtSpan::FULL } else { FmtSpan::NONE },
            );
            let console_layer = fmt::layer().with_writer(io::stderr).with_span_events(
                if self.enable_span_events { FmtSpan::FULL } else { FmtSpan::NONE },
            );

            registry.with(file_layer).with(console_layer).init();
        } else if self.json_format {
            let console_layer = fmt::layer().json().with_writer(io::stderr).with_span_events(
                if self.enable_span_events { FmtSpan::FULL } else { FmtSpan::NONE },
            );
            registry.with(console_layer).init();
        } else {
            let console_layer = fmt::layer().with_writer(io::stderr).with_span_events(
                if self.enable_span_events { FmtSpan::FULL } else { FmtSpan::NONE },
            );
            registry.with(console_layer).init();
        }

        Ok(())
    }

    /// Initialize verbose (info-level) logging
    pub fn init_verbose() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Self::new().with_level(Level::INFO).init()
    }

    /// Initialize debug-level logging with span events
    pub fn init_debug() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Self::new().with_level(Level::DEBUG).with_span_events().init()
    }
}
