// ABOUTME: Logging configuration and structured logging setup for the calculator
// ABOUTME: Configures log level and output format; all log output goes to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Logs are written to stderr so that command output on stdout stays
//! machine-readable.

use anyhow::{anyhow, Result};
use std::env;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name attached to startup logs
pub const SERVICE_NAME: &str = "caloric-calculator";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Plain log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Force this crate to `level` even when `RUST_LOG` holds its own directives
    pub verbose: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines
    Json,
    /// Full human readable output with targets
    Pretty,
    /// Single-line human readable output
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything unknown falls back to compact
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            verbose: false,
            service_name: SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// `level` is taken from `RUST_LOG` only when it names a single level;
    /// compound directives are still honoured by the filter.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var("RUST_LOG")
                .ok()
                .and_then(|value| parse_level(&value))
                .unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT").map_or(defaults.format, |v| LogFormat::from_name(&v)),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            ..defaults
        }
    }

    /// Raise this crate to `debug` unless it is already more verbose
    #[must_use]
    pub fn verbose(mut self) -> Self {
        if !matches!(self.level.as_str(), "trace" | "debug") {
            self.level = "debug".into();
        }
        self.verbose = true;
        self
    }

    /// Filter directives for the given `RUST_LOG` value
    ///
    /// Without `RUST_LOG` the plain level applies globally. With it, the
    /// user's directives are kept as is, and a crate directive is appended
    /// only in verbose mode.
    #[must_use]
    pub fn filter_directives(&self, rust_log: Option<&str>) -> String {
        match rust_log.map(str::trim).filter(|value| !value.is_empty()) {
            None => self.level.clone(),
            Some(directives) if self.verbose => {
                format!("{directives},caloric_calculator={}", self.level)
            }
            Some(directives) => directives.to_owned(),
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let directives = self.filter_directives(env::var("RUST_LOG").ok().as_deref());
        let registry = tracing_subscriber::registry().with(EnvFilter::new(directives));

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        installed.map_err(|e| anyhow!("Failed to initialize tracing subscriber: {e}"))?;

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        debug!(
            include_location = self.include_location,
            verbose = self.verbose,
            "Logging features"
        );
    }
}

/// Parse a single level name (case-insensitive); `None` for compound directives
#[must_use]
pub fn parse_level(value: &str) -> Option<String> {
    value
        .trim()
        .parse::<tracing::Level>()
        .ok()
        .map(|level| level.as_str().to_ascii_lowercase())
}
