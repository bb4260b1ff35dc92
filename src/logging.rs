//! Tracing setup for the petersen binary.
//!
//! Diagnostics go to stderr so stdout carries only rendered graphs. Every
//! `render` span reports its busy and idle time when it closes. That span is
//! recorded at `info`, so its timing shows up from `-v` upward.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FORMAT_ENV: &str = "PETERSEN_LOG_FORMAT";

/// Target prefix shared by every event this library emits.
const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Level used when neither `RUST_LOG` nor `-v` ask for more.
/// A plain run prints only the graph.
pub const DEFAULT_LEVEL: &str = "warn";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        name: &'static str,
        #[source]
        source: env::VarError,
    },
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat { provided: String },
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Encoding of diagnostics on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Human,
    /// One object per line, with the enclosing `render` span and its `graph` field.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

impl LogFormat {
    /// Reads `PETERSEN_LOG_FORMAT`, falling back to human output when unset.
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
            Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            }),
        }
    }
}

/// Filter directives for `-v` repeated `verbosity` times.
///
/// Only this crate's targets are raised. Dependencies stay at [`DEFAULT_LEVEL`].
pub fn verbosity_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => return DEFAULT_LEVEL.to_owned(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("{},{}={}", DEFAULT_LEVEL, CRATE_TARGET, level)
}

/// Install global structured logging if it has not already been configured.
///
/// A valid `RUST_LOG` takes precedence over `verbosity`.
pub fn init_logging(verbosity: u8) -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    match install_subscriber(LogFormat::from_env()?, verbosity) {
        Ok(()) => {}
        // Another subscriber owns the global slot, keep it.
        Err(LoggingError::InstallFailed { .. }) => {}
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn install_subscriber(format: LogFormat, verbosity: u8) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directives(verbosity)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}
