//! METAR Decoder Library
//!
//! A Rust library for decoding METAR and SPECI aviation weather observation
//! reports into structured data and rendering the decoded fields back into
//! human-readable phrases.
//!
//! This library provides tools for:
//! - Decoding the report body with an ordered pipeline of grammar-group extractors
//! - Decoding the free-form remarks trailer with a priority-scan loop
//! - Resolving the coded day/hour/minute into an absolute timestamp and cycle
//! - Unit-bearing value types (direction, speed, distance, temperature, pressure)
//! - Rendering decoded reports as human-readable text or JSON

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod decoder;
        pub mod grammar;
        pub mod renderer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Modifier, Report, ReportKind, RunwayRange, SkyLayer, WeatherCondition};
pub use app::services::decoder::{DecodeContext, Decoder};

/// Result type alias for the METAR decoder
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for METAR decoding and rendering operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The body pipeline finished with leftover, non-remarks text
    #[error("unparsed groups in report body: '{remainder}' (raw: '{raw}')")]
    UnparsedBodyGroup { raw: String, remainder: String },

    /// The coded day/hour/minute does not combine with the supplied
    /// month/year into a real calendar date
    #[error("invalid observation timestamp: {message}")]
    InvalidTimestamp { message: String },

    /// A captured code fell outside its translation table; the grammar and
    /// tables must stay in lock-step, so this is an internal fault
    #[error("unknown {table} code: '{code}'")]
    UnknownTableCode { table: &'static str, code: String },

    /// Invalid decode context or CLI input
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Report serialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create an unparsed-body-group error with the raw report and remainder
    pub fn unparsed_body_group(raw: impl Into<String>, remainder: impl Into<String>) -> Self {
        Self::UnparsedBodyGroup {
            raw: raw.into(),
            remainder: remainder.into(),
        }
    }

    /// Create an invalid-timestamp error
    pub fn invalid_timestamp(message: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            message: message.into(),
        }
    }

    /// Create an unknown-table-code error
    pub fn unknown_table_code(table: &'static str, code: impl Into<String>) -> Self {
        Self::UnknownTableCode {
            table,
            code: code.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
