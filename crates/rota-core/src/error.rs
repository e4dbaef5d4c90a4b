//! Error types and exit codes for rota
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, parse)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown vertex, undecodable bits, invalid graph document)
//!
//! "No path found", a spanning forest on a disconnected graph and empty Huffman input
//! are ordinary results, not errors.

mod macros;

use thiserror::Error;

/// Exit codes for the rota binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex, bad bits, bad weights (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during rota operations
#[derive(Error, Debug)]
pub enum RotaError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("unknown vertex: {label}")]
    UnknownVertex { label: String },

    #[error("bit sequence does not match code tree at bit {position}: {reason}")]
    DecodeMismatch { position: usize, reason: String },

    #[error("symbol has no code: {symbol}")]
    UnknownSymbol { symbol: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl RotaError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RotaError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a vertex label missing from the graph
    pub fn unknown_vertex(label: impl Into<String>) -> Self {
        RotaError::UnknownVertex {
            label: label.into(),
        }
    }

    /// Create an error for a bit sequence the code tree cannot follow
    pub fn decode_mismatch(position: usize, reason: impl Into<String>) -> Self {
        RotaError::DecodeMismatch {
            position,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RotaError::UnknownFormat(_) | RotaError::UsageError(_) => ExitCode::Usage,

            RotaError::UnknownVertex { .. }
            | RotaError::DecodeMismatch { .. }
            | RotaError::UnknownSymbol { .. }
            | RotaError::InvalidValue { .. } => ExitCode::Data,

            RotaError::Io(_)
            | RotaError::Yaml(_)
            | RotaError::Json(_)
            | RotaError::Toml(_)
            | RotaError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RotaError::UnknownFormat(_) => "unknown_format",
            RotaError::UsageError(_) => "usage_error",
            RotaError::UnknownVertex { .. } => "unknown_vertex",
            RotaError::DecodeMismatch { .. } => "decode_mismatch",
            RotaError::UnknownSymbol { .. } => "unknown_symbol",
            RotaError::InvalidValue { .. } => "invalid_value",
            RotaError::Io(_) => "io_error",
            RotaError::Yaml(_) => "yaml_error",
            RotaError::Json(_) => "json_error",
            RotaError::Toml(_) => "toml_error",
            RotaError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for rota operations
pub type Result<T> = std::result::Result<T, RotaError>;
