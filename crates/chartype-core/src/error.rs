use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Which field enumeration an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Candle,
    Ticker,
}

impl FieldKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Candle => "candle",
            Self::Ticker => "ticker",
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures of the field validator and text/JSON codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("invalid {kind} field")]
    InvalidField { kind: FieldKind },

    /// The payload is not a JSON string scalar. Reported before any token
    /// matching takes place.
    #[error("malformed {kind} field payload: {reason}")]
    MalformedPayload { kind: FieldKind, reason: String },
}

impl FieldError {
    pub const fn invalid(kind: FieldKind) -> Self {
        Self::InvalidField { kind }
    }

    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::InvalidField { kind } | Self::MalformedPayload { kind, .. } => *kind,
        }
    }
}

/// Record construction errors from decimal-string tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("field '{field}' is not an exact decimal: '{value}'")]
    Decimal { field: &'static str, value: String },
}

/// Validation errors for record metadata.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("timestamp must be RFC3339: '{value}'")]
    InvalidTimestamp { value: String },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
