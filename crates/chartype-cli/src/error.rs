use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Field(#[from] chartype_core::FieldError),

    #[error("invalid input document: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Field(_) => 2,
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
