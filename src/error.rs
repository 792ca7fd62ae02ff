use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxavatar operations
#[derive(Error, Diagnostic, Debug)]
pub enum AvatarError {
    #[error("Unknown archetype: {selector}")]
    #[diagnostic(code(pxavatar::archetype))]
    InvalidArchetype {
        selector: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid size {size}: must be a positive multiple of the {grid}px design grid")]
    #[diagnostic(
        code(pxavatar::size),
        help("Try one of 64, 128, 256 or 512")
    )]
    InvalidSize { size: u32, grid: u32 },

    #[error("Encoding error: {message}")]
    #[diagnostic(code(pxavatar::encode))]
    Encoding { message: String },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxavatar::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(pxavatar::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl AvatarError {
    /// Short machine-friendly label, used in reports and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AvatarError::InvalidArchetype { .. } => "invalid-archetype",
            AvatarError::InvalidSize { .. } => "invalid-size",
            AvatarError::Encoding { .. } => "encoding",
            AvatarError::Io { .. } => "io",
            AvatarError::Config { .. } => "config",
        }
    }

    /// IO failures may be transient contention and are worth one retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AvatarError::Io { .. })
    }

    pub(crate) fn encoding(message: impl Into<String>) -> Self {
        AvatarError::Encoding {
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<std::path::PathBuf>, err: impl std::fmt::Display) -> Self {
        AvatarError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AvatarError>;
