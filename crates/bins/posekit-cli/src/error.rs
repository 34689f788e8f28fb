use base::ValidationError;
use std::{
    error::Error,
    fmt::{Debug, Display, Formatter},
};

/// Error reported by the `posekit` program.
#[derive(Debug)]
pub struct AppError {
    message: String,
    source: Option<Box<dyn Error>>,
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Some(cause) => write!(f, "Error: {}, caused by {}", self.message, cause),
            None => write!(f, "Error: {}", self.message),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> { self.source.as_deref() }
}

impl AppError {
    /// Creates a new error.
    pub fn new<S>(message: S, source: Option<Box<dyn Error>>) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            source,
        }
    }

    /// Creates a new error from a std::io::Error.
    pub fn from_io_error<S>(err: std::io::Error, message: S) -> Self
    where
        S: Into<String>,
    {
        Self::new(message, Some(Box::new(err)))
    }

    /// Creates a new error from a failed validation.
    pub fn from_validation_error<S>(err: ValidationError, message: S) -> Self
    where
        S: Into<String>,
    {
        Self::new(message, Some(Box::new(err)))
    }
}

/// Error type for runtime errors.
#[derive(Debug)]
pub enum RuntimeError {
    /// The system configuration directory is not found.
    SysConfigDirNotFound,
    /// De/Serialisation error.
    Serialisation(SerialisationError),
    /// Logger error.
    Logger(log::SetLoggerError),
    /// Invalid parameters.
    InvalidParameters(String),
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SysConfigDirNotFound => write!(f, "System configuration directory not found"),
            Self::Serialisation(err) => write!(f, "Serialisation error: {}", err),
            Self::Logger(err) => write!(f, "Logger error: {}", err),
            Self::InvalidParameters(msg) => write!(f, "Invalid parameters: {}", msg),
        }
    }
}

impl Error for RuntimeError {}

/// Failure to read or write the configuration.
#[derive(Debug)]
pub enum SerialisationError {
    /// Toml serialisation error.
    TomlSe(toml::ser::Error),
    /// Toml deserialisation error.
    TomlDe(toml::de::Error),
}

impl Display for SerialisationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TomlSe(err) => write!(f, "Toml serialisation error: {}", err),
            Self::TomlDe(err) => write!(f, "Toml deserialisation error: {}", err),
        }
    }
}

impl From<log::SetLoggerError> for RuntimeError {
    fn from(err: log::SetLoggerError) -> Self { RuntimeError::Logger(err) }
}

impl From<toml::ser::Error> for RuntimeError {
    fn from(err: toml::ser::Error) -> Self {
        RuntimeError::Serialisation(SerialisationError::TomlSe(err))
    }
}

impl From<toml::de::Error> for RuntimeError {
    fn from(err: toml::de::Error) -> Self {
        RuntimeError::Serialisation(SerialisationError::TomlDe(err))
    }
}
