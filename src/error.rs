use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors produced while encoding or decoding share tokens.
#[derive(Error, Debug)]
pub enum ShareError {
    #[error("failed to serialize snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("token is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("token payload is not valid UTF-8: {0}")]
    Payload(#[from] std::string::FromUtf8Error),
}

/// Errors raised while reading a position file.
#[derive(Error, Debug)]
pub enum PositionFileError {
    #[error("failed to read position file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse position file: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("position file declares no outcomes")]
    Empty,

    #[error("only one outcome may pin the stake, found {count}")]
    MultipleAnchors { count: usize },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Share(#[from] ShareError),

    #[error(transparent)]
    Position(#[from] PositionFileError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
