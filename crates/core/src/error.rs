use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum PowerAiError {
    #[error("config error: {0}")]
    Config(String),

    #[error("simulator error: {0}")]
    Simulator(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = PowerAiError> = std::result::Result<T, E>;
