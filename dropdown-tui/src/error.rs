//! Front-end error types

use dropdown_lib::error::{ConfigError, DataError};

/// Errors that stop the terminal front-end.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The data file was rejected.
    #[error(transparent)]
    Data(#[from] DataError),
}
