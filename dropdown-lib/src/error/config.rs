//! Configuration error types

/// Errors raised while parsing or validating a [`DropdownConfig`](crate::DropdownConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A length was neither a number, `"<n>px"` nor `"<n>%"`.
    #[error("Invalid length '{value}'")]
    InvalidLength {
        /// The offending text.
        value: String,
    },

    /// The input color is not a hex color code.
    #[error("Invalid color '{value}': {source}")]
    InvalidColor {
        /// The offending text.
        value: String,
        /// Underlying hex parse failure.
        source: palette::rgb::FromHexError,
    },

    /// Chunks must hold at least one item or the window never grows.
    #[error("Chunk size must be greater than zero")]
    ZeroChunkSize,

    /// Rows need a positive height for virtualization.
    #[error("Item height must be positive, got {0}")]
    InvalidItemHeight(f32),

    /// The dropdown height cap must be positive.
    #[error("Max dropdown height must be positive, got {0}")]
    InvalidMaxHeight(f32),

    /// The configuration document could not be parsed.
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}
