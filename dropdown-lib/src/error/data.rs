//! Data loading error types

/// Errors raised while turning JSON into dropdown items.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The document is not valid JSON.
    #[error("Data parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document root must be an array of items.
    #[error("Data root must be an array")]
    NotAnArray,

    /// Every element must be an object.
    #[error("Element at index {index} is not an object")]
    NotAnObject {
        /// Position of the element in the array.
        index: usize,
    },
}
