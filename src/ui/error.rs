// src/ui/error.rs

use thiserror_no_std::Error;

/// Error types for widget tree operations
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The id does not belong to this screen
    #[error("Unknown element (index: {index})")]
    UnknownElement {
        /// The id's index
        index: usize,
    },

    /// Bitmap data is shorter than its declared size requires
    #[error("Bitmap too small ({actual} of {expected} required)")]
    BitmapTooSmall {
        /// Entries required by the bitmap size
        expected: usize,
        /// Entries supplied
        actual: usize,
    },

    /// Screen configuration could not be encoded or decoded
    #[error("Invalid screen configuration: {0}")]
    InvalidConfig(postcard::Error),
}

/// Result type for widget tree operations
pub type WidgetResult<T> = Result<T, WidgetError>;
