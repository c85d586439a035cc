//! Encoder error types

use thiserror::Error;

/// Result type for encoding operations
pub type Result<T> = std::result::Result<T, TiffError>;

/// Errors surfaced by the container encoder and the persistence sink.
#[derive(Error, Debug)]
pub enum TiffError {
    /// The encoding request carried no pages.
    #[error("no pages to encode")]
    EmptyInput,

    /// A page's pixel buffer disagrees with its declared dimensions.
    #[error("page pixel buffer holds {actual} bytes, expected {expected}")]
    MalformedPage { expected: usize, actual: usize },

    /// I/O error from the persistence sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_byte_counts() {
        let err = TiffError::MalformedPage {
            expected: 12,
            actual: 4,
        };
        let msg = format!("{err}");
        assert!(msg.contains("12"));
        assert!(msg.contains("4"));
    }
}
