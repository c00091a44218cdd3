//! Error types for enumeration operations.

use thiserror::Error;

/// Failures reported by the operations that cannot fall back to a sentinel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An extremum was requested from a collection with no elements.
    #[error("empty collection has no extremum")]
    EmptyCollection,

    /// A strict positional lookup fell outside the collection.
    #[error("index {index} out of bounds for collection of size {size}")]
    OutOfBounds { index: isize, size: usize },

    /// An element's `Display` implementation reported failure.
    #[error("element could not be rendered")]
    Render(#[from] std::fmt::Error),
}

/// Result type alias for enumeration operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Error::EmptyCollection.to_string(), "empty collection has no extremum");
        assert_eq!(
            Error::OutOfBounds { index: -4, size: 3 }.to_string(),
            "index -4 out of bounds for collection of size 3"
        );
        assert_eq!(Error::from(std::fmt::Error).to_string(), "element could not be rendered");
    }
}
