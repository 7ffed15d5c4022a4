//! Error types for [`Name`](crate::Name) operations.

use thiserror::Error;

/// Result type alias for name operations
pub type Result<T> = std::result::Result<T, NameError>;

/// Errors raised by index-based accessors and mutators of a `Name`.
///
/// Malformed (improperly masked) components are not an error: callers are
/// trusted to pass masked strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NameError {
    /// The supplied index is outside the valid range for the operation
    #[error("Index {index} out of range for name with {len} components")]
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Number of components at the time of the call
        len: usize,
    },
}

impl NameError {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        log::debug!("rejecting index {} (name has {} components)", index, len);
        NameError::IndexOutOfRange { index, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_index_out_of_range_message() {
        let err = NameError::out_of_range(5, 2);
        assert_eq!(
            err.to_string(),
            "Index 5 out of range for name with 2 components"
        );
        assert_eq!(err, NameError::IndexOutOfRange { index: 5, len: 2 });
    }
}
