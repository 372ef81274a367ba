//! Error kinds for bagel-dot operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on `ErrorKind` to decide how to report a failure, e.g. the
/// CLI prints just the message for input errors and the full context for
/// everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // Input errors
    // =========================================================================
    /// Invalid render configuration
    ConfigInvalid,

    /// The graph document could not be decoded
    ParseFailed,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found, or not a regular file
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    // =========================================================================
    // Serialization errors
    // =========================================================================
    /// Serializing the graph model failed
    SerializationFailed,

    // =========================================================================
    // Graph consistency errors (reported by the optional check pass)
    // =========================================================================
    /// An edge references a node id or input index that does not exist
    InvalidReference,

    /// A node id, or an input idx within one node, occurs more than once
    DuplicateId,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if the error comes from the caller's input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::ConfigInvalid
                | ErrorKind::ParseFailed
                | ErrorKind::InvalidReference
                | ErrorKind::DuplicateId
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::ParseFailed.to_string(), "ParseFailed");
        assert_eq!(ErrorKind::InvalidReference.as_str(), "InvalidReference");
    }

    #[test]
    fn test_kind_names_are_distinct() {
        let names: HashSet<&'static str> = ErrorKind::iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), ErrorKind::iter().count());
    }

    #[test]
    fn test_is_input_error() {
        assert!(ErrorKind::ParseFailed.is_input_error());
        assert!(ErrorKind::DuplicateId.is_input_error());
        assert!(!ErrorKind::IoFailed.is_input_error());
        assert!(!ErrorKind::FileNotFound.is_input_error());
    }
}
