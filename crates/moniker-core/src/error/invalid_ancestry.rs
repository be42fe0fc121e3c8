use super::Error;

/// Error when a traversal does not fit the declared ancestry.
///
/// This occurs when:
/// - The traversal yields a collection but the identifier is singular, or vice versa
/// - A hop is not a relation on the intermediate model
///
/// This is a programming error in the identifier or the `via` chain, never a
/// data condition, so it is always surfaced.
#[derive(Debug)]
pub(super) struct InvalidAncestryError {
    message: Box<str>,
}

impl std::error::Error for InvalidAncestryError {}

impl core::fmt::Display for InvalidAncestryError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid ancestry: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid ancestry error.
    pub fn invalid_ancestry(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidAncestry(InvalidAncestryError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid ancestry error.
    pub fn is_invalid_ancestry(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidAncestry(_)))
    }
}
