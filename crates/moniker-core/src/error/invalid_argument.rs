use super::Error;

/// Error when runtime arguments do not fit the identifier they were passed to.
///
/// This occurs when:
/// - A filter mapping is empty
/// - The argument shape does not match the identifier's mode (a subject for a
///   `By` identifier, a scalar for a field-less `By` identifier, ...)
#[derive(Debug)]
pub(super) struct InvalidArgumentError {
    message: Box<str>,
}

impl std::error::Error for InvalidArgumentError {}

impl core::fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid argument: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidArgument(InvalidArgumentError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid argument error.
    pub fn is_invalid_argument(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidArgument(_)))
    }
}
