use super::Error;

/// Error when a registered view type cannot hold the result it was selected for.
#[derive(Debug)]
pub(super) struct InvalidViewTypeError {
    message: Box<str>,
}

impl std::error::Error for InvalidViewTypeError {}

impl core::fmt::Display for InvalidViewTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid view type: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid view type error.
    pub fn invalid_view_type(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidViewType(InvalidViewTypeError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid view type error.
    pub fn is_invalid_view_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidViewType(_)))
    }
}
