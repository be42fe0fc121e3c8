use super::Error;

/// Error when an identifier does not match the query grammar.
///
/// Raised while parsing, before any Data Port call. Never retried.
#[derive(Debug)]
pub(super) struct UnresolvableNameError {
    identifier: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for UnresolvableNameError {}

impl core::fmt::Display for UnresolvableNameError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unresolvable name `{}`: {}",
            self.identifier, self.reason
        )
    }
}

impl Error {
    /// Creates an unresolvable name error for `identifier`.
    pub fn unresolvable_name(identifier: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnresolvableName(UnresolvableNameError {
            identifier: identifier.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an unresolvable name error.
    pub fn is_unresolvable_name(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnresolvableName(_)))
    }
}
