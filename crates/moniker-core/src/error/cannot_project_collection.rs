use super::Error;

#[derive(Debug)]
pub(super) struct CannotProjectCollectionError {
    view: Box<str>,
}

impl std::error::Error for CannotProjectCollectionError {}

impl core::fmt::Display for CannotProjectCollectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot project collection {} to a single record",
            self.view
        )
    }
}

impl Error {
    /// Creates an error for a single-record operation attempted on a collection.
    pub fn cannot_project_collection(view: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::CannotProjectCollection(
            CannotProjectCollectionError {
                view: view.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a cannot project collection error.
    pub fn is_cannot_project_collection(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::CannotProjectCollection(_)))
    }
}
