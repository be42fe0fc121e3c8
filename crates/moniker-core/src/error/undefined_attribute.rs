use super::Error;

#[derive(Debug)]
pub(super) struct UndefinedAttributeError {
    view: Box<str>,
    attribute: Box<str>,
}

impl std::error::Error for UndefinedAttributeError {}

impl core::fmt::Display for UndefinedAttributeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "undefined attribute `{}` for {}",
            self.attribute, self.view
        )
    }
}

impl Error {
    /// Creates an undefined attribute error.
    ///
    /// Raised when reading a name that a projected view does not expose. Relation
    /// names are never exposed, so this is also what relation traversal on a view
    /// produces.
    pub fn undefined_attribute(view: impl Into<String>, attribute: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UndefinedAttribute(
            UndefinedAttributeError {
                view: view.into().into(),
                attribute: attribute.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an undefined attribute error.
    pub fn is_undefined_attribute(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UndefinedAttribute(_)))
    }
}
