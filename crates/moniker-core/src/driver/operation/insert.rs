use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Model to create a record of
    pub model: String,

    /// Attributes of the new record
    pub record: stmt::Record,
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
