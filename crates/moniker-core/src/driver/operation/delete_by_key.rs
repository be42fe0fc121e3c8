use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteByKey {
    /// Model of the record to delete
    pub model: String,

    /// Primary key of the record to delete
    pub key: stmt::Value,
}

impl From<DeleteByKey> for Operation {
    fn from(value: DeleteByKey) -> Self {
        Self::DeleteByKey(value)
    }
}
