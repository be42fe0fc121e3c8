use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateByKey {
    /// Model of the record to update
    pub model: String,

    /// Primary key of the record to update
    pub key: stmt::Value,

    /// Attributes to overwrite
    pub assignments: stmt::Record,
}

impl From<UpdateByKey> for Operation {
    fn from(value: UpdateByKey) -> Self {
        Self::UpdateByKey(value)
    }
}
