use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct GetByKey {
    /// Which model to get from
    pub model: String,

    /// Primary key value
    pub key: stmt::Value,
}

impl From<GetByKey> for Operation {
    fn from(value: GetByKey) -> Self {
        Self::GetByKey(value)
    }
}
