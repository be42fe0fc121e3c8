use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct FindFirst {
    /// Model to query
    pub model: String,

    /// Conditions the record must satisfy. Never empty.
    pub filter: stmt::Filter,
}

impl From<FindFirst> for Operation {
    fn from(value: FindFirst) -> Self {
        Self::FindFirst(value)
    }
}
