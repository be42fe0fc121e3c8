use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct FindAll {
    /// Model to query
    pub model: String,

    /// Conditions every returned record satisfies
    pub filter: stmt::Filter,
}

impl From<FindAll> for Operation {
    fn from(value: FindAll) -> Self {
        Self::FindAll(value)
    }
}
