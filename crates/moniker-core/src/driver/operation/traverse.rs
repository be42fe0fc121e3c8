use super::*;

/// Start at the `model` record identified by `identity` and follow `hops` in
/// order. The response shape (single or collection) is whatever the last hop
/// structurally yields; the response model is the model it reaches.
#[derive(Debug, Clone, PartialEq)]
pub struct Traverse {
    /// Model of the subject record
    pub model: String,

    /// Identity of the subject record
    pub identity: stmt::Value,

    /// Relation names, first hop first
    pub hops: Vec<String>,
}

impl From<Traverse> for Operation {
    fn from(value: Traverse) -> Self {
        Self::Traverse(value)
    }
}
