mod delete_by_key;
pub use delete_by_key::DeleteByKey;

mod find_all;
pub use find_all::FindAll;

mod find_first;
pub use find_first::FindFirst;

mod get_by_key;
pub use get_by_key::GetByKey;

mod insert;
pub use insert::Insert;

mod traverse;
pub use traverse::Traverse;

mod update_by_key;
pub use update_by_key::UpdateByKey;

use crate::stmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Create a new record
    Insert(Insert),

    /// Delete the record identified by the given key
    DeleteByKey(DeleteByKey),

    /// Every record matching a filter
    FindAll(FindAll),

    /// The first record matching a filter
    FindFirst(FindFirst),

    /// Get one record by the primary key
    GetByKey(GetByKey),

    /// Follow a chain of relations from one record
    Traverse(Traverse),

    /// Update a record by the primary key
    UpdateByKey(UpdateByKey),
}

impl Operation {
    /// Model the operation is issued against.
    pub fn model(&self) -> &str {
        match self {
            Operation::Insert(op) => &op.model,
            Operation::DeleteByKey(op) => &op.model,
            Operation::FindAll(op) => &op.model,
            Operation::FindFirst(op) => &op.model,
            Operation::GetByKey(op) => &op.model,
            Operation::Traverse(op) => &op.model,
            Operation::UpdateByKey(op) => &op.model,
        }
    }
}
