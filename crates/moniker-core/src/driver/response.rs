use crate::{stmt::Record, Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Model the returned rows belong to. For a traversal this is the model the
    /// last hop reaches.
    pub model: String,

    pub rows: Rows,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rows {
    /// Number of rows impacted by a write
    Count(u64),

    /// Single-shaped result. `None` only when a traversal reaches no record.
    Record(Option<Record>),

    /// Sequence-shaped result, possibly empty
    Records(Vec<Record>),
}

impl Response {
    pub fn count(model: impl Into<String>, count: u64) -> Self {
        Self {
            model: model.into(),
            rows: Rows::Count(count),
        }
    }

    pub fn record(model: impl Into<String>, record: impl Into<Option<Record>>) -> Self {
        Self {
            model: model.into(),
            rows: Rows::Record(record.into()),
        }
    }

    pub fn records(model: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            model: model.into(),
            rows: Rows::Records(records),
        }
    }
}

impl Rows {
    /// Shape name used in error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Rows::Count(_) => "count",
            Rows::Record(_) => "single record",
            Rows::Records(_) => "collection",
        }
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            rows => Err(Error::invalid_result(format!(
                "expected count, got {}",
                rows.shape()
            ))),
        }
    }
}
