use super::{Record, Value};

use indexmap::IndexMap;

/// A conjunction of `field == value` conditions.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    conditions: IndexMap<String, Value>,
}

impl Filter {
    pub fn new() -> Filter {
        Filter::default()
    }

    /// Filter on a single `field == value` condition.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Filter {
        Filter::new().and(field, value)
    }

    pub fn and(mut self, field: impl Into<String>, value: impl Into<Value>) -> Filter {
        self.conditions.insert(field.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.conditions.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns `true` when every condition holds for `record`. A condition on an
    /// attribute the record lacks does not hold.
    pub fn matches(&self, record: &Record) -> bool {
        self.conditions
            .iter()
            .all(|(field, value)| record.get(field) == Some(value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Filter {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Filter {
            conditions: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl core::fmt::Display for Filter {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("{")?;
        for (i, (field, value)) in self.conditions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {value}")?;
        }
        f.write_str("}")
    }
}
