use super::ViewType;

use moniker_core::{
    stmt::{Record, Value},
    Error, Result,
};
use std::{ops, sync::Arc};

/// A read-only view over one record.
///
/// Only attributes present in the record (and exposed by the view type) can be
/// read. There is no way to reach related records from an entity: relation
/// names are not attributes, so reading one fails with
/// [`Error::is_undefined_attribute`].
#[derive(Clone, PartialEq)]
pub struct Entity {
    view_type: Arc<ViewType>,
    attributes: Record,
    key: Option<Value>,
}

impl Entity {
    /// Populate an entity from a raw record. `primary_key` names the attribute
    /// captured as the entity's identity.
    pub(crate) fn new(view_type: Arc<ViewType>, raw: Record, primary_key: &str) -> Entity {
        debug_assert!(view_type.is_entity());

        let key = raw.get(primary_key).cloned();
        let attributes = raw
            .into_iter()
            .filter(|(name, _)| view_type.exposes(name))
            .collect();

        Entity {
            view_type,
            attributes,
            key,
        }
    }

    /// Read an attribute.
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.attributes
            .get(name)
            .ok_or_else(|| Error::undefined_attribute(self.view_type.name(), name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.names()
    }

    /// Primary key of the underlying record, if it had one.
    pub fn key(&self) -> Option<&Value> {
        self.key.as_ref()
    }

    pub fn view_type(&self) -> &Arc<ViewType> {
        &self.view_type
    }

    /// Copy of the readable attribute mapping.
    pub fn to_record(&self) -> Record {
        self.attributes.clone()
    }
}

impl ops::Index<&str> for Entity {
    type Output = Value;

    #[track_caller]
    fn index(&self, name: &str) -> &Value {
        match self.get(name) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl core::fmt::Debug for Entity {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut s = f.debug_struct(self.view_type.name());
        for (name, value) in self.attributes.iter() {
            s.field(name, value);
        }
        s.finish()
    }
}
