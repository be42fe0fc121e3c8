mod collection;
pub use collection::Collection;

mod entity;
pub use entity::Entity;

mod view_type;
pub use view_type::ViewType;

use moniker_core::{
    stmt::{Record, Value},
    Error, Result,
};
use std::sync::Arc;

/// Result of a resolved identifier: one entity or a collection of them.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Entity(Entity),
    Collection(Collection),
}

/// Raw Data Port output handed to the view factory.
#[derive(Debug, Clone, PartialEq)]
pub enum Raw {
    Record(Record),
    Collection(Vec<Record>),
}

impl View {
    pub fn is_entity(&self) -> bool {
        matches!(self, View::Entity(_))
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, View::Collection(_))
    }

    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            View::Entity(entity) => Some(entity),
            View::Collection(_) => None,
        }
    }

    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            View::Collection(collection) => Some(collection),
            View::Entity(_) => None,
        }
    }

    pub fn into_entity(self) -> Result<Entity> {
        match self {
            View::Entity(entity) => Ok(entity),
            View::Collection(collection) => Err(Error::cannot_project_collection(
                collection.view_type().name(),
            )),
        }
    }

    pub fn into_collection(self) -> Result<Collection> {
        match self {
            View::Collection(collection) => Ok(collection),
            View::Entity(entity) => Err(Error::invalid_result(format!(
                "expected a collection, got entity {}",
                entity.view_type().name()
            ))),
        }
    }

    /// Read an attribute of a single-entity view.
    pub fn get(&self, name: &str) -> Result<&Value> {
        match self {
            View::Entity(entity) => entity.get(name),
            View::Collection(collection) => Err(Error::cannot_project_collection(
                collection.view_type().name(),
            )),
        }
    }

    /// Raw attribute mapping of a single-entity view.
    pub fn to_record(&self) -> Result<Record> {
        match self {
            View::Entity(entity) => Ok(entity.to_record()),
            View::Collection(collection) => Err(Error::cannot_project_collection(
                collection.view_type().name(),
            )),
        }
    }

    pub fn view_type(&self) -> &Arc<ViewType> {
        match self {
            View::Entity(entity) => entity.view_type(),
            View::Collection(collection) => collection.view_type(),
        }
    }
}

/// Wrap raw output in a view of type `view_type`.
///
/// The caller is responsible for choosing a view type whose shape matches `raw`.
pub(crate) fn populate(view_type: Arc<ViewType>, raw: Raw, primary_key: &str) -> Result<View> {
    match raw {
        Raw::Record(record) if view_type.is_entity() => {
            Ok(View::Entity(Entity::new(view_type, record, primary_key)))
        }
        Raw::Collection(records) => {
            let Some(element) = view_type.element().cloned() else {
                return Err(Error::invalid_view_type(format!(
                    "{} cannot hold a collection",
                    view_type.name()
                )));
            };

            let entities = records
                .into_iter()
                .map(|record| Entity::new(element.clone(), record, primary_key))
                .collect();

            Ok(View::Collection(Collection::new(view_type, entities)))
        }
        Raw::Record(_) => Err(Error::invalid_view_type(format!(
            "{} cannot hold a single record",
            view_type.name()
        ))),
    }
}

impl From<Entity> for View {
    fn from(value: Entity) -> Self {
        View::Entity(value)
    }
}

impl From<Collection> for View {
    fn from(value: Collection) -> Self {
        View::Collection(value)
    }
}
