use super::{Entity, ViewType};

use std::{ops, slice, sync::Arc};

/// A read-only, ordered sequence of [`Entity`] views.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    view_type: Arc<ViewType>,
    entities: Vec<Entity>,
}

impl Collection {
    pub(crate) fn new(view_type: Arc<ViewType>, entities: Vec<Entity>) -> Collection {
        debug_assert!(view_type.is_collection());
        Collection {
            view_type,
            entities,
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn first(&self) -> Option<&Entity> {
        self.entities.first()
    }

    pub fn last(&self) -> Option<&Entity> {
        self.entities.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    pub fn view_type(&self) -> &Arc<ViewType> {
        &self.view_type
    }
}

impl ops::Index<usize> for Collection {
    type Output = Entity;

    fn index(&self, index: usize) -> &Entity {
        &self.entities[index]
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Entity;
    type IntoIter = slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Collection {
    type Item = Entity;
    type IntoIter = std::vec::IntoIter<Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.into_iter()
    }
}
