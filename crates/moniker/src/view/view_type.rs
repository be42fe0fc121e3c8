use indexmap::IndexSet;
use std::sync::Arc;

/// Describes a projected view: its name and which attributes it exposes.
///
/// Default view types are generated by the [`Registry`](crate::Registry), one per
/// model and shape. Custom view types are built with [`ViewType::entity`] and
/// [`ViewType::collection`] and registered under an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewType {
    name: String,
    kind: Kind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Kind {
    Entity {
        /// When set, only these attributes are readable
        attributes: Option<IndexSet<String>>,
    },
    Collection {
        element: Arc<ViewType>,
    },
}

impl ViewType {
    /// A single-record view exposing every attribute of the record.
    pub fn entity(name: impl Into<String>) -> ViewType {
        ViewType {
            name: name.into(),
            kind: Kind::Entity { attributes: None },
        }
    }

    /// A collection view whose elements use `element`.
    ///
    /// # Panics
    ///
    /// If `element` is itself a collection view type.
    #[track_caller]
    pub fn collection(name: impl Into<String>, element: impl Into<Arc<ViewType>>) -> ViewType {
        let element = element.into();
        assert!(
            element.is_entity(),
            "collection element must be an entity view type; element={}",
            element.name
        );

        ViewType {
            name: name.into(),
            kind: Kind::Collection { element },
        }
    }

    /// Restrict the readable attributes of an entity view type.
    ///
    /// # Panics
    ///
    /// If called on a collection view type.
    #[track_caller]
    pub fn attributes<I, S>(mut self, attributes: I) -> ViewType
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match &mut self.kind {
            Kind::Entity { attributes: slot } => {
                *slot = Some(attributes.into_iter().map(Into::into).collect());
            }
            Kind::Collection { .. } => {
                panic!("attributes are set on the element type; view={}", self.name)
            }
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_entity(&self) -> bool {
        matches!(self.kind, Kind::Entity { .. })
    }

    pub fn is_collection(&self) -> bool {
        matches!(self.kind, Kind::Collection { .. })
    }

    /// Element type of a collection view type.
    pub fn element(&self) -> Option<&Arc<ViewType>> {
        match &self.kind {
            Kind::Collection { element } => Some(element),
            Kind::Entity { .. } => None,
        }
    }

    /// Returns `true` if an entity of this type may read `attribute`.
    pub fn exposes(&self, attribute: &str) -> bool {
        match &self.kind {
            Kind::Entity { attributes: None } => true,
            Kind::Entity {
                attributes: Some(attributes),
            } => attributes.contains(attribute),
            Kind::Collection { .. } => false,
        }
    }
}

impl core::fmt::Display for ViewType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}
