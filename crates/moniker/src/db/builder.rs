use super::{Db, Shared};
use crate::{engine::Engine, Registry, ViewType};

use moniker_core::Driver;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    /// Registry to resolve against. The global registry when unset.
    registry: Option<Arc<Registry>>,

    /// Custom view types, applied to the registry on build
    registrations: Vec<(String, ViewType)>,
}

impl Builder {
    /// Use a dedicated registry instead of [`Registry::global`].
    pub fn registry(&mut self, registry: Arc<Registry>) -> &mut Self {
        self.registry = Some(registry);
        self
    }

    /// Register a custom view type for results of `identifier`.
    pub fn register(&mut self, identifier: &str, view_type: ViewType) -> &mut Self {
        self.registrations
            .push((identifier.to_string(), view_type));
        self
    }

    pub fn build(&mut self, driver: impl Driver) -> Db {
        let registry = self.registry.take().unwrap_or_else(Registry::global);

        for (identifier, view_type) in self.registrations.drain(..) {
            registry.register(&identifier, view_type);
        }

        Db {
            shared: Arc::new(Shared {
                engine: Engine {
                    driver: Arc::new(driver),
                    registry,
                },
            }),
        }
    }
}
