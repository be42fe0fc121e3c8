mod builder;
pub use builder::Builder;

use crate::{engine::Engine, Args, Handle, Registry, View};

use moniker_core::{Driver, Result};
use std::sync::Arc;

/// Shared state between all `Db` clones and the handles they hand out.
#[derive(Debug)]
pub(crate) struct Shared {
    pub(crate) engine: Engine,
}

/// Entry point for calls through identifiers.
///
/// A `Db` pairs a [`Driver`] with a [`Registry`]. Cloning is cheap and clones
/// share both.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Resolve `identifier`, failing with
    /// [`Error::is_unresolvable_name`](crate::Error::is_unresolvable_name) if it
    /// does not parse.
    pub fn handle(&self, identifier: &str) -> Result<Handle> {
        let spec = self.shared.engine.registry.resolve(identifier)?;
        Ok(Handle::new(
            self.shared.clone(),
            spec,
            Registry::normalize(identifier),
        ))
    }

    /// Lenient call: a missing record is `Ok(None)`.
    pub fn call<'a>(&self, identifier: &str, args: impl Into<Args<'a>>) -> Result<Option<View>> {
        self.handle(identifier)?.call(args)
    }

    /// Strict call: a missing record is an error.
    pub fn call_strict<'a>(&self, identifier: &str, args: impl Into<Args<'a>>) -> Result<View> {
        self.handle(identifier)?.call_strict(args)
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.shared.engine.registry
    }

    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.shared.engine.driver
    }
}
