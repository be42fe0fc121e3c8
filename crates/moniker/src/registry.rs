mod cache;
use cache::Cache;

use crate::{
    parse,
    view::{self, Raw},
    Config, Plurality, QuerySpec, View, ViewType,
};

use moniker_core::{schema::Name, Error, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

static GLOBAL: Lazy<Arc<Registry>> = Lazy::new(|| Arc::new(Registry::default()));

/// Process-wide name resolution state.
///
/// Holds the configuration, the parsed identifiers (identifier to [`QuerySpec`]), the
/// view type cache (model shape to generated [`ViewType`]) and custom view type
/// registrations. Entries are created lazily, at most once per key, and live
/// until [`Registry::reset`] or [`Registry::init`].
///
/// Cache hits only take read locks. [`init`](Registry::init) holds the config
/// write lock while clearing, so no lookup observes a half-reset registry. No
/// lock is held while a driver runs.
#[derive(Debug)]
pub struct Registry {
    config: RwLock<Arc<Config>>,
    specs: Cache<String, QuerySpec>,
    view_types: Cache<ShapeKey, ViewType>,
    registrations: Cache<String, ViewType>,
}

/// Cache key of a generated view type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ShapeKey {
    model: String,
    plurality: Plurality,
}

impl Registry {
    pub fn new(config: Config) -> Registry {
        Registry {
            config: RwLock::new(Arc::new(config)),
            specs: Cache::new(),
            view_types: Cache::new(),
            registrations: Cache::new(),
        }
    }

    /// The registry shared by every [`Db`](crate::Db) that was not given its
    /// own.
    pub fn global() -> Arc<Registry> {
        GLOBAL.clone()
    }

    /// Replace the configuration and clear every cache and registration.
    pub fn init(&self, config: Config) {
        let mut current = self.config.write();
        *current = Arc::new(config);
        self.clear();
        log::debug!("registry initialized; config={:?}", current);
    }

    /// Clear custom registrations, generated view types and cached specs.
    pub fn reset(&self) {
        let _config = self.config.write();
        self.clear();
        log::debug!("registry reset");
    }

    fn clear(&self) {
        self.registrations.clear();
        self.view_types.clear();
        self.specs.clear();
    }

    pub fn config(&self) -> Arc<Config> {
        self.config.read().clone()
    }

    /// Normalized caller key for an identifier: `UsersByLastName`,
    /// `users_by_last_name` and `users-by-last-name` all map to
    /// `users_by_last_name`.
    pub fn normalize(identifier: &str) -> String {
        Name::new(identifier).snake_case()
    }

    /// Parse `identifier`, or return the [`QuerySpec`] parsed by an earlier call.
    pub fn resolve(&self, identifier: &str) -> Result<Arc<QuerySpec>> {
        let config = self.config.read();

        self.specs.get_or_try_insert_with(identifier, || {
            let spec = parse(identifier, &config)?;
            log::debug!("resolved identifier; spec={spec:?}");
            Ok(spec)
        })
    }

    /// Use `view_type` for results of the identifier `key` instead of the
    /// generated default. Replaces an earlier registration for the same key.
    pub fn register(&self, key: &str, view_type: ViewType) {
        let _config = self.config.read();
        let key = Registry::normalize(key);
        log::debug!("registering view type; key={key}; view={}", view_type.name());
        self.registrations.insert(key, view_type);
    }

    pub fn registration(&self, key: &str) -> Option<Arc<ViewType>> {
        self.registrations.get(&Registry::normalize(key))
    }

    /// Number of generated view types currently cached.
    pub fn view_type_count(&self) -> usize {
        self.view_types.len()
    }

    /// Number of cached specs.
    pub fn spec_count(&self) -> usize {
        self.specs.len()
    }

    /// Select the view type for a result of `spec` called through `caller_key`.
    ///
    /// A registration for `caller_key` wins; otherwise the default for `model`
    /// (the queried model, or the model a traversal reached) is generated or
    /// taken from the cache.
    pub fn view_type(
        &self,
        spec: &QuerySpec,
        caller_key: &str,
        model: &str,
    ) -> Result<Arc<ViewType>> {
        // Held across both lookups so a concurrent reset is seen by neither or both.
        let config = self.config.read();

        if let Some(registered) = self.registration(caller_key) {
            if registered.is_collection() != spec.is_plural() {
                return Err(Error::invalid_view_type(format!(
                    "{} is registered for `{caller_key}` but the identifier is {}",
                    registered.name(),
                    spec.plurality
                )));
            }
            return Ok(registered);
        }

        let element = self.generated(&config, model, Plurality::Singular, None)?;

        match spec.plurality {
            Plurality::Singular => Ok(element),
            Plurality::Plural => self.generated(&config, model, Plurality::Plural, Some(element)),
        }
    }

    /// Project raw Data Port output into a view of the type selected by
    /// [`view_type`](Registry::view_type).
    pub fn project(
        &self,
        raw: Raw,
        spec: &QuerySpec,
        caller_key: &str,
        model: &str,
    ) -> Result<View> {
        let view_type = self.view_type(spec, caller_key, model)?;
        let primary_key = self.config().primary_key.clone();
        view::populate(view_type, raw, &primary_key)
    }

    fn generated(
        &self,
        config: &Config,
        model: &str,
        plurality: Plurality,
        element: Option<Arc<ViewType>>,
    ) -> Result<Arc<ViewType>> {
        let key = ShapeKey {
            model: model.to_string(),
            plurality,
        };

        self.view_types.get_or_try_insert_with(&key, || {
            let base = format!("{}{}", config.view_prefix, Name::new(model));

            let view_type = match element {
                None => ViewType::entity(base),
                Some(element) => ViewType::collection(format!("{base}Collection"), element),
            };

            log::debug!("generated view type; model={model}; view={}", view_type.name());
            Ok(view_type)
        })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new(Config::default())
    }
}
