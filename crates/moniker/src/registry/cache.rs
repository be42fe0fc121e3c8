use moniker_core::Result;

use parking_lot::RwLock;
use std::{borrow::Borrow, collections::HashMap, hash::Hash, sync::Arc};

/// Read-mostly map whose entries are built at most once per key.
///
/// Hits take the read lock only. A miss takes the write lock, checks again, and
/// builds the entry while holding it, so threads racing on the same key all
/// observe the one `Arc` the winner inserted. Builders must not touch the same
/// cache.
#[derive(Debug)]
pub(crate) struct Cache<K, V> {
    entries: RwLock<HashMap<K, Arc<V>>>,
}

impl<K: Eq + Hash, V> Cache<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<Arc<V>>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.read().get(key).cloned()
    }

    /// Returns the entry for `key`, building it with `f` if there is none.
    ///
    /// Errors from `f` are returned and nothing is cached.
    pub(crate) fn get_or_try_insert_with<Q>(
        &self,
        key: &Q,
        f: impl FnOnce() -> Result<V>,
    ) -> Result<Arc<V>>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = K> + ?Sized,
    {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }

        let mut entries = self.entries.write();

        // Another thread may have built it while we waited for the lock.
        if let Some(value) = entries.get(key) {
            return Ok(value.clone());
        }

        let value = Arc::new(f()?);
        entries.insert(key.to_owned(), value.clone());
        Ok(value)
    }

    pub(crate) fn insert(&self, key: K, value: V) {
        self.entries.write().insert(key, Arc::new(value));
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub(crate) fn clear(&self) {
        self.entries.write().clear();
    }
}
