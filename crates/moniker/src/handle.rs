use crate::{db::Shared, Args, QuerySpec, View};

use moniker_core::Result;
use std::sync::Arc;

/// A resolved identifier, ready to be called.
///
/// Cloning is cheap. Resolving every identifier a program uses up front turns a
/// misspelled identifier into an error at startup rather than on first use.
#[derive(Debug, Clone)]
pub struct Handle {
    shared: Arc<Shared>,
    spec: Arc<QuerySpec>,
    key: String,
}

impl Handle {
    pub(crate) fn new(shared: Arc<Shared>, spec: Arc<QuerySpec>, key: String) -> Handle {
        Handle { shared, spec, key }
    }

    pub fn spec(&self) -> &QuerySpec {
        &self.spec
    }

    /// Normalized caller key used to look up registered view types.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns `Ok(None)` when no record is found.
    pub fn call<'a>(&self, args: impl Into<Args<'a>>) -> Result<Option<View>> {
        self.shared
            .engine
            .dispatch_lenient(&self.spec, &self.key, args.into())
    }

    /// Fails with [`Error::is_record_not_found`] when no record is found.
    pub fn call_strict<'a>(&self, args: impl Into<Args<'a>>) -> Result<View> {
        self.shared
            .engine
            .dispatch(&self.spec, &self.key, args.into())
    }
}
