mod association;
mod query;

use crate::{view::Raw, Args, Mode, QuerySpec, Registry, View};

use moniker_core::{
    driver::{operation::Operation, Response},
    Driver, Result,
};
use std::sync::Arc;

/// Turns a resolved identifier plus runtime arguments into one driver call and
/// projects the result.
#[derive(Debug)]
pub(crate) struct Engine {
    pub(crate) driver: Arc<dyn Driver>,
    pub(crate) registry: Arc<Registry>,
}

impl Engine {
    /// Run `spec` with `args`. A missing record is an error.
    pub(crate) fn dispatch(
        &self,
        spec: &QuerySpec,
        caller_key: &str,
        args: Args<'_>,
    ) -> Result<View> {
        let (model, raw) = match spec.mode {
            Mode::Query => self.query(spec, args)?,
            Mode::Association => self.association(spec, args)?,
        };

        self.registry.project(raw, spec, caller_key, &model)
    }

    /// Like [`dispatch`](Engine::dispatch), but a not-found result is `None`.
    /// Every other error is returned unchanged.
    pub(crate) fn dispatch_lenient(
        &self,
        spec: &QuerySpec,
        caller_key: &str,
        args: Args<'_>,
    ) -> Result<Option<View>> {
        match self.dispatch(spec, caller_key, args) {
            Ok(view) => Ok(Some(view)),
            Err(err) if err.is_record_not_found() => {
                log::debug!("no record; identifier={}; err={err}", spec.identifier);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn exec(&self, op: impl Into<Operation>) -> Result<Response> {
        let op = op.into();
        log::trace!("exec operation; op={op:?}");
        self.driver.exec(op)
    }
}

/// Model name and raw rows handed to the view factory.
type Projection = (String, Raw);
