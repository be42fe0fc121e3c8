mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use std::fmt::Debug;

/// The Data Port: the single seam through which the engine reaches a backing
/// store.
///
/// Calls are synchronous. Adapters report missing records with
/// [`Error::record_not_found`](crate::Error::record_not_found), rejected writes with
/// [`Error::constraint_violation`](crate::Error::constraint_violation), hops that
/// are not relations with [`Error::invalid_ancestry`](crate::Error::invalid_ancestry),
/// and anything else with [`Error::driver`](crate::Error::driver).
pub trait Driver: Debug + Send + Sync + 'static {
    /// Execute a data-access operation
    fn exec(&self, op: Operation) -> crate::Result<Response>;
}

impl<D: Driver + ?Sized> Driver for Box<D> {
    fn exec(&self, op: Operation) -> crate::Result<Response> {
        (**self).exec(op)
    }
}

impl<D: Driver + ?Sized> Driver for std::sync::Arc<D> {
    fn exec(&self, op: Operation) -> crate::Result<Response> {
        (**self).exec(op)
    }
}
