#[macro_use]
mod macros;

pub mod driver;
pub use driver::Driver;

mod error;
pub use error::{Error, IntoError};

pub mod schema;

pub mod stmt;

/// A Result type alias that uses Moniker's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
