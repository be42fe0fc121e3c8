mod args;
pub use args::{Args, Identity};

mod config;
pub use config::Config;

pub mod db;
pub use db::Db;

mod engine;

mod handle;
pub use handle::Handle;

mod parse;
pub use parse::parse;

mod query_spec;
pub use query_spec::{Mode, Plurality, QuerySpec};

pub mod registry;
pub use registry::Registry;

pub mod view;
pub use view::{Collection, Entity, View, ViewType};

pub use moniker_core::{
    driver, record,
    schema::Inflections,
    stmt::{Filter, Record, Value},
    Driver, Error, Result,
};
