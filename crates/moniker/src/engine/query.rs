use super::{Engine, Projection};
use crate::{view::Raw, Args, QuerySpec};

use moniker_core::{
    driver::{
        operation::{FindAll, FindFirst, GetByKey, Operation},
        Rows,
    },
    stmt::Filter,
    Error, Result,
};

impl Engine {
    /// `<Model>By<Field>`: look records up by key, by one field, or by a caller
    /// supplied filter.
    pub(super) fn query(&self, spec: &QuerySpec, args: Args<'_>) -> Result<Projection> {
        let model = spec.subject_model.clone();

        let op: Operation = if spec.is_key_lookup() && !spec.is_plural() {
            let key = match args {
                Args::Key(key) => key,
                args => return Err(mismatch(spec, &args, "a key")),
            };

            GetByKey {
                model: model.clone(),
                key,
            }
            .into()
        } else {
            let filter = filter(spec, args)?;

            if spec.is_plural() {
                FindAll {
                    model: model.clone(),
                    filter,
                }
                .into()
            } else {
                FindFirst {
                    model: model.clone(),
                    filter,
                }
                .into()
            }
        };

        let plural = spec.is_plural();
        let response = self.exec(op)?;

        let raw = match response.rows {
            Rows::Record(Some(record)) if !plural => Raw::Record(record),
            Rows::Record(None) if !plural => {
                return Err(Error::record_not_found(format!(
                    "model={model}; identifier={}",
                    spec.identifier
                )))
            }
            Rows::Records(records) if plural => Raw::Collection(records),
            rows => {
                return Err(Error::invalid_result(format!(
                    "{} expected a {} result, got {}",
                    spec.identifier,
                    if plural { "collection" } else { "single record" },
                    rows.shape()
                )))
            }
        };

        Ok((model, raw))
    }
}

fn filter(spec: &QuerySpec, args: Args<'_>) -> Result<Filter> {
    match (&spec.field, args) {
        (Some(field), Args::Key(value)) => Ok(Filter::eq(field.as_str(), value)),
        (None, Args::Filter(filter)) if filter.is_empty() => Err(Error::invalid_argument(
            format!("{} requires at least one filter condition", spec.identifier),
        )),
        (None, Args::Filter(filter)) => Ok(filter),
        (Some(_), args) => Err(mismatch(spec, &args, "a key")),
        (None, args) => Err(mismatch(spec, &args, "a filter")),
    }
}

pub(super) fn mismatch(spec: &QuerySpec, args: &Args<'_>, expected: &str) -> Error {
    Error::invalid_argument(format!(
        "{} expects {expected}, got {}",
        spec.identifier,
        args.kind()
    ))
}
