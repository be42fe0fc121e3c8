use super::{query::mismatch, Engine, Projection};
use crate::{view::Raw, Args, Plurality, QuerySpec};

use moniker_core::{
    driver::{operation::Traverse, Rows},
    Error, Result,
};

impl Engine {
    /// `<Target>From<Source>`: follow `via` then the target relation from the
    /// subject record.
    ///
    /// The shape of the driver's answer must agree with the identifier's
    /// plurality whether or not anything was found.
    pub(super) fn association(&self, spec: &QuerySpec, args: Args<'_>) -> Result<Projection> {
        let (subject, via) = match args {
            Args::Subject { subject, via } => (subject, via),
            args => return Err(mismatch(spec, &args, "a subject")),
        };

        let Some(target) = &spec.target_association else {
            return Err(Error::invalid_result(format!(
                "{} has no target association",
                spec.identifier
            )));
        };

        let identity = subject.identity()?;

        let mut hops = via;
        hops.push(target.clone());

        let response = self.exec(Traverse {
            model: spec.subject_model.clone(),
            identity: identity.clone(),
            hops: hops.clone(),
        })?;

        let raw = match (spec.plurality, response.rows) {
            (Plurality::Singular, Rows::Record(Some(record))) => Raw::Record(record),
            (Plurality::Singular, Rows::Record(None)) => {
                return Err(Error::record_not_found(format!(
                    "model={}; identity={identity}; hops={}",
                    spec.subject_model,
                    hops.join(".")
                )))
            }
            (Plurality::Plural, Rows::Records(records)) => Raw::Collection(records),
            (_, Rows::Count(_)) => {
                return Err(Error::invalid_result(format!(
                    "{} expected records from traversal, got count",
                    spec.identifier
                )))
            }
            (plurality, rows) => {
                return Err(Error::invalid_ancestry(format!(
                    "{} is {plurality} but `{}` from `{}` yields a {}",
                    spec.identifier,
                    hops.join("."),
                    spec.subject_model,
                    rows.shape()
                )))
            }
        };

        Ok((response.model, raw))
    }
}
