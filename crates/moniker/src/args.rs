use crate::Entity;

use moniker_core::{
    stmt::{Filter, Value},
    Error, Result,
};
use std::fmt;

/// Runtime arguments for a call through an identifier.
///
/// Which variant fits depends on the identifier: a scalar for `...By<Field>`
/// and `...ById`, a filter mapping for a field-less `...By`, and a subject for
/// `...From...`.
pub enum Args<'a> {
    /// Value compared against the identifier's field (or the primary key)
    Key(Value),

    /// Caller supplied conditions for identifiers without a field phrase
    Filter(Filter),

    /// Record the association is followed from
    Subject {
        subject: &'a dyn Identity,

        /// Intermediate relations traversed before the identifier's target
        via: Vec<String>,
    },
}

/// Anything that can stand in for a record when following associations.
pub trait Identity {
    /// Primary key of the record this value refers to.
    fn identity(&self) -> Result<Value>;
}

impl<'a> Args<'a> {
    pub fn key(value: impl Into<Value>) -> Args<'a> {
        Args::Key(value.into())
    }

    pub fn subject(subject: &'a dyn Identity) -> Args<'a> {
        Args::Subject {
            subject,
            via: vec![],
        }
    }

    /// Route an association through intermediate relations, first hop first.
    ///
    /// # Panics
    ///
    /// If `self` is not a subject argument.
    #[track_caller]
    pub fn via<I, S>(mut self, hops: I) -> Args<'a>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Args::Subject { via, .. } = &mut self {
            via.extend(hops.into_iter().map(Into::into));
            return self;
        }

        panic!("`via` only applies to subject arguments; args={self:?}");
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Args::Key(_) => "a key",
            Args::Filter(_) => "a filter",
            Args::Subject { .. } => "a subject",
        }
    }
}

impl fmt::Debug for Args<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Args::Key(value) => f.debug_tuple("Key").field(value).finish(),
            Args::Filter(filter) => f.debug_tuple("Filter").field(filter).finish(),
            Args::Subject { subject, via } => f
                .debug_struct("Subject")
                .field("identity", &subject.identity().ok())
                .field("via", via)
                .finish(),
        }
    }
}

impl From<Value> for Args<'_> {
    fn from(value: Value) -> Self {
        Args::Key(value)
    }
}

impl From<Filter> for Args<'_> {
    fn from(value: Filter) -> Self {
        Args::Filter(value)
    }
}

impl<'a> From<&'a Entity> for Args<'a> {
    fn from(value: &'a Entity) -> Self {
        Args::subject(value)
    }
}

macro_rules! impl_args_from_scalar {
    ( $($t:ty),+ ) => {
        $(
            impl From<$t> for Args<'_> {
                fn from(value: $t) -> Self {
                    Args::Key(value.into())
                }
            }
        )+
    };
}

impl_args_from_scalar!(bool, i32, i64, u32, f64, String, &str);

impl Identity for Value {
    fn identity(&self) -> Result<Value> {
        if self.is_null() {
            return Err(Error::invalid_argument("subject identity is null"));
        }
        Ok(self.clone())
    }
}

impl Identity for Entity {
    fn identity(&self) -> Result<Value> {
        self.key()
            .filter(|key| !key.is_null())
            .cloned()
            .ok_or_else(|| Error::undefined_attribute(self.view_type().name(), "primary key"))
    }
}

impl<T: Identity + ?Sized> Identity for &T {
    fn identity(&self) -> Result<Value> {
        (**self).identity()
    }
}

macro_rules! impl_identity_for_scalar {
    ( $($t:ty),+ ) => {
        $(
            impl Identity for $t {
                fn identity(&self) -> Result<Value> {
                    Ok(Value::from(self.clone()))
                }
            }
        )+
    };
}

impl_identity_for_scalar!(i32, i64, u32, String);

impl Identity for str {
    fn identity(&self) -> Result<Value> {
        Ok(Value::from(self))
    }
}
