/// Canonical description of what an identifier asks for.
///
/// Built once per distinct identifier and shared through the registry's spec
/// cache. Exactly one of `field` (query mode) or `target_association`
/// (association mode) is meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    /// Identifier this spec was parsed from
    pub identifier: String,

    pub mode: Mode,

    /// Derived once at parse time
    pub plurality: Plurality,

    /// Model queried (query mode) or held (association mode), singular and
    /// snake-cased
    pub subject_model: String,

    /// Filter field for query mode. `None` when the caller supplies a filter
    /// mapping at call time.
    pub field: Option<String>,

    /// Relation reached in association mode
    pub target_association: Option<String>,

    /// `field` is the primary key, taken from an `...ById` identifier
    pub(crate) key_lookup: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// `<Model>By<Field>`
    Query,

    /// `<Target>From<Source>`
    Association,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plurality {
    Singular,
    Plural,
}

impl QuerySpec {
    pub fn is_query(&self) -> bool {
        matches!(self.mode, Mode::Query)
    }

    pub fn is_association(&self) -> bool {
        matches!(self.mode, Mode::Association)
    }

    pub fn is_plural(&self) -> bool {
        matches!(self.plurality, Plurality::Plural)
    }

    /// Returns `true` for the primary key fast path.
    pub fn is_key_lookup(&self) -> bool {
        self.key_lookup
    }
}

impl Plurality {
    pub(crate) fn of(plural: bool) -> Plurality {
        if plural {
            Plurality::Plural
        } else {
            Plurality::Singular
        }
    }
}

impl core::fmt::Display for Plurality {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Plurality::Singular => f.write_str("singular"),
            Plurality::Plural => f.write_str("plural"),
        }
    }
}
