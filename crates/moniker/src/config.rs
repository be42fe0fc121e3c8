use moniker_core::schema::Inflections;

use serde::Deserialize;

/// Configuration for name resolution and view generation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Primary key attribute, used by `...ById` identifiers and to capture an
    /// entity's identity
    pub primary_key: String,

    /// Reserved prefix for generated view type names
    pub view_prefix: String,

    /// Irregular and uncountable nouns
    pub inflections: Inflections,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            primary_key: "id".to_string(),
            view_prefix: "Readonly".to_string(),
            inflections: Inflections::default(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary key attribute name
    pub fn primary_key(mut self, name: impl Into<String>) -> Self {
        self.primary_key = name.into();
        self
    }

    /// Set the generated view type name prefix
    pub fn view_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.view_prefix = prefix.into();
        self
    }

    /// Set the inflection exception table
    pub fn inflections(mut self, inflections: Inflections) -> Self {
        self.inflections = inflections;
        self
    }
}
