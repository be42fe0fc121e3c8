use heck::{ToSnakeCase, ToUpperCamelCase};

/// An identifier split into its camel-case word tokens.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    /// Splits `src` into words using `heck`'s word boundaries.
    ///
    /// Each word is upper-camel cased, so `users_by_last_name` and
    /// `UsersByLastName` have the same parts. An acronym stays one word but
    /// loses its casing (`UserByHTTPRequest` is `User`, `By`, `Http`, `Request`).
    pub fn new(src: &str) -> Self {
        let parts = src
            .to_snake_case()
            .split('_')
            .filter(|part| !part.is_empty())
            .map(|part| part.to_upper_camel_case())
            .collect();

        Self { parts }
    }

    pub fn from_parts(parts: &[String]) -> Self {
        Self {
            parts: parts.to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Position of the first token equal to `word`.
    pub fn position(&self, word: &str) -> Option<usize> {
        self.parts.iter().position(|part| part == word)
    }

    /// Tokens before `index` and tokens after it.
    pub fn split_at_keyword(&self, index: usize) -> (Name, Name) {
        (
            Name::from_parts(&self.parts[..index]),
            Name::from_parts(&self.parts[index + 1..]),
        )
    }

    pub fn upper_camel_case(&self) -> String {
        self.parts.concat()
    }

    pub fn snake_case(&self) -> String {
        self.parts
            .iter()
            .map(|part| part.to_snake_case())
            .collect::<Vec<_>>()
            .join("_")
    }
}

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.upper_camel_case())
    }
}
