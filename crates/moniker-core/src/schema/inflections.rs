use super::Name;

use heck::ToSnakeCase;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Singular/plural inflection with a pluggable exception table.
///
/// Exceptions are consulted before the rule-based inflector. Only the last word
/// of a phrase is inflected, so `SportsCars` singularizes to `sports_car`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Inflections {
    /// Singular to plural.
    irregular: BTreeMap<String, String>,

    /// Words whose singular and plural forms are the same.
    uncountable: BTreeSet<String>,
}

impl Inflections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an irregular noun, e.g. `("person", "people")`.
    pub fn irregular(mut self, singular: impl AsRef<str>, plural: impl AsRef<str>) -> Self {
        self.irregular.insert(
            singular.as_ref().to_snake_case(),
            plural.as_ref().to_snake_case(),
        );
        self
    }

    /// Add a noun with no distinct plural, e.g. `equipment`.
    pub fn uncountable(mut self, word: impl AsRef<str>) -> Self {
        self.uncountable.insert(word.as_ref().to_snake_case());
        self
    }

    /// Singular form of `phrase` in lower, underscore-separated form.
    pub fn singularize(&self, phrase: &Name) -> String {
        self.inflect_last(phrase, |word| self.singular_word(word))
    }

    /// Plural form of `phrase` in lower, underscore-separated form.
    pub fn pluralize(&self, phrase: &Name) -> String {
        self.inflect_last(phrase, |word| self.plural_word(word))
    }

    /// A phrase is plural when it equals its own plural inflection and differs
    /// from its singular one. Uncountable nouns are therefore singular.
    pub fn is_plural(&self, phrase: &Name) -> bool {
        let snake = phrase.snake_case();
        snake == self.pluralize(phrase) && snake != self.singularize(phrase)
    }

    fn singular_word(&self, word: &str) -> String {
        if self.uncountable.contains(word) || self.irregular.contains_key(word) {
            return word.to_string();
        }

        if let Some((singular, _)) = self.irregular.iter().find(|(_, plural)| *plural == word) {
            return singular.clone();
        }

        pluralizer::pluralize(word, 1, false)
    }

    fn plural_word(&self, word: &str) -> String {
        if self.uncountable.contains(word) || self.irregular.values().any(|plural| plural == word)
        {
            return word.to_string();
        }

        if let Some(plural) = self.irregular.get(word) {
            return plural.clone();
        }

        pluralizer::pluralize(word, 2, false)
    }

    fn inflect_last(&self, phrase: &Name, f: impl Fn(&str) -> String) -> String {
        let mut words: Vec<String> = phrase.parts.iter().map(|p| p.to_snake_case()).collect();

        if let Some(last) = words.last_mut() {
            *last = f(last);
        }

        words.join("_")
    }
}
