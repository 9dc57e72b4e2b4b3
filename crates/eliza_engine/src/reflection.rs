//! Pronoun and verb reflection.
//!
//! Text captured from the user is mirrored back from the other side of the
//! conversation before it is spliced into a response: "i am sad" becomes
//! "you are sad".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from lowercase tokens to their reflected replacements.
///
/// Keys are always stored lowercase, including when read from a script file.
/// Values are kept verbatim, so a reflection may introduce capitals
/// ("you've" → "I have").
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct Reflections {
    table: BTreeMap<String, String>,
}

impl Reflections {
    /// Creates an empty reflection table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a reflection, lower-casing the key.
    pub fn insert(&mut self, word: impl AsRef<str>, reflected: impl Into<String>) {
        self.table
            .insert(word.as_ref().to_lowercase(), reflected.into());
    }

    /// Returns the reflection of a single lowercase token, if any.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&str> {
        self.table.get(word).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if no reflections are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Reflects `text` through this table. See [`translate`].
    #[must_use]
    pub fn translate(&self, text: &str) -> String {
        translate(text, self)
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Reflections {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut reflections = Self::new();
        for (word, reflected) in iter {
            reflections.insert(word, reflected);
        }
        reflections
    }
}

impl From<BTreeMap<String, String>> for Reflections {
    fn from(table: BTreeMap<String, String>) -> Self {
        table.into_iter().collect()
    }
}

impl From<Reflections> for BTreeMap<String, String> {
    fn from(reflections: Reflections) -> Self {
        reflections.table
    }
}

/// Lower-cases `text`, splits it on whitespace, replaces every token found in
/// `dict`, and rejoins the tokens with single spaces.
///
/// Tokens without a reflection pass through (lower-cased).
#[must_use]
pub fn translate(text: &str, dict: &Reflections) -> String {
    let lowered = text.to_lowercase();
    lowered
        .split_whitespace()
        .map(|word| dict.get(word).unwrap_or(word))
        .collect::<Vec<_>>()
        .join(" ")
}
