use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use super::locale::primary_subtag;
use super::translations;

/// A localized value: either one string or an ordered list (feature tags,
/// bullet points).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextValue {
    One(&'static str),
    Many(&'static [&'static str]),
}

pub type Entries = &'static [(&'static str, TextValue)];

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dictionary(BTreeMap<&'static str, TextValue>);

impl Dictionary {
    pub fn from_entries(entries: Entries) -> Self {
        Dictionary(entries.iter().copied().collect())
    }

    pub fn get(&self, key: &str) -> Option<&TextValue> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn values(&self) -> impl Iterator<Item = &TextValue> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Every locale's dictionary, keyed by lowercase primary language tag.
/// Built once at startup and read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Translations {
    reference: &'static str,
    locales: BTreeMap<&'static str, Dictionary>,
}

impl Serialize for Translations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.locales.serialize(serializer)
    }
}

impl Translations {
    pub fn new(reference: &'static str, tables: &[(&'static str, Entries)]) -> Self {
        let locales = tables
            .iter()
            .map(|&(tag, entries)| (tag, Dictionary::from_entries(entries)))
            .collect();
        Self { reference, locales }
    }

    /// The dictionaries shipped with the page.
    pub fn builtin() -> Self {
        Self::new("en", translations::ALL)
    }

    pub fn reference(&self) -> &'static str {
        self.reference
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.locales.keys().copied()
    }

    pub fn lookup(&self, tag: &str) -> Option<(&'static str, &Dictionary)> {
        self.locales.get_key_value(tag).map(|(tag, dict)| (*tag, dict))
    }

    /// Finds the dictionary for `tag`, retrying with the primary subtag of
    /// the tag itself and then of the raw language the browser reported.
    /// `None` means the page stays as rendered.
    pub fn resolve(&self, tag: &str, reported: Option<&str>) -> Option<(&'static str, &Dictionary)> {
        self.lookup(tag)
            .or_else(|| self.lookup(&primary_subtag(tag)))
            .or_else(|| reported.and_then(|raw| self.lookup(&primary_subtag(raw))))
    }

    /// Keys the reference locale defines that `tag` lacks. Gaps are
    /// tolerated at runtime (the element keeps its text); this only reports.
    pub fn missing_keys(&self, tag: &str) -> Vec<&'static str> {
        let (Some(reference), Some((_, dict))) = (self.locales.get(self.reference), self.lookup(tag)) else {
            return Vec::new();
        };
        reference.keys().filter(|key| dict.get(key).is_none()).collect()
    }
}
