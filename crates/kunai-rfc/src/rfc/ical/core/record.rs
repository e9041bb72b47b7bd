//! Flat property record for a single VEVENT block.

use indexmap::IndexMap;

/// Ordered mapping of property name to property value.
///
/// Names keep the case they were parsed or inserted with. Inserting an
/// existing name replaces the value but keeps the original position, so
/// serialization order is first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyRecord {
    properties: IndexMap<String, String>,
}

impl PropertyRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.properties.insert(name.into(), value.into())
    }

    /// Returns the value of a property by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates properties in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.properties.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for PropertyRecord {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertyRecord {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}
