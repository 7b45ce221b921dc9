//! Ordered set of column names to keep.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An ordered, duplicate-free set of normalized column names.
///
/// Every name is expected to exist in the [`crate::DataDictionary`] it was
/// derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSet {
    names: Vec<String>,
}

impl ColumnSet {
    /// Builds a set from names, keeping first occurrences in order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = BTreeSet::new();
        let mut ordered = Vec::new();
        for name in names {
            let name = name.into();
            if !name.is_empty() && seen.insert(name.clone()) {
                ordered.push(name);
            }
        }
        Self { names: ordered }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Removes every name in `to_remove`, preserving order of the rest.
    pub fn without<'a, I>(&self, to_remove: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let removed: BTreeSet<&str> = to_remove.into_iter().collect();
        Self {
            names: self
                .names
                .iter()
                .filter(|name| !removed.contains(name.as_str()))
                .cloned()
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
