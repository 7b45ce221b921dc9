//! The data dictionary: every known column, keyed by normalized name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::descriptor::{ColumnDescriptor, DeclaredType};

/// Immutable catalog of column descriptors in dictionary load order.
///
/// Names are unique; when the dictionary repeats a variable name the first
/// descriptor wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataDictionary {
    descriptors: Vec<ColumnDescriptor>,
    index: BTreeMap<String, usize>,
}

impl DataDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a descriptor. Returns false when the name is already known.
    pub fn insert(&mut self, descriptor: ColumnDescriptor) -> bool {
        if descriptor.name.is_empty() || self.index.contains_key(&descriptor.name) {
            return false;
        }
        self.index
            .insert(descriptor.name.clone(), self.descriptors.len());
        self.descriptors.push(descriptor);
        true
    }

    pub fn get(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.index.get(name).map(|&idx| &self.descriptors[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn declared_type(&self, name: &str) -> Option<DeclaredType> {
        self.get(name).map(|descriptor| descriptor.declared_type)
    }

    /// Column names in load order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(|d| d.name.as_str())
    }

    /// Names of columns whose category equals `category` (case-insensitive).
    pub fn columns_in_category(&self, category: &str) -> Vec<&str> {
        self.descriptors
            .iter()
            .filter(|descriptor| {
                descriptor
                    .category
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(category))
            })
            .map(|descriptor| descriptor.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, category: Option<&str>, declared_type: DeclaredType) -> ColumnDescriptor {
        ColumnDescriptor {
            name: name.to_string(),
            category: category.map(String::from),
            declared_type,
        }
    }

    #[test]
    fn insert_keeps_first_descriptor() {
        let mut dict = DataDictionary::new();
        assert!(dict.insert(descriptor("unitid", Some("root"), DeclaredType::Integer)));
        assert!(!dict.insert(descriptor("unitid", Some("school"), DeclaredType::String)));
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.declared_type("unitid"), Some(DeclaredType::Integer));
    }

    #[test]
    fn rejects_empty_names() {
        let mut dict = DataDictionary::new();
        assert!(!dict.insert(descriptor("", None, DeclaredType::Other)));
        assert!(dict.is_empty());
    }

    #[test]
    fn category_lookup_is_case_insensitive() {
        let mut dict = DataDictionary::new();
        dict.insert(descriptor("rpy_1yr_rt", Some("Repayment"), DeclaredType::Float));
        dict.insert(descriptor("control", Some("school"), DeclaredType::Integer));
        assert_eq!(dict.columns_in_category("repayment"), vec!["rpy_1yr_rt"]);
        assert!(dict.columns_in_category("earnings").is_empty());
    }

    #[test]
    fn names_preserve_load_order() {
        let mut dict = DataDictionary::new();
        dict.insert(descriptor("unitid", None, DeclaredType::Integer));
        dict.insert(descriptor("instnm", None, DeclaredType::Autocomplete));
        dict.insert(descriptor("control", None, DeclaredType::Integer));
        let names: Vec<&str> = dict.names().collect();
        assert_eq!(names, vec!["unitid", "instnm", "control"]);
    }
}
