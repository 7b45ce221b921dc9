//! Column descriptors sourced from the data dictionary.

use serde::{Deserialize, Serialize};

/// Data type a column is declared to carry in the dictionary's
/// `api data type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclaredType {
    /// Free-text or coded text values.
    String,
    /// Autocomplete lookup values (names, aliases); text in practice.
    Autocomplete,
    Integer,
    Float,
    /// Anything the dictionary labels that we do not special-case.
    Other,
}

impl DeclaredType {
    /// Parses a dictionary type label. Unknown labels map to `Other`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "string" => Self::String,
            "autocomplete" => Self::Autocomplete,
            "integer" | "int" => Self::Integer,
            "float" | "number" => Self::Float,
            _ => Self::Other,
        }
    }

    /// True when values must be kept as opaque text regardless of
    /// apparent numeric-ness (leading zeros, mixed alphanumeric codes).
    pub fn is_textual(self) -> bool {
        matches!(self, Self::String | Self::Autocomplete)
    }
}

/// Definition of one known column from the data dictionary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Normalized column name.
    pub name: String,
    /// Semantic category (e.g. "repayment", "academics"), if declared.
    pub category: Option<String>,
    /// Declared API data type.
    pub declared_type: DeclaredType,
}

/// Normalizes a column or field name: lowercase, spaces and dashes
/// become underscores.
pub fn normalize_name(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_replaces() {
        assert_eq!(normalize_name("VARIABLE NAME"), "variable_name");
        assert_eq!(normalize_name("dev-category"), "dev_category");
        assert_eq!(normalize_name("  CONTROL  "), "control");
    }

    #[test]
    fn declared_type_labels() {
        assert_eq!(DeclaredType::from_label("string"), DeclaredType::String);
        assert_eq!(
            DeclaredType::from_label("Autocomplete"),
            DeclaredType::Autocomplete
        );
        assert_eq!(DeclaredType::from_label("integer"), DeclaredType::Integer);
        assert_eq!(DeclaredType::from_label("float"), DeclaredType::Float);
        assert_eq!(DeclaredType::from_label("blob"), DeclaredType::Other);
    }

    #[test]
    fn textual_types() {
        assert!(DeclaredType::String.is_textual());
        assert!(DeclaredType::Autocomplete.is_textual());
        assert!(!DeclaredType::Integer.is_textual());
        assert!(!DeclaredType::Other.is_textual());
    }
}
