//! Cell value helpers.

use polars::prelude::AnyValue;

/// Renders a polars cell as a plain string; nulls become the empty string.
pub fn any_to_string(value: AnyValue) -> String {
    match value {
        AnyValue::String(value) => value.to_string(),
        AnyValue::StringOwned(value) => value.to_string(),
        AnyValue::Null => String::new(),
        _ => value.to_string(),
    }
}
