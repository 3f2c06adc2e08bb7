//! Items and field access.
//!
//! An [`Item`] is an arbitrary JSON object. The dropdown never interprets its
//! fields beyond two configurable names: one for identity and one (possibly
//! nested, e.g. `"address.city"`) for the row label.

use serde_json::{Map, Value};

use crate::error::DataError;

/// A single candidate record.
pub type Item = Map<String, Value>;

/// Identity value of an item, read from the configured key field.
///
/// Missing key fields read as `Value::Null`, so all items without a key
/// compare equal to each other.
pub type Key = Value;

/// Separator between segments of a display path.
pub const PATH_SEPARATOR: char = '.';

/// Read the identity of `item` from `key_field`.
pub fn key_of(item: &Item, key_field: &str) -> Key {
    item.get(key_field).cloned().unwrap_or(Value::Null)
}

/// Walk a dotted path into `item`.
///
/// Each segment indexes an object by name or an array by position. Returns
/// `None` as soon as any segment is missing.
///
/// ```
/// use dropdown_lib::item::lookup_path;
/// use serde_json::json;
///
/// let item = json!({"address": {"city": "Oslo"}});
/// let item = item.as_object().unwrap();
/// assert_eq!(lookup_path(item, "address.city"), Some(&json!("Oslo")));
/// assert_eq!(lookup_path(item, "address.zip"), None);
/// ```
pub fn lookup_path<'a>(item: &'a Item, path: &str) -> Option<&'a Value> {
    let mut segments = path.split(PATH_SEPARATOR);
    let first = segments.next()?;
    segments.try_fold(item.get(first)?, |value, segment| match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Label for an item: the display path rendered as text, empty when absent.
/// Booleans render as nothing.
pub fn display_value(item: &Item, display_key: &str) -> String {
    match lookup_path(item, display_key) {
        None | Some(Value::Null) | Some(Value::Bool(_)) => String::new(),
        Some(value) => value_text(value),
    }
}

/// String form of a field value, as used by search.
///
/// Strings are taken verbatim, scalars use their JSON text (whole floats
/// drop the `.0`), arrays join
/// their elements with `,` and nested objects collapse to
/// `[object Object]`.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                other => value_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Parse a JSON array of objects into items.
pub fn items_from_json(json: &str) -> Result<Vec<Item>, DataError> {
    let root: Value = serde_json::from_str(json)?;
    let Value::Array(elements) = root else {
        return Err(DataError::NotAnArray);
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| match element {
            Value::Object(map) => Ok(map),
            _ => Err(DataError::NotAnObject { index }),
        })
        .collect()
}
