//! Helper functions for markup rendering

use crate::template::error::TemplateError;
use serde_json::Value;

use super::{Escape, TemplateContext};

/// Resolve a dotted key from JSON data
pub(crate) fn resolve_key<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = data;

    for part in key.split('.') {
        current = match current {
            Value::Object(map) => map.get(part)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Stringify a JSON value for placeholder output
pub(crate) fn stringify_value(
    value: &Value,
    key: &str,
    escape: Escape,
) -> Result<String, TemplateError> {
    let raw = match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) => {
            return Err(TemplateError::ArrayInNonEachContext {
                key: key.to_string(),
            });
        }
        Value::Object(_) => {
            return Err(TemplateError::ObjectInPlaceholder {
                key: key.to_string(),
            });
        }
    };

    Ok(match escape {
        Escape::Html => escape_html(&raw),
        Escape::None => raw,
    })
}

/// Truthiness for `{{if}}` blocks
///
/// Missing keys, null, false, empty strings and empty collections are false.
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
        Some(Value::Number(_)) => true,
    }
}

/// Create a loop context with a variable binding
pub(crate) fn create_loop_context(base_data: &Value, var_name: &str, item: Value) -> TemplateContext {
    let mut map = match base_data {
        Value::Object(map) => map.clone(),
        _ => serde_json::Map::new(),
    };

    map.insert(var_name.to_string(), item);
    TemplateContext::new(Value::Object(map))
}

/// Escape text for interpolation into HTML element content or attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
