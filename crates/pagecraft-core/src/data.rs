//! Lenient customization data resolution
//!
//! The renderer never reads customization data directly. It reads a resolved
//! copy in which every declared field holds a value of the declared shape:
//! absent, null, empty or wrongly shaped values are replaced by the field's
//! default. Undeclared keys are dropped.

use crate::schema::{default_for, CustomizationData, Field, FieldType, Schema};
use serde_json::{Map, Value};

/// Resolve `data` against `schema`
pub fn resolve(schema: &Schema, data: &CustomizationData, default_theme_id: &str) -> CustomizationData {
    schema
        .iter()
        .map(|field| {
            let value = resolve_field(field, data.get(&field.key), default_theme_id);
            (field.key.clone(), value)
        })
        .collect()
}

/// Current value of one field, or its default
pub fn resolve_field(field: &Field, value: Option<&Value>, default_theme_id: &str) -> Value {
    let resolved = match field.kind {
        FieldType::Repeatable => value.and_then(|v| resolve_repeatable(field, v)),
        FieldType::Group => value.and_then(|v| resolve_group(field, v, default_theme_id)),
        FieldType::Select => value
            .and_then(scalar_text)
            .filter(|s| field.options.iter().any(|o| o == s))
            .map(Value::String),
        FieldType::Color => value
            .and_then(scalar_text)
            .filter(|s| is_hex_color(s))
            .map(Value::String),
        FieldType::Url => value
            .and_then(scalar_text)
            .filter(|s| is_safe_link(s))
            .map(Value::String),
        FieldType::Image => value
            .and_then(scalar_text)
            .filter(|s| is_safe_image(s))
            .map(Value::String),
        _ => value.and_then(scalar_text).map(Value::String),
    };

    resolved.unwrap_or_else(|| default_for(field, default_theme_id))
}

/// Non-empty text of a scalar; numbers and booleans are accepted as text
fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn resolve_repeatable(field: &Field, value: &Value) -> Option<Value> {
    let mut items: Vec<Value> = value
        .as_array()?
        .iter()
        .filter_map(scalar_text)
        .map(Value::String)
        .collect();
    if let Some(max) = field.max {
        items.truncate(max);
    }
    (!items.is_empty()).then_some(Value::Array(items))
}

fn resolve_group(field: &Field, value: &Value, default_theme_id: &str) -> Option<Value> {
    let mut items: Vec<Value> = value
        .as_array()?
        .iter()
        .filter_map(Value::as_object)
        .map(|item| {
            let resolved: Map<String, Value> = field
                .fields
                .iter()
                .map(|nested| {
                    let value = resolve_field(nested, item.get(&nested.key), default_theme_id);
                    (nested.key.clone(), value)
                })
                .collect();
            Value::Object(resolved)
        })
        .collect();
    if let Some(max) = field.max {
        items.truncate(max);
    }
    (!items.is_empty()).then_some(Value::Array(items))
}

const LINK_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];
const IMAGE_SCHEMES: [&str; 2] = ["http", "https"];

/// URL scheme, lowercased, or `None` for a relative reference
///
/// Browsers drop ASCII tabs and newlines anywhere in a URL and leading
/// control characters or spaces, so `java\tscript:` is still `javascript`.
fn url_scheme(url: &str) -> Option<String> {
    let compact: String = url
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();
    let compact = compact.trim_start_matches(|c: char| c <= ' ');
    let end = compact.find([':', '/', '?', '#'])?;
    if !compact[end..].starts_with(':') {
        return None;
    }
    Some(compact[..end].to_ascii_lowercase())
}

/// Link targets: `http(s)`, `mailto`, `tel`, relative paths and fragments
pub fn is_safe_link(url: &str) -> bool {
    url_scheme(url).map_or(true, |scheme| LINK_SCHEMES.contains(&scheme.as_str()))
}

/// Image sources: `http(s)`, relative paths and `data:image/...`
pub fn is_safe_image(url: &str) -> bool {
    match url_scheme(url) {
        None => true,
        Some(scheme) if scheme == "data" => url
            .trim_start()
            .get(..11)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("data:image/")),
        Some(scheme) => IMAGE_SCHEMES.contains(&scheme.as_str()),
    }
}

/// `#rgb` or `#rrggbb`
pub fn is_hex_color(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

/// `rgba(...)` blend of a hex color
///
/// Accent colors come from user `color` fields rather than the theme, so this
/// is the one place a template derives a color value itself. Anything that is
/// not a hex color yields `None`.
pub fn accent_alpha(hex: &str, alpha: f32) -> Option<String> {
    if !is_hex_color(hex) {
        return None;
    }
    let digits = &hex[1..];
    let channel = |i: usize| -> Option<u8> {
        if digits.len() == 3 {
            let d = u8::from_str_radix(&digits[i..i + 1], 16).ok()?;
            Some(d * 17)
        } else {
            u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).ok()
        }
    };
    let alpha = alpha.clamp(0.0, 1.0);
    Some(format!(
        "rgba({}, {}, {}, {})",
        channel(0)?,
        channel(1)?,
        channel(2)?,
        alpha
    ))
}

/// Parse a JSON document into customization data
pub fn parse_data(source: &str) -> crate::Result<CustomizationData> {
    match serde_json::from_str::<Value>(source)? {
        Value::Object(map) => Ok(map),
        other => Err(crate::PagecraftError::DataInvalid(format!(
            "found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
