//! Default customization data derived from a schema

use crate::schema::model::{CustomizationData, Field, FieldType, Schema};
use serde_json::{Map, Value};

/// Initial customization data for a template
///
/// Every declared field gets a value. Lists are seeded with `max(min, 1)`
/// items; a declared default list is used when it is at least that long and
/// padded otherwise. Theme selectors start at `default_theme_id`.
pub fn compute_defaults(schema: &Schema, default_theme_id: &str) -> CustomizationData {
    schema
        .iter()
        .map(|field| (field.key.clone(), default_for(field, default_theme_id)))
        .collect()
}

/// Default value of a single field
pub fn default_for(field: &Field, default_theme_id: &str) -> Value {
    match field.kind {
        FieldType::ThemeSelector => Value::String(default_theme_id.to_string()),
        FieldType::Repeatable => {
            let mut items: Vec<Value> = declared_list(field)
                .into_iter()
                .filter(|v| v.is_string())
                .collect();
            while items.len() < field.seed_count() {
                items.push(Value::String(String::new()));
            }
            Value::Array(items)
        }
        FieldType::Group => {
            let mut items: Vec<Value> = declared_list(field)
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(map) => Some(fill_group_item(field, map, default_theme_id)),
                    _ => None,
                })
                .collect();
            while items.len() < field.seed_count() {
                items.push(seed_group_item(field, default_theme_id));
            }
            Value::Array(items)
        }
        FieldType::Select => field
            .default
            .clone()
            .or_else(|| field.options.first().cloned().map(Value::String))
            .unwrap_or_else(|| Value::String(String::new())),
        _ => field
            .default
            .clone()
            .unwrap_or_else(|| Value::String(String::new())),
    }
}

/// A fresh group item built from the nested field defaults
pub fn seed_group_item(field: &Field, default_theme_id: &str) -> Value {
    fill_group_item(field, Map::new(), default_theme_id)
}

fn fill_group_item(field: &Field, mut item: Map<String, Value>, default_theme_id: &str) -> Value {
    for nested in &field.fields {
        if !item.contains_key(&nested.key) {
            item.insert(nested.key.clone(), default_for(nested, default_theme_id));
        }
    }
    Value::Object(item)
}

fn declared_list(field: &Field) -> Vec<Value> {
    match &field.default {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}
