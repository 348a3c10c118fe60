//! Schema validation
//!
//! Runs when a template is registered, so a broken schema never reaches the
//! renderer.

use crate::error::{PagecraftError, Result};
use crate::schema::model::{Field, FieldType, Schema};
use std::collections::HashSet;

/// Keys the render context claims for itself
const RESERVED_KEYS: [&str; 2] = ["var", "meta"];

/// Validate a template's field schema
///
/// Checks, per field:
/// - key is non-empty, unique among its siblings and free of `.`, `[`, `]`
/// - select fields have options and any default is one of them
/// - list attributes sit on list fields and text attributes on text fields
/// - list bounds satisfy `min <= max` and list defaults fit within `max`
/// - groups declare nested fields, none of which is another group
pub fn validate_schema(template: &str, schema: &Schema) -> Result<()> {
    validate_fields(template, &schema.fields, true)
}

fn validate_fields(template: &str, fields: &[Field], top_level: bool) -> Result<()> {
    let mut seen = HashSet::new();

    for field in fields {
        let invalid = |reason: String| PagecraftError::SchemaInvalid {
            template: template.to_string(),
            field: field.key.clone(),
            reason,
        };

        if field.key.trim().is_empty() {
            return Err(invalid("field key must not be empty".to_string()));
        }
        if field.key.contains(['.', '[', ']']) || field.key.chars().any(char::is_whitespace) {
            return Err(invalid(
                "field key must not contain '.', '[', ']' or whitespace".to_string(),
            ));
        }
        if !seen.insert(field.key.as_str()) {
            return Err(invalid("duplicate field key".to_string()));
        }
        if top_level && RESERVED_KEYS.contains(&field.key.as_str()) {
            return Err(invalid(format!("'{}' is a reserved key", field.key)));
        }

        if field.kind == FieldType::Select {
            if field.options.is_empty() {
                return Err(invalid("select field declares no options".to_string()));
            }
            if let Some(default) = &field.default {
                let listed = default
                    .as_str()
                    .map(|d| field.options.iter().any(|o| o == d))
                    .unwrap_or(false);
                if !listed {
                    return Err(invalid(format!(
                        "default {} is not one of the options",
                        default
                    )));
                }
            }
        }

        let bounded = field.min.is_some() || field.max.is_some() || field.item_label.is_some();
        if bounded && !field.kind.is_list() {
            return Err(invalid(format!(
                "min, max and item_label apply to list fields, not {}",
                field.kind
            )));
        }
        if (field.placeholder.is_some() || field.rows.is_some()) && !field.kind.is_text_like() {
            return Err(invalid(format!(
                "placeholder and rows apply to text fields, not {}",
                field.kind
            )));
        }

        if let (Some(min), Some(max)) = (field.min, field.max) {
            if min > max {
                return Err(invalid(format!("min ({}) exceeds max ({})", min, max)));
            }
        }

        if field.kind.is_list() {
            if let Some(default) = &field.default {
                let Some(items) = default.as_array() else {
                    return Err(invalid(format!("{} default must be a list", field.kind)));
                };
                if let Some(max) = field.max.filter(|max| items.len() > *max) {
                    return Err(invalid(format!(
                        "default has {} items but max is {}",
                        items.len(),
                        max
                    )));
                }
            }
        }

        if field.kind == FieldType::Group {
            if field.fields.is_empty() {
                return Err(invalid("group declares no nested fields".to_string()));
            }
            if let Some(nested) = field.fields.iter().find(|f| f.kind == FieldType::Group) {
                return Err(PagecraftError::NestedGroup {
                    template: template.to_string(),
                    field: field.key.clone(),
                    nested: nested.key.clone(),
                });
            }
            validate_fields(template, &field.fields, false)?;
        } else if !field.fields.is_empty() {
            return Err(invalid(format!(
                "only group fields may declare nested fields, not {}",
                field.kind
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(key: &str) -> Field {
        Field::new(key, FieldType::Text, key)
    }

    #[test]
    fn test_valid_schema() {
        let schema = Schema::new(vec![
            text("name"),
            Field::new("layout", FieldType::Select, "Layout")
                .with_options(["grid", "list"])
                .with_default(json!("list")),
            Field::new("projects", FieldType::Group, "Projects")
                .with_bounds(Some(1), Some(4))
                .with_fields(vec![text("title"), text("link")]),
        ]);
        validate_schema("t", &schema).unwrap();
    }

    #[test]
    fn test_nested_group_rejected() {
        let schema = Schema::new(vec![Field::new("outer", FieldType::Group, "Outer")
            .with_fields(vec![Field::new("inner", FieldType::Group, "Inner")
                .with_fields(vec![text("x")])])]);

        match validate_schema("menu", &schema) {
            Err(PagecraftError::NestedGroup {
                template,
                field,
                nested,
            }) => {
                assert_eq!(template, "menu");
                assert_eq!(field, "outer");
                assert_eq!(nested, "inner");
            }
            other => panic!("Expected NestedGroup, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let schema = Schema::new(vec![text("name"), text("name")]);
        assert!(matches!(
            validate_schema("t", &schema),
            Err(PagecraftError::SchemaInvalid { reason, .. }) if reason.contains("duplicate")
        ));
    }

    #[test]
    fn test_path_characters_rejected() {
        for key in ["a.b", "a[0]", "a]", "has space", ""] {
            let schema = Schema::new(vec![text(key)]);
            assert!(validate_schema("t", &schema).is_err(), "accepted '{}'", key);
        }
    }

    #[test]
    fn test_select_default_must_be_option() {
        let schema = Schema::new(vec![Field::new("layout", FieldType::Select, "Layout")
            .with_options(["grid"])
            .with_default(json!("masonry"))]);
        assert!(validate_schema("t", &schema).is_err());
    }

    #[test]
    fn test_min_above_max_rejected() {
        let schema = Schema::new(vec![Field::new("tags", FieldType::Repeatable, "Tags")
            .with_bounds(Some(3), Some(2))]);
        assert!(validate_schema("t", &schema).is_err());
    }

    #[test]
    fn test_attributes_must_match_field_kind() {
        let mut color = Field::new("accent", FieldType::Color, "Accent");
        color.rows = Some(3);
        assert!(validate_schema("t", &Schema::new(vec![color])).is_err());

        let bounded_text = text("name").with_bounds(None, Some(2));
        assert!(validate_schema("t", &Schema::new(vec![bounded_text])).is_err());

        let mut bio = Field::new("bio", FieldType::Textarea, "Bio");
        bio.rows = Some(4);
        bio.placeholder = Some("A few lines".to_string());
        validate_schema("t", &Schema::new(vec![bio])).unwrap();
    }

    #[test]
    fn test_list_default_longer_than_max_rejected() {
        let tags = Field::new("tags", FieldType::Repeatable, "Tags")
            .with_default(json!(["a", "b", "c"]))
            .with_bounds(None, Some(2));
        match validate_schema("t", &Schema::new(vec![tags])) {
            Err(PagecraftError::SchemaInvalid { field, reason, .. }) => {
                assert_eq!(field, "tags");
                assert!(reason.contains("max is 2"), "{}", reason);
            }
            other => panic!("Expected SchemaInvalid, got {:?}", other),
        }

        let projects = Field::new("projects", FieldType::Group, "Projects")
            .with_fields(vec![text("title")])
            .with_default(json!([{ "title": "a" }, { "title": "b" }]))
            .with_bounds(None, Some(1));
        assert!(validate_schema("t", &Schema::new(vec![projects])).is_err());

        let fits = Field::new("tags", FieldType::Repeatable, "Tags")
            .with_default(json!(["a", "b"]))
            .with_bounds(None, Some(2));
        validate_schema("t", &Schema::new(vec![fits])).unwrap();
    }

    #[test]
    fn test_empty_group_rejected() {
        let schema = Schema::new(vec![Field::new("items", FieldType::Group, "Items")]);
        assert!(validate_schema("t", &schema).is_err());
    }

    #[test]
    fn test_reserved_key_rejected_at_top_level_only() {
        assert!(validate_schema("t", &Schema::new(vec![text("var")])).is_err());

        let nested = Schema::new(vec![Field::new("items", FieldType::Group, "Items")
            .with_fields(vec![text("meta")])]);
        validate_schema("t", &nested).unwrap();
    }
}
