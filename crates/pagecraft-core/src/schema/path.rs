//! Edit paths and typed edit operations
//!
//! ```text
//! key            → SetScalar
//! key[n]         → SetArrayItem
//! key[n].field   → SetGroupField
//! ```
//!
//! `AppendGroupItem` and `RemoveGroupItem` have no path form and are applied
//! with [`apply_op`] directly.

use crate::error::{PagecraftError, Result};
use crate::schema::model::CustomizationData;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Parsed edit path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPath {
    Key(String),
    Index { key: String, index: usize },
    Member { key: String, index: usize, field: String },
}

impl FieldPath {
    pub fn parse(path: &str) -> Result<Self> {
        let invalid = |reason: &str| PagecraftError::InvalidEditPath {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        let Some(open) = path.find('[') else {
            if path.contains(']') {
                return Err(invalid("unexpected ']'"));
            }
            if path.contains('.') {
                return Err(invalid("member access requires an index, e.g. key[0].field"));
            }
            return Ok(FieldPath::Key(check_ident(path).map_err(invalid)?.to_string()));
        };

        let key = check_ident(&path[..open]).map_err(invalid)?;
        let close = path[open..]
            .find(']')
            .map(|c| open + c)
            .ok_or_else(|| invalid("unclosed index"))?;
        let index_text = &path[open + 1..close];
        if index_text.is_empty() || !index_text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("index must be a non-negative integer"));
        }
        let index: usize = index_text
            .parse()
            .map_err(|_| invalid("index is out of range"))?;

        let rest = &path[close + 1..];
        if rest.is_empty() {
            return Ok(FieldPath::Index {
                key: key.to_string(),
                index,
            });
        }

        let field = rest
            .strip_prefix('.')
            .ok_or_else(|| invalid("expected '.' after index"))?;
        if field.contains(['[', ']', '.']) {
            return Err(invalid("paths nest at most one level"));
        }
        let field = check_ident(field).map_err(invalid)?;

        Ok(FieldPath::Member {
            key: key.to_string(),
            index,
            field: field.to_string(),
        })
    }

    /// Top-level field key the path addresses
    pub fn key(&self) -> &str {
        match self {
            FieldPath::Key(key) => key,
            FieldPath::Index { key, .. } => key,
            FieldPath::Member { key, .. } => key,
        }
    }

    /// Edit operation that writes `value` at this path
    pub fn into_op(self, value: Value) -> EditOp {
        match self {
            FieldPath::Key(key) => EditOp::SetScalar { key, value },
            FieldPath::Index { key, index } => EditOp::SetArrayItem { key, index, value },
            FieldPath::Member { key, index, field } => EditOp::SetGroupField {
                key,
                index,
                field,
                value,
            },
        }
    }
}

fn check_ident(ident: &str) -> std::result::Result<&str, &'static str> {
    if ident.is_empty() {
        Err("empty key")
    } else if ident.chars().any(char::is_whitespace) {
        Err("keys cannot contain whitespace")
    } else {
        Ok(ident)
    }
}

impl FromStr for FieldPath {
    type Err = PagecraftError;

    fn from_str(s: &str) -> Result<Self> {
        FieldPath::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Key(key) => write!(f, "{}", key),
            FieldPath::Index { key, index } => write!(f, "{}[{}]", key, index),
            FieldPath::Member { key, index, field } => write!(f, "{}[{}].{}", key, index, field),
        }
    }
}

/// Closed set of customization edits
#[derive(Debug, Clone, PartialEq)]
pub enum EditOp {
    SetScalar {
        key: String,
        value: Value,
    },
    SetArrayItem {
        key: String,
        index: usize,
        value: Value,
    },
    SetGroupField {
        key: String,
        index: usize,
        field: String,
        value: Value,
    },
    AppendGroupItem {
        key: String,
        item: Value,
    },
    RemoveGroupItem {
        key: String,
        index: usize,
    },
}

/// Write `value` at `path`, returning the edited copy of `data`
pub fn apply_edit(data: &CustomizationData, path: &str, value: Value) -> Result<CustomizationData> {
    let op = FieldPath::parse(path)?.into_op(value);
    apply_op(data, op)
}

/// Apply one edit operation, returning the edited copy of `data`
///
/// An index past the end appends one new item rather than padding up to the
/// index, so `skills[99]` on a two-item list writes `skills[2]`. A value of
/// the wrong shape under `key` is replaced by a list.
pub fn apply_op(data: &CustomizationData, op: EditOp) -> Result<CustomizationData> {
    let mut next = data.clone();

    match op {
        EditOp::SetScalar { key, value } => {
            next.insert(key, value);
        }
        EditOp::SetArrayItem { key, index, value } => {
            let mut items = take_list(&mut next, &key);
            let slot = slot(&mut items, index, Value::Null);
            items[slot] = value;
            next.insert(key, Value::Array(items));
        }
        EditOp::SetGroupField {
            key,
            index,
            field,
            value,
        } => {
            let mut items = take_list(&mut next, &key);
            let slot = slot(&mut items, index, Value::Object(Map::new()));
            let mut item = match items[slot].take() {
                Value::Object(item) => item,
                _ => Map::new(),
            };
            item.insert(field, value);
            items[slot] = Value::Object(item);
            next.insert(key, Value::Array(items));
        }
        EditOp::AppendGroupItem { key, item } => {
            let mut items = take_list(&mut next, &key);
            items.push(item);
            next.insert(key, Value::Array(items));
        }
        EditOp::RemoveGroupItem { key, index } => {
            let mut items = take_list(&mut next, &key);
            if index >= items.len() {
                return Err(PagecraftError::InvalidEditPath {
                    path: format!("{}[{}]", key, index),
                    reason: "no item at this index".to_string(),
                });
            }
            items.remove(index);
            next.insert(key, Value::Array(items));
        }
    }

    Ok(next)
}

/// Remove the list under `key`; anything that is not a list becomes empty
fn take_list(data: &mut CustomizationData, key: &str) -> Vec<Value> {
    match data.remove(key) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

/// Position `index` addresses, appending `fill` when it is past the end
fn slot(items: &mut Vec<Value>, index: usize, fill: Value) -> usize {
    if index < items.len() {
        return index;
    }
    items.push(fill);
    items.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> CustomizationData {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_parse_grammar() {
        assert_eq!(FieldPath::parse("name").unwrap(), FieldPath::Key("name".into()));
        assert_eq!(
            FieldPath::parse("skills[2]").unwrap(),
            FieldPath::Index {
                key: "skills".into(),
                index: 2
            }
        );
        assert_eq!(
            FieldPath::parse("projects[0].title").unwrap(),
            FieldPath::Member {
                key: "projects".into(),
                index: 0,
                field: "title".into()
            }
        );
    }

    #[test]
    fn test_parse_display_agrees() {
        for path in ["name", "skills[2]", "projects[10].link"] {
            assert_eq!(FieldPath::parse(path).unwrap().to_string(), path);
        }
    }

    #[test]
    fn test_malformed_paths() {
        for path in [
            "", "a[", "a[]", "a[x]", "a[-1]", "a]", "[0]", "a[0]b", "a[0].", "a[0].b[1]",
            "a.b", "a[0].b.c", "a b",
        ] {
            assert!(
                matches!(
                    FieldPath::parse(path),
                    Err(PagecraftError::InvalidEditPath { .. })
                ),
                "accepted '{}'",
                path
            );
        }
    }

    #[test]
    fn test_set_scalar_returns_new_map() {
        let before = data(json!({ "name": "Ada" }));
        let after = apply_edit(&before, "name", json!("Grace")).unwrap();
        assert_eq!(before["name"], json!("Ada"));
        assert_eq!(after["name"], json!("Grace"));
    }

    #[test]
    fn test_set_array_item_past_end_appends() {
        let before = data(json!({ "skills": ["a"] }));
        let after = apply_edit(&before, "skills[1]", json!("b")).unwrap();
        assert_eq!(after["skills"], json!(["a", "b"]));

        let after = apply_edit(&before, "skills[7]", json!("c")).unwrap();
        assert_eq!(after["skills"], json!(["a", "c"]));
    }

    #[test]
    fn test_set_group_field_past_end_appends_one_item() {
        let before = data(json!({ "projects": [{ "title": "A" }] }));
        let after = apply_edit(&before, "projects[2].title", json!("C")).unwrap();
        assert_eq!(after["projects"], json!([{ "title": "A" }, { "title": "C" }]));
    }

    #[test]
    fn test_huge_index_appends_instead_of_padding() {
        let empty = CustomizationData::new();

        let after = apply_edit(&empty, "skills[18446744073709551615]", json!("x")).unwrap();
        assert_eq!(after["skills"], json!(["x"]));

        let after = apply_edit(&empty, "skills[10000000000]", json!("y")).unwrap();
        assert_eq!(after["skills"], json!(["y"]));

        let after = apply_edit(&empty, "projects[18446744073709551615].title", json!("z")).unwrap();
        assert_eq!(after["projects"], json!([{ "title": "z" }]));
    }

    #[test]
    fn test_set_group_field_keeps_siblings() {
        let before = data(json!({ "projects": [{ "title": "A", "link": "x" }] }));
        let after = apply_edit(&before, "projects[0].title", json!("B")).unwrap();
        assert_eq!(after["projects"], json!([{ "title": "B", "link": "x" }]));
    }

    #[test]
    fn test_wrong_shape_replaced_by_list() {
        let before = data(json!({ "skills": "oops" }));
        let after = apply_edit(&before, "skills[0]", json!("a")).unwrap();
        assert_eq!(after["skills"], json!(["a"]));
    }

    #[test]
    fn test_append_and_remove() {
        let before = data(json!({ "items": [{ "name": "a" }] }));
        let appended = apply_op(
            &before,
            EditOp::AppendGroupItem {
                key: "items".into(),
                item: json!({ "name": "b" }),
            },
        )
        .unwrap();
        assert_eq!(appended["items"], json!([{ "name": "a" }, { "name": "b" }]));

        let removed = apply_op(
            &appended,
            EditOp::RemoveGroupItem {
                key: "items".into(),
                index: 0,
            },
        )
        .unwrap();
        assert_eq!(removed["items"], json!([{ "name": "b" }]));
    }

    #[test]
    fn test_remove_out_of_range_is_error() {
        let before = data(json!({ "items": [] }));
        let result = apply_op(
            &before,
            EditOp::RemoveGroupItem {
                key: "items".into(),
                index: 0,
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_path_leaves_no_partial_edit() {
        let before = data(json!({ "name": "Ada" }));
        assert!(apply_edit(&before, "name[", json!("x")).is_err());
        assert_eq!(before["name"], json!("Ada"));
    }
}
