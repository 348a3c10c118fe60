use crate::error::{PagecraftError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Customization data: opaque field key → JSON value map
pub type CustomizationData = Map<String, Value>;

/// Field type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Text,
    Email,
    Url,
    Tel,
    Textarea,
    Select,
    Color,
    Image,
    /// List of plain strings
    Repeatable,
    /// List of objects described by nested `fields`
    Group,
    ThemeSelector,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Url => "url",
            FieldType::Tel => "tel",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Color => "color",
            FieldType::Image => "image",
            FieldType::Repeatable => "repeatable",
            FieldType::Group => "group",
            FieldType::ThemeSelector => "theme-selector",
        }
    }

    /// Types whose value is a list
    pub fn is_list(&self) -> bool {
        matches!(self, FieldType::Repeatable | FieldType::Group)
    }

    /// Types edited as a single line or block of text
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            FieldType::Text | FieldType::Email | FieldType::Url | FieldType::Tel | FieldType::Textarea
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One customizable field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Field {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: FieldType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default)]
    pub required: bool,

    /// Allowed values (select)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    // Group / repeatable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,

    // Text-like
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
}

impl Field {
    pub fn new(key: impl Into<String>, kind: FieldType, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind,
            label: label.into(),
            default: None,
            required: false,
            options: Vec::new(),
            min: None,
            max: None,
            item_label: None,
            fields: Vec::new(),
            placeholder: None,
            rows: None,
        }
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_bounds(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Nested field by key (groups only)
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Number of items a list field is seeded with
    pub fn seed_count(&self) -> usize {
        self.min.unwrap_or(0).max(1)
    }
}

/// Ordered field list of a template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Schema {
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Parse the `[[fields]]` array of a TOML document
    pub fn from_toml_str(source: &str, template: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| PagecraftError::SchemaInvalid {
            template: template.to_string(),
            field: String::new(),
            reason: e.to_string(),
        })
    }

    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// JSON Schema describing a field list, for editor integrations
    pub fn json_schema() -> Value {
        serde_json::to_value(schemars::schema_for!(Schema)).unwrap_or(Value::Null)
    }
}
