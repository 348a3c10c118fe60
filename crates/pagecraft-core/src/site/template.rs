use crate::error::{PagecraftError, Result};
use crate::schema::{CustomizationData, Field, Schema};
use crate::theme::{var_table, ColorMode, Theme};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Registration metadata of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TemplateMeta {
    pub id: String,
    pub display_name: String,
    pub category: String,
    pub default_theme_id: String,
    #[serde(default)]
    pub description: String,
    /// Field whose value becomes the document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_field: Option<String>,
}

/// `template.toml`: `[template]` metadata followed by `[[fields]]`
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateDefinition {
    pub template: TemplateMeta,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl TemplateDefinition {
    pub fn from_toml_str(source: &str, origin: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| PagecraftError::SchemaInvalid {
            template: origin.to_string(),
            field: String::new(),
            reason: e.to_string(),
        })
    }

    pub fn into_parts(self) -> (TemplateMeta, Schema) {
        (self.template, Schema::new(self.fields))
    }
}

/// One named page of a multi-page body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub filename: String,
    /// Prefixed to the document title, e.g. `Pricing`
    pub title: Option<String>,
    pub html: String,
}

/// Body markup produced by a structure function (no `<html>`/`<head>`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Single(String),
    Pages(Vec<Page>),
}

/// Structure function output: body fragment(s) plus template CSS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub body: Body,
    pub styles: String,
}

/// Inputs of a structure function
#[derive(Debug, Clone, Copy)]
pub struct ComposeContext<'a> {
    /// Resolved data: every schema key present with a well-shaped value
    pub data: &'a CustomizationData,
    pub theme: &'a Theme,
    pub mode: ColorMode,
}

impl ComposeContext<'_> {
    /// Markup context: resolved data, the `var` token table and `meta`
    pub fn markup_context(&self) -> Map<String, Value> {
        let mut map = self.data.clone();
        map.insert("var".to_string(), var_table());
        map.insert(
            "meta".to_string(),
            json!({
                "theme": self.theme.id,
                "mode": self.mode.as_str(),
            }),
        );
        map
    }

    /// Resolved string value of a top-level field ("" when not a string)
    pub fn text(&self, key: &str) -> &str {
        self.data.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// Resolved list value of a top-level field
    pub fn list(&self, key: &str) -> &[Value] {
        self.data
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// A registered site template
///
/// Implementations are immutable values shared across threads.
pub trait SiteTemplate: Send + Sync {
    fn meta(&self) -> &TemplateMeta;

    fn schema(&self) -> &Schema;

    /// Structure function: resolved data, theme and mode → body and CSS
    fn compose(&self, cx: &ComposeContext<'_>) -> Result<Composition>;

    fn id(&self) -> &str {
        &self.meta().id
    }
}
