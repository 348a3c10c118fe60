//! Portfolio: hero, about, project gallery and contact

use super::insert_accent_blends;
use crate::error::Result;
use crate::schema::Schema;
use crate::site::render_markup;
use crate::site::template::{
    Body, ComposeContext, Composition, SiteTemplate, TemplateDefinition, TemplateMeta,
};
use serde_json::Value;

const DEFINITION: &str = include_str!("../../../builtin_templates/portfolio/template.toml");
const BODY: &str = include_str!("../../../builtin_templates/portfolio/body.tmp.html");
const STYLE: &str = include_str!("../../../builtin_templates/portfolio/style.tmp.css");

pub struct Portfolio {
    meta: TemplateMeta,
    schema: Schema,
}

impl Portfolio {
    pub fn new() -> Result<Self> {
        let (meta, schema) = TemplateDefinition::from_toml_str(DEFINITION, "portfolio")?.into_parts();
        Ok(Self { meta, schema })
    }
}

impl SiteTemplate for Portfolio {
    fn meta(&self) -> &TemplateMeta {
        &self.meta
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn compose(&self, cx: &ComposeContext<'_>) -> Result<Composition> {
        let mut context = cx.markup_context();
        insert_accent_blends(&mut context);

        let projects: Vec<Value> = cx
            .list("projects")
            .iter()
            .map(|project| {
                let mut project = project.clone();
                if let Value::Object(fields) = &mut project {
                    let tags = split_tags(fields.get("tags").and_then(Value::as_str).unwrap_or(""));
                    fields.insert("tag_list".into(), Value::from(tags));
                }
                project
            })
            .collect();
        context.insert("projects".into(), Value::Array(projects));

        let context = Value::Object(context);
        Ok(Composition {
            body: Body::Single(render_markup(self.id(), "body.tmp.html", BODY, &context)?),
            styles: render_markup(self.id(), "style.tmp.css", STYLE, &context)?,
        })
    }
}

/// Comma separated tags, trimmed, empties dropped
fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
