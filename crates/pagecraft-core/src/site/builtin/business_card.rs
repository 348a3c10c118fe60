//! Business card: single page, one centered card

use super::insert_accent_blends;
use crate::error::Result;
use crate::schema::Schema;
use crate::site::render_markup;
use crate::site::template::{
    Body, ComposeContext, Composition, SiteTemplate, TemplateDefinition, TemplateMeta,
};
use serde_json::{json, Value};

const DEFINITION: &str = include_str!("../../../builtin_templates/business-card/template.toml");
const BODY: &str = include_str!("../../../builtin_templates/business-card/body.tmp.html");
const STYLE: &str = include_str!("../../../builtin_templates/business-card/style.tmp.css");

pub struct BusinessCard {
    meta: TemplateMeta,
    schema: Schema,
}

impl BusinessCard {
    pub fn new() -> Result<Self> {
        let (meta, schema) = TemplateDefinition::from_toml_str(DEFINITION, "business-card")?.into_parts();
        Ok(Self { meta, schema })
    }
}

impl SiteTemplate for BusinessCard {
    fn meta(&self) -> &TemplateMeta {
        &self.meta
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn compose(&self, cx: &ComposeContext<'_>) -> Result<Composition> {
        let mut context = cx.markup_context();
        insert_accent_blends(&mut context);

        let initials = initials(cx.text("name"));
        context.insert("show_initials".into(), json!(cx.text("avatar").is_empty()));
        context.insert("initials".into(), json!(initials));
        context.insert("phone_href".into(), json!(phone_href(cx.text("phone"))));
        context.insert("website_label".into(), json!(strip_scheme(cx.text("website"))));

        let links: Vec<Value> = cx
            .list("socials")
            .iter()
            .filter(|link| link["url"].as_str().is_some_and(|u| !u.is_empty()))
            .cloned()
            .collect();
        context.insert("links".into(), Value::Array(links));

        let context = Value::Object(context);
        Ok(Composition {
            body: Body::Single(render_markup(self.id(), "body.tmp.html", BODY, &context)?),
            styles: render_markup(self.id(), "style.tmp.css", STYLE, &context)?,
        })
    }
}

/// Up to two uppercase initials
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Digits and a leading `+` for `tel:` links
fn phone_href(phone: &str) -> String {
    phone
        .chars()
        .enumerate()
        .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
        .map(|(_, c)| c)
        .collect()
}

fn strip_scheme(url: &str) -> &str {
    let url = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    url.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Alex Morgan"), "AM");
        assert_eq!(initials("  ada   lovelace byron "), "AL");
        assert_eq!(initials("Prince"), "P");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_phone_href() {
        assert_eq!(phone_href("+1 (555) 010-0"), "+15550100");
        assert_eq!(phone_href("555 +1"), "5551");
    }

    #[test]
    fn test_strip_scheme() {
        assert_eq!(strip_scheme("https://example.com/"), "example.com");
        assert_eq!(strip_scheme("example.com"), "example.com");
    }
}
