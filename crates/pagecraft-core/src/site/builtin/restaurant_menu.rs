//! Restaurant menu: dishes grouped into courses

use super::insert_accent_blends;
use crate::error::Result;
use crate::schema::Schema;
use crate::site::render_markup;
use crate::site::template::{
    Body, ComposeContext, Composition, SiteTemplate, TemplateDefinition, TemplateMeta,
};
use serde_json::{json, Value};

const DEFINITION: &str = include_str!("../../../builtin_templates/restaurant-menu/template.toml");
const BODY: &str = include_str!("../../../builtin_templates/restaurant-menu/body.tmp.html");
const STYLE: &str = include_str!("../../../builtin_templates/restaurant-menu/style.tmp.css");

pub struct RestaurantMenu {
    meta: TemplateMeta,
    schema: Schema,
    /// Course order, taken from the `category` select options
    courses: Vec<String>,
}

impl RestaurantMenu {
    pub fn new() -> Result<Self> {
        let (meta, schema) =
            TemplateDefinition::from_toml_str(DEFINITION, "restaurant-menu")?.into_parts();
        let courses = schema
            .field("menu_items")
            .and_then(|items| items.field("category"))
            .map(|category| category.options.clone())
            .unwrap_or_default();
        Ok(Self {
            meta,
            schema,
            courses,
        })
    }
}

impl SiteTemplate for RestaurantMenu {
    fn meta(&self) -> &TemplateMeta {
        &self.meta
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn compose(&self, cx: &ComposeContext<'_>) -> Result<Composition> {
        let mut context = cx.markup_context();
        insert_accent_blends(&mut context);

        let currency = cx.text("currency");
        let items: Vec<Value> = cx
            .list("menu_items")
            .iter()
            .map(|item| {
                let mut item = item.clone();
                if let Value::Object(fields) = &mut item {
                    let price = fields.get("price").and_then(Value::as_str).unwrap_or("");
                    let label = price_label(price, currency);
                    fields.insert("price_label".into(), json!(label));
                }
                item
            })
            .collect();
        context.insert("courses".into(), Value::Array(group_by_course(&self.courses, &items)));

        let hours: Vec<&str> = cx
            .text("hours")
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        context.insert("hours_lines".into(), json!(hours));

        let context = Value::Object(context);
        Ok(Composition {
            body: Body::Single(render_markup(self.id(), "body.tmp.html", BODY, &context)?),
            styles: render_markup(self.id(), "style.tmp.css", STYLE, &context)?,
        })
    }
}

/// `[{name, items}]` in course order; empty courses are omitted and items
/// keep their relative order
fn group_by_course(courses: &[String], items: &[Value]) -> Vec<Value> {
    courses
        .iter()
        .filter_map(|course| {
            let members: Vec<Value> = items
                .iter()
                .filter(|item| item["category"].as_str() == Some(course.as_str()))
                .cloned()
                .collect();
            (!members.is_empty()).then(|| json!({ "name": course, "items": members }))
        })
        .collect()
}

/// Prefix bare numbers with the currency symbol
fn price_label(price: &str, currency: &str) -> String {
    let price = price.trim();
    let numeric = !price.is_empty()
        && price
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',');
    if numeric {
        format!("{}{}", currency, price)
    } else {
        price.to_string()
    }
}
