//! SaaS landing: `index.html` and `pricing.html` sharing a header and footer

use super::insert_accent_blends;
use crate::error::Result;
use crate::schema::Schema;
use crate::site::render_markup;
use crate::site::template::{
    Body, ComposeContext, Composition, Page, SiteTemplate, TemplateDefinition, TemplateMeta,
};
use serde_json::{json, Map, Value};

const DEFINITION: &str = include_str!("../../../builtin_templates/saas-landing/template.toml");
const HEADER: &str = include_str!("../../../builtin_templates/saas-landing/header.tmp.html");
const FOOTER: &str = include_str!("../../../builtin_templates/saas-landing/footer.tmp.html");
const INDEX: &str = include_str!("../../../builtin_templates/saas-landing/index.tmp.html");
const PRICING: &str = include_str!("../../../builtin_templates/saas-landing/pricing.tmp.html");
const STYLE: &str = include_str!("../../../builtin_templates/saas-landing/style.tmp.css");

pub struct SaasLanding {
    meta: TemplateMeta,
    schema: Schema,
}

impl SaasLanding {
    pub fn new() -> Result<Self> {
        let (meta, schema) = TemplateDefinition::from_toml_str(DEFINITION, "saas-landing")?.into_parts();
        Ok(Self { meta, schema })
    }

    fn page(&self, context: &Value, filename: &str, title: Option<&str>, source: &str) -> Result<Page> {
        let mut html = render_markup(self.id(), "header.tmp.html", HEADER, context)?;
        html.push_str(&render_markup(self.id(), filename, source, context)?);
        html.push_str(&render_markup(self.id(), "footer.tmp.html", FOOTER, context)?);
        Ok(Page {
            filename: filename.to_string(),
            title: title.map(String::from),
            html,
        })
    }
}

impl SiteTemplate for SaasLanding {
    fn meta(&self) -> &TemplateMeta {
        &self.meta
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn compose(&self, cx: &ComposeContext<'_>) -> Result<Composition> {
        let mut context = cx.markup_context();
        insert_accent_blends(&mut context);

        let plans: Vec<Value> = cx
            .list("plans")
            .iter()
            .filter_map(Value::as_object)
            .map(plan_view)
            .collect();
        context.insert("plans".into(), Value::Array(plans));

        let context = Value::Object(context);
        let pages = vec![
            self.page(&context, "index.html", None, INDEX)?,
            self.page(&context, "pricing.html", Some("Pricing"), PRICING)?,
        ];

        Ok(Composition {
            body: Body::Pages(pages),
            styles: render_markup(self.id(), "style.tmp.css", STYLE, &context)?,
        })
    }
}

/// Plan item extended with display values
fn plan_view(plan: &Map<String, Value>) -> Value {
    let highlighted = text(plan, "highlighted") == "yes";
    let features: Vec<&str> = text(plan, "features")
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut view = plan.clone();
    view.insert("is_highlighted".into(), json!(highlighted));
    view.insert("price_label".into(), json!(price_label(text(plan, "price"))));
    view.insert("period_label".into(), json!(period_label(text(plan, "period"))));
    view.insert("feature_list".into(), json!(features));
    view.insert(
        "button_class".into(),
        json!(if highlighted {
            "btn-primary sl-accent"
        } else {
            "btn-secondary"
        }),
    );
    Value::Object(view)
}

fn text<'a>(plan: &'a Map<String, Value>, key: &str) -> &'a str {
    plan.get(key).and_then(Value::as_str).unwrap_or("").trim()
}

fn price_label(price: &str) -> String {
    let numeric = !price.is_empty() && price.chars().all(|c| c.is_ascii_digit() || c == '.');
    match price {
        "0" | "0.00" => "Free".to_string(),
        _ if numeric => format!("${}", price),
        _ => price.to_string(),
    }
}

fn period_label(period: &str) -> String {
    match period {
        "" | "once" => String::new(),
        other => format!("/ {}", other),
    }
}
