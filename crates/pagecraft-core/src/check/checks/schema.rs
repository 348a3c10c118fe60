//! Schema check - template field schemas and their defaults

use crate::check::engine::{CheckContext, CheckResult, ConformanceCheck};
use crate::schema::{compute_defaults, validate_schema};
use serde_json::Value;

pub struct SchemaCheck;

impl ConformanceCheck for SchemaCheck {
    fn name(&self) -> &str {
        "schema"
    }

    fn run(&self, context: &CheckContext) -> CheckResult {
        let templates = context.target_templates();
        let mut errors = Vec::new();
        let mut fallbacks = Vec::new();

        for template in &templates {
            let meta = template.meta();
            if let Err(e) = validate_schema(&meta.id, template.schema()) {
                errors.push(Value::String(e.to_string()));
                continue;
            }

            let defaults = compute_defaults(template.schema(), &meta.default_theme_id);
            for field in template.schema().iter() {
                if !defaults.contains_key(&field.key) {
                    errors.push(Value::String(format!(
                        "{}: no default for '{}'",
                        meta.id, field.key
                    )));
                }
            }

            if !context.renderer.themes().contains(&meta.default_theme_id) {
                fallbacks.push(Value::String(format!(
                    "{}: default theme '{}' is not registered",
                    meta.id, meta.default_theme_id
                )));
            }
        }

        if !errors.is_empty() {
            return CheckResult::error(
                "schema_invalid",
                format!("{} schema problem(s)", errors.len()),
            )
            .with_detail("errors", errors);
        }
        if !fallbacks.is_empty() {
            return CheckResult::warning(
                "default_theme_missing",
                "Some templates fall back to the registry default theme",
            )
            .with_detail("templates", fallbacks);
        }

        CheckResult::pass(
            "schema_valid",
            format!("{} template schema(s) valid", templates.len()),
        )
    }
}
