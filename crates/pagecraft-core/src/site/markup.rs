use crate::error::{PagecraftError, Result};
use crate::template::{TemplateContext, TemplateEngine};
use serde_json::Value;

/// Render an HTML/CSS markup source with HTML escaping
pub(crate) fn render_markup(
    template: &str,
    source_name: &str,
    source: &str,
    context: &Value,
) -> Result<String> {
    TemplateEngine::new()
        .render(source, &TemplateContext::new(context.clone()))
        .map_err(|error| PagecraftError::Markup {
            template: template.to_string(),
            source_name: source_name.to_string(),
            error,
        })
}
