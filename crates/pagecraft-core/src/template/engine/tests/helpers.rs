//! Shared test helpers for markup engine tests

use crate::template::engine::TemplateContext;
use serde_json::json;

/// Context with basic scalar values
pub(super) fn simple_context() -> TemplateContext {
    TemplateContext::new(json!({
        "title": "My Title",
        "count": 42,
        "price": 9.99,
        "enabled": true,
        "missing": null
    }))
}

/// Context shaped like resolved customization data for a portfolio
pub(super) fn portfolio_context() -> TemplateContext {
    TemplateContext::new(json!({
        "name": "Ada Lovelace",
        "tagline": "",
        "skills": ["Analysis", "Engines"],
        "projects": [
            { "title": "Notes", "link": "https://example.com/notes" },
            { "title": "Tables", "link": "" }
        ],
        "var": { "color_text_primary": "var(--color-text-primary)" }
    }))
}
