//! Coverage check - every template renders with every theme and mode, and
//! every `var(--*)` it references is declared

use crate::check::checks::MODES;
use crate::check::engine::{CheckContext, CheckResult, ConformanceCheck};
use crate::error::{PagecraftError, Result};
use crate::render::Renderer;
use crate::schema::CustomizationData;
use crate::theme::ColorMode;
use rayon::prelude::*;
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeSet;

pub struct CoverageCheck;

impl ConformanceCheck for CoverageCheck {
    fn name(&self) -> &str {
        "coverage"
    }

    fn run(&self, context: &CheckContext) -> CheckResult {
        let renderer = context.renderer;
        let combos: Vec<(&str, &str, ColorMode)> = context
            .target_templates()
            .into_iter()
            .flat_map(move |template| {
                renderer.themes().iter().flat_map(move |theme| {
                    MODES.map(|mode| (template.meta().id.as_str(), theme.id.as_str(), mode))
                })
            })
            .collect();

        let failures: Vec<Value> = combos
            .par_iter()
            .filter_map(|(template, theme, mode)| {
                render_combo(renderer, template, theme, *mode)
                    .err()
                    .map(|e| Value::String(format!("{} / {} / {}: {}", template, theme, mode, e)))
            })
            .collect();

        if failures.is_empty() {
            CheckResult::pass(
                "coverage_complete",
                format!("{} template/theme/mode combination(s) render", combos.len()),
            )
        } else {
            CheckResult::error(
                "coverage_incomplete",
                format!("{} of {} combination(s) failed", failures.len(), combos.len()),
            )
            .with_detail("failures", failures)
        }
    }
}

/// Render with defaults and with empty data, then check token references
fn render_combo(renderer: &Renderer, template: &str, theme: &str, mode: ColorMode) -> Result<()> {
    let defaults = renderer.defaults(template)?;
    for data in [&defaults, &CustomizationData::new()] {
        let document = renderer.render_document(template, data, Some(theme), mode)?;
        for (name, html) in document.files() {
            let missing = undeclared_tokens(html)?;
            if !missing.is_empty() {
                return Err(PagecraftError::Generic(format!(
                    "{} references undeclared {}",
                    name,
                    missing.into_iter().collect::<Vec<_>>().join(", ")
                )));
            }
        }
    }
    Ok(())
}

/// Custom properties referenced through `var(...)` but never declared
pub fn undeclared_tokens(html: &str) -> Result<BTreeSet<String>> {
    let referenced = Regex::new(r"var\(\s*(--[A-Za-z0-9_-]+)")
        .map_err(|e| PagecraftError::Generic(e.to_string()))?;
    let declared = Regex::new(r"(--[A-Za-z0-9_-]+)\s*:")
        .map_err(|e| PagecraftError::Generic(e.to_string()))?;

    let declared: BTreeSet<&str> = declared
        .captures_iter(html)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();

    Ok(referenced
        .captures_iter(html)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .filter(|name| !declared.contains(name))
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undeclared_tokens() {
        let html = "<style>:root { --a: 1px; }\n.x { margin: var(--a); color: var( --b); }</style>";
        let missing = undeclared_tokens(html).unwrap();
        assert_eq!(missing.into_iter().collect::<Vec<_>>(), vec!["--b"]);
    }

    #[test]
    fn test_fully_declared() {
        let html = ":root { --color-border: #000; } .x { border-color: var(--color-border); }";
        assert!(undeclared_tokens(html).unwrap().is_empty());
    }
}
