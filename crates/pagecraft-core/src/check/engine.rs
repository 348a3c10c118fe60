//! Check engine

use crate::check::checks::{CoverageCheck, DeterminismCheck, SchemaCheck, ThemeCheck};
use crate::check::report::{Check, CheckReport, CheckStatus};
use crate::render::Renderer;
use crate::site::SiteTemplate;
use std::collections::BTreeMap;

/// Context provided to conformance checks
pub struct CheckContext<'a> {
    pub renderer: &'a Renderer,
    pub target_template: Option<&'a str>,
}

impl<'a> CheckContext<'a> {
    /// Templates under check (all, or the one named by the filter)
    pub fn target_templates(&self) -> Vec<&'a dyn SiteTemplate> {
        let renderer: &'a Renderer = self.renderer;
        renderer
            .templates()
            .iter()
            .filter(|t| self.target_template.map_or(true, |id| t.meta().id == id))
            .collect()
    }
}

/// Result of a single check
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub id: String,
    pub status: CheckStatus,
    pub message: String,
    pub details: Option<BTreeMap<String, serde_json::Value>>,
}

impl CheckResult {
    fn with_status(id: impl Into<String>, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status,
            message: message.into(),
            details: None,
        }
    }

    pub fn pass(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(id, CheckStatus::Pass, message)
    }

    pub fn warning(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(id, CheckStatus::Warning, message)
    }

    pub fn error(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(id, CheckStatus::Error, message)
    }

    /// Add details
    pub fn with_detail(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.details
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// A conformance check
pub trait ConformanceCheck: Send + Sync {
    fn name(&self) -> &str;

    fn run(&self, context: &CheckContext) -> CheckResult;
}

/// Runs every registered check and aggregates the results
pub struct CheckEngine {
    checks: Vec<Box<dyn ConformanceCheck>>,
}

impl CheckEngine {
    pub fn new() -> Self {
        let checks: Vec<Box<dyn ConformanceCheck>> = vec![
            Box::new(SchemaCheck),
            Box::new(ThemeCheck),
            Box::new(CoverageCheck),
            Box::new(DeterminismCheck),
        ];
        Self { checks }
    }

    pub fn run(&self, renderer: &Renderer, target_template: Option<&str>) -> CheckReport {
        let context = CheckContext {
            renderer,
            target_template,
        };

        let mut overall_status = CheckStatus::Pass;
        let mut checks = Vec::with_capacity(self.checks.len());

        for check in &self.checks {
            let result = check.run(&context);
            tracing::debug!(check = check.name(), status = ?result.status, "{}", result.message);
            overall_status = overall_status.worst(result.status);
            checks.push(Check {
                id: result.id,
                name: check.name().to_string(),
                status: result.status,
                message: result.message,
                details: result.details,
            });
        }

        CheckReport {
            schema_version: "1.0".to_string(),
            overall_status,
            template_filter: target_template.map(String::from),
            checks,
        }
    }
}

impl Default for CheckEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_details_accumulate() {
        let result = CheckResult::error("theme_compile", "1 theme failed")
            .with_detail("failures", vec!["noir/dark"])
            .with_detail("count", 1);
        assert_eq!(result.status, CheckStatus::Error);
        let details = result.details.unwrap();
        assert_eq!(details["count"], serde_json::json!(1));
        assert_eq!(details["failures"], serde_json::json!(["noir/dark"]));

        assert_eq!(CheckResult::warning("w", "m").status, CheckStatus::Warning);
        assert_eq!(CheckResult::pass("p", "m").status, CheckStatus::Pass);
    }

    #[test]
    fn test_builtin_catalog_passes_every_check() {
        let renderer = Renderer::builtin().unwrap();
        let report = CheckEngine::new().run(&renderer, None);
        assert_eq!(report.checks.len(), 4);
        for check in &report.checks {
            assert_eq!(check.status, CheckStatus::Pass, "{}: {}", check.id, check.message);
        }
        assert!(report.is_ok());
    }

    #[test]
    fn test_template_filter() {
        let renderer = Renderer::builtin().unwrap();
        let context = CheckContext {
            renderer: &renderer,
            target_template: Some("portfolio"),
        };
        let targets = context.target_templates();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].meta().id, "portfolio");

        let report = CheckEngine::new().run(&renderer, Some("portfolio"));
        assert_eq!(report.template_filter.as_deref(), Some("portfolio"));
    }
}
