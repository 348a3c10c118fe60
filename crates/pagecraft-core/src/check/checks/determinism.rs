//! Determinism check - identical inputs give byte-identical output

use crate::check::engine::{CheckContext, CheckResult, ConformanceCheck};
use crate::theme::ColorMode;
use serde_json::Value;

pub struct DeterminismCheck;

impl ConformanceCheck for DeterminismCheck {
    fn name(&self) -> &str {
        "determinism"
    }

    fn run(&self, context: &CheckContext) -> CheckResult {
        let renderer = context.renderer;
        let mut unstable = Vec::new();
        let mut errors = Vec::new();

        for template in context.target_templates() {
            let id = template.meta().id.as_str();
            let outputs: Vec<_> = (0..2)
                .map(|_| {
                    renderer
                        .defaults(id)
                        .and_then(|data| renderer.render(id, &data, None, ColorMode::Auto))
                })
                .collect();

            match (&outputs[0], &outputs[1]) {
                (Ok(a), Ok(b)) if a == b => {}
                (Ok(_), Ok(_)) => unstable.push(Value::String(id.to_string())),
                (Err(e), _) | (_, Err(e)) => errors.push(Value::String(format!("{}: {}", id, e))),
            }
        }

        if !errors.is_empty() {
            return CheckResult::error("render_failed", "Templates failed to render")
                .with_detail("errors", errors);
        }
        if !unstable.is_empty() {
            return CheckResult::error(
                "output_unstable",
                "Repeated renders produced different output",
            )
            .with_detail("templates", unstable);
        }
        CheckResult::pass("output_stable", "Repeated renders are byte-identical")
    }
}
