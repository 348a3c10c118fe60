//! Theme check - every registered theme compiles in every color mode

use crate::check::checks::MODES;
use crate::check::engine::{CheckContext, CheckResult, ConformanceCheck};
use crate::theme::compile;
use serde_json::Value;

pub struct ThemeCheck;

impl ConformanceCheck for ThemeCheck {
    fn name(&self) -> &str {
        "themes"
    }

    fn run(&self, context: &CheckContext) -> CheckResult {
        let themes = context.renderer.themes();
        let mut errors = Vec::new();

        for theme in themes.iter() {
            for mode in MODES {
                if let Err(e) = compile(theme, mode) {
                    errors.push(Value::String(format!("{} ({}): {}", theme.id, mode, e)));
                    break;
                }
            }
        }

        let ids: Vec<Value> = themes.iter().map(|t| Value::String(t.id.clone())).collect();
        if errors.is_empty() {
            CheckResult::pass(
                "themes_complete",
                format!("{} theme(s) define the full token set", ids.len()),
            )
            .with_detail("themes", ids)
        } else {
            CheckResult::error(
                "themes_incomplete",
                format!("{} theme(s) fail to compile", errors.len()),
            )
            .with_detail("errors", errors)
        }
    }
}
