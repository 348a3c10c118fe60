//! Check command - conformance of templates and themes

use crate::output::print_json;
use anyhow::{Result, bail};
use colored::Colorize;
use pagecraft_core::Renderer;
use pagecraft_core::check::{Check, CheckEngine, CheckReport, CheckStatus};
use pagecraft_core::project::Project;

/// Run conformance checks
///
/// Inside a project the project's user themes are checked too. Exits with
/// code 1 when any check reports an error.
pub fn run(template: Option<String>, json: bool, verbose: bool) -> Result<()> {
    let renderer = match Project::discover(&std::env::current_dir()?) {
        Ok(project) => project.renderer()?,
        Err(_) => Renderer::builtin()?,
    };
    if let Some(id) = &template {
        renderer.templates().get(id)?;
    }

    let report = CheckEngine::new().run(&renderer, template.as_deref());

    if json {
        print_json(&report)?;
    } else {
        render_human(&report, verbose);
    }

    if !report.is_ok() {
        bail!("conformance check failed");
    }
    Ok(())
}

fn render_human(report: &CheckReport, verbose: bool) {
    if let Some(template) = &report.template_filter {
        println!("{} Checking template: {}\n", "→".cyan(), template);
    }

    for check in &report.checks {
        println!(
            "{} {} check [{}]: {}",
            status_icon(check.status),
            check.name,
            status_text(check.status),
            check.message
        );
        if verbose || check.status != CheckStatus::Pass {
            render_details(check);
        }
    }

    println!();
    let errors = count(&report.checks, CheckStatus::Error);
    let warnings = count(&report.checks, CheckStatus::Warning);
    match report.overall_status {
        CheckStatus::Pass => println!("{} All checks passed", "✓".green().bold()),
        CheckStatus::Warning => println!("{} {} warning(s)", "⚠".yellow().bold(), warnings),
        CheckStatus::Error => println!(
            "{} {} error(s), {} warning(s)",
            "✗".red().bold(),
            errors,
            warnings
        ),
    }
}

fn render_details(check: &Check) {
    let Some(details) = &check.details else {
        return;
    };
    for (key, value) in details {
        match value.as_array() {
            Some(items) => {
                println!("  {}:", key);
                for item in items {
                    println!("    - {}", item.as_str().map_or_else(|| item.to_string(), String::from));
                }
            }
            None => println!("  {}: {}", key, value),
        }
    }
}

fn status_icon(status: CheckStatus) -> String {
    match status {
        CheckStatus::Pass => "✓".green().to_string(),
        CheckStatus::Warning => "⚠".yellow().to_string(),
        CheckStatus::Error => "✗".red().to_string(),
    }
}

fn status_text(status: CheckStatus) -> String {
    match status {
        CheckStatus::Pass => "PASS".green().to_string(),
        CheckStatus::Warning => "WARNING".yellow().to_string(),
        CheckStatus::Error => "ERROR".red().to_string(),
    }
}

fn count(checks: &[Check], status: CheckStatus) -> usize {
    checks.iter().filter(|c| c.status == status).count()
}
