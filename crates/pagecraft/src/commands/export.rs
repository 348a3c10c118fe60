//! Export command - package the rendered site as a zip bundle

use crate::context::Context;
use crate::output::print_json;
use anyhow::{Context as _, Result};
use colored::Colorize;
use pagecraft_core::ColorMode;
use pagecraft_core::export::{package_async, PackageOptions};
use serde_json::json;
use std::path::PathBuf;

pub fn run(
    theme: Option<String>,
    mode: Option<ColorMode>,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let ctx = Context::new()?;
    let site = &ctx.project.config.site;
    let data = ctx.project.load_data()?;
    let theme_id = ctx.theme_id(&data, theme);
    let mode = mode.unwrap_or(site.color_mode);

    let document = ctx
        .renderer
        .render_document(&site.template, &data, theme_id.as_deref(), mode)?;
    let used_theme = ctx
        .renderer
        .theme_for(ctx.renderer.templates().get(&site.template)?, theme_id.as_deref())
        .id
        .clone();
    let assets = ctx.project.load_assets()?;
    let options = PackageOptions {
        readme: ctx.project.config.export.readme,
        site_name: Some(site.name.clone()),
        details: Some(format!("{} template, {} theme, {} mode", site.template, used_theme, mode)),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let package = runtime.block_on(package_async(document, assets, options))?;

    let output = output.unwrap_or_else(|| ctx.project.output_path());
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output, &package.bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if json {
        return print_json(&json!({
            "output": output.display().to_string(),
            "bytes": package.bytes.len(),
            "report": package.report,
        }));
    }

    println!(
        "{} Exported {} file(s) to {}",
        "✓".green().bold(),
        package.report.files.len(),
        output.display()
    );
    for reference in &package.report.unresolved {
        println!(
            "  {} no asset matches {} (left unchanged)",
            "⚠".yellow(),
            reference
        );
    }
    Ok(())
}
