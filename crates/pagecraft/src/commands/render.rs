//! Render command - write the rendered site to stdout, a file or a directory

use crate::context::Context;
use crate::output::print_text;
use anyhow::{Context as _, Result};
use colored::Colorize;
use pagecraft_core::{ColorMode, RenderedDocument};
use std::path::PathBuf;

pub fn run(theme: Option<String>, mode: Option<ColorMode>, output: Option<PathBuf>) -> Result<()> {
    let ctx = Context::new()?;
    let site = &ctx.project.config.site;
    let data = ctx.project.load_data()?;
    let theme_id = ctx.theme_id(&data, theme);
    let mode = mode.unwrap_or(site.color_mode);

    let document = ctx
        .renderer
        .render_document(&site.template, &data, theme_id.as_deref(), mode)?;

    let Some(output) = output else {
        print_text(&document.to_stream())?;
        return Ok(());
    };

    match &document {
        RenderedDocument::Single(html) => {
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, html)
                .with_context(|| format!("Failed to write {}", output.display()))?;
        }
        RenderedDocument::Pages(pages) => {
            std::fs::create_dir_all(&output)?;
            for (name, html) in pages {
                let path = output.join(name);
                std::fs::write(&path, html)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
        }
    }

    println!(
        "{} Rendered {} page(s) to {}",
        "✓".green().bold(),
        document.files().len(),
        output.display()
    );
    Ok(())
}
