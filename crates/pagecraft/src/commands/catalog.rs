//! Catalog commands - list builtin and project themes and templates

use crate::context::Context;
use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use pagecraft_core::Renderer;

/// Project renderer when inside a project, builtin catalog otherwise
fn renderer() -> Result<Renderer> {
    match Context::new() {
        Ok(ctx) => Ok(ctx.renderer),
        Err(e) => {
            log::debug!("no project ({}), listing builtin catalog", e);
            Ok(Renderer::builtin()?)
        }
    }
}

pub fn run_themes(json: bool) -> Result<()> {
    let renderer = renderer()?;
    let themes = renderer.themes().list();

    if json {
        return print_json(&themes);
    }

    println!("{}", "Themes".bold());
    for theme in &themes {
        println!("  {:<12} {}", theme.id.cyan(), theme.name);
        if !theme.description.is_empty() {
            println!("  {:<12} {}", "", theme.description.dimmed());
        }
    }
    Ok(())
}

pub fn run_templates(json: bool) -> Result<()> {
    let renderer = renderer()?;
    let templates = renderer.templates().list();

    if json {
        return print_json(&templates);
    }

    println!("{}", "Templates".bold());
    for template in &templates {
        println!(
            "  {:<16} {} ({}, theme: {})",
            template.id.cyan(),
            template.display_name,
            template.category,
            template.default_theme_id
        );
    }
    Ok(())
}
