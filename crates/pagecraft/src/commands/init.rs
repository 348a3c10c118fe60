//! Init command - create a site project from a template

use anyhow::{Result, bail};
use colored::Colorize;
use pagecraft_core::Renderer;
use pagecraft_core::config::Config;
use pagecraft_core::project::{CONFIG_FILE, Project};
use std::path::PathBuf;

pub fn run(
    template_id: String,
    name: Option<String>,
    theme: Option<String>,
    dir: PathBuf,
    verbose: bool,
) -> Result<()> {
    let renderer = Renderer::builtin()?;
    let template = renderer.templates().get(&template_id)?;
    if let Some(theme_id) = &theme {
        if !renderer.themes().contains(theme_id) {
            bail!(
                "Unknown theme '{}'. Run `pagecraft themes` to list available themes",
                theme_id
            );
        }
    }

    let root: PathBuf = std::env::current_dir()?.join(dir).components().collect();
    let name = name.unwrap_or_else(|| site_name_for(&root, &template_id));

    let mut config = Config::new(&name, &template_id);
    config.site.theme = theme;
    let data = renderer.defaults(&template_id)?;
    let project = Project::create(root, config, &data)?;

    println!(
        "{} Created {} site '{}' at {}",
        "✓".green().bold(),
        template.meta().display_name,
        name,
        project.root.display()
    );

    if verbose {
        println!("\n{} Project structure:", "→".cyan());
        println!("  - {} (site configuration)", CONFIG_FILE);
        println!(
            "  - {} (customization data)",
            project.config.site.data.display()
        );
    }

    println!("\n{} Next steps:", "→".cyan());
    println!("  1. pagecraft schema {}", template_id);
    println!("  2. pagecraft set <field> <value>");
    println!("  3. pagecraft export");

    Ok(())
}

fn site_name_for(root: &std::path::Path, template_id: &str) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty() && n != ".")
        .unwrap_or_else(|| template_id.to_string())
}
