//! Global context for CLI commands

use anyhow::{Context as _, Result};
use pagecraft_core::Renderer;
use pagecraft_core::project::Project;
use pagecraft_core::schema::{CustomizationData, FieldType};
use std::env;

/// Loaded site project plus a renderer that includes its user themes
pub struct Context {
    pub project: Project,
    pub renderer: Renderer,
}

impl Context {
    /// Find the enclosing project and build its renderer
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Not in a pagecraft project
    /// - pagecraft.toml cannot be read or parsed
    /// - A user theme is invalid
    pub fn new() -> Result<Self> {
        let current_dir = env::current_dir()?;
        let project = Project::discover(&current_dir)?;
        let renderer = project.renderer().context("Failed to load themes")?;

        log::debug!("project root: {}", project.root.display());

        Ok(Self { project, renderer })
    }

    /// Theme for a render: explicit override, then pagecraft.toml, then the
    /// template's theme-selector field in the customization data
    pub fn theme_id(
        &self,
        data: &CustomizationData,
        theme_override: Option<String>,
    ) -> Option<String> {
        theme_override
            .or_else(|| self.project.config.site.theme.clone())
            .or_else(|| {
                let site = &self.project.config.site;
                let template = self.renderer.templates().get(&site.template).ok()?;
                let field = template
                    .schema()
                    .iter()
                    .find(|f| f.kind == FieldType::ThemeSelector)?;
                data.get(&field.key)?.as_str().map(String::from)
            })
    }
}
