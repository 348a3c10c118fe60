//! Template renderer
//!
//! `(template id, customization data, theme id, color mode) → HTML`
//!
//! 1. resolve the template (unknown id is an error)
//! 2. resolve the theme (unknown or absent id falls back to the default)
//! 3. compile the theme CSS for the mode
//! 4. run the template's structure function on the resolved data
//! 5. wrap each page into a complete document
//!
//! Rendering is pure: identical inputs give byte-identical output.

pub mod assemble;
pub mod document;
pub mod state;

pub use document::{RenderedDocument, INDEX_FILE};
pub use state::RenderState;

use crate::data;
use crate::error::Result;
use crate::schema::{compute_defaults, CustomizationData};
use crate::site::{Body, ComposeContext, SiteTemplate, TemplateRegistry};
use crate::theme::{compile, ColorMode, Theme, ThemeRegistry};
use assemble::Head;
use serde_json::Value;
use state::RenderRun;

/// Template and theme registries plus the render pipeline
///
/// Immutable once built; share it freely across threads.
#[derive(Debug)]
pub struct Renderer {
    templates: TemplateRegistry,
    themes: ThemeRegistry,
}

impl Renderer {
    pub fn new(templates: TemplateRegistry, themes: ThemeRegistry) -> Self {
        Self { templates, themes }
    }

    /// Renderer over the builtin templates and themes
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(TemplateRegistry::builtin()?, ThemeRegistry::builtin()?))
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    /// Initial customization data for a template
    pub fn defaults(&self, template_id: &str) -> Result<CustomizationData> {
        let template = self.templates.get(template_id)?;
        Ok(compute_defaults(
            template.schema(),
            &template.meta().default_theme_id,
        ))
    }

    /// Theme a render with `theme_id` uses: the named theme, else the
    /// template's default theme, else the registry default
    pub fn theme_for(&self, template: &dyn SiteTemplate, theme_id: Option<&str>) -> &Theme {
        match theme_id.and_then(|id| self.themes.find(id)) {
            Some(theme) => theme,
            None => {
                if let Some(id) = theme_id {
                    tracing::debug!(theme = id, "unknown theme, using fallback");
                }
                self.themes.get(Some(&template.meta().default_theme_id))
            }
        }
    }

    /// Render to a string: the HTML of a single-page template, or the
    /// `<!-- FILE: name -->` stream of a multi-page one
    pub fn render(
        &self,
        template_id: &str,
        data: &CustomizationData,
        theme_id: Option<&str>,
        mode: ColorMode,
    ) -> Result<String> {
        Ok(self
            .render_document(template_id, data, theme_id, mode)?
            .to_stream())
    }

    /// Render to a structured document
    pub fn render_document(
        &self,
        template_id: &str,
        data: &CustomizationData,
        theme_id: Option<&str>,
        mode: ColorMode,
    ) -> Result<RenderedDocument> {
        let mut run = RenderRun::start(template_id);
        self.run(&mut run, template_id, data, theme_id, mode)
            .inspect_err(|e| run.fail(e))
    }

    fn run(
        &self,
        run: &mut RenderRun<'_>,
        template_id: &str,
        data: &CustomizationData,
        theme_id: Option<&str>,
        mode: ColorMode,
    ) -> Result<RenderedDocument> {
        // Resolving
        let template = self.templates.get(template_id)?;
        let theme = self.theme_for(template, theme_id);
        let meta = template.meta();
        let resolved = data::resolve(template.schema(), data, &meta.default_theme_id);
        let theme_css = compile(theme, mode)?;
        run.advance();

        // TokensCompiled
        let cx = ComposeContext {
            data: &resolved,
            theme,
            mode,
        };
        let composition = template.compose(&cx)?;
        run.advance();

        // BodyComposed
        let styles = assemble::stylesheet(theme, &theme_css, &meta.id, &composition.styles)?;
        let fonts = assemble::font_links(theme);
        let site_title = meta
            .title_field
            .as_deref()
            .and_then(|key| resolved.get(key))
            .and_then(Value::as_str)
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(meta.display_name.as_str());
        let description = description_of(&resolved);

        let wrap = |title: &str, body: &str| {
            assemble::document(
                &Head {
                    title,
                    description,
                    fonts: &fonts,
                    styles: &styles,
                    theme_id: &theme.id,
                    mode,
                },
                body,
            )
        };

        let document = match composition.body {
            Body::Single(body) => RenderedDocument::Single(wrap(site_title, &body)),
            Body::Pages(pages) => RenderedDocument::Pages(
                pages
                    .into_iter()
                    .map(|page| {
                        let title = match &page.title {
                            Some(prefix) => format!("{} | {}", prefix, site_title),
                            None => site_title.to_string(),
                        };
                        (page.filename, wrap(&title, &page.html))
                    })
                    .collect(),
            ),
        };
        run.advance();

        // DocumentAssembled
        run.advance();
        tracing::debug!(
            template = %meta.id,
            theme = %theme.id,
            mode = %mode,
            pages = document.files().len(),
            "rendered"
        );
        Ok(document)
    }
}

/// First non-empty short text among the usual description fields
fn description_of(resolved: &CustomizationData) -> &str {
    ["tagline", "headline", "subheadline", "bio"]
        .iter()
        .filter_map(|key| resolved.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .unwrap_or("")
}
