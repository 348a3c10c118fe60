//! Document assembly: head, font links and the layered stylesheet

use crate::error::Result;
use crate::site::render_markup;
use crate::template::escape_html;
use crate::theme::{extra_table, var_table, ColorMode, Theme};
use serde_json::json;
use std::collections::HashSet;

const RESET_CSS: &str = include_str!("../../builtin_styles/reset.css");
const BASE_CSS: &str = include_str!("../../builtin_styles/base.tmp.css");

/// Per-theme CSS layered after the base components, keyed by theme id
const THEME_OVERRIDES: [(&str, &str); 3] = [
    ("midnight", include_str!("../../builtin_styles/overrides/midnight.tmp.css")),
    ("brutalist", include_str!("../../builtin_styles/overrides/brutalist.tmp.css")),
    ("terminal", include_str!("../../builtin_styles/overrides/terminal.tmp.css")),
];

const FONT_CSS_URL: &str = "https://fonts.googleapis.com/css2";

/// Families that are never fetched: CSS generics and fonts that ship with
/// the operating system
const LOCAL_FAMILIES: [&str; 28] = [
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "math",
    "emoji",
    "system-ui",
    "ui-serif",
    "ui-sans-serif",
    "ui-monospace",
    "ui-rounded",
    "-apple-system",
    "blinkmacsystemfont",
    "segoe ui",
    "helvetica",
    "helvetica neue",
    "arial",
    "arial black",
    "georgia",
    "times",
    "times new roman",
    "courier",
    "courier new",
    "menlo",
    "monaco",
    "consolas",
    "sf mono",
];

/// Font family names to fetch, in first-seen order, without duplicates
pub fn font_families(theme: &Theme) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut families = Vec::new();

    for stack in theme.font_stacks() {
        for family in stack.split(',') {
            let family = family.trim().trim_matches(|c| c == '\'' || c == '"').trim();
            if family.is_empty() || LOCAL_FAMILIES.contains(&family.to_ascii_lowercase().as_str()) {
                continue;
            }
            if seen.insert(family.to_ascii_lowercase()) {
                families.push(family.to_string());
            }
        }
    }
    families
}

/// `<link>` tags loading the theme's web fonts; empty when it has none
pub fn font_links(theme: &Theme) -> String {
    let families = font_families(theme);
    if families.is_empty() {
        return String::new();
    }

    let query: Vec<String> = families
        .iter()
        .map(|family| format!("family={}:wght@400;500;600;700", family.replace(' ', "+")))
        .collect();
    let href = format!("{}?{}&display=swap", FONT_CSS_URL, query.join("&"));

    format!(
        "<link rel=\"preconnect\" href=\"https://fonts.googleapis.com\">\n\
         <link rel=\"preconnect\" href=\"https://fonts.gstatic.com\" crossorigin>\n\
         <link rel=\"stylesheet\" href=\"{}\">\n",
        escape_html(&href)
    )
}

/// Stylesheet layers: reset, theme tokens, base components, theme
/// overrides, template CSS
pub fn stylesheet(theme: &Theme, theme_css: &str, template_id: &str, template_css: &str) -> Result<String> {
    let context = json!({ "var": var_table(), "extra": extra_table(theme) });

    let mut css = String::new();
    css.push_str(RESET_CSS);
    css.push_str(theme_css);
    css.push_str(&render_markup(template_id, "base.tmp.css", BASE_CSS, &context)?);

    if let Some((_, source)) = THEME_OVERRIDES.iter().find(|(id, _)| *id == theme.id) {
        let name = format!("overrides/{}.tmp.css", theme.id);
        css.push_str(&render_markup(template_id, &name, source, &context)?);
    }

    css.push_str(template_css);
    Ok(css)
}

/// Everything a page needs besides its body
pub struct Head<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub fonts: &'a str,
    pub styles: &'a str,
    pub theme_id: &'a str,
    pub mode: ColorMode,
}

/// Wrap a body fragment into a complete HTML document
pub fn document(head: &Head<'_>, body: &str) -> String {
    let mut html = String::with_capacity(head.styles.len() + body.len() + 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(head.title)));
    if !head.description.trim().is_empty() {
        html.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape_html(head.description.trim())
        ));
    }
    html.push_str("<meta name=\"generator\" content=\"pagecraft\">\n");
    html.push_str(head.fonts);
    html.push_str("<style>\n");
    html.push_str(head.styles);
    if !head.styles.ends_with('\n') {
        html.push('\n');
    }
    html.push_str("</style>\n</head>\n");
    html.push_str(&format!(
        "<body class=\"theme-{} mode-{}\">\n",
        escape_html(head.theme_id),
        head.mode
    ));
    html.push_str(body.trim_end());
    html.push_str("\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::fixtures::complete_theme_toml;

    fn theme_with_fonts(heading: &str, body: &str, mono: &str) -> Theme {
        let mut theme = Theme::from_toml_str(&complete_theme_toml("fonts"), "fonts").unwrap();
        theme.fonts.insert("heading".into(), heading.into());
        theme.fonts.insert("body".into(), body.into());
        theme.fonts.insert("mono".into(), mono.into());
        theme
    }

    #[test]
    fn test_font_families_dedup_and_skip_local() {
        let theme = theme_with_fonts(
            "'Space Grotesk', 'Inter', sans-serif",
            "\"Inter\", system-ui, -apple-system, sans-serif",
            "Menlo, monospace",
        );
        assert_eq!(font_families(&theme), vec!["Space Grotesk", "Inter"]);
    }

    #[test]
    fn test_font_links() {
        let theme = theme_with_fonts("'Space Grotesk', sans-serif", "serif", "monospace");
        let links = font_links(&theme);
        assert!(links.contains("family=Space+Grotesk:wght@400;500;600;700"));
        assert!(links.contains("&amp;display=swap"));
    }

    #[test]
    fn test_no_links_for_system_stacks() {
        let theme = theme_with_fonts("Georgia, serif", "system-ui, sans-serif", "monospace");
        assert_eq!(font_links(&theme), "");
    }

    #[test]
    fn test_document_escapes_title() {
        let head = Head {
            title: "Tom & <Jerry>",
            description: "",
            fonts: "",
            styles: "body{}",
            theme_id: "minimal",
            mode: ColorMode::Light,
        };
        let html = document(&head, "<main></main>\n\n");
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<title>Tom &amp; &lt;Jerry&gt;</title>"));
        assert!(html.contains("<body class=\"theme-minimal mode-light\">\n<main></main>\n</body>"));
        assert!(!html.contains("name=\"description\""));
    }
}
