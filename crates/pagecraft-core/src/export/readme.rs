//! Usage note shipped inside every bundle

use crate::error::{PagecraftError, Result};
use crate::template::{TemplateContext, TemplateEngine};
use serde::{Deserialize, Serialize};
use serde_json::json;

const README_MD: &str = include_str!("../../builtin_export/README.tmp.md");
const README_TXT: &str = include_str!("../../builtin_export/README.tmp.txt");

/// Format of the generated usage note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadmeFormat {
    #[default]
    Markdown,
    Text,
}

impl ReadmeFormat {
    pub fn filename(&self) -> &'static str {
        match self {
            ReadmeFormat::Markdown => "README.md",
            ReadmeFormat::Text => "README.txt",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            ReadmeFormat::Markdown => README_MD,
            ReadmeFormat::Text => README_TXT,
        }
    }
}

/// Render the usage note listing `pages` and `images`
///
/// The first page is the entry point. Values are written verbatim since the
/// note is not HTML.
pub fn render(
    format: ReadmeFormat,
    site_name: &str,
    details: Option<&str>,
    pages: &[&str],
    images: &[&str],
) -> Result<String> {
    let context = json!({
        "site_name": site_name,
        "details": details.unwrap_or(""),
        "entry": pages.first().copied().unwrap_or("index.html"),
        "pages": pages,
        "images": images,
    });

    TemplateEngine::plain()
        .render(format.source(), &TemplateContext::new(context))
        .map_err(|e| PagecraftError::ExportFailed(format!("{}: {}", format.filename(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_lists_files() {
        let out = render(
            ReadmeFormat::Markdown,
            "Jordan & Co",
            Some("portfolio, midnight"),
            &["index.html"],
            &["me.png"],
        )
        .unwrap();
        assert!(out.starts_with("# Jordan & Co\n"));
        assert!(out.contains("(portfolio, midnight)"));
        assert!(out.contains("- `index.html`"));
        assert!(out.contains("- `images/me.png`"));
        assert!(out.contains("Netlify"));
    }

    #[test]
    fn test_text_without_details() {
        let out = render(
            ReadmeFormat::Text,
            "Beacon",
            None,
            &["index.html", "pricing.html"],
            &[],
        )
        .unwrap();
        assert!(out.contains("pricing.html"));
        assert!(!out.contains("()"));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn test_filenames() {
        assert_eq!(ReadmeFormat::Markdown.filename(), "README.md");
        assert_eq!(ReadmeFormat::Text.filename(), "README.txt");
    }
}
