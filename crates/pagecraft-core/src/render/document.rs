//! Rendered documents and the `<!-- FILE: name -->` stream format

use std::fmt;

const MARKER_OPEN: &str = "<!-- FILE: ";
const MARKER_CLOSE: &str = " -->";

/// Filename a single-page document is written to
pub const INDEX_FILE: &str = "index.html";

/// Final renderer output
///
/// ```text
/// Single(html)                 one page, served as index.html
/// Pages([(name, html), ...])   ordered, first page is the entry point
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedDocument {
    Single(String),
    Pages(Vec<(String, String)>),
}

impl RenderedDocument {
    /// `(filename, html)` pairs; a single page is `index.html`
    pub fn files(&self) -> Vec<(&str, &str)> {
        match self {
            RenderedDocument::Single(html) => vec![(INDEX_FILE, html.as_str())],
            RenderedDocument::Pages(pages) => pages
                .iter()
                .map(|(name, html)| (name.as_str(), html.as_str()))
                .collect(),
        }
    }

    /// Serialize as one string
    ///
    /// A single page is its HTML unchanged. Pages are each preceded by a
    /// marker line and separated by a newline:
    ///
    /// ```text
    /// <!-- FILE: index.html -->
    /// <!DOCTYPE html>...
    /// <!-- FILE: pricing.html -->
    /// <!DOCTYPE html>...
    /// ```
    pub fn to_stream(&self) -> String {
        match self {
            RenderedDocument::Single(html) => html.clone(),
            RenderedDocument::Pages(pages) => pages
                .iter()
                .map(|(name, html)| format!("{}{}{}\n{}", MARKER_OPEN, name, MARKER_CLOSE, html))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Inverse of [`RenderedDocument::to_stream`]
    ///
    /// A stream whose first line is not a marker is a single page.
    pub fn from_stream(stream: &str) -> Self {
        let mut markers = Vec::new();
        let mut offset = 0;
        for line in stream.split_inclusive('\n') {
            let trimmed = line.trim_end_matches('\n');
            if let Some(name) = trimmed
                .strip_prefix(MARKER_OPEN)
                .and_then(|rest| rest.strip_suffix(MARKER_CLOSE))
            {
                markers.push((offset, offset + line.len(), name.to_string()));
            }
            offset += line.len();
        }

        if markers.first().map(|(start, _, _)| *start) != Some(0) {
            return RenderedDocument::Single(stream.to_string());
        }

        let pages = markers
            .iter()
            .enumerate()
            .map(|(i, (_, content_start, name))| {
                let content_end = match markers.get(i + 1) {
                    // Drop the separator newline before the next marker
                    Some((next, _, _)) => next.saturating_sub(1).max(*content_start),
                    None => stream.len(),
                };
                (name.clone(), stream[*content_start..content_end].to_string())
            })
            .collect();
        RenderedDocument::Pages(pages)
    }
}

impl fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_stream())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> RenderedDocument {
        RenderedDocument::Pages(vec![
            ("index.html".to_string(), "<!DOCTYPE html>\n<p>home</p>\n".to_string()),
            ("pricing.html".to_string(), "<!DOCTYPE html>\n<p>plans</p>\n".to_string()),
        ])
    }

    #[test]
    fn test_single_page_stream_is_the_html() {
        let doc = RenderedDocument::Single("<!DOCTYPE html>\n".to_string());
        assert_eq!(doc.to_stream(), "<!DOCTYPE html>\n");
        assert_eq!(doc.files(), vec![("index.html", "<!DOCTYPE html>\n")]);
    }

    #[test]
    fn test_pages_stream_layout() {
        let stream = pages().to_stream();
        assert!(stream.starts_with("<!-- FILE: index.html -->\n<!DOCTYPE html>"));
        assert!(stream.contains("</p>\n\n<!-- FILE: pricing.html -->\n"));
    }

    #[test]
    fn test_stream_parses_back() {
        let doc = pages();
        assert_eq!(RenderedDocument::from_stream(&doc.to_stream()), doc);

        let single = RenderedDocument::Single("<html></html>".to_string());
        assert_eq!(RenderedDocument::from_stream(&single.to_stream()), single);
    }

    #[test]
    fn test_pages_without_trailing_newline() {
        let doc = RenderedDocument::Pages(vec![
            ("a.html".to_string(), "A".to_string()),
            ("b.html".to_string(), "B".to_string()),
        ]);
        assert_eq!(doc.to_stream(), "<!-- FILE: a.html -->\nA\n<!-- FILE: b.html -->\nB");
        assert_eq!(RenderedDocument::from_stream(&doc.to_stream()), doc);
    }
}
