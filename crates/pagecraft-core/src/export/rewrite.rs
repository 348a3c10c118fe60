//! Asset reference rewriting
//!
//! Rendered pages reference images either inline (`data:` URIs) or by
//! absolute URL. Inside a bundle both point at `./images/<file>` instead.
//!
//! Candidates:
//! - `src="..."` / `poster="..."` holding a `data:` URI or an absolute URL
//! - `href="data:..."`
//! - `url(...)` in inline CSS holding a `data:` URI or an absolute URL
//!
//! Links (`href` to another site) are never candidates.

use crate::error::{PagecraftError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use percent_encoding::percent_decode_str;
use regex::Regex;
use serde::Serialize;

const REFERENCE_PATTERN: &str =
    r#"\b(src|poster|href)\s*=\s*"([^"]*)"|url\(\s*['"]?([^'")\s]+)['"]?\s*\)"#;

/// Entities the markup engine writes into attribute values
const ENTITIES: [(&str, char); 5] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#39;", '\''),
];

/// Longest reference text kept in logs and reports
const REFERENCE_PREVIEW: usize = 64;

/// An asset as stored in the bundle
#[derive(Debug, Clone)]
pub struct PackedAsset {
    /// Original file name, used to match absolute URLs
    pub original: String,
    /// Name under `images/`
    pub filename: String,
    pub data: Vec<u8>,
}

impl PackedAsset {
    pub fn bundle_path(&self) -> String {
        format!("./images/{}", self.filename)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rewrite {
    pub reference: String,
    pub target: String,
}

/// Result of rewriting one page
#[derive(Debug, Clone, Default)]
pub struct Rewritten {
    pub html: String,
    pub rewrites: Vec<Rewrite>,
    pub unresolved: Vec<String>,
}

pub struct Rewriter<'a> {
    assets: &'a [PackedAsset],
    pattern: Regex,
}

impl<'a> Rewriter<'a> {
    pub fn new(assets: &'a [PackedAsset]) -> Result<Self> {
        let pattern = Regex::new(REFERENCE_PATTERN)
            .map_err(|e| PagecraftError::ExportFailed(format!("reference pattern: {}", e)))?;
        Ok(Self { assets, pattern })
    }

    /// Rewrite every matched reference in `html`; unmatched references are
    /// left as they are and reported
    pub fn rewrite(&self, html: &str) -> Rewritten {
        let mut out = Rewritten {
            html: String::with_capacity(html.len()),
            ..Default::default()
        };
        let mut last = 0;

        for caps in self.pattern.captures_iter(html) {
            let (value, attribute) = match (caps.get(2), caps.get(3)) {
                (Some(value), _) => (value, caps.get(1).map(|m| m.as_str())),
                (None, Some(value)) => (value, None),
                (None, None) => continue,
            };
            let reference = value.as_str();
            if !is_candidate(reference, attribute) {
                continue;
            }

            match self.find(reference) {
                Some(asset) => {
                    let target = asset.bundle_path();
                    out.html.push_str(&html[last..value.start()]);
                    out.html.push_str(&target);
                    last = value.end();
                    out.rewrites.push(Rewrite {
                        reference: preview(reference),
                        target,
                    });
                }
                None => {
                    let shown = preview(reference);
                    tracing::warn!(reference = %shown, "no asset matches reference, leaving it unchanged");
                    if !out.unresolved.contains(&shown) {
                        out.unresolved.push(shown);
                    }
                }
            }
        }

        out.html.push_str(&html[last..]);
        out
    }

    fn find(&self, reference: &str) -> Option<&PackedAsset> {
        let reference = unescape_html(reference);
        if reference.starts_with("data:") {
            let bytes = decode_data_uri(&reference)?;
            self.assets.iter().find(|a| a.data == bytes)
        } else {
            let segment = last_path_segment(&reference);
            self.assets
                .iter()
                .find(|a| a.original == segment || a.filename == segment)
        }
    }
}

fn is_absolute(reference: &str) -> bool {
    reference.starts_with("https://") || reference.starts_with("http://") || reference.starts_with("//")
}

fn is_candidate(reference: &str, attribute: Option<&str>) -> bool {
    if reference.starts_with("data:") {
        return true;
    }
    attribute != Some("href") && is_absolute(reference)
}

/// Payload bytes of a `data:` URI: base64 payloads are decoded, others
/// are percent-decoded
pub fn decode_data_uri(uri: &str) -> Option<Vec<u8>> {
    let rest = uri.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    if header.ends_with(";base64") {
        let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        STANDARD.decode(compact).ok()
    } else {
        Some(percent_decode_str(payload).collect())
    }
}

/// Undo the escaping applied to interpolated attribute values
fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(at) = rest.find('&') {
        out.push_str(&rest[..at]);
        rest = &rest[at..];
        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
            Some((entity, c)) => {
                out.push(*c);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// File name at the end of a URL, without query or fragment
fn last_path_segment(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let path = url[..end].trim_end_matches('/');
    path.rsplit('/').next().unwrap_or(path)
}

fn preview(reference: &str) -> String {
    if reference.len() <= REFERENCE_PREVIEW {
        return reference.to_string();
    }
    let mut end = REFERENCE_PREVIEW;
    while !reference.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &reference[..end])
}
