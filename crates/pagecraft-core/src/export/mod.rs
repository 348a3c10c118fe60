//! Export packager: rendered document + assets → deployable zip bundle
//!
//! Bundle layout:
//!
//! ```text
//! index.html | <page>.html ...   rendered pages, asset references rewritten
//! images/<file>                  assets, names sanitized and de-duplicated;
//!                                the directory is present even when empty
//! README.md | README.txt         usage note
//! ```
//!
//! Entries are written in sorted order with a fixed timestamp and fixed
//! permissions, so identical inputs produce identical bytes.

mod names;
mod readme;
mod rewrite;

pub use names::{sanitize_filename, UniqueNames};
pub use readme::ReadmeFormat;
pub use rewrite::{decode_data_uri, Rewrite};

use crate::error::{PagecraftError, Result};
use crate::render::RenderedDocument;
use rewrite::{PackedAsset, Rewriter};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{Cursor, Write};

/// Directory assets are stored under inside the bundle
pub const IMAGES_DIR: &str = "images";

/// An uploaded asset: original filename and raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub filename: String,
    pub data: Vec<u8>,
}

impl Asset {
    pub fn new(filename: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
        }
    }
}

/// Assets by key; iteration order decides which asset keeps an unsuffixed
/// name on collision
pub type AssetMap = BTreeMap<String, Asset>;

#[derive(Debug, Clone, Default)]
pub struct PackageOptions {
    pub readme: ReadmeFormat,
    /// Heading of the usage note
    pub site_name: Option<String>,
    /// Shown after the generator line, e.g. `portfolio, midnight theme`
    pub details: Option<String>,
}

/// What went into a bundle
#[derive(Debug, Clone, Default, Serialize)]
pub struct PackageReport {
    /// Entry names in archive order
    pub files: Vec<String>,
    pub rewritten: Vec<Rewrite>,
    /// References no asset matched, left unchanged in the output
    pub unresolved: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Package {
    pub bytes: Vec<u8>,
    pub report: PackageReport,
}

/// Package with default options, returning only the archive bytes
pub fn package(rendered: &RenderedDocument, assets: &AssetMap) -> Result<Vec<u8>> {
    package_with(rendered, assets, &PackageOptions::default()).map(|p| p.bytes)
}

/// Build the bundle
///
/// Unmatched references are warnings, not errors: packaging still succeeds
/// and lists them in [`PackageReport::unresolved`].
pub fn package_with(
    rendered: &RenderedDocument,
    assets: &AssetMap,
    options: &PackageOptions,
) -> Result<Package> {
    let packed = pack_assets(assets);
    let rewriter = Rewriter::new(&packed)?;

    let mut report = PackageReport::default();
    let mut entries: BTreeMap<String, Vec<u8>> = BTreeMap::new();
    let mut pages = Vec::new();

    for (name, html) in rendered.files() {
        if name.contains(['/', '\\']) || name == options.readme.filename() {
            return Err(PagecraftError::ExportFailed(format!(
                "invalid page filename '{}'",
                name
            )));
        }
        let out = rewriter.rewrite(html);
        report.rewritten.extend(out.rewrites);
        for reference in out.unresolved {
            if !report.unresolved.contains(&reference) {
                report.unresolved.push(reference);
            }
        }
        if entries.insert(name.to_string(), out.html.into_bytes()).is_some() {
            return Err(PagecraftError::ExportFailed(format!(
                "duplicate page filename '{}'",
                name
            )));
        }
        pages.push(name);
    }

    let mut images: Vec<&str> = packed.iter().map(|a| a.filename.as_str()).collect();
    images.sort_unstable();
    let note = readme::render(
        options.readme,
        options.site_name.as_deref().unwrap_or("Your site"),
        options.details.as_deref(),
        &pages,
        &images,
    )?;
    entries.insert(options.readme.filename().to_string(), note.into_bytes());

    for asset in &packed {
        entries.insert(format!("{}/{}", IMAGES_DIR, asset.filename), asset.data.clone());
    }

    report.files = entries.keys().cloned().collect();
    let bytes = write_zip(&entries)?;

    tracing::debug!(
        files = report.files.len(),
        rewritten = report.rewritten.len(),
        unresolved = report.unresolved.len(),
        bytes = bytes.len(),
        "packaged site"
    );

    Ok(Package { bytes, report })
}

/// [`package_with`] on the blocking pool
///
/// Resolves once with the bundle or an error.
pub async fn package_async(
    rendered: RenderedDocument,
    assets: AssetMap,
    options: PackageOptions,
) -> Result<Package> {
    tokio::task::spawn_blocking(move || package_with(&rendered, &assets, &options))
        .await
        .map_err(|e| PagecraftError::ExportFailed(format!("packaging task failed: {}", e)))?
}

fn pack_assets(assets: &AssetMap) -> Vec<PackedAsset> {
    let mut names = UniqueNames::default();
    assets
        .values()
        .map(|asset| PackedAsset {
            original: asset.filename.clone(),
            filename: names.claim(&sanitize_filename(&asset.filename)),
            data: asset.data.clone(),
        })
        .collect()
}

fn write_zip(entries: &BTreeMap<String, Vec<u8>>) -> Result<Vec<u8>> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options: zip::write::FileOptions<'_, ()> = zip::write::FileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default())
        .unix_permissions(0o644);
    let dir_options: zip::write::FileOptions<'_, ()> = zip::write::FileOptions::default()
        .last_modified_time(zip::DateTime::default())
        .unix_permissions(0o755);

    // `images/` is always present, even when no asset was packed
    let images = format!("{}/", IMAGES_DIR);
    let mut ordered: BTreeMap<&str, Option<&[u8]>> = entries
        .iter()
        .map(|(name, data)| (name.as_str(), Some(data.as_slice())))
        .collect();
    ordered.insert(images.as_str(), None);

    for (name, data) in ordered {
        match data {
            Some(data) => {
                zip.start_file(name, options)?;
                zip.write_all(data)?;
            }
            None => zip.add_directory(name, dir_options)?,
        }
    }

    Ok(zip.finish()?.into_inner())
}
