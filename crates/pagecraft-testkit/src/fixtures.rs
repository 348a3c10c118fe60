//! Fixture data: image bytes, data URIs, site projects and zip inspection

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use std::path::Path;

/// A valid 1x1 transparent PNG
pub const PNG_1X1: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];

/// `data:<mime>;base64,...` URI for `bytes`
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Every entry of a zip archive, by name
///
/// # Panics
///
/// Panics if the bytes are not a readable zip archive.
pub fn zip_entries(bytes: &[u8]) -> BTreeMap<String, Vec<u8>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("Failed to read zip");
    let mut entries = BTreeMap::new();
    for i in 0..archive.len() {
        let mut file = archive.by_index(i).expect("Failed to get zip entry");
        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .expect("Failed to read zip entry");
        entries.insert(file.name().to_string(), content);
    }
    entries
}

/// One zip entry as UTF-8 text
///
/// # Panics
///
/// Panics if the entry is missing or not UTF-8.
pub fn zip_entry_text(bytes: &[u8], name: &str) -> String {
    let mut entries = zip_entries(bytes);
    let content = entries
        .remove(name)
        .unwrap_or_else(|| panic!("zip has no entry '{}'", name));
    String::from_utf8(content).expect("zip entry is not UTF-8")
}

/// Write a minimal site project: pagecraft.toml and content.json
///
/// `extra_config` is appended to the generated pagecraft.toml verbatim.
pub fn write_site(dir: &Path, template: &str, content_json: &str, extra_config: &str) {
    let config = format!(
        "[site]\nname = \"test-site\"\ntemplate = \"{}\"\n{}",
        template, extra_config
    );
    std::fs::create_dir_all(dir).expect("Failed to create site directory");
    std::fs::write(dir.join("pagecraft.toml"), config).expect("Failed to write pagecraft.toml");
    std::fs::write(dir.join("content.json"), content_json).expect("Failed to write content.json");
}
