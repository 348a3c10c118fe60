//! Shared fixtures for pagecraft tests: scratch directories, site projects
//! and ZIP inspection

mod fixtures;

pub use fixtures::{data_uri, write_site, zip_entries, zip_entry_text, PNG_1X1};

use tempfile::TempDir;

/// Scratch directory under `<cwd>/.tmp/`, removed on drop
///
/// Site projects written by tests stay inside the workspace, where
/// `pagecraft` project discovery cannot wander into a real project above
/// the system temp dir.
///
/// ```rust
/// let dir = pagecraft_testkit::temp_dir_in_workspace();
/// std::fs::write(dir.path().join("content.json"), "{}").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("cannot create scratch directory under .tmp/")
}

pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let base = std::env::current_dir()?.join(".tmp");
    std::fs::create_dir_all(&base)?;
    tempfile::Builder::new().prefix("pagecraft-").tempdir_in(&base)
}
