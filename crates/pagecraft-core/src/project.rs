//! Site project on disk
//!
//! ```text
//! <root>/
//!   pagecraft.toml     site configuration
//!   content.json       customization data (path configurable)
//!   themes/<id>.toml   optional user themes
//!   images/...         assets referenced by [[assets]]
//! ```

use crate::config::Config;
use crate::data::parse_data;
use crate::error::{PagecraftError, Result};
use crate::export::{Asset, AssetMap};
use crate::render::Renderer;
use crate::schema::CustomizationData;
use crate::site::TemplateRegistry;
use crate::theme::ThemeRegistry;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "pagecraft.toml";
pub const THEMES_DIR: &str = "themes";

#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    /// Nearest directory at or above `start` containing pagecraft.toml
    pub fn find_root(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(CONFIG_FILE).is_file())
            .map(Path::to_path_buf)
    }

    /// Load the project enclosing `start`
    pub fn discover(start: &Path) -> Result<Self> {
        let root = Self::find_root(start).ok_or(PagecraftError::ProjectNotFound)?;
        Self::load(root)
    }

    pub fn load(root: PathBuf) -> Result<Self> {
        let config = Config::from_file(root.join(CONFIG_FILE))?;
        tracing::debug!(root = %root.display(), template = %config.site.template, "loaded project");
        Ok(Self { root, config })
    }

    /// Write pagecraft.toml and the initial customization data into `root`
    ///
    /// Fails if the directory already holds a project.
    pub fn create(root: PathBuf, config: Config, data: &CustomizationData) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            return Err(PagecraftError::ProjectExists(config_path));
        }
        std::fs::create_dir_all(&root)?;
        config.to_file(&config_path)?;

        let project = Self { root, config };
        project.save_data(data)?;
        Ok(project)
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.config.site.data)
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.config.export.output)
    }

    /// Customization data; a missing file reads as empty data
    pub fn load_data(&self) -> Result<CustomizationData> {
        let path = self.data_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no customization data, using defaults");
            return Ok(CustomizationData::new());
        }
        parse_data(&std::fs::read_to_string(&path)?)
    }

    /// Replace the customization data file atomically
    pub fn save_data(&self, data: &CustomizationData) -> Result<()> {
        let path = self.data_path();
        let dir = path.parent().unwrap_or(&self.root);
        std::fs::create_dir_all(dir)?;

        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut temp, data)?;
        temp.write_all(b"\n")?;
        temp.persist(&path).map_err(|e| PagecraftError::IoError(e.error))?;
        Ok(())
    }

    /// Read every `[[assets]]` entry
    pub fn load_assets(&self) -> Result<AssetMap> {
        let mut assets = AssetMap::new();
        for entry in &self.config.assets {
            let path = self.root.join(&entry.path);
            let data = std::fs::read(&path).map_err(|e| PagecraftError::AssetUnreadable {
                key: entry.key.clone(),
                path: path.clone(),
                reason: e.to_string(),
            })?;
            let filename = entry
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| entry.key.clone());
            assets.insert(entry.key.clone(), Asset::new(filename, data));
        }
        Ok(assets)
    }

    /// Builtin templates, builtin themes plus the project's `themes/`
    pub fn renderer(&self) -> Result<Renderer> {
        let mut themes = ThemeRegistry::builtin()?;
        let loaded = themes.load_dir(&self.root.join(THEMES_DIR))?;
        if !loaded.is_empty() {
            tracing::debug!(themes = ?loaded, "loaded user themes");
        }
        Ok(Renderer::new(TemplateRegistry::builtin()?, themes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::fixtures::complete_theme_toml;
    use pagecraft_testkit::temp_dir_in_workspace;
    use serde_json::json;

    fn create(root: &Path) -> Project {
        let mut data = CustomizationData::new();
        data.insert("name".into(), json!("Ada"));
        Project::create(root.to_path_buf(), Config::new("demo", "business-card"), &data).unwrap()
    }

    #[test]
    fn test_create_then_discover_from_subdirectory() {
        let temp = temp_dir_in_workspace();
        create(temp.path());
        let nested = temp.path().join("images/raw");
        std::fs::create_dir_all(&nested).unwrap();

        let project = Project::discover(&nested).unwrap();
        assert_eq!(project.root, temp.path());
        assert_eq!(project.load_data().unwrap()["name"], json!("Ada"));
    }

    #[test]
    fn test_create_refuses_existing_project() {
        let temp = temp_dir_in_workspace();
        create(temp.path());
        let again = Project::create(
            temp.path().to_path_buf(),
            Config::new("demo", "portfolio"),
            &CustomizationData::new(),
        );
        assert!(matches!(again, Err(PagecraftError::ProjectExists(_))));
    }

    #[test]
    fn test_discover_outside_project() {
        let temp = temp_dir_in_workspace();
        assert!(matches!(
            Project::discover(temp.path()),
            Err(PagecraftError::ProjectNotFound)
        ));
    }

    #[test]
    fn test_missing_data_file_is_empty() {
        let temp = temp_dir_in_workspace();
        let project = create(temp.path());
        std::fs::remove_file(project.data_path()).unwrap();
        assert!(project.load_data().unwrap().is_empty());
    }

    #[test]
    fn test_load_assets() {
        let temp = temp_dir_in_workspace();
        let mut project = create(temp.path());
        std::fs::create_dir_all(temp.path().join("images")).unwrap();
        std::fs::write(temp.path().join("images/me.png"), b"PNG").unwrap();
        project.config.assets.push(crate::config::AssetEntry {
            key: "avatar".into(),
            path: "images/me.png".into(),
        });

        let assets = project.load_assets().unwrap();
        assert_eq!(assets["avatar"], Asset::new("me.png", b"PNG".to_vec()));

        project.config.assets[0].path = "images/gone.png".into();
        assert!(matches!(
            project.load_assets(),
            Err(PagecraftError::AssetUnreadable { .. })
        ));
    }

    #[test]
    fn test_user_themes_are_registered() {
        let temp = temp_dir_in_workspace();
        let project = create(temp.path());
        std::fs::create_dir_all(temp.path().join(THEMES_DIR)).unwrap();
        std::fs::write(
            temp.path().join("themes/ocean.toml"),
            complete_theme_toml("ocean"),
        )
        .unwrap();

        let renderer = project.renderer().unwrap();
        assert!(renderer.themes().contains("ocean"));
        assert!(renderer.themes().contains("minimal"));
    }
}
