//! Theme catalog
//!
//! Builtin themes are embedded TOML files. A site project may add its own
//! under `themes/<id>.toml`; a user theme with a builtin id replaces the
//! builtin in place.

use crate::error::{PagecraftError, Result};
use crate::theme::model::{Theme, ThemeSummary};
use std::path::Path;
use walkdir::WalkDir;

/// Theme returned for unknown or absent ids
pub const DEFAULT_THEME_ID: &str = "minimal";

const BUILTIN_THEMES: [(&str, &str); 4] = [
    ("minimal", include_str!("../../builtin_themes/minimal.toml")),
    ("midnight", include_str!("../../builtin_themes/midnight.toml")),
    ("brutalist", include_str!("../../builtin_themes/brutalist.toml")),
    ("terminal", include_str!("../../builtin_themes/terminal.toml")),
];

/// Insertion-ordered set of validated themes
///
/// Always contains [`DEFAULT_THEME_ID`].
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    /// Registry holding the builtin themes
    pub fn builtin() -> Result<Self> {
        let mut registry = Self { themes: Vec::new() };
        for (origin, source) in BUILTIN_THEMES {
            registry.register(Theme::from_toml_str(source, origin)?)?;
        }
        Ok(registry)
    }

    /// Add a theme, replacing any theme with the same id
    pub fn register(&mut self, theme: Theme) -> Result<()> {
        theme.validate()?;
        match self.themes.iter_mut().find(|t| t.id == theme.id) {
            Some(existing) => {
                tracing::debug!(theme = %theme.id, "replacing registered theme");
                *existing = theme;
            }
            None => {
                tracing::trace!(theme = %theme.id, "registering theme");
                self.themes.push(theme);
            }
        }
        Ok(())
    }

    /// Load every `*.toml` file directly inside `dir`
    ///
    /// A missing directory is not an error. Returns the ids that were
    /// registered, in file name order.
    pub fn load_dir(&mut self, dir: &Path) -> Result<Vec<String>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut loaded = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| PagecraftError::Generic(e.to_string()))?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some("toml")
            {
                continue;
            }

            let origin = path.display().to_string();
            let source = std::fs::read_to_string(path)?;
            let theme = Theme::from_toml_str(&source, &origin)?;
            let id = theme.id.clone();
            self.register(theme)?;
            loaded.push(id);
        }
        Ok(loaded)
    }

    /// Named theme, or the default theme when `id` is unknown or absent
    pub fn get(&self, id: Option<&str>) -> &Theme {
        id.and_then(|id| self.find(id))
            .or_else(|| self.find(DEFAULT_THEME_ID))
            .unwrap_or(&self.themes[0])
    }

    /// Exact lookup without fallback
    pub fn find(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn list(&self) -> Vec<ThemeSummary> {
        self.themes.iter().map(Theme::summary).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }
}
