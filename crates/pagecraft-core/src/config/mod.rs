//! `pagecraft.toml` site configuration

mod model;

pub use model::{AssetEntry, Config, ExportConfig, SiteConfig};
