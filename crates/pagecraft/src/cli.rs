//! CLI command structure using clap

use clap::{Parser, Subcommand};
use pagecraft_core::ColorMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagecraft")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available themes
    Themes {
        #[arg(long)]
        json: bool,
    },

    /// List available templates
    Templates {
        #[arg(long)]
        json: bool,
    },

    /// Show a template's fields grouped by editor section
    Schema {
        /// Template ID (e.g., "portfolio")
        template: String,

        #[arg(long)]
        json: bool,
    },

    /// Create a site project from a template
    Init {
        /// Template ID
        template: String,

        /// Site name (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,

        /// Theme ID (defaults to the template's default theme)
        #[arg(long)]
        theme: Option<String>,

        /// Directory to create the project in
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },

    /// Set a customization value: `name`, `skills[0]`, `projects[1].title`
    Set {
        path: String,

        /// Parsed as JSON when valid, otherwise taken as text
        value: String,
    },

    /// Append an item to a group field
    Add {
        /// Group field key
        key: String,
    },

    /// Remove an item from a group field
    Remove {
        /// Group field key
        key: String,

        index: usize,
    },

    /// Render the site to HTML
    Render {
        /// Override the configured theme
        #[arg(long)]
        theme: Option<String>,

        /// Override the configured color mode
        #[arg(long, value_parser = parse_mode)]
        mode: Option<ColorMode>,

        /// Write to a file (single page) or directory (multi-page) instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Package the site as a deployable zip
    Export {
        #[arg(long)]
        theme: Option<String>,

        #[arg(long, value_parser = parse_mode)]
        mode: Option<ColorMode>,

        /// Override the configured output path
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Check that every template renders with every theme
    Check {
        /// Only check this template
        #[arg(long)]
        template: Option<String>,

        #[arg(long)]
        json: bool,
    },
}

fn parse_mode(value: &str) -> Result<ColorMode, String> {
    Ok(ColorMode::parse_lenient(value))
}
