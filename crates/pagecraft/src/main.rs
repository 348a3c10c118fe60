mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use pagecraft_core::PagecraftError;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Themes { json } => commands::catalog::run_themes(json),
        Commands::Templates { json } => commands::catalog::run_templates(json),
        Commands::Schema { template, json } => commands::schema::run(template, json),
        Commands::Init {
            template,
            name,
            theme,
            dir,
        } => commands::init::run(template, name, theme, dir, cli.verbose),
        Commands::Set { path, value } => commands::edit::run_set(path, value),
        Commands::Add { key } => commands::edit::run_add(key),
        Commands::Remove { key, index } => commands::edit::run_remove(key, index),
        Commands::Render {
            theme,
            mode,
            output,
        } => commands::render::run(theme, mode, output),
        Commands::Export {
            theme,
            mode,
            output,
            json,
        } => commands::export::run(theme, mode, output, json),
        Commands::Check { template, json } => commands::check::run(template, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        let configuration = e
            .chain()
            .filter_map(|cause| cause.downcast_ref::<PagecraftError>())
            .any(PagecraftError::is_configuration_error);
        if configuration {
            eprintln!("hint: run `pagecraft check` to validate templates and themes");
        }
        std::process::exit(1);
    }
}
