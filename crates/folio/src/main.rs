//! `folio` - CLI for the terminal portfolio presenter
//!
//! This binary renders a portfolio document and resolves project
//! descriptions from remote READMEs before displaying them.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use folio::cli::{Cli, Command, ConfigCommand, ProjectsCommand, ReadmeCommand, ShowCommand};
use folio::{init_logging, view, Config, DescriptionCache, Error, Overlay, Portfolio, Resolver};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Show(show_cmd) => handle_show(&config, &show_cmd).await,
        Command::Projects(projects_cmd) => handle_projects(&config, &projects_cmd).await,
        Command::Readme(readme_cmd) => handle_readme(&config, &readme_cmd).await,
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

/// Spawn a resolution task per project and wait for all of them.
async fn resolve_descriptions(config: &Config, portfolio: &Portfolio, cache: &DescriptionCache) {
    let resolver = Resolver::new(&config.fetch, cache.clone());
    for handle in resolver.spawn_all(&portfolio.projects) {
        if let Err(err) = handle.await {
            warn!(error = %err, "description resolution task failed");
        }
    }
}

async fn handle_show(config: &Config, cmd: &ShowCommand) -> Result<()> {
    let portfolio = Portfolio::load(config)?;
    let cache = DescriptionCache::new();

    if !cmd.no_fetch {
        resolve_descriptions(config, &portfolio, &cache).await;
    }

    if cmd.json {
        println!("{}", view::render_json(&portfolio, &cache)?);
    } else {
        print!("{}", view::render_portfolio(&portfolio, &cache, &config.display));
    }
    Ok(())
}

async fn handle_projects(config: &Config, cmd: &ProjectsCommand) -> Result<()> {
    let portfolio = Portfolio::load(config)?;
    let cache = DescriptionCache::new();

    if !cmd.no_fetch {
        resolve_descriptions(config, &portfolio, &cache).await;
    }

    if cmd.json {
        let value = view::projects_json(&portfolio, &cache);
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!(
            "{}",
            view::render_projects(&portfolio, &cache, config.display.width)
        );
    }
    Ok(())
}

async fn handle_readme(config: &Config, cmd: &ReadmeCommand) -> Result<()> {
    let portfolio = Portfolio::load(config)?;
    if portfolio.project(&cmd.identifier).is_none() {
        return Err(Error::unknown_project(&cmd.identifier).into());
    }

    // Fetching starts eagerly for every project, as on a full render.
    let cache = DescriptionCache::new();
    resolve_descriptions(config, &portfolio, &cache).await;

    let mut overlay = Overlay::default();
    overlay.open(&cmd.identifier);
    print!("{}", overlay.render(&portfolio, &cache, config.display.width));
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[fetch]");
                println!("  Content host:   {}", config.fetch.content_host);
                println!("  Branches:       {}", config.fetch.branches.join(", "));
                println!("  Preview limit:  {}", config.fetch.preview_limit);
                println!();
                println!("[portfolio]");
                match config.portfolio_path() {
                    Some(path) => println!("  Document:       {}", path.display()),
                    None => println!("  Document:       (built-in sample)"),
                }
                println!();
                println!("[display]");
                println!("  Width:          {}", config.display.width);
                println!("  Testimonials:   {}", config.display.testimonials);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
