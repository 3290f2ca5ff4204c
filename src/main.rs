//! NYQST portal - a terminal mockup of the portal product
//!
//! This is the binary entry point. State, update logic and rendering live in
//! the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use portal_app::config::{self, Settings};
use portal_app::{AppState, NavKey};
use portal_core::prelude::{error, info, Error, Result};

/// NYQST portal - a terminal mockup of the portal product
#[derive(Parser, Debug)]
#[command(name = "portal")]
#[command(about = "A terminal mockup of the NYQST portal", long_about = None)]
struct Args {
    /// Settings file (defaults to <config dir>/nyqst-portal/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// TOML catalog fixture replacing the seeded sample data
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Section shown at startup (projects, apps, studio, ...)
    #[arg(long, value_name = "KEY")]
    screen: Option<NavKey>,

    /// Print the active catalog as JSON and exit (no TUI)
    #[arg(long)]
    dump_catalog: bool,

    /// Write a commented default settings file and exit
    #[arg(long)]
    init_config: bool,
}

fn load_settings(args: &Args) -> Result<Settings> {
    match &args.config {
        Some(path) => config::load_explicit_settings(path),
        None => Ok(config::default_config_path()
            .map(|path| config::load_settings(&path))
            .unwrap_or_default()),
    }
}

/// Command-line flags win over the settings file
fn apply_overrides(settings: &mut Settings, args: &Args) {
    if let Some(screen) = args.screen {
        settings.behavior.start_screen = screen;
    }
    if let Some(path) = &args.catalog {
        settings.catalog.path = Some(path.clone());
    }
}

fn init_config(args: &Args) -> Result<()> {
    let path = args
        .config
        .clone()
        .or_else(config::default_config_path)
        .ok_or_else(|| Error::config("No config directory on this platform"))?;

    if config::init_config_file(&path)? {
        println!("Created {}", path.display());
    } else {
        println!("{} already exists", path.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging (to file, since the TUI owns stdout)
    portal_core::logging::init()?;

    if args.init_config {
        init_config(&args)?;
        return Ok(());
    }

    let mut settings = load_settings(&args)?;
    apply_overrides(&mut settings, &args);

    let catalog = config::load_catalog(&settings, None)?;

    if args.dump_catalog {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    let state = AppState::new(catalog, settings);
    let result = portal_tui::run(state).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    info!("NYQST portal exiting");
    Ok(result?)
}
