use clap::Parser;
use color_eyre::eyre::Result;
use config::{Config, ConfigManager, DEFAULT_CONFIG_ID};
use directories::ProjectDirs;
use log::*;
use std::{
    fs,
    sync::{Arc, Mutex},
};

use ui::{
    app,
    colors::Theme,
    store::{action::Action, derived::get_all_todos, Store},
};

mod config;
mod fixtures;
mod records;
mod ui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run in debug mode - Only prints logs foregoing UI
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Override the configured theme for this session (Blue, Emerald,
    /// Indigo, Red) without persisting it
    #[arg(short, long)]
    theme: Option<String>,
}

fn initialize_logger(args: &Args) {
    let filter = if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Off
    };

    simplelog::TermLogger::init(
        filter,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .unwrap();
}

fn get_project_config_path() -> String {
    let project_dir = ProjectDirs::from("", "", "pocketdeck").unwrap();
    let config_dir = project_dir.config_dir();
    fs::create_dir_all(config_dir).unwrap();
    config_dir.join("config.yml").to_str().unwrap().to_string()
}

fn init(config_path: &str) -> Result<(Config, Arc<Store>)> {
    let config_manager = Arc::new(Mutex::new(ConfigManager::new(config_path)));
    let seed = fixtures::load()?;
    let store = Arc::new(Store::new(Arc::clone(&config_manager), seed));

    let manager = config_manager.lock().unwrap();
    let config = manager.get_by_id(DEFAULT_CONFIG_ID).unwrap();
    // free up manager lock so dispatches can acquire lock as needed
    drop(manager);

    store.dispatch(Action::SetConfig(config.id.clone()));

    Ok((config, store))
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args);

    let (config, store) = init(&get_project_config_path())?;

    if let Some(name) = &args.theme {
        store.dispatch(Action::PreviewTheme(Theme::from_string(name)));
    }

    if args.debug {
        let state = store.get_state();
        debug!("using config: {:?}", config);
        debug!(
            "seeded {} pages, {} habits, {} goals, {} accounts, {} transactions",
            state.pages.len(),
            state.habits.len(),
            state.goals.len(),
            state.accounts.len(),
            state.transactions.len(),
        );
        debug!("todos: {:?}", get_all_todos(&state));
        return Ok(());
    }

    let application = app::create_app(store)?;
    application.launch()
}
