use anyhow::Context;
use clap::Parser;
use radial::gui::app::AppModel;
use radial::sys::runtime;
use radial_core::config;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "radial", version, about = "Radial shortcut menu daemon", long_about = None)]
struct Args {
    /// Config file (TOML or JSON) to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let path = match args.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };
    let menu = config::load_menu(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    log::info!(
        "Loaded {} shortcuts from {}, trigger: {}",
        menu.sectors.len(),
        path.display(),
        menu.trigger
    );

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.radial.menu").with_args(Vec::new());

    app.run::<AppModel>((menu, rx));
    Ok(())
}
