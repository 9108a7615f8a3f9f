use anyhow::Context;
use clap::{Parser, Subcommand};
use radial_core::config::{self, Menu, TriggerButton};
use radial_core::geometry::Point;
use radial_core::ipc::{IpcCommand, SOCKET_PATH};
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "radialctl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file to use instead of the default location
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Report a trigger button press to the daemon (bind this to the button going down)
    Press { button: TriggerButton },
    /// Report a trigger button release to the daemon
    Release { button: TriggerButton },
    /// Report a pointer position, in coordinates of the focused monitor
    Move {
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
    },
    /// Stop the daemon
    Quit,
    /// Write a starter config file if none exists
    Init,
    /// Validate the config and list the configured shortcuts
    Check,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Press { button } => send_command(IpcCommand::Press(button)),
        Commands::Release { button } => send_command(IpcCommand::Release(button)),
        Commands::Move { x, y } => send_command(IpcCommand::Move(Point::new(x, y))),
        Commands::Quit => send_command(IpcCommand::Quit),
        Commands::Init => init(config_path(cli.config)?),
        Commands::Check => check(config_path(cli.config)?),
    }
}

fn config_path(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(config::get_config_path()?),
    }
}

fn init(path: PathBuf) -> anyhow::Result<()> {
    if config::write_default_config(&path)? {
        println!("Wrote {}", path.display());
    } else {
        println!("{} already exists, leaving it alone", path.display());
    }
    Ok(())
}

fn check(path: PathBuf) -> anyhow::Result<()> {
    let menu = Menu::from_config(&config::load_config(&path)?)?;

    println!("{}", path.display());
    println!("trigger: {}", menu.trigger);
    println!(
        "menu: {}px, radius {}px, dead zone {}px",
        menu.layout.size,
        menu.layout.radius(),
        menu.layout.dead_zone_radius()
    );
    for sector in &menu.sectors {
        println!("{:>7.2}°  {:<20}  {}", sector.angle, sector.label.truncated(), sector.action);
    }
    for warning in menu.overlap_warnings() {
        println!("warning: {}", warning);
    }
    Ok(())
}

fn send_command(cmd: IpcCommand) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).with_context(|| {
        format!(
            "Failed to connect to radial daemon at {}. Is radial running?",
            SOCKET_PATH
        )
    })?;

    writeln!(stream, "{}", cmd)?;
    Ok(())
}
