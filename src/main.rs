use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scratchpad::geometry::DevicePixelRatio;
use scratchpad::script::Script;
use scratchpad::{Config, DrawingSurface, SurfaceOptions};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "scratchpad")]
#[command(version, about = "Freehand drawing surface with pen and eraser tools")]
struct Cli {
    /// Read configuration from this file instead of ~/.config/scratchpad/config.toml
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scripted event log against a surface and save the result as PNG
    Replay {
        /// Script describing the layout and events (TOML)
        script: PathBuf,

        /// Where to write the rendered buffer
        #[arg(long, short = 'o', value_name = "PNG")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    match cli.command {
        Some(Command::Replay { script, output }) => replay(&config, &script, &output),
        None => {
            println!("scratchpad: Freehand drawing surface with pen and eraser tools");
            println!();
            println!("Usage:");
            println!("  scratchpad replay <SCRIPT> --output <PNG>   Replay events and save the buffer");
            println!("  scratchpad --print-config                   Show the effective configuration");
            println!("  scratchpad --help                           Show help");
            Ok(())
        }
    }
}

fn replay(config: &Config, script_path: &Path, output: &Path) -> Result<()> {
    let script = Script::load(script_path)?;
    let default_dpr = DevicePixelRatio::new(config.display.device_pixel_ratio);

    let options = SurfaceOptions::from_config(config).with_on_draw(|is_empty| {
        log::debug!("Surface reported empty = {is_empty}");
    });
    let mut surface = DrawingSurface::new(options);
    script.replay(&mut surface, default_dpr);
    log::info!("Replayed {} events from {}", script.events.len(), script_path.display());

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    surface
        .canvas()
        .write_png(&mut writer)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Replayed {} events; surface empty: {}",
        script.events.len(),
        surface.is_empty()
    );
    Ok(())
}
