use anyhow::{Context, Result};
use cof::*;
use log::*;
use structopt::clap::AppSettings;
use structopt::StructOpt;

use std::fs;
use std::path::{Path, PathBuf};

mod descriptor;

use descriptor::{CofDescriptor, Code, Config};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "cof",
    about = "inspects and edits COF composite animations",
    global_settings = &[AppSettings::AllowNegativeNumbers]
)]
struct Opt {
    /// Composite object descriptor (toml)
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    #[structopt(short, long, parse(from_os_str), default_value = "config.toml")]
    config: PathBuf,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Prints directions, frames, frame rate and duration
    Info,
    /// Prints the fields of a layer
    Layer { index: isize },
    /// Prints the render order of a direction and frame
    Priority { direction: isize, frame: isize },
    /// Deletes a layer
    Delete {
        index: usize,

        #[structopt(short, long, parse(from_os_str))]
        output: Option<PathBuf>,
    },
    /// Adds a layer, drawn last in every frame
    Add {
        /// Layer type token, e.g. `TR` or `S1`
        kind: String,

        #[structopt(long)]
        shadow: Option<u8>,

        /// Draw effect name, e.g. `Normal` or `50% alpha`
        #[structopt(long)]
        effect: Option<String>,

        /// Weapon class token, e.g. `1hs`
        #[structopt(long)]
        weapon: Option<String>,

        #[structopt(short, long, parse(from_os_str))]
        output: Option<PathBuf>,
    },
}

fn load_config(path: &Path) -> Config {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            debug!("no config at {}: {}", path.display(), e);
            return Default::default();
        }
    };
    match toml::from_str(&data) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to parse config file: {}", e);
            Default::default()
        }
    }
}

fn save(viewer: &Viewer, output: Option<PathBuf>, config: &Config) -> Result<()> {
    let text = toml::to_string(&CofDescriptor::from(viewer.cof()))?;
    match output.or_else(|| config.output.clone()) {
        Some(path) => {
            fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))?;
            info!("saved to {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn print_layer(viewer: &mut Viewer) {
    println!("Selected Layer: {}", viewer.navigation().layer_index());
    if let Some(details) = viewer.layer_details() {
        for line in details.lines().iter() {
            println!("{}", line);
        }
    }
}

fn main() -> Result<()> {
    let env = env_logger::Env::default()
        .filter_or("COF_LOG", "warn")
        .write_style_or("COF_LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    let opt = Opt::from_args();
    let config = load_config(&opt.config);
    trace!("{:?}", config);

    let data = fs::read_to_string(&opt.input).context("failed to open cof descriptor")?;
    let desc: CofDescriptor = toml::from_str(&data).context("failed to parse cof descriptor")?;
    let cof = desc.to_cof()?;
    let mut viewer = Viewer::new(opt.input.display().to_string(), cof);

    match opt.cmd {
        Command::Info => {
            for line in viewer.summary().lines().iter() {
                println!("{}", line);
            }
            println!("Layers: {}", viewer.layer_choices().join(" "));
        }
        Command::Layer { index } => {
            viewer.select_layer(index);
            print_layer(&mut viewer);
        }
        Command::Priority { direction, frame } => {
            viewer.select_direction(direction);
            viewer.select_frame(frame);
            let nav = viewer.navigation();
            println!(
                "Direction: {} Frame: {}",
                nav.direction_index(),
                nav.frame_index()
            );
            println!("Render Order (first to last):");
            for entry in viewer.render_order() {
                println!("\t{}", entry);
            }
        }
        Command::Delete { index, output } => {
            let layer = viewer.delete_layer(index)?;
            println!("deleted {} layer", layer.kind.name());
            save(&viewer, output, &config)?;
        }
        Command::Add {
            kind,
            shadow,
            effect,
            weapon,
            output,
        } => {
            let mut layer = config.layer.to_layer().context("bad layer defaults in config")?;
            layer.kind = descriptor::layer_type(&Code::Name(kind))?;
            if let Some(shadow) = shadow {
                layer.shadow = shadow;
            }
            if let Some(effect) = effect {
                layer.draw_effect = descriptor::draw_effect(&Code::Name(effect))?;
            }
            if let Some(weapon) = weapon {
                layer.weapon_class = descriptor::weapon_class(&Code::Name(weapon))?;
            }
            viewer.add_layer(layer)?;
            print_layer(&mut viewer);
            save(&viewer, output, &config)?;
        }
    }

    Ok(())
}
