#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Treasure Hunt **
//! Cross town after town in search of treasure.

use treasure_hunt::style::GameStyle;
use treasure_hunt::{load_config, run_repl};

use anyhow::{Context, Result};
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading treasure hunt config...");
    let config = load_config().context("while loading game config")?;
    info!("Config loaded successfully.");

    println!("{:^60}", "TREASURE HUNT".title_style());
    println!("Type 'help' for a list of commands.\n");

    run_repl(&config)
}
