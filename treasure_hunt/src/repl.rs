//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. Each pass through the outer loop generates a new
//! town; the inner loop feeds the player's commands to that town until the hunter crosses
//! its terrain, wins, goes broke, or quits.

pub mod actions;
pub mod system;

pub use actions::*;
pub use system::*;

use crate::command::{Command, parse_command};
use crate::config::{GameConfig, HunterConfig};
use crate::data_paths::data_path;
use crate::hunter::{Hunter, Traveler};
use crate::shop::GeneralStore;
use crate::spinners::{SpinnerType, default_spinners, spin};
use crate::style::GameStyle;
use crate::town::Town;

use anyhow::{Context, Result};
use gametools::Spinner;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::HashMap;

/// Ways a visit to a town can come to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitEnd {
    /// Crossed the terrain; on to the next town.
    MovedOn,
    Quit,
    /// Collected every treasure.
    Won,
    /// Gold fell below zero.
    Broke,
}

/// Build the hunter described by the config.
pub fn build_hunter(name: &str, config: &HunterConfig) -> Hunter {
    let mut hunter = Hunter::new(name, config.starting_gold);
    for item in &config.starting_kit {
        hunter.add_item(&item.to_lowercase());
    }
    info!(
        "hunter \"{}\" created with {} gold and {} kit items",
        hunter.name,
        hunter.gold,
        hunter.kit.len()
    );
    hunter
}

/// Seed the game's random number generator from config, or from the OS if unset.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!("using fixed rng seed {seed}");
            StdRng::seed_from_u64(seed)
        },
        None => StdRng::from_os_rng(),
    }
}

/// Run the main read–eval–print loop until the game ends.
///
/// # Errors
/// - if the line editor can't be started
pub fn run_repl(config: &GameConfig) -> Result<()> {
    let mut editor = DefaultEditor::new().context("while starting line editor")?;
    let history_path = data_path("history.txt");
    if editor.load_history(&history_path).is_err() {
        info!("no input history loaded from {}", history_path.display());
    }

    let Some(name) = prompt_name(&mut editor)? else {
        return Ok(());
    };
    let mut hunter = build_hunter(&name, &config.hunter);
    let mut store = GeneralStore::from_config(&config.shop);
    let mut rng = build_rng(config.seed);
    let spinners = default_spinners();

    let mut towns_visited = 0;
    let ending = loop {
        towns_visited += 1;
        info!("================> TOWN {towns_visited} <================");
        let mut town = Town::from_config(&mut store, &config.town, &mut rng);
        let greeting = town.arrive(&mut hunter).to_string();
        println!("\n{}", town.to_string().terrain_style());
        narrate(&greeting);

        match visit_town(&mut town, &mut editor, &spinners, towns_visited)? {
            VisitEnd::MovedOn => {},
            other => break other,
        }
    };

    summary_handler(&hunter, towns_visited, ending, &spinners);
    if let Err(e) = editor.save_history(&history_path) {
        warn!("unable to save input history to {}: {e}", history_path.display());
    }
    Ok(())
}

/// Ask for the hunter's name. Returns `None` if input was closed.
fn prompt_name(editor: &mut DefaultEditor) -> Result<Option<String>> {
    loop {
        match editor.readline(&"What's your name, Hunter? ".prompt_style().to_string()) {
            Ok(line) if !line.trim().is_empty() => return Ok(Some(line.trim().to_string())),
            Ok(_) => {},
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(None),
            Err(e) => return Err(e).context("while reading hunter name"),
        }
    }
}

/// Feed commands to a town until the visit ends.
///
/// # Errors
/// - on unrecoverable terminal input failures
/// - if the town is driven before the hunter has arrived
pub fn visit_town<R: Rng>(
    town: &mut Town<'_, Hunter, R>,
    editor: &mut DefaultEditor,
    spinners: &HashMap<SpinnerType, Spinner<&'static str>>,
    town_number: usize,
) -> Result<VisitEnd> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;
    loop {
        let gold = town.hunter().map_or(0, |hunter| hunter.gold);
        let prompt = format!("\n[Town: {town_number}|Gold: {gold}]>> ").prompt_style().to_string();

        let input = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("Command canceled.");
                continue;
            },
            Err(ReadlineError::Eof) => return Ok(VisitEnd::Quit),
            Err(e) => return Err(e).context("while reading command"),
        };
        if let Err(err) = editor.add_history_entry(input.as_str()) {
            warn!("unable to record input history: {err}");
        }

        match parse_command(&input) {
            Look => look_handler(town),
            Inventory => inventory_handler(town),
            Shop => shop_handler(town, "list")?,
            Buy(item) => shop_handler(town, &format!("buy {item}"))?,
            Sell(item) => shop_handler(town, &format!("sell {item}"))?,
            LookForTrouble => trouble_handler(town)?,
            Search => search_handler(town, spinners),
            Leave => {
                if leave_handler(town)? {
                    return Ok(VisitEnd::MovedOn);
                }
            },
            Help => help_handler(),
            Quit => return Ok(VisitEnd::Quit),
            Unknown => println!(
                "{}",
                spin(spinners, SpinnerType::UnrecognizedCommand, "Didn't quite catch that?").error_style()
            ),
        }

        if let Some(hunter) = town.hunter() {
            if hunter.has_all_treasures() {
                return Ok(VisitEnd::Won);
            }
            if hunter.is_broke() {
                return Ok(VisitEnd::Broke);
            }
        }
    }
}
