//! `repl::system` module
//!
//! Contains repl loop handlers for help and for wrapping up the game.

use std::collections::HashMap;

use colored::Colorize;
use gametools::Spinner;
use log::info;

use crate::hunter::{Hunter, Traveler};
use crate::repl::VisitEnd;
use crate::spinners::{SpinnerType, spin};
use crate::style::GameStyle;

const HELP_TEXT: &[(&str, &str)] = &[
    ("look", "describe the town and your purse"),
    ("inventory", "show your kit and treasures"),
    ("shop", "see the general store's prices"),
    ("buy <item> / sell <item>", "trade at the general store"),
    ("fight", "look for trouble (and gold)"),
    ("search", "dig for treasure, once per town"),
    ("leave", "cross the terrain to the next town"),
    ("quit", "end the hunt"),
];

/// Show the available commands.
pub fn help_handler() {
    println!("{}", "Commands".underline());
    for (command, what) in HELP_TEXT {
        println!("  {:<26}{}", command.bold(), what);
    }
    println!("Collect a Diamond, some Gold and some Jewelery to win. Don't go broke.");
}

/// Print the end-of-game summary.
pub fn summary_handler(
    hunter: &Hunter,
    towns_visited: usize,
    ending: VisitEnd,
    spinners: &HashMap<SpinnerType, Spinner<&'static str>>,
) {
    info!(
        "{} finished ({ending:?}) after {towns_visited} towns with {} gold",
        hunter.name(),
        hunter.gold()
    );
    info!("ending kit:");
    hunter.kit().for_each(|item| info!("- {item}"));

    println!();
    match ending {
        VisitEnd::Won => println!(
            "{}",
            format!("Congratulations, {}! You found every treasure!", hunter.name()).treasure_style()
        ),
        VisitEnd::Broke => println!(
            "{}",
            format!("You're flat broke, {}. The hunt is over.", hunter.name()).denied_style()
        ),
        VisitEnd::Quit | VisitEnd::MovedOn => println!(
            "{}",
            spin(spinners, SpinnerType::Farewell, "Safe travels, hunter.").italic()
        ),
    }
    println!(
        "Towns visited: {towns_visited} | Gold: {} | Treasures: {} of 3",
        hunter.gold().to_string().gold_style(),
        hunter.treasures.len()
    );
}
