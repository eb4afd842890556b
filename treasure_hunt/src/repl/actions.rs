//! `repl::actions` module
//!
//! Contains repl loop handlers for the things a hunter can do in town.

use std::collections::HashMap;

use anyhow::Result;
use colored::Colorize;
use gametools::Spinner;
use log::info;
use rand::Rng;

use crate::hunter::{Hunter, Traveler};
use crate::spinners::{SpinnerType, spin};
use crate::style::{GameStyle, wrap_narration};
use crate::town::{Brawl, Town, Treasure};

/// Print town narration, wrapped to the terminal.
pub fn narrate(text: &str) {
    println!("{}", wrap_narration(text).news_style());
}

/// Describe the town and the hunter's standing.
pub fn look_handler<R: Rng>(town: &Town<'_, Hunter, R>) {
    println!("{}", town.to_string().terrain_style());
    let required = town.terrain().required_item();
    println!("Crossing out of town takes a {}.", required.item_style());
    if town.is_tough() {
        println!("{}", "The locals eye you warily.".italic());
    }
    if let Some(hunter) = town.hunter() {
        println!("You have {} gold.", hunter.gold.to_string().gold_style());
    }
    if !town.latest_news().is_empty() {
        println!("\nLatest news:");
        narrate(town.latest_news());
    }
}

/// List the hunter's kit and treasures.
pub fn inventory_handler<R: Rng>(town: &Town<'_, Hunter, R>) {
    let Some(hunter) = town.hunter() else {
        return;
    };
    println!("{}'s gold: {}", hunter.name(), hunter.gold.to_string().gold_style());
    if hunter.kit.is_empty() {
        println!("Your kit is empty.");
    } else {
        let kit = hunter.kit().map(|item| item.item_style().to_string()).collect::<Vec<_>>();
        println!("Kit: {}", kit.join(", "));
    }
    if hunter.treasures.is_empty() {
        println!("Treasures: none yet");
    } else {
        let found = hunter
            .treasures
            .iter()
            .map(|t| t.as_str().treasure_style().to_string())
            .collect::<Vec<_>>();
        println!("Treasures: {} ({} of {})", found.join(", "), found.len(), Treasure::VALUABLES.len());
    }
}

/// Pass a request to the town's shop and show the shopkeeper's reply.
///
/// # Errors
/// - if no hunter is in town
pub fn shop_handler<R: Rng>(town: &mut Town<'_, Hunter, R>, choice: &str) -> Result<()> {
    let reply = town.enter_shop(choice)?;
    println!("{}", wrap_narration(&reply));
    Ok(())
}

/// Go looking for a fight.
///
/// # Errors
/// - if no hunter is in town
pub fn trouble_handler<R: Rng>(town: &mut Town<'_, Hunter, R>) -> Result<()> {
    let brawl = town.look_for_trouble()?;
    match brawl {
        Brawl::NoTrouble => narrate(town.latest_news()),
        Brawl::Won { .. } => println!("{}", wrap_narration(town.latest_news()).brawl_style()),
        Brawl::Lost { .. } => println!("{}", wrap_narration(town.latest_news()).denied_style()),
    }
    Ok(())
}

/// Dig for treasure and add any new find to the hunter's collection.
pub fn search_handler<R: Rng>(
    town: &mut Town<'_, Hunter, R>,
    spinners: &HashMap<SpinnerType, Spinner<&'static str>>,
) {
    match town.search_for_treasure() {
        None => narrate(spin(
            spinners,
            SpinnerType::SecondSearch,
            "You've already searched this town.",
        )),
        Some(Treasure::Nothing) => narrate("You dig around but come up empty-handed."),
        Some(treasure) => {
            let fresh = town.hunter_mut().is_some_and(|hunter| hunter.collect_treasure(treasure));
            if fresh {
                println!("You found {}!", treasure.as_str().treasure_style());
            } else {
                info!("duplicate treasure {treasure:?} discarded");
                println!(
                    "You found {}, but you already have one. You toss it aside.",
                    treasure.as_str().treasure_style()
                );
            }
        },
    }
}

/// Try to leave town. Returns true if the hunter made it across.
///
/// # Errors
/// - if no hunter is in town
pub fn leave_handler<R: Rng>(town: &mut Town<'_, Hunter, R>) -> Result<bool> {
    let crossing = town.leave_town()?;
    if crossing.succeeded() {
        narrate(town.latest_news());
    } else {
        println!("{}", wrap_narration(town.latest_news()).denied_style());
    }
    Ok(crossing.succeeded())
}
