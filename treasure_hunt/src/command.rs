//! Command module
//!
//! Describes possible commands used during gameplay.
use variantly::Variantly;

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    Buy(String),
    Help,
    Inventory,
    Leave,
    Look,
    LookForTrouble,
    Quit,
    Search,
    Sell(String),
    Shop,
    Unknown,
}

/// Parses an input string and returns a corresponding `Command` if recognized.
pub fn parse_command(input: &str) -> Command {
    let lowered = input.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    match words.as_slice() {
        ["look"] | ["status"] | ["look", "around"] => Command::Look,
        ["inventory" | "inv" | "kit"] => Command::Inventory,
        ["shop" | "store" | "list"] | ["enter" | "visit", "shop" | "store"] => Command::Shop,
        ["buy", item] | ["buy", "a", item] => Command::Buy((*item).to_string()),
        ["sell", item] | ["sell", "my", item] => Command::Sell((*item).to_string()),
        ["fight" | "brawl" | "trouble"] | ["look", "for", "trouble"] => Command::LookForTrouble,
        ["search" | "dig"] | ["search", "for", "treasure"] => Command::Search,
        ["leave" | "travel" | "move"] | ["leave", "town"] => Command::Leave,
        ["help" | "?"] => Command::Help,
        ["quit" | "exit"] => Command::Quit,
        _ => Command::Unknown,
    }
}
