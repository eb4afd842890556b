#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const HUNT_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod config;
pub mod data_paths;
pub mod hunter;
pub mod repl;
pub mod shop;
pub mod spinners;
pub mod style;
pub mod terrain;
pub mod town;

// Re-exports for convenience
pub use config::{GameConfig, load_config};
pub use hunter::{Hunter, Traveler};
pub use repl::run_repl;
pub use shop::{GeneralStore, Shop};
pub use terrain::{Terrain, TerrainKind, generate_terrain};
pub use town::{Brawl, Crossing, Town, TownError, Treasure};
