//! Hunter -- module for the player character
use crate::terrain::Terrain;
use crate::town::Treasure;

use log::info;
use std::collections::BTreeSet;

/// What a town needs from whoever is passing through it.
pub trait Traveler {
    fn name(&self) -> &str;
    fn gold(&self) -> i32;
    /// Adjust the gold balance. Negative balances are allowed.
    fn change_gold(&mut self, delta: i32);
    fn has_item(&self, item: &str) -> bool;
    /// Put an item in the kit. Returns false if it was already there.
    fn add_item(&mut self, item: &str) -> bool;
    fn remove_item(&mut self, item: &str);

    /// Whether the traveler carries what it takes to cross `terrain`.
    fn can_cross(&self, terrain: &Terrain) -> bool {
        self.has_item(terrain.required_item())
    }
}

#[derive(Debug, Clone)]
pub struct Hunter {
    pub name: String,
    pub gold: i32,
    pub kit: BTreeSet<String>,
    pub treasures: BTreeSet<Treasure>,
}
impl Default for Hunter {
    fn default() -> Hunter {
        Self {
            name: "default".into(),
            gold: 0,
            kit: BTreeSet::default(),
            treasures: BTreeSet::default(),
        }
    }
}
impl Hunter {
    pub fn new(name: impl Into<String>, gold: i32) -> Hunter {
        Hunter {
            name: name.into(),
            gold,
            ..Hunter::default()
        }
    }

    /// Iterate over kit items in alphabetical order.
    pub fn kit(&self) -> impl Iterator<Item = &str> {
        self.kit.iter().map(String::as_str)
    }

    /// Add a treasure to the collection.
    ///
    /// Returns true only for a real treasure the hunter didn't have yet.
    pub fn collect_treasure(&mut self, treasure: Treasure) -> bool {
        if treasure == Treasure::Nothing {
            return false;
        }
        let fresh = self.treasures.insert(treasure);
        if fresh {
            info!("{} collected {treasure:?} ({} of 3)", self.name, self.treasures.len());
        }
        fresh
    }

    /// True once Diamond, Gold and Jewelery are all collected.
    pub fn has_all_treasures(&self) -> bool {
        Treasure::VALUABLES.iter().all(|t| self.treasures.contains(t))
    }

    pub fn is_broke(&self) -> bool {
        self.gold < 0
    }
}
impl Traveler for Hunter {
    fn name(&self) -> &str {
        &self.name
    }

    fn gold(&self) -> i32 {
        self.gold
    }

    fn change_gold(&mut self, delta: i32) {
        self.gold = self.gold.saturating_add(delta);
    }

    fn has_item(&self, item: &str) -> bool {
        self.kit.contains(item)
    }

    fn add_item(&mut self, item: &str) -> bool {
        self.kit.insert(item.to_string())
    }

    fn remove_item(&mut self, item: &str) {
        self.kit.remove(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::TerrainKind;

    #[test]
    fn gold_can_go_negative() {
        let mut hunter = Hunter::new("Ivan", 3);
        hunter.change_gold(-5);
        assert_eq!(hunter.gold(), -2);
        assert!(hunter.is_broke());
    }

    #[test]
    fn crossing_follows_kit_contents() {
        let mut hunter = Hunter::new("Ivan", 0);
        let caves = Terrain::new(TerrainKind::Caves);
        assert!(!hunter.can_cross(&caves));
        assert!(hunter.add_item("torch"));
        assert!(!hunter.add_item("torch"));
        assert!(hunter.can_cross(&caves));
        hunter.remove_item("torch");
        assert!(!hunter.can_cross(&caves));
    }

    #[test]
    fn empty_finds_do_not_count_as_treasure() {
        let mut hunter = Hunter::new("Ivan", 0);
        assert!(!hunter.collect_treasure(Treasure::Nothing));
        assert!(hunter.collect_treasure(Treasure::Gold));
        assert!(!hunter.collect_treasure(Treasure::Gold));
        assert!(hunter.collect_treasure(Treasure::Diamond));
        assert!(!hunter.has_all_treasures());
        assert!(hunter.collect_treasure(Treasure::Jewelery));
        assert!(hunter.has_all_treasures());
    }
}
