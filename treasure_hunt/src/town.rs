//! Town Module
//!
//! A [`Town`] is a single visit: it rolls its surrounding terrain and toughness when built,
//! waits for a hunter to arrive, and then resolves everything the hunter tries to do there
//! (brawling, digging for treasure, shopping, and finally crossing the terrain to leave).
//!
//! Every action returns a value describing what happened. The narration of the most recent
//! action is also kept around and can be read back with [`Town::latest_news`].

use std::fmt;

use log::{debug, info};
use rand::Rng;
use thiserror::Error;

use crate::config::TownConfig;
use crate::hunter::Traveler;
use crate::shop::Shop;
use crate::terrain::{Terrain, TerrainKind, generate_terrain};

/// Gold awarded for every brawl when cheat mode is on.
pub const CHEAT_STAKE: i32 = 100;
/// Largest stake a regular brawl can be fought for.
pub const MAX_STAKE: i32 = 10;

const TOUGH_NO_TROUBLE_CHANCE: f64 = 0.66;
const MILD_NO_TROUBLE_CHANCE: f64 = 0.33;
const BREAK_CHANCE: f64 = 0.5;

/// Misuse of a `Town` by its driver.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TownError {
    #[error("no hunter has arrived in town yet")]
    NoHunter,
}

/// Things that can turn up when searching a town for treasure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Treasure {
    Diamond,
    Gold,
    Jewelery,
    Nothing,
}
impl Treasure {
    /// The treasures worth collecting.
    pub const VALUABLES: [Treasure; 3] = [Treasure::Diamond, Treasure::Gold, Treasure::Jewelery];
    const ALL: [Treasure; 4] = [
        Treasure::Diamond,
        Treasure::Gold,
        Treasure::Jewelery,
        Treasure::Nothing,
    ];

    /// Name of the find; an empty string when nothing turned up.
    pub fn as_str(self) -> &'static str {
        match self {
            Treasure::Diamond => "Diamond",
            Treasure::Gold => "Gold",
            Treasure::Jewelery => "Jewelery",
            Treasure::Nothing => "",
        }
    }
}
impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of trying to leave town across its terrain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Crossing {
    Crossed {
        item: &'static str,
        terrain: TerrainKind,
        broke: bool,
    },
    Blocked {
        item: &'static str,
        hunter: String,
    },
}
impl Crossing {
    /// True if the hunter made it out of town.
    pub fn succeeded(&self) -> bool {
        matches!(self, Crossing::Crossed { .. })
    }
}
impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Crossing::Crossed { item, terrain, broke } => {
                write!(f, "You used your {item} to cross the {terrain}.")?;
                if *broke {
                    write!(f, "\nUnfortunately, your {item} broke.")?;
                }
                Ok(())
            },
            Crossing::Blocked { item, hunter } => {
                write!(f, "You can't leave town, {hunter}. You don't have a {item}.")
            },
        }
    }
}

/// Result of looking for trouble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Brawl {
    NoTrouble,
    Won { stake: i32, animation: &'static str },
    Lost { stake: i32, animation: &'static str },
}
impl Brawl {
    /// Change to the hunter's purse caused by this outcome.
    pub fn gold_delta(&self) -> i32 {
        match self {
            Brawl::NoTrouble => 0,
            Brawl::Won { stake, .. } => *stake,
            Brawl::Lost { stake, .. } => -*stake,
        }
    }
}
impl fmt::Display for Brawl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Brawl::NoTrouble => f.write_str("You couldn't find any trouble"),
            Brawl::Won { stake, animation } => write!(
                f,
                "You want trouble, stranger!  You got it!\n{animation}\n\
                 Okay, stranger! You proved yer mettle. Here, take my gold.\n\
                 You won the brawl and receive {stake} gold."
            ),
            Brawl::Lost { stake, animation } => write!(
                f,
                "You want trouble, stranger!  You got it!\n{animation}\n\
                 That'll teach you to go lookin' fer trouble in MY town! Now pay up!\n\
                 You lost the brawl and pay {stake} gold."
            ),
        }
    }
}

/// State of a single visit to a town.
///
/// The town borrows its hunter and shop for as long as the visit lasts. All randomness
/// comes from the generator handed in at construction.
pub struct Town<'a, H: Traveler, R: Rng> {
    hunter: Option<&'a mut H>,
    shop: &'a mut dyn Shop,
    terrain: Terrain,
    tough: bool,
    searched_for_treasure: bool,
    last_message: String,
    cheat_mode: bool,
    rng: R,
}
impl<'a, H: Traveler, R: Rng> Town<'a, H, R> {
    /// Build a town, rolling its terrain and then its toughness.
    ///
    /// `toughness` is the probability (0.0 - 1.0) that the town turns out to be a tough one.
    pub fn new(shop: &'a mut dyn Shop, toughness: f64, cheat_mode: bool, mut rng: R) -> Self {
        let terrain = generate_terrain(&mut rng);
        let tough = rng.random::<f64>() < toughness;
        info!(
            "new town surrounded by {} (tough: {tough}, cheat mode: {cheat_mode})",
            terrain.name()
        );
        Town {
            hunter: None,
            shop,
            terrain,
            tough,
            searched_for_treasure: false,
            last_message: String::new(),
            cheat_mode,
            rng,
        }
    }

    /// Build a town using configured toughness and cheat settings.
    pub fn from_config(shop: &'a mut dyn Shop, config: &TownConfig, rng: R) -> Self {
        Self::new(shop, config.toughness, config.cheat_mode, rng)
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn is_tough(&self) -> bool {
        self.tough
    }

    pub fn cheat_mode(&self) -> bool {
        self.cheat_mode
    }

    pub fn has_searched_for_treasure(&self) -> bool {
        self.searched_for_treasure
    }

    /// The hunter currently in town, if one has arrived.
    pub fn hunter(&self) -> Option<&H> {
        self.hunter.as_deref()
    }

    pub fn hunter_mut(&mut self) -> Option<&mut H> {
        self.hunter.as_deref_mut()
    }

    /// Narration of the most recent action.
    pub fn latest_news(&self) -> &str {
        &self.last_message
    }

    /// Chance that looking for trouble comes up empty. Also the bar a fight roll must clear
    /// to be won, so a tough town picks fewer fights and wins fewer of them.
    pub fn no_trouble_chance(&self) -> f64 {
        if self.tough {
            TOUGH_NO_TROUBLE_CHANCE
        } else {
            MILD_NO_TROUBLE_CHANCE
        }
    }

    /// Welcome a hunter into town. A later arrival replaces the earlier one.
    pub fn arrive(&mut self, hunter: &'a mut H) -> &str {
        let tone = if self.tough {
            "It's pretty rough around here, so watch yourself."
        } else {
            "We're just a sleepy little town with mild mannered folk."
        };
        info!("{} arrived in a town surrounded by {}", hunter.name(), self.terrain.name());
        self.last_message = format!("Welcome to town, {}.\n{tone}", hunter.name());
        self.hunter = Some(hunter);
        &self.last_message
    }

    /// Dig around for treasure. Only the first search of a visit can find anything.
    pub fn search_for_treasure(&mut self) -> Option<Treasure> {
        if self.searched_for_treasure {
            debug!("treasure search repeated in the same town; nothing to find");
            return None;
        }
        self.searched_for_treasure = true;
        let treasure = Treasure::ALL[self.rng.random_range(0..Treasure::ALL.len())];
        info!("treasure search turned up {treasure:?}");
        Some(treasure)
    }

    /// Try to cross the terrain out of town.
    ///
    /// Crossing takes the terrain's required item, which may break along the way.
    ///
    /// # Errors
    /// - `TownError::NoHunter` if nobody has arrived yet
    pub fn leave_town(&mut self) -> Result<Crossing, TownError> {
        let hunter = self.hunter.as_deref_mut().ok_or(TownError::NoHunter)?;
        let item = self.terrain.required_item();

        let crossing = if hunter.can_cross(&self.terrain) {
            let broke = self.rng.random::<f64>() < BREAK_CHANCE;
            if broke {
                hunter.remove_item(item);
            }
            info!(
                "{} crossed the {} using a {item} (broke: {broke})",
                hunter.name(),
                self.terrain.name()
            );
            Crossing::Crossed {
                item,
                terrain: self.terrain.kind(),
                broke,
            }
        } else {
            info!("{} denied leaving town: missing {item}", hunter.name());
            Crossing::Blocked {
                item,
                hunter: hunter.name().to_string(),
            }
        };

        self.last_message = crossing.to_string();
        Ok(crossing)
    }

    /// Hand the hunter and their choice over to the town's shop.
    ///
    /// Returns the shop's own narration; the town's news is left alone.
    ///
    /// # Errors
    /// - `TownError::NoHunter` if nobody has arrived yet
    pub fn enter_shop(&mut self, choice: &str) -> Result<String, TownError> {
        let hunter = self.hunter.as_deref_mut().ok_or(TownError::NoHunter)?;
        Ok(self.shop.enter(hunter, choice))
    }

    /// Go looking for a fight.
    ///
    /// Tough towns turn up trouble less often but their fights are harder to win.
    ///
    /// # Errors
    /// - `TownError::NoHunter` if nobody has arrived yet
    pub fn look_for_trouble(&mut self) -> Result<Brawl, TownError> {
        let no_trouble_chance = self.no_trouble_chance();
        let hunter = self.hunter.as_deref_mut().ok_or(TownError::NoHunter)?;

        let brawl = if self.rng.random::<f64>() <= no_trouble_chance {
            Brawl::NoTrouble
        } else {
            let animation = self.terrain.fight_animation();
            let stake = self.rng.random_range(1..=MAX_STAKE);
            if self.cheat_mode {
                Brawl::Won {
                    stake: CHEAT_STAKE,
                    animation,
                }
            } else if self.rng.random::<f64>() > no_trouble_chance {
                Brawl::Won { stake, animation }
            } else {
                Brawl::Lost { stake, animation }
            }
        };

        let delta = brawl.gold_delta();
        if delta != 0 {
            hunter.change_gold(delta);
        }
        info!("{} looked for trouble: {brawl:?}", hunter.name());

        self.last_message = brawl.to_string();
        Ok(brawl)
    }
}
impl<H: Traveler, R: Rng> fmt::Display for Town<'_, H, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "This nice little town is surrounded by {}.", self.terrain.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hunter::Hunter;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Shop stand-in that records every choice it is handed.
    #[derive(Default)]
    struct LedgerShop {
        visits: Vec<(String, String)>,
    }
    impl Shop for LedgerShop {
        fn enter(&mut self, traveler: &mut dyn Traveler, choice: &str) -> String {
            self.visits.push((traveler.name().to_string(), choice.to_string()));
            traveler.change_gold(-1);
            format!("ledger: {choice}")
        }
    }

    #[test]
    fn hunter_actions_before_arrival_are_refused() {
        let mut shop = LedgerShop::default();
        let mut town: Town<'_, Hunter, _> = Town::new(&mut shop, 0.5, false, StdRng::seed_from_u64(1));
        assert_eq!(town.leave_town(), Err(TownError::NoHunter));
        assert_eq!(town.look_for_trouble(), Err(TownError::NoHunter));
        assert_eq!(town.enter_shop("buy rope"), Err(TownError::NoHunter));
        assert!(town.latest_news().is_empty());
        // digging needs nobody
        assert!(town.search_for_treasure().is_some());
    }

    #[test]
    fn greeting_depends_on_toughness() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..20 {
            let mut shop = LedgerShop::default();
            let mut hunter = Hunter::new("Ivan", 10);
            let mut town = Town::new(&mut shop, 1.0, false, &mut rng);
            assert!(town.is_tough());
            let greeting = town.arrive(&mut hunter).to_string();
            assert_eq!(
                greeting,
                "Welcome to town, Ivan.\nIt's pretty rough around here, so watch yourself."
            );
            assert_eq!(town.latest_news(), greeting);
        }
        for _ in 0..20 {
            let mut shop = LedgerShop::default();
            let mut hunter = Hunter::new("Ivan", 10);
            let mut town = Town::new(&mut shop, 0.0, false, &mut rng);
            assert!(!town.is_tough());
            assert!(town.arrive(&mut hunter).ends_with("mild mannered folk."));
        }
    }

    #[test]
    fn treasure_search_is_one_shot() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let mut shop = LedgerShop::default();
            let mut town: Town<'_, Hunter, _> = Town::new(&mut shop, 0.5, false, &mut rng);
            let first = town.search_for_treasure();
            assert!(matches!(
                first,
                Some(Treasure::Diamond | Treasure::Gold | Treasure::Jewelery | Treasure::Nothing)
            ));
            assert!(town.has_searched_for_treasure());
            assert_eq!(town.search_for_treasure(), None);
            assert_eq!(town.search_for_treasure(), None);
        }
    }

    #[test]
    fn leaving_with_required_item_crosses_terrain() {
        let mut rng = StdRng::seed_from_u64(4);
        let trials = 4_000;
        let mut breaks = 0;
        for _ in 0..trials {
            let mut shop = LedgerShop::default();
            let mut hunter = Hunter::new("Ivan", 10);
            let mut town = Town::new(&mut shop, 0.5, false, &mut rng);
            let item = town.terrain().required_item();
            let terrain_name = town.terrain().name();
            hunter.add_item(item);
            town.arrive(&mut hunter);

            let crossing = town.leave_town().unwrap();
            assert!(crossing.succeeded());
            let news = town.latest_news();
            assert!(news.contains(item));
            assert!(news.contains(terrain_name));

            let Crossing::Crossed { broke, .. } = crossing else {
                panic!("expected a crossing, got {crossing:?}");
            };
            let still_has_item = town.hunter().unwrap().has_item(item);
            assert_eq!(still_has_item, !broke);
            if broke {
                breaks += 1;
                assert!(news.ends_with(&format!("Unfortunately, your {item} broke.")));
            }
        }
        let rate = f64::from(breaks) / f64::from(trials);
        assert!((rate - 0.5).abs() < 0.04, "break rate {rate}");
    }

    #[test]
    fn leaving_without_required_item_is_blocked() {
        let mut shop = LedgerShop::default();
        let mut hunter = Hunter::new("Ivan", 10);
        let mut town = Town::new(&mut shop, 0.5, false, StdRng::seed_from_u64(5));
        let item = town.terrain().required_item();
        town.arrive(&mut hunter);

        let crossing = town.leave_town().unwrap();
        assert!(!crossing.succeeded());
        assert_eq!(
            town.latest_news(),
            format!("You can't leave town, Ivan. You don't have a {item}.")
        );
    }

    #[test]
    fn cheat_mode_always_wins_one_hundred() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut shop = LedgerShop::default();
        let mut hunter = Hunter::new("Ivan", 0);
        let mut town = Town::new(&mut shop, 0.0, true, &mut rng);
        town.arrive(&mut hunter);

        let mut fights = 0;
        for _ in 0..300 {
            let before = town.hunter().unwrap().gold();
            let brawl = town.look_for_trouble().unwrap();
            let after = town.hunter().unwrap().gold();
            match brawl {
                Brawl::NoTrouble => {
                    assert_eq!(after, before);
                    assert_eq!(town.latest_news(), "You couldn't find any trouble");
                },
                Brawl::Won { stake, .. } => {
                    fights += 1;
                    assert_eq!(stake, CHEAT_STAKE);
                    assert_eq!(after - before, 100);
                    assert!(town.latest_news().contains("You won the brawl"));
                },
                Brawl::Lost { .. } => panic!("lost a brawl in cheat mode"),
            }
        }
        assert!(fights > 0);
    }

    #[test]
    fn stakes_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut shop = LedgerShop::default();
        let mut hunter = Hunter::new("Ivan", 0);
        let mut town = Town::new(&mut shop, 0.5, false, &mut rng);
        town.arrive(&mut hunter);
        let animation = town.terrain().fight_animation();

        for _ in 0..500 {
            let before = town.hunter().unwrap().gold();
            let brawl = town.look_for_trouble().unwrap();
            let change = town.hunter().unwrap().gold() - before;
            assert_eq!(change, brawl.gold_delta());
            match brawl {
                Brawl::NoTrouble => assert_eq!(change, 0),
                Brawl::Won { stake, .. } => {
                    assert!((1..=MAX_STAKE).contains(&stake));
                    assert!(town.latest_news().contains(animation));
                },
                Brawl::Lost { stake, .. } => {
                    assert!((1..=MAX_STAKE).contains(&stake));
                    assert!(town.latest_news().contains("You lost the brawl"));
                },
            }
        }
    }

    #[test]
    fn mild_towns_find_trouble_more_often() {
        let mut rng = StdRng::seed_from_u64(8);
        let rounds = 3_000;
        let mut found = [0_u32; 2];
        for (slot, toughness) in [(0, 0.0), (1, 1.0)] {
            let mut shop = LedgerShop::default();
            let mut hunter = Hunter::new("Ivan", 0);
            let mut town = Town::new(&mut shop, toughness, false, &mut rng);
            town.arrive(&mut hunter);
            for _ in 0..rounds {
                if town.look_for_trouble().unwrap() != Brawl::NoTrouble {
                    found[slot] += 1;
                }
            }
        }
        let mild = f64::from(found[0]) / f64::from(rounds);
        let tough = f64::from(found[1]) / f64::from(rounds);
        assert!((mild - 0.67).abs() < 0.04, "mild {mild}");
        assert!((tough - 0.34).abs() < 0.04, "tough {tough}");
    }

    #[test]
    fn tough_town_fights_are_harder_to_win() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut tallies = [(0_u32, 0_u32); 2];
        for (slot, toughness) in [(0, 0.0), (1, 1.0)] {
            let mut shop = LedgerShop::default();
            let mut hunter = Hunter::new("Ivan", 0);
            let mut town = Town::new(&mut shop, toughness, false, &mut rng);
            town.arrive(&mut hunter);
            for _ in 0..6_000 {
                let before = town.hunter().unwrap().gold();
                let brawl = town.look_for_trouble().unwrap();
                let change = town.hunter().unwrap().gold() - before;
                match brawl {
                    Brawl::NoTrouble => {},
                    Brawl::Won { stake, .. } => {
                        tallies[slot].0 += 1;
                        assert!(change > 0);
                        assert_eq!(change, stake);
                        assert!(town.latest_news().contains("You won the brawl"));
                        assert!(town.latest_news().ends_with(&format!("receive {stake} gold.")));
                    },
                    Brawl::Lost { stake, .. } => {
                        tallies[slot].1 += 1;
                        assert_eq!(change, -stake);
                        assert!(town.latest_news().contains("You lost the brawl"));
                    },
                }
            }
        }
        let win_rate = |(won, lost): (u32, u32)| f64::from(won) / f64::from(won + lost);
        let mild = win_rate(tallies[0]);
        let tough = win_rate(tallies[1]);
        assert!((mild - 0.67).abs() < 0.05, "mild win rate {mild}");
        assert!((tough - 0.34).abs() < 0.05, "tough win rate {tough}");
    }

    #[test]
    fn shop_visits_are_delegated_without_news() {
        let mut shop = LedgerShop::default();
        let mut hunter = Hunter::new("Ivan", 10);
        {
            let mut town = Town::new(&mut shop, 0.0, false, StdRng::seed_from_u64(9));
            town.arrive(&mut hunter);
            let news = town.latest_news().to_string();
            assert_eq!(town.enter_shop("buy rope").unwrap(), "ledger: buy rope");
            assert_eq!(town.latest_news(), news);
        }
        assert_eq!(hunter.gold, 9);
        assert_eq!(shop.visits, vec![("Ivan".to_string(), "buy rope".to_string())]);
    }

    #[test]
    fn town_describes_its_terrain() {
        let mut shop = LedgerShop::default();
        let town: Town<'_, Hunter, _> = Town::new(&mut shop, 0.0, false, StdRng::seed_from_u64(10));
        assert_eq!(
            town.to_string(),
            format!("This nice little town is surrounded by {}.", town.terrain().name())
        );
    }
}
