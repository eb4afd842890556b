//! Shop module
//!
//! Towns hand hunters over to a [`Shop`] without knowing how trading works. The
//! [`GeneralStore`] is the stock implementation: a fixed price list, buying at list price
//! and selling back at a discount.

use std::collections::BTreeMap;
use std::fmt::Write;

use log::info;

use crate::config::ShopConfig;
use crate::hunter::Traveler;

/// A place a traveler can trade in.
pub trait Shop {
    /// Carry out `choice` on behalf of `traveler`, returning the shopkeeper's narration.
    fn enter(&mut self, traveler: &mut dyn Traveler, choice: &str) -> String;
}

/// Kinds of requests a shopper can make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopChoice {
    List,
    Buy(String),
    Sell(String),
    Unknown(String),
}

/// Parse a shopper's request. Item names are lowercased.
pub fn parse_shop_choice(choice: &str) -> ShopChoice {
    let words: Vec<String> = choice.split_whitespace().map(str::to_lowercase).collect();
    let words: Vec<&str> = words.iter().map(String::as_str).collect();
    match words.as_slice() {
        [] | ["list" | "browse"] => ShopChoice::List,
        ["buy" | "b", item] => ShopChoice::Buy((*item).to_string()),
        ["sell" | "s", item] => ShopChoice::Sell((*item).to_string()),
        _ => ShopChoice::Unknown(choice.trim().to_string()),
    }
}

/// Fixed-price store selling the items needed to cross terrain.
#[derive(Debug, Clone)]
pub struct GeneralStore {
    prices: BTreeMap<String, u32>,
    sell_ratio: f64,
}
impl GeneralStore {
    pub fn new(prices: BTreeMap<String, u32>, sell_ratio: f64) -> GeneralStore {
        GeneralStore { prices, sell_ratio }
    }

    pub fn from_config(config: &ShopConfig) -> GeneralStore {
        GeneralStore::new(config.prices.clone(), config.sell_ratio)
    }

    pub fn price(&self, item: &str) -> Option<u32> {
        self.prices.get(item).copied()
    }

    /// What the store pays for an item it stocks. Rounds down.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sell_price(&self, item: &str) -> Option<u32> {
        self.price(item)
            .map(|price| (f64::from(price) * self.sell_ratio).floor() as u32)
    }

    fn price_list(&self) -> String {
        let mut list = String::from("Welcome to the General Store! Here's what we've got:");
        for (item, price) in &self.prices {
            let _ = write!(list, "\n  {item}: {price} gold");
        }
        list
    }

    fn buy(&self, traveler: &mut dyn Traveler, item: &str) -> String {
        let Some(price) = self.price(item) else {
            return format!("We don't carry any {item} here.");
        };
        if traveler.has_item(item) {
            return format!("You've already got a {item}, {}.", traveler.name());
        }
        let cost = i32::try_from(price).unwrap_or(i32::MAX);
        if traveler.gold() < cost {
            info!("{} can't afford a {item} ({price} gold)", traveler.name());
            return format!("A {item} costs {price} gold. Come back when you can pay for it!");
        }
        traveler.change_gold(-cost);
        traveler.add_item(item);
        info!("{} bought a {item} for {price} gold", traveler.name());
        format!("Ye' got yerself a {item}. Come again soon.")
    }

    fn sell(&self, traveler: &mut dyn Traveler, item: &str) -> String {
        if !traveler.has_item(item) {
            return format!("You don't have a {item} to sell.");
        }
        let Some(payout) = self.sell_price(item) else {
            return format!("No use to me, that {item}. Keep it.");
        };
        traveler.remove_item(item);
        traveler.change_gold(i32::try_from(payout).unwrap_or(i32::MAX));
        info!("{} sold a {item} for {payout} gold", traveler.name());
        format!("Pleasure doin' business with you. Here's {payout} gold for your {item}.")
    }
}
impl Shop for GeneralStore {
    fn enter(&mut self, traveler: &mut dyn Traveler, choice: &str) -> String {
        match parse_shop_choice(choice) {
            ShopChoice::List => self.price_list(),
            ShopChoice::Buy(item) => self.buy(traveler, &item),
            ShopChoice::Sell(item) => self.sell(traveler, &item),
            ShopChoice::Unknown(request) => {
                format!("\"{request}\"? Buy or sell, stranger. I ain't got all day.")
            },
        }
    }
}
