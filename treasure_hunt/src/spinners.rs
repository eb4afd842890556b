//! Random flavor text for the REPL, built on `gametools` spinners.
use std::collections::HashMap;

use gametools::spinners::{Spinner, Wedge};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpinnerType {
    Farewell,
    SecondSearch,
    UnrecognizedCommand,
}

pub trait SpinnerExt {
    fn from_strs(words: &[&'static str]) -> Self;
}
impl SpinnerExt for Spinner<&'static str> {
    fn from_strs(words: &[&'static str]) -> Self {
        let wedges = words.iter().map(|w| Wedge::new(*w)).collect::<Vec<_>>();
        Spinner::new(wedges)
    }
}

/// All flavor text spinners used during play.
pub fn default_spinners() -> HashMap<SpinnerType, Spinner<&'static str>> {
    let mut spinners = HashMap::new();
    spinners.insert(
        SpinnerType::Farewell,
        Spinner::from_strs(&[
            "The road home is long. Safe travels, hunter.",
            "You hang up your hat. The treasure will keep.",
            "Somewhere, a tumbleweed tumbles in your honor.",
        ]),
    );
    spinners.insert(
        SpinnerType::SecondSearch,
        Spinner::from_strs(&[
            "You've already dug up everything worth finding here.",
            "The locals stare at your holes. Time to move on.",
            "Nothing but the same old dirt.",
        ]),
    );
    spinners.insert(
        SpinnerType::UnrecognizedCommand,
        Spinner::from_strs(&[
            "Didn't quite catch that?",
            "Say again, stranger?",
            "The townsfolk look at you blankly.",
            "That's not something folks do around here.",
        ]),
    );
    spinners
}

/// Spin the selected spinner, or fall back to `default`.
pub fn spin(
    spinners: &HashMap<SpinnerType, Spinner<&'static str>>,
    spin_type: SpinnerType,
    default: &'static str,
) -> &'static str {
    spinners.get(&spin_type).and_then(Spinner::spin).unwrap_or(default)
}
