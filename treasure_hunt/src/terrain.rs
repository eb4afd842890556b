//! Terrain module
//!
//! Every town is ringed by one kind of terrain, and crossing it takes one specific item.

use std::fmt;

use rand::Rng;

/// The kinds of terrain that can surround a town.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TerrainKind {
    Mountains,
    Ocean,
    Plains,
    Desert,
    Jungle,
    Caves,
}
impl TerrainKind {
    pub const ALL: [TerrainKind; 6] = [
        TerrainKind::Mountains,
        TerrainKind::Ocean,
        TerrainKind::Plains,
        TerrainKind::Desert,
        TerrainKind::Jungle,
        TerrainKind::Caves,
    ];

    /// Display name of the terrain.
    pub fn name(self) -> &'static str {
        match self {
            TerrainKind::Mountains => "Mountains",
            TerrainKind::Ocean => "Ocean",
            TerrainKind::Plains => "Plains",
            TerrainKind::Desert => "Desert",
            TerrainKind::Jungle => "Jungle",
            TerrainKind::Caves => "Caves",
        }
    }

    /// The kit item a hunter needs to get across.
    pub fn required_item(self) -> &'static str {
        match self {
            TerrainKind::Mountains => "rope",
            TerrainKind::Ocean => "boat",
            TerrainKind::Plains => "horse",
            TerrainKind::Desert => "water",
            TerrainKind::Jungle => "machete",
            TerrainKind::Caves => "torch",
        }
    }

    /// One-line sound effect played when a brawl breaks out nearby.
    pub fn fight_animation(self) -> &'static str {
        match self {
            TerrainKind::Mountains => "Wind Foosh Foosh",
            TerrainKind::Ocean => "Water glug glug",
            TerrainKind::Plains => "Grass shi shi",
            TerrainKind::Desert => "Tumbleweed tumble tumble",
            TerrainKind::Jungle => "Monkey Ooh Ahh",
            TerrainKind::Caves => "Rock Crack Boom",
        }
    }

    /// Map a uniform draw in [0, 1) onto a terrain kind.
    ///
    /// The bucket edges are fixed, so Caves owns a slightly wider slice than the rest.
    pub fn from_draw(draw: f64) -> TerrainKind {
        if draw < 0.17 {
            TerrainKind::Mountains
        } else if draw < 0.33 {
            TerrainKind::Ocean
        } else if draw < 0.5 {
            TerrainKind::Plains
        } else if draw < 0.66 {
            TerrainKind::Desert
        } else if draw < 0.83 {
            TerrainKind::Jungle
        } else {
            TerrainKind::Caves
        }
    }
}
impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Terrain surrounding a town. Immutable once generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Terrain {
    kind: TerrainKind,
}
impl Terrain {
    pub fn new(kind: TerrainKind) -> Terrain {
        Terrain { kind }
    }

    pub fn kind(&self) -> TerrainKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn required_item(&self) -> &'static str {
        self.kind.required_item()
    }

    pub fn fight_animation(&self) -> &'static str {
        self.kind.fight_animation()
    }
}
impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Roll a fresh terrain from a single uniform draw.
pub fn generate_terrain<R: Rng>(rng: &mut R) -> Terrain {
    Terrain::new(TerrainKind::from_draw(rng.random::<f64>()))
}
