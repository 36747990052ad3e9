use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// Travel cost assigned to biomes that cannot be entered on foot.
pub const IMPASSABLE_TRAVEL_COST: u32 = 1000;

#[derive(Enum, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug)]
pub enum Biome {
    Plains,
    Forest,
    Ocean,
    Desert,
    Mountains,
}

impl Biome {
    pub fn name(&self) -> &str {
        match self {
            Biome::Plains => "Plains",
            Biome::Forest => "Forest",
            Biome::Ocean => "Ocean",
            Biome::Desert => "Desert",
            Biome::Mountains => "Mountains",
        }
    }

    /// Cost of entering a tile of this biome. A pure function of the biome:
    /// tiles cache it at insertion but never diverge from this table.
    pub const fn travel_cost(&self) -> u32 {
        match self {
            Biome::Plains => 1,
            Biome::Forest => 2,
            Biome::Desert => 3,
            Biome::Ocean | Biome::Mountains => IMPASSABLE_TRAVEL_COST,
        }
    }

    pub const fn is_travellable(&self) -> bool {
        self.travel_cost() < IMPASSABLE_TRAVEL_COST
    }
}
