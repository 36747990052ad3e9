use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// A point of interest placed on a travellable tile. A tile with no point of
/// interest stores `None`; the `City*` variants are districts that only
/// appear inside a city's radius.
#[derive(Enum, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug)]
pub enum Feature {
    City,
    CityMarket,
    CityHarbour,
    CityPlaza,
    CityArena,
    CityPrison,
    CityNeighbourhood,
    Village,
    Camp,
    LoneHouse,
    Cave,
    Lake,
}

impl Feature {
    pub fn name(&self) -> &str {
        match self {
            Feature::City => "City",
            Feature::CityMarket => "City Market",
            Feature::CityHarbour => "City Harbour",
            Feature::CityPlaza => "City Plaza",
            Feature::CityArena => "City Arena",
            Feature::CityPrison => "City Prison",
            Feature::CityNeighbourhood => "City Neighbourhood",
            Feature::Village => "Village",
            Feature::Camp => "Camp",
            Feature::LoneHouse => "Lone House",
            Feature::Cave => "Cave",
            Feature::Lake => "Lake",
        }
    }
}

/// Feature filter used by path queries. Never stored on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureQuery {
    /// Matches any tile that carries a feature.
    Any,
    /// Matches only tiles carrying this exact feature.
    Is(Feature),
}

impl FeatureQuery {
    pub fn matches(&self, feature: Option<Feature>) -> bool {
        match self {
            FeatureQuery::Any => feature.is_some(),
            FeatureQuery::Is(wanted) => feature == Some(*wanted),
        }
    }
}
