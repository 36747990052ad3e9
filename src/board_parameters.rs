use std::time::{SystemTime, UNIX_EPOCH};

use crate::tile_component::{Biome, Feature};

/// Tunables for board generation.
///
/// The weight tables do not need to sum to 1; a weighted draw picks a key
/// with probability proportional to its weight.
#[derive(Debug, Clone)]
pub struct BoardParameters {
    /// World seed. All generation, including every city's district shuffle,
    /// derives from this value.
    pub seed: u32,
    /// Edge length of the square window that must be fully generated around
    /// the current position. Must be odd.
    pub view_size: u32,
    /// Minimum half-extent of a biome splotch.
    pub min_biome_size: i32,
    /// Maximum half-extent of a biome splotch.
    pub max_biome_size: i32,
    /// Relative chance of each biome to be drawn for a new splotch.
    pub biome_weights: Vec<(Biome, f64)>,
    /// Chance for a travellable tile to carry any feature at all.
    pub feature_chance: f64,
    /// Relative chance of each feature once a feature roll succeeds.
    pub feature_weights: Vec<(Feature, f64)>,
    /// Minimum number of districts a city will plan, the city tile included.
    pub min_city_districts: u32,
    /// Maximum number of districts a city will plan.
    pub max_city_districts: u32,
    /// Relative chance of each district beyond the guaranteed market.
    pub district_weights: Vec<(Feature, f64)>,
}

impl BoardParameters {
    /// Default parameters with an explicit seed.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// The Chebyshev radius of the generated view window.
    pub fn view_radius(&self) -> u32 {
        self.view_size / 2
    }
}

impl Default for BoardParameters {
    fn default() -> Self {
        Self {
            seed: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("system clock is before the Unix epoch")
                .as_millis() as u32,
            view_size: 21,
            min_biome_size: 2,
            max_biome_size: 5,
            biome_weights: vec![
                (Biome::Plains, 0.25),
                (Biome::Forest, 0.35),
                (Biome::Ocean, 0.2),
                (Biome::Desert, 0.1),
                (Biome::Mountains, 0.1),
            ],
            feature_chance: 0.05,
            feature_weights: vec![
                (Feature::City, 0.10),
                (Feature::Village, 0.20),
                (Feature::Camp, 0.25),
                (Feature::LoneHouse, 0.1),
                (Feature::Cave, 0.15),
                (Feature::Lake, 0.20),
            ],
            min_city_districts: 1,
            max_city_districts: 9,
            district_weights: vec![
                (Feature::CityMarket, 0.1),
                (Feature::CityPlaza, 0.3),
                (Feature::CityArena, 0.1),
                (Feature::CityPrison, 0.3),
                (Feature::CityNeighbourhood, 0.2),
            ],
        }
    }
}
