use std::collections::VecDeque;

use log::debug;
use rand::{
    Rng, SeedableRng,
    distr::{Distribution, weighted::WeightedIndex},
    rngs::StdRng,
    seq::SliceRandom,
};

use crate::{
    board::Board,
    grid::Coordinate,
    tile_component::{Biome, Feature},
};

impl Board {
    /// Run the one feature pass a tile gets, finalizing it.
    ///
    /// Ready tiles are left untouched, so sweeping a window twice, or over
    /// a loaded board, changes nothing. Only travellable tiles roll for a
    /// feature; a roll that lands on [`Feature::City`] plans and places the
    /// city's districts.
    pub(crate) fn generate_feature(&mut self, coordinates: Coordinate) {
        let Some(tile) = self.tiles.get_mut(&coordinates) else {
            return;
        };
        if tile.is_ready() {
            return;
        }
        tile.finalize();
        if !tile.is_travellable() {
            return;
        }

        if !self
            .random_number_generator
            .random_bool(self.parameters.feature_chance)
        {
            return;
        }

        let feature = self.pick_feature();
        if let Some(tile) = self.tiles.get_mut(&coordinates) {
            tile.set_feature(feature);
        }

        if feature == Feature::City {
            self.generate_city_districts(coordinates);
        }
    }

    /// Plan and place the districts of the city centered at `coordinates`.
    ///
    /// The number of planned districts is drawn first; the city radius is
    /// sized from it before one slot is reserved for a harbour. The first
    /// queued district is always the market. District tiles are picked by
    /// shuffling the radius square with an engine seeded from the world
    /// seed, so a given seed always lays the same city out the same way.
    fn generate_city_districts(&mut self, coordinates: Coordinate) {
        let mut districts = self.random_number_generator.random_range(
            self.parameters.min_city_districts..=self.parameters.max_city_districts,
        );
        if districts <= 1 {
            return;
        }

        let city_radius = ((districts as f64).sqrt().ceil() / 2.0).floor() as u32;

        let mut wants_harbour = false;
        if districts > 2 {
            wants_harbour = true;
            districts -= 1;
        }

        let mut districts_to_place = VecDeque::with_capacity(districts as usize);
        districts_to_place.push_back(Feature::CityMarket);
        for _ in 1..districts {
            let district = self.pick_district();
            districts_to_place.push_back(district);
        }

        debug!(
            "placing {} districts around the city at {coordinates}",
            districts_to_place.len()
        );

        let mut coordinates_in_radius = coordinates.coordinates_in_radius(city_radius);
        let mut shuffle_engine = StdRng::seed_from_u64(u64::from(self.parameters.seed));
        coordinates_in_radius.shuffle(&mut shuffle_engine);

        for here in coordinates_in_radius {
            if !self.tile_exists(here) {
                // The one place generation cascades past the bootstrap rings.
                // Splotch fill never recurses back into feature placement.
                self.generate_biome(here);
            }

            let eligible = self
                .tiles
                .get(&here)
                .is_some_and(|tile| tile.is_travellable() && tile.feature().is_none());
            if !eligible {
                continue;
            }

            if wants_harbour && self.is_ocean_adjacent(here) {
                if let Some(tile) = self.tiles.get_mut(&here) {
                    tile.set_feature(Feature::CityHarbour);
                }
                wants_harbour = false;
            } else if let Some(district) = districts_to_place.pop_front() {
                if let Some(tile) = self.tiles.get_mut(&here) {
                    tile.set_feature(district);
                }
            }
        }
        // A radius too small, or too built up, simply drops the leftover
        // queue entries: cities may end up with fewer districts than planned.
    }

    fn is_ocean_adjacent(&self, coordinates: Coordinate) -> bool {
        coordinates.adjacent().iter().any(|adjacent| {
            self.tiles
                .get(adjacent)
                .is_some_and(|tile| tile.biome() == Biome::Ocean)
        })
    }

    /// Weighted draw over the feature table.
    fn pick_feature(&mut self) -> Feature {
        let dist = WeightedIndex::new(
            self.parameters
                .feature_weights
                .iter()
                .map(|(_, weight)| *weight),
        )
        .unwrap();
        let index = dist.sample(&mut self.random_number_generator);
        self.parameters.feature_weights[index].0
    }

    /// Weighted draw over the district table.
    fn pick_district(&mut self) -> Feature {
        let dist = WeightedIndex::new(
            self.parameters
                .district_weights
                .iter()
                .map(|(_, weight)| *weight),
        )
        .unwrap();
        let index = dist.sample(&mut self.random_number_generator);
        self.parameters.district_weights[index].0
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        board::Board,
        grid::Coordinate,
        tile_component::{Biome, Feature},
    };

    fn district_features() -> [Feature; 6] {
        [
            Feature::CityMarket,
            Feature::CityHarbour,
            Feature::CityPlaza,
            Feature::CityArena,
            Feature::CityPrison,
            Feature::CityNeighbourhood,
        ]
    }

    #[test]
    fn features_only_appear_on_travellable_tiles() {
        for seed in 0..20 {
            let board = Board::from_seed(seed);
            for (coordinates, tile) in board.tiles() {
                if tile.feature().is_some() {
                    assert!(
                        tile.is_travellable(),
                        "feature on {:?} at {coordinates} (seed {seed})",
                        tile.biome()
                    );
                }
            }
        }
    }

    #[test]
    fn districts_stay_within_reach_of_a_city() {
        // The largest plan is 9 districts, which caps the city radius at 1,
        // so every district must have a city center within that distance.
        let districts = district_features();
        for seed in 0..20 {
            let board = Board::from_seed(seed);
            for (coordinates, tile) in board.tiles() {
                let Some(feature) = tile.feature() else {
                    continue;
                };
                if !districts.contains(&feature) {
                    continue;
                }
                let has_city_nearby = coordinates
                    .coordinates_in_radius(1)
                    .iter()
                    .any(|here| {
                        board
                            .tiles()
                            .get(here)
                            .is_some_and(|tile| tile.feature() == Some(Feature::City))
                    });
                assert!(
                    has_city_nearby,
                    "orphan district {feature:?} at {coordinates} (seed {seed})"
                );
            }
        }
    }

    #[test]
    fn harbours_touch_the_ocean() {
        for seed in 0..20 {
            let board = Board::from_seed(seed);
            for (coordinates, tile) in board.tiles() {
                if tile.feature() != Some(Feature::CityHarbour) {
                    continue;
                }
                let touches_ocean = coordinates.adjacent().iter().any(|adjacent| {
                    board
                        .tiles()
                        .get(adjacent)
                        .is_some_and(|tile| tile.biome() == Biome::Ocean)
                });
                assert!(
                    touches_ocean,
                    "landlocked harbour at {coordinates} (seed {seed})"
                );
            }
        }
    }

    #[test]
    fn same_seed_lays_out_the_same_districts() {
        let first = Board::from_seed(123456);
        let second = Board::from_seed(123456);
        for (coordinates, tile) in first.tiles() {
            assert_eq!(
                second.tiles().get(coordinates).map(|tile| tile.feature()),
                Some(tile.feature()),
                "feature mismatch at {coordinates}"
            );
        }
    }
}
