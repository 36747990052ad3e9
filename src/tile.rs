use serde::{Deserialize, Serialize};

use crate::tile_component::{Biome, Feature, IMPASSABLE_TRAVEL_COST};

/// A single generated tile of the board.
///
/// A tile is a plain value: once its biome and feature are finalized it is
/// never rewritten. The travel cost is cached from the biome table at
/// construction so that serialized boards carry it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    #[serde(rename = "Ready")]
    ready: bool,
    #[serde(rename = "Biome")]
    biome: Biome,
    #[serde(rename = "Feature")]
    feature: Option<Feature>,
    #[serde(rename = "Travel Cost")]
    travel_cost: u32,
}

impl Tile {
    /// Create a new tile of the given biome, with no feature.
    ///
    /// The tile starts as a placeholder: splotch fill inserts many tiles at
    /// once, and each becomes ready when its one feature pass has run. A
    /// tile generated directly is finalized in the same step.
    pub fn new(biome: Biome) -> Self {
        Self {
            ready: false,
            biome,
            feature: None,
            travel_cost: biome.travel_cost(),
        }
    }

    /// Mark the tile's generation as finished. A ready tile is never
    /// rewritten.
    pub(crate) fn finalize(&mut self) {
        self.ready = true;
    }

    pub fn biome(&self) -> Biome {
        self.biome
    }

    pub fn feature(&self) -> Option<Feature> {
        self.feature
    }

    pub(crate) fn set_feature(&mut self, feature: Feature) {
        self.feature = Some(feature);
        self.ready = true;
    }

    pub fn travel_cost(&self) -> u32 {
        self.travel_cost
    }

    pub fn is_travellable(&self) -> bool {
        self.travel_cost < IMPASSABLE_TRAVEL_COST
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

#[cfg(test)]
mod tests {
    use super::Tile;
    use crate::tile_component::{Biome, Feature};

    #[test]
    fn new_tile_caches_biome_travel_cost() {
        let tile = Tile::new(Biome::Forest);
        assert_eq!(tile.biome(), Biome::Forest);
        assert_eq!(tile.feature(), None);
        assert_eq!(tile.travel_cost(), Biome::Forest.travel_cost());
        assert!(!tile.is_ready());
    }

    #[test]
    fn finalize_readies_the_tile() {
        let mut tile = Tile::new(Biome::Plains);
        tile.finalize();
        assert!(tile.is_ready());
        assert_eq!(tile.feature(), None);
    }

    #[test]
    fn ocean_tile_is_not_travellable() {
        assert!(!Tile::new(Biome::Ocean).is_travellable());
        assert!(Tile::new(Biome::Plains).is_travellable());
    }

    #[test]
    fn set_feature_overlays_and_readies_the_tile() {
        let mut tile = Tile::new(Biome::Plains);
        tile.set_feature(Feature::Village);
        assert_eq!(tile.feature(), Some(Feature::Village));
        assert!(tile.is_ready());
    }

    #[test]
    fn serialized_field_names_are_stable() {
        let mut tile = Tile::new(Biome::Desert);
        tile.finalize();
        let json = serde_json::to_value(tile).unwrap();
        assert_eq!(json["Biome"], "Desert");
        assert_eq!(json["Ready"], true);
        assert_eq!(json["Travel Cost"], 3);
        assert!(json["Feature"].is_null());
    }
}
