use rand::{
    Rng,
    distr::{Distribution, weighted::WeightedIndex},
};

use crate::{board::Board, grid::Coordinate, tile::Tile, tile_component::Biome};

impl Board {
    /// Populate every missing tile of the view window around `center`.
    ///
    /// Rings are generated inside-out. The directional probe in
    /// [`Board::generate_biome`] relies on smaller rings existing before a
    /// larger ring tries to grow a splotch around them.
    pub fn generate_view(&mut self, center: Coordinate) {
        for radius in 0..=self.parameters.view_radius() {
            for here in center.coordinates_in_ring(radius) {
                self.generate_tile(here);
            }
        }
    }

    /// Generate tile at the given coordinates: biome first, then the
    /// feature pass that finalizes it. Ready tiles are left untouched.
    fn generate_tile(&mut self, coordinates: Coordinate) {
        self.generate_biome(coordinates);
        self.generate_feature(coordinates);
    }

    /// Grow a biome "splotch" from the given coordinates.
    ///
    /// If the coordinates are vacant, a biome is drawn and an irregular blob
    /// of it is filled around a center shifted away from already-generated
    /// territory, covering the requested coordinates. Existing tiles are
    /// never overwritten. If all four probed neighbors exist the splotch
    /// degenerates to a single tile cloning the biome of the left neighbor,
    /// so fully surrounded gaps blend into their neighborhood.
    pub(crate) fn generate_biome(&mut self, coordinates: Coordinate) {
        if self.tile_exists(coordinates) {
            return;
        }

        let min_size = self.parameters.min_biome_size;
        let max_size = self.parameters.max_biome_size;

        let biome = self.pick_biome();
        let half_extent_x = self.random_number_generator.random_range(min_size..=max_size);
        let half_extent_y = self.random_number_generator.random_range(min_size..=max_size);

        // Probe the four neighbors in fixed priority order; the first vacant
        // one decides which way the splotch center shifts.
        let mut center = coordinates;
        if !self.tile_exists(coordinates + Coordinate::new(1, -1)) {
            center = center + Coordinate::new(half_extent_x, 0);
        } else if !self.tile_exists(coordinates + Coordinate::new(0, -1)) {
            center = center - Coordinate::new(0, half_extent_y);
        } else if !self.tile_exists(coordinates + Coordinate::new(0, 1)) {
            center = center + Coordinate::new(0, half_extent_y);
        } else if !self.tile_exists(coordinates + Coordinate::new(-1, 0)) {
            center = center - Coordinate::new(half_extent_x, 0);
        } else {
            let adjacent_biome = self.tiles[&(coordinates + Coordinate::new(-1, 0))].biome();
            self.tiles.insert(coordinates, Tile::new(adjacent_biome));
            return;
        }

        // Column-by-column fill. The half-height ramps up to `half_extent_y`
        // at the center column and back down toward `min_size` after it, but
        // is redrawn every column, which keeps the silhouette organic.
        let mut y = min_size;
        for i in (center.x() - half_extent_x)..=(center.x() + half_extent_x) {
            y = if i == center.x() {
                half_extent_y
            } else if i < center.x() {
                self.random_number_generator.random_range(y..=half_extent_y)
            } else {
                self.random_number_generator.random_range(min_size..=y)
            };
            for j in (center.y() - y)..=(center.y() + y) {
                self.tiles
                    .entry(Coordinate::new(i, j))
                    .or_insert_with(|| Tile::new(biome));
            }
        }
    }

    /// Weighted draw over the biome table.
    fn pick_biome(&mut self) -> Biome {
        let dist = WeightedIndex::new(
            self.parameters
                .biome_weights
                .iter()
                .map(|(_, weight)| *weight),
        )
        .unwrap();
        let index = dist.sample(&mut self.random_number_generator);
        self.parameters.biome_weights[index].0
    }
}
