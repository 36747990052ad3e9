//! This module defines the [`Board`] struct and its associated methods.
//! The board is a sparse, conceptually unbounded map of generated tiles:
//! construction populates a square view window around the origin, and city
//! placement or viewport movement extend the populated region on demand.
//! Its methods come in three parts:
//! 1. Existence/lookup and snapshot plumbing, in this file.
//! 2. The generation methods, in the [`impls`] submodule.
//! 3. The path search, in the [`path`] submodule.

use std::collections::HashMap;

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    board_parameters::BoardParameters, error::BoardError, grid::Coordinate, saveload::Snapshot,
    tile::Tile,
};

mod impls;
mod path;

pub use path::{Path, PathQuery};

/// Generates and manages the game board.
#[derive(Debug)]
pub struct Board {
    /// Random number generator for the board. Seeded once at construction;
    /// all generation draws from it, so one seed reproduces one board.
    pub(crate) random_number_generator: StdRng,
    /// Generation tunables. Kept on the board because cities keep demanding
    /// tiles long after the bootstrap.
    pub(crate) parameters: BoardParameters,
    /// Every generated tile, keyed by coordinate. Grows, never shrinks.
    pub(crate) tiles: HashMap<Coordinate, Tile>,
}

impl Board {
    /// Build a new board and generate the view window around the origin.
    pub fn new(parameters: BoardParameters) -> Self {
        let mut board = Self {
            random_number_generator: StdRng::seed_from_u64(u64::from(parameters.seed)),
            parameters,
            tiles: HashMap::new(),
        };
        board.generate_view(Coordinate::ORIGIN);
        board
    }

    /// Build a new board from a seed with default parameters.
    pub fn from_seed(seed: u32) -> Self {
        Self::new(BoardParameters::with_seed(seed))
    }

    /// Restore a board from a snapshot, resuming at `position`.
    ///
    /// Fails with [`BoardError::InvalidBoardLoad`] if the snapshot does not
    /// cover the full view window around `position`.
    pub fn from_snapshot(snapshot: Snapshot, position: Coordinate) -> Result<Self, BoardError> {
        let board = Self {
            random_number_generator: StdRng::seed_from_u64(u64::from(snapshot.seed)),
            parameters: BoardParameters::with_seed(snapshot.seed),
            tiles: snapshot.board.into_iter().collect(),
        };
        board.verify(position)?;
        Ok(board)
    }

    pub fn seed(&self) -> u32 {
        self.parameters.seed
    }

    /// Returns the board's view size.
    pub fn view_size(&self) -> u32 {
        self.parameters.view_size
    }

    /// Returns the tile at the coordinates, or [`BoardError::MissingTile`]
    /// if nothing has been generated there.
    pub fn get_tile(&self, coordinates: Coordinate) -> Result<&Tile, BoardError> {
        self.tiles
            .get(&coordinates)
            .ok_or(BoardError::MissingTile(coordinates))
    }

    /// Check if the given coordinates contain a generated tile.
    pub fn tile_exists(&self, coordinates: Coordinate) -> bool {
        self.tiles.contains_key(&coordinates)
    }

    /// Check if the given coordinates contain a ready tile.
    pub fn tile_ready(&self, coordinates: Coordinate) -> bool {
        self.tiles.get(&coordinates).is_some_and(Tile::is_ready)
    }

    /// Check that every coordinate of the view window around `position` has
    /// been generated. This is the integrity gate after loading a snapshot.
    pub fn verify(&self, position: Coordinate) -> Result<(), BoardError> {
        let radius = self.parameters.view_radius();
        if position
            .coordinates_in_radius(radius)
            .iter()
            .all(|here| self.tile_exists(*here))
        {
            Ok(())
        } else {
            Err(BoardError::InvalidBoardLoad { position })
        }
    }

    /// Capture the whole board as a snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    pub(crate) fn tiles(&self) -> &HashMap<Coordinate, Tile> {
        &self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::{error::BoardError, grid::Coordinate};

    #[test]
    fn bootstrap_covers_the_view_radius() {
        let board = Board::from_seed(48);
        assert!(board.verify(Coordinate::ORIGIN).is_ok());
        let radius = board.view_size() / 2;
        for here in Coordinate::ORIGIN.coordinates_in_radius(radius) {
            assert!(board.tile_exists(here), "missing tile at {here}");
            assert!(board.tile_ready(here), "unfinished tile at {here}");
        }
    }

    #[test]
    fn verify_rejects_positions_near_the_frontier() {
        let board = Board::from_seed(48);
        // The window around (9, 9) reaches (19, 19), well past the bootstrap.
        assert!(matches!(
            board.verify(Coordinate::new(9, 9)),
            Err(BoardError::InvalidBoardLoad { .. })
        ));
    }

    #[test]
    fn get_tile_surfaces_missing_coordinates() {
        let board = Board::from_seed(48);
        assert!(board.get_tile(Coordinate::ORIGIN).is_ok());
        assert!(matches!(
            board.get_tile(Coordinate::new(1000, 1000)),
            Err(BoardError::MissingTile(_))
        ));
    }

    #[test]
    fn repeated_view_generation_changes_nothing() {
        let mut board = Board::from_seed(48);
        let before = board.tiles().clone();
        board.generate_view(Coordinate::ORIGIN);
        assert_eq!(board.tiles(), &before);
    }

    #[test]
    fn generate_view_extends_the_populated_region() {
        let mut board = Board::from_seed(48);
        let center = Coordinate::new(30, -30);
        assert!(board.verify(center).is_err());
        board.generate_view(center);
        assert!(board.verify(center).is_ok());
    }
}
