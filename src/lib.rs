pub mod board;
pub mod board_parameters;
pub mod error;
pub mod grid;
pub mod interface;
pub mod saveload;
pub mod status_queue;
pub mod tile;
pub mod tile_component;

pub use board::{Board, Path, PathQuery};
pub use board_parameters::BoardParameters;
pub use error::BoardError;
pub use grid::Coordinate;
pub use interface::Interface;
pub use saveload::Snapshot;
pub use status_queue::{StatusQueue, StatusSender};
pub use tile::Tile;
pub use tile_component::{Biome, Feature, FeatureQuery, IMPASSABLE_TRAVEL_COST};
