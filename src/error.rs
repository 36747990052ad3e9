use thiserror::Error;

use crate::grid::Coordinate;

/// Errors surfaced by board lookups and persistence.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A lookup addressed a coordinate outside the generated region. The
    /// bootstrap keeps the view radius fully populated, so this indicates a
    /// caller overstepping it.
    #[error("no tile has been generated at {0}")]
    MissingTile(Coordinate),
    /// A loaded board is missing tiles inside the view radius around the
    /// resume position. Never repaired silently.
    #[error("loaded board is not fully generated around {position}")]
    InvalidBoardLoad { position: Coordinate },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(String),
}
