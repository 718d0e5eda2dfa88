use thiserror::Error;

/// Errors that can arise while setting up or running a maze session.
#[derive(Debug, Error)]
pub enum GameError {
    /// Wrapper around terminal IO errors (raw mode, key reads, redraws).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when asked for a maze too small to hold both corridors and the exit,
    /// or too large to draw.
    #[error("invalid maze size {size}: must be between {min} and {max}")]
    InvalidMazeSize { size: usize, min: usize, max: usize },

    /// Wall chance is a percentage.
    #[error("invalid wall chance {0}: must be between 0 and 100")]
    InvalidWallChance(u8),
}
