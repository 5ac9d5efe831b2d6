use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerrainError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A land tile had no strictly lower neighbour during drainage.
    ///
    /// Height propagation only ever produces strictly increasing steps, so
    /// this means seeding or propagation is broken. The run is aborted;
    /// re-running with a different seed is the caller's call.
    #[error("Tile ({x}, {y}) at height {height} has no downhill neighbour")]
    NoDownhillNeighbour { x: u32, y: u32, height: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TerrainError>;
