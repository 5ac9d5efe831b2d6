//! The generation phases, run in order by [`crate::Terrain`]:
//! - [`seeding`]: choose the height-0 tiles
//! - [`heights`]: propagate heights outward from the seeds
//! - [`drainage`]: accumulate runoff from the highest tile down

pub mod drainage;
pub mod heights;
pub mod noise_field;
pub mod seeding;

pub use drainage::accumulate_drainage;
pub use heights::{HeightStep, propagate_heights, settle_sea_level};
pub use noise_field::NoiseField;
pub use seeding::plant_seeds;
