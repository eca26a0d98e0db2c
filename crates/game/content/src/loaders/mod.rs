//! Content loaders for reading game data from files.
//!
//! Each loader parses one file format into plain spec structs and resolves
//! them into doom-core types. [`ContentFactory`] ties them to a data directory.

pub mod bestiary;
pub mod config;
pub mod factory;
pub mod scenario;

pub use bestiary::{BestiaryLoader, KindSpec};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use scenario::{MonsterSpec, PlayerSpec, RewardSpec, RoomSpec, ScenarioLoader, ScenarioSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
