//! Content factory for building games from data files.

use std::path::{Path, PathBuf};

use doom_core::{Bestiary, GameConfig, GameState};

use crate::loaders::{BestiaryLoader, ConfigLoader, LoadResult, ScenarioLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// ├── bestiary.toml    (optional, classic kinds otherwise)
/// └── scenarios/
///     ├── outpost.ron
///     └── citadel.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or the defaults when the
    /// file does not exist.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(target: "doom_content::factory", path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load monster kinds from `bestiary.toml`, or the classic kinds when the
    /// file does not exist.
    pub fn load_bestiary(&self) -> LoadResult<Bestiary> {
        let path = self.data_dir.join("bestiary.toml");
        if !path.exists() {
            tracing::debug!(target: "doom_content::factory", path = %path.display(), "no bestiary file, using classic kinds");
            return Ok(Bestiary::classic());
        }
        BestiaryLoader::load(&path)
    }

    /// Load `scenarios/{name}.ron` and build it into a game.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the scenario file (without `.ron` extension)
    pub fn load_scenario(&self, name: &str) -> LoadResult<GameState> {
        let config = self.load_config()?;
        let bestiary = self.load_bestiary()?;
        let path = self.data_dir.join("scenarios").join(format!("{}.ron", name));
        let spec = ScenarioLoader::load(&path)?;
        let state = ScenarioLoader::build(spec, &bestiary, config)?;
        tracing::info!(
            target: "doom_content::factory",
            scenario = name,
            rooms = state.rooms().len(),
            players = state.players().len(),
            "scenario loaded"
        );
        Ok(state)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
