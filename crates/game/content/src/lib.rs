//! Data-driven game content and its loaders.
//!
//! This crate reads game definitions from RON/TOML data files:
//! - Monster kinds (data-driven via TOML)
//! - Scenarios: rooms, rewards and players (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! All loaders resolve into doom-core types; a loaded scenario is a ready
//! [`doom_core::GameState`].

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    BestiaryLoader, ConfigLoader, ContentFactory, KindSpec, LoadResult, MonsterSpec, PlayerSpec,
    RewardSpec, RoomSpec, ScenarioLoader, ScenarioSpec,
};
