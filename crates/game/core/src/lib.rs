//! Deterministic game rules and data types for the room-clearing game.
//!
//! `doom-core` defines the combat catalog (weapons, monster kinds), the live
//! entities (monsters, rooms, players) and the [`GameState`] that owns them.
//! The solver in `doom-bot` and the loaders in `doom-content` depend on the
//! types re-exported here.
pub mod catalog;
pub mod config;
pub mod error;
pub mod state;

pub use catalog::{Bestiary, CatalogError, KindId, MonsterKind, Weapon, WeaponSet};
pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError};
pub use state::{
    GameState, GameStateBuilder, InvalidOperation, KillOrder, Monster, MonsterId, Player,
    PlayerBuilder, PlayerId, Readiness, Room, RoomBuilder, RoomId, RoomReward, StateError,
};
