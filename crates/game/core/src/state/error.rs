//! State errors.
//!
//! [`InvalidOperation`] covers broken preconditions on live entities;
//! [`StateError`] covers malformed game construction.

use crate::catalog::Weapon;
use crate::error::{ErrorSeverity, GameError};

use super::{MonsterId, RoomId};

/// A mutator was called in a state where its precondition does not hold.
///
/// These are contract violations. Callers are expected to check feasibility
/// first, so the solver never retries after one of these.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidOperation {
    #[error("{0} is already dead")]
    MonsterDead(MonsterId),

    #[error("an attack must fire at least one round")]
    NoRounds,

    #[error("{weapon} is too weak, {required} or stronger is required")]
    WeaponTooWeak { weapon: Weapon, required: Weapon },

    #[error("player '{0}' is dead")]
    PlayerDead(String),

    #[error("{monster} is not in {room}")]
    MonsterNotInRoom { monster: MonsterId, room: RoomId },

    #[error("needs {needed} rounds for {weapon}, has {available}")]
    InsufficientRounds {
        weapon: Weapon,
        needed: u32,
        available: u32,
    },
}

impl GameError for InvalidOperation {
    fn severity(&self) -> ErrorSeverity {
        use InvalidOperation::*;
        match self {
            MonsterDead(_) | PlayerDead(_) | InsufficientRounds { .. } => ErrorSeverity::Internal,
            NoRounds | WeaponTooWeak { .. } | MonsterNotInRoom { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use InvalidOperation::*;
        match self {
            MonsterDead(_) => "INVALID_MONSTER_DEAD",
            NoRounds => "INVALID_NO_ROUNDS",
            WeaponTooWeak { .. } => "INVALID_WEAPON_TOO_WEAK",
            PlayerDead(_) => "INVALID_PLAYER_DEAD",
            MonsterNotInRoom { .. } => "INVALID_MONSTER_NOT_IN_ROOM",
            InsufficientRounds { .. } => "INVALID_INSUFFICIENT_ROUNDS",
        }
    }
}

/// Errors that occur while assembling a [`GameState`](super::GameState).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    #[error("player name '{0}' is used more than once")]
    DuplicatePlayer(String),

    #[error("room name '{0}' is used more than once")]
    DuplicateRoom(String),

    #[error("room '{0}' has no monsters")]
    EmptyRoom(String),

    /// Monster or room ID allocation overflow (all IDs exhausted).
    #[error("ID overflow (current: {current})")]
    IdOverflow { current: u32 },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            DuplicatePlayer(_) | DuplicateRoom(_) | EmptyRoom(_) => ErrorSeverity::Validation,
            IdOverflow { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            DuplicatePlayer(_) => "STATE_DUPLICATE_PLAYER",
            DuplicateRoom(_) => "STATE_DUPLICATE_ROOM",
            EmptyRoom(_) => "STATE_EMPTY_ROOM",
            IdOverflow { .. } => "STATE_ID_OVERFLOW",
        }
    }
}
