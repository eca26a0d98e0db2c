//! Solver errors.
//!
//! Infeasible kills and stalled games are ordinary outcomes and never show
//! up here. A [`BotError`] means a caller broke a precondition.

use doom_core::{ErrorSeverity, GameError, InvalidOperation, MonsterId, PlayerId, RoomId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BotError {
    #[error("{0} does not exist")]
    UnknownRoom(RoomId),

    #[error("{0} does not exist")]
    UnknownPlayer(PlayerId),

    /// The execution engine met a monster already on its kill stack.
    #[error("{monster} in {room} is part of a protector cycle")]
    ProtectorCycle { room: RoomId, monster: MonsterId },

    #[error(transparent)]
    InvalidOperation(#[from] InvalidOperation),
}

impl GameError for BotError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            BotError::UnknownRoom(_) | BotError::UnknownPlayer(_) => ErrorSeverity::Validation,
            BotError::ProtectorCycle { .. } => ErrorSeverity::Fatal,
            BotError::InvalidOperation(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            BotError::UnknownRoom(_) => "BOT_UNKNOWN_ROOM",
            BotError::UnknownPlayer(_) => "BOT_UNKNOWN_PLAYER",
            BotError::ProtectorCycle { .. } => "BOT_PROTECTOR_CYCLE",
            BotError::InvalidOperation(err) => err.error_code(),
        }
    }
}
