//! Catalog registration errors.

use crate::error::{ErrorSeverity, GameError};

use super::KindId;

/// Errors raised while assembling a [`Bestiary`](super::Bestiary).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    #[error("monster kind name '{0}' is already registered")]
    DuplicateName(String),

    #[error("monster kind {0} is already registered")]
    DuplicateKind(KindId),

    #[error("monster kind {kind} is protected by unknown kind {protector}")]
    UnknownProtector { kind: KindId, protector: KindId },

    /// Killing takes at least one round, so every kind needs some health.
    #[error("monster kind {0} needs at least one round of ammunition")]
    ZeroAmmunition(KindId),

    #[error("unknown monster kind '{0}'")]
    UnknownKind(String),
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            DuplicateName(_) => "CATALOG_DUPLICATE_NAME",
            DuplicateKind(_) => "CATALOG_DUPLICATE_KIND",
            UnknownProtector { .. } => "CATALOG_UNKNOWN_PROTECTOR",
            ZeroAmmunition(_) => "CATALOG_ZERO_AMMUNITION",
            UnknownKind(_) => "CATALOG_UNKNOWN_KIND",
        }
    }
}
