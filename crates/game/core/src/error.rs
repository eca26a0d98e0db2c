//! Common error infrastructure for doom-core.
//!
//! This module provides the shared classification used by every error type in
//! the workspace. Domain-specific errors (e.g. [`InvalidOperation`],
//! [`CatalogError`]) live next to the data they validate.
//!
//! [`InvalidOperation`]: crate::state::InvalidOperation
//! [`CatalogError`]: crate::catalog::CatalogError

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: Conditions that may succeed later with different state
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Broken caller contracts that require investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted game state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - may succeed once the game state has moved on.
    ///
    /// Examples: not enough rounds staged yet
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: duplicate player name, unknown monster kind
    Validation,

    /// Internal error - a precondition the caller promised did not hold.
    ///
    /// Examples: attacking a dead monster, mutating a dead player.
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - game state corrupted, cannot continue.
    ///
    /// Examples: a protector cycle reached by the execution engine
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Classification shared by every error enum in the workspace.
///
/// Error enums derive `thiserror::Error` for their messages and implement
/// this trait so callers can branch on severity and log a stable code.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier of the variant, e.g. `"INVALID_PLAYER_DEAD"`.
    ///
    /// Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_internal_and_fatal_are_bugs() {
        assert!(!ErrorSeverity::Recoverable.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
