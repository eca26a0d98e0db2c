use crate::catalog::Weapon;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Rounds granted with a newly acquired weapon when no ammunition was
    /// staged for it beforehand.
    pub starting_rounds: u32,

    /// Weapon every player owns from the start.
    pub default_weapon: Weapon,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_ROUNDS: u32 = 5;
    pub const DEFAULT_WEAPON: Weapon = Weapon::Fist;

    pub fn new() -> Self {
        Self {
            starting_rounds: Self::DEFAULT_STARTING_ROUNDS,
            default_weapon: Self::DEFAULT_WEAPON,
        }
    }

    pub fn with_starting_rounds(starting_rounds: u32) -> Self {
        Self {
            starting_rounds,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
