use std::collections::BTreeMap;

use crate::catalog::{Weapon, WeaponSet};
use crate::config::GameConfig;

use super::InvalidOperation;

/// A player. Identity is the name; a player whose health is <= 0 is dead.
///
/// Ammunition may be staged for a weapon the player does not own yet. The
/// staged rounds become the weapon's ammunition once it is acquired.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
    health: i32,
    weapons: WeaponSet,
    rounds: BTreeMap<Weapon, u32>,
    pending: BTreeMap<Weapon, u32>,
    starting_rounds: u32,
}

/// Combat readiness, compared field by field.
///
/// A stronger weapon dominates any amount of ammunition for weaker ones;
/// rounds for that weapon come next, then health.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Readiness {
    pub weapon: Weapon,
    pub rounds: u32,
    pub health: i32,
}

impl Player {
    pub fn new(name: impl Into<String>, health: i32) -> Self {
        Self::with_config(name, health, &GameConfig::default())
    }

    /// Creates a player owning only the configured default weapon.
    pub fn with_config(name: impl Into<String>, health: i32, config: &GameConfig) -> Self {
        let default_weapon = config.default_weapon;
        let mut rounds = BTreeMap::new();
        if !default_weapon.is_unlimited() {
            rounds.insert(default_weapon, config.starting_rounds);
        }
        Self {
            name: name.into(),
            health,
            weapons: WeaponSet::from(default_weapon),
            rounds,
            pending: BTreeMap::new(),
            starting_rounds: config.starting_rounds,
        }
    }

    pub fn builder(name: impl Into<String>, health: i32) -> PlayerBuilder {
        PlayerBuilder::new(name, health)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead()
    }

    pub fn weapons(&self) -> WeaponSet {
        self.weapons
    }

    pub fn has_weapon(&self, weapon: Weapon) -> bool {
        self.weapons.has(weapon)
    }

    /// Rounds available for `weapon`.
    ///
    /// Owned unlimited weapons report `u32::MAX`. For weapons not owned yet
    /// this is the staged amount.
    pub fn rounds(&self, weapon: Weapon) -> u32 {
        if self.has_weapon(weapon) {
            if weapon.is_unlimited() {
                return u32::MAX;
            }
            return self.rounds.get(&weapon).copied().unwrap_or(0);
        }
        self.pending_rounds(weapon)
    }

    /// Rounds staged for a weapon the player does not own yet.
    pub fn pending_rounds(&self, weapon: Weapon) -> u32 {
        self.pending.get(&weapon).copied().unwrap_or(0)
    }

    pub fn readiness(&self) -> Readiness {
        let weapon = self.weapons.strongest().unwrap_or_default();
        Readiness {
            weapon,
            rounds: self.rounds(weapon),
            health: self.health,
        }
    }

    fn ensure_alive(&self) -> Result<(), InvalidOperation> {
        if self.is_dead() {
            return Err(InvalidOperation::PlayerDead(self.name.clone()));
        }
        Ok(())
    }

    /// Changes health by `amount` (positive or negative) and returns the new value.
    pub fn change_health(&mut self, amount: i32) -> Result<i32, InvalidOperation> {
        self.ensure_alive()?;
        self.health = self.health.saturating_add(amount);
        Ok(self.health)
    }

    /// Acquires `weapon`. Returns false, changing nothing, if it was already owned.
    ///
    /// A new weapon comes with any ammunition staged for it, or with the
    /// configured starting rounds when nothing was staged.
    pub fn add_weapon(&mut self, weapon: Weapon) -> Result<bool, InvalidOperation> {
        self.ensure_alive()?;
        if !self.weapons.add(weapon) {
            return Ok(false);
        }
        if !weapon.is_unlimited() {
            let rounds = self.pending.remove(&weapon).unwrap_or(self.starting_rounds);
            self.rounds.insert(weapon, rounds);
        }
        Ok(true)
    }

    /// Adds ammunition for `weapon` and returns the new total.
    ///
    /// For a weapon not owned yet the rounds are staged until it is acquired.
    pub fn add_ammunition(&mut self, weapon: Weapon, rounds: u32) -> Result<u32, InvalidOperation> {
        self.ensure_alive()?;
        let slot = if self.has_weapon(weapon) {
            if weapon.is_unlimited() {
                return Ok(u32::MAX);
            }
            self.rounds.entry(weapon).or_default()
        } else {
            self.pending.entry(weapon).or_default()
        };
        *slot = slot.saturating_add(rounds);
        Ok(*slot)
    }

    /// Consumes `rounds` of ammunition for an owned weapon and returns what is left.
    pub fn spend_rounds(&mut self, weapon: Weapon, rounds: u32) -> Result<u32, InvalidOperation> {
        self.ensure_alive()?;
        let available = self.rounds(weapon);
        if !self.has_weapon(weapon) || available < rounds {
            return Err(InvalidOperation::InsufficientRounds {
                weapon,
                needed: rounds,
                available: if self.has_weapon(weapon) { available } else { 0 },
            });
        }
        if weapon.is_unlimited() {
            return Ok(u32::MAX);
        }
        let left = available - rounds;
        self.rounds.insert(weapon, left);
        Ok(left)
    }
}

/// Builder for players that start with extra weapons.
pub struct PlayerBuilder {
    name: String,
    health: i32,
    config: GameConfig,
    weapons: Vec<(Weapon, u32)>,
}

impl PlayerBuilder {
    pub fn new(name: impl Into<String>, health: i32) -> Self {
        Self {
            name: name.into(),
            health,
            config: GameConfig::default(),
            weapons: Vec::new(),
        }
    }

    /// Set the configuration used for the default weapon and starting rounds
    pub fn config(mut self, config: &GameConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Grant a weapon with exactly `rounds` of ammunition
    pub fn weapon(mut self, weapon: Weapon, rounds: u32) -> Self {
        self.weapons.push((weapon, rounds));
        self
    }

    pub fn build(self) -> Player {
        let mut player = Player::with_config(self.name, self.health, &self.config);
        for (weapon, rounds) in self.weapons {
            player.weapons.add(weapon);
            if !weapon.is_unlimited() {
                player.rounds.insert(weapon, rounds);
            }
        }
        player
    }
}
