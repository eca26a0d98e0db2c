use crate::catalog::{KindId, MonsterKind, Weapon};

use super::{InvalidOperation, KillOrder, MonsterId};

/// A single monster living in exactly one room.
///
/// Remaining health starts at the kind's ammunition requirement and only
/// ever goes down, through [`Monster::attack`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    id: MonsterId,
    kind: MonsterKind,
    custom_protector: Option<KindId>,
    health: u32,
    dead: bool,
    /// Slot in the room's kill sequence; set by its room.
    position: u32,
}

impl Monster {
    /// Creates a monster whose protector is its kind's default.
    pub fn new(id: MonsterId, kind: MonsterKind) -> Self {
        Self {
            id,
            kind,
            custom_protector: None,
            health: kind.ammunition,
            dead: false,
            position: 0,
        }
    }

    /// Creates a monster protected by `protector` instead of its kind's default.
    pub fn with_custom_protector(id: MonsterId, kind: MonsterKind, protector: KindId) -> Self {
        Self {
            custom_protector: Some(protector),
            ..Self::new(id, kind)
        }
    }

    #[inline]
    pub fn id(&self) -> MonsterId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> &MonsterKind {
        &self.kind
    }

    /// The custom protector if one was set, otherwise the kind's.
    pub fn protector(&self) -> Option<KindId> {
        self.custom_protector.or(self.kind.protector)
    }

    /// Returns true if `other` is of the kind that protects this monster.
    pub fn is_protected_by(&self, other: &Monster) -> bool {
        self.id != other.id && self.protector() == Some(other.kind.id)
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    pub fn order(&self) -> KillOrder {
        KillOrder {
            position: self.position,
            rank: self.kind.rank(),
            id: self.id,
        }
    }

    pub(crate) fn set_position(&mut self, position: u32) {
        self.position = position;
    }

    /// Fires `rounds` of `weapon` at this monster.
    ///
    /// Returns whether the monster is dead after the attack.
    pub fn attack(&mut self, weapon: Weapon, rounds: u32) -> Result<bool, InvalidOperation> {
        if self.dead {
            return Err(InvalidOperation::MonsterDead(self.id));
        }
        if rounds < 1 {
            return Err(InvalidOperation::NoRounds);
        }
        if !weapon.can_hurt(self.kind.weapon) {
            return Err(InvalidOperation::WeaponTooWeak {
                weapon,
                required: self.kind.weapon,
            });
        }

        self.health = self.health.saturating_sub(rounds);
        if self.health == 0 {
            self.dead = true;
        }
        Ok(self.dead)
    }
}
