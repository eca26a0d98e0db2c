use core::fmt;

use super::Weapon;

/// Identity of a monster kind. The value doubles as the kind's rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct KindId(pub u8);

impl fmt::Display for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kind#{}", self.0)
    }
}

/// Immutable combat statistics shared by every monster of one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterKind {
    pub id: KindId,
    /// Weakest weapon that registers damage.
    pub weapon: Weapon,
    /// Rounds needed to kill; also the starting health of each monster.
    pub ammunition: u32,
    /// Health a player loses per encounter while this monster is alive.
    pub exposure: u32,
    /// Kind whose living members must die before this one can be killed.
    pub protector: Option<KindId>,
}

impl MonsterKind {
    pub const IMP: Self = Self::new(KindId(0), Weapon::Pistol, 3, 1);
    pub const DEMON: Self = Self::new(KindId(1), Weapon::Shotgun, 4, 2).protected_by(KindId(0));
    pub const SPECTRE: Self = Self::new(KindId(2), Weapon::Chaingun, 6, 3).protected_by(KindId(1));
    pub const BARON_OF_HELL: Self =
        Self::new(KindId(3), Weapon::RocketLauncher, 10, 5).protected_by(KindId(2));

    pub const fn new(id: KindId, weapon: Weapon, ammunition: u32, exposure: u32) -> Self {
        Self {
            id,
            weapon,
            ammunition,
            exposure,
            protector: None,
        }
    }

    /// Builder-style setter for the protector kind.
    #[must_use]
    pub const fn protected_by(mut self, protector: KindId) -> Self {
        self.protector = Some(protector);
        self
    }

    #[inline]
    pub const fn rank(&self) -> u8 {
        self.id.0
    }

    /// Rounds fired to kill one monster of this kind. Every attack fires at
    /// least one round.
    #[inline]
    pub const fn rounds_to_kill(&self) -> u32 {
        if self.ammunition == 0 { 1 } else { self.ammunition }
    }

    /// Contribution of one living monster of this kind to a room's danger level.
    #[inline]
    pub const fn danger(&self) -> u32 {
        self.rank() as u32 + 1
    }
}
