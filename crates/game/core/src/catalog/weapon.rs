use bitflags::bitflags;
use strum::IntoEnumIterator;

/// Weapon kinds, declared from weakest to strongest.
///
/// The declaration order is the power ranking: a weapon registers damage on a
/// monster only when its rank is at least the rank of the weapon the monster's
/// kind requires.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Weapon {
    /// Bare hands. Never runs out of ammunition.
    #[default]
    Fist,
    Chainsaw,
    Pistol,
    Shotgun,
    Chaingun,
    RocketLauncher,
    PlasmaGun,
    Bfg9000,
}

impl Weapon {
    /// Position of this weapon in the power ranking (0 is weakest).
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Weapons with unlimited ammunition report `u32::MAX` rounds and never
    /// spend any.
    #[inline]
    pub const fn is_unlimited(self) -> bool {
        matches!(self, Self::Fist)
    }

    /// Returns true if this weapon is strong enough to hurt a monster that
    /// requires `required`.
    #[inline]
    pub const fn can_hurt(self, required: Weapon) -> bool {
        self.rank() >= required.rank()
    }
}

bitflags! {
    /// Set of weapons, one bit per [`Weapon`] rank.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct WeaponSet: u16 {
        const FIST            = 1 << 0;
        const CHAINSAW        = 1 << 1;
        const PISTOL          = 1 << 2;
        const SHOTGUN         = 1 << 3;
        const CHAINGUN        = 1 << 4;
        const ROCKET_LAUNCHER = 1 << 5;
        const PLASMA_GUN      = 1 << 6;
        const BFG9000         = 1 << 7;
    }
}

impl WeaponSet {
    /// Returns true if the set holds `weapon`.
    #[inline]
    pub fn has(&self, weapon: Weapon) -> bool {
        self.contains(Self::from(weapon))
    }

    /// Adds `weapon`, returning false when it was already present.
    pub fn add(&mut self, weapon: Weapon) -> bool {
        let had = self.has(weapon);
        self.insert(Self::from(weapon));
        !had
    }

    /// Iterates the weapons in the set from weakest to strongest.
    pub fn weapons(&self) -> impl Iterator<Item = Weapon> + '_ {
        Weapon::iter().filter(|weapon| self.has(*weapon))
    }

    /// The strongest weapon in the set, if any.
    pub fn strongest(&self) -> Option<Weapon> {
        self.weapons().last()
    }
}

impl From<Weapon> for WeaponSet {
    fn from(weapon: Weapon) -> Self {
        Self::from_bits_retain(1 << weapon.rank())
    }
}

impl FromIterator<Weapon> for WeaponSet {
    fn from_iter<T: IntoIterator<Item = Weapon>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, weapon| set | Self::from(weapon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn ranking_follows_declaration_order() {
        assert!(Weapon::Fist < Weapon::Pistol);
        assert!(Weapon::RocketLauncher < Weapon::Bfg9000);
        assert_eq!(Weapon::Bfg9000.rank() as usize, Weapon::COUNT - 1);
        assert!(Weapon::Shotgun.can_hurt(Weapon::Pistol));
        assert!(!Weapon::Pistol.can_hurt(Weapon::Shotgun));
    }

    #[test]
    fn names_round_trip_through_strum() {
        assert_eq!(Weapon::RocketLauncher.to_string(), "rocket_launcher");
        assert_eq!("BFG9000".parse::<Weapon>(), Ok(Weapon::Bfg9000));
    }

    #[test]
    fn set_tracks_membership_and_strongest() {
        let mut set = WeaponSet::from(Weapon::Fist);
        assert!(set.add(Weapon::Shotgun));
        assert!(!set.add(Weapon::Shotgun));
        assert!(set.has(Weapon::Fist));
        assert!(!set.has(Weapon::Pistol));
        assert_eq!(set.strongest(), Some(Weapon::Shotgun));
        assert_eq!(
            set.weapons().collect::<Vec<_>>(),
            vec![Weapon::Fist, Weapon::Shotgun]
        );
        assert_eq!(WeaponSet::from(Weapon::Bfg9000), WeaponSet::BFG9000);
    }
}
