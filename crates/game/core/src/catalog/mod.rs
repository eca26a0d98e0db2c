//! Static combat catalog.
//!
//! Weapons are a fixed power ranking; monster kinds are data registered in a
//! [`Bestiary`] and copied into each monster at spawn time.
mod bestiary;
mod error;
mod kind;
mod weapon;

pub use bestiary::Bestiary;
pub use error::CatalogError;
pub use kind::{KindId, MonsterKind};
pub use weapon::{Weapon, WeaponSet};
