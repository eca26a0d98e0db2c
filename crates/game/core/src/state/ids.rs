use std::fmt;

/// Identifier of a room, allocated in insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomId(pub u32);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

/// Identifier of a monster, unique across the whole game.
///
/// Allocated sequentially while rooms are built, so it doubles as the stable
/// tie-break between otherwise equal monsters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterId(pub u32);

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "monster#{}", self.0)
    }
}

/// Identifier of a player: its position in the game's player list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

/// Sort key sequencing monsters for killing.
///
/// Field order is the comparison order. `position` is the monster's slot in
/// a topological order of its room's protector relation, so anything that
/// must die first always sorts earlier. Among monsters free to go next, the
/// lowest kind rank takes the slot, then the lowest id. Positions are unique
/// within a room; `rank` and `id` only matter when comparing across rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KillOrder {
    pub position: u32,
    pub rank: u8,
    pub id: MonsterId,
}
