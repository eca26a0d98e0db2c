//! Authoritative game state representation.
//!
//! This module owns the rooms, monsters and players of one game. The solver
//! reads it freely and mutates it only through the entity mutators
//! ([`Room::attack_monster`], [`Player::change_health`], ...).
mod builder;
mod error;
mod ids;
mod monster;
mod player;
mod room;

pub use builder::{GameStateBuilder, RoomBuilder};
pub use error::{InvalidOperation, StateError};
pub use ids::{KillOrder, MonsterId, PlayerId, RoomId};
pub use monster::Monster;
pub use player::{Player, PlayerBuilder, Readiness};
pub use room::{Room, RoomReward};

use crate::config::GameConfig;

/// Canonical snapshot of the game: rooms in visiting order, players in
/// trying order.
///
/// Rooms and players are fixed at construction; nothing is ever added or
/// removed afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    config: GameConfig,
    rooms: Vec<Room>,
    players: Vec<Player>,
}

impl GameState {
    pub fn builder() -> GameStateBuilder {
        GameStateBuilder::new()
    }

    pub(crate) fn from_parts(config: GameConfig, rooms: Vec<Room>, players: Vec<Player>) -> Self {
        Self {
            config,
            rooms,
            players,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0 as usize)
    }

    pub fn room_by_name(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.name() == name)
    }

    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.rooms.iter().map(Room::id)
    }

    /// Rooms ordered by current danger level, visiting order breaking ties.
    pub fn rooms_by_danger(&self) -> Vec<&Room> {
        let mut rooms: Vec<&Room> = self.rooms.iter().collect();
        rooms.sort_by_key(|room| (room.danger_level(), room.id()));
        rooms
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.0 as usize)
    }

    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .position(|player| player.name() == name)
            .map(|index| PlayerId(index as u32))
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        (0..self.players.len()).map(|index| PlayerId(index as u32))
    }

    /// Every monster of every room, room by room in kill order.
    pub fn monsters(&self) -> impl Iterator<Item = &Monster> {
        self.rooms.iter().flat_map(Room::monsters)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.0 as usize)
    }

    /// Borrows a room and a player mutably at the same time.
    pub fn room_and_player_mut(
        &mut self,
        room: RoomId,
        player: PlayerId,
    ) -> Option<(&mut Room, &mut Player)> {
        let room = self.rooms.get_mut(room.0 as usize)?;
        let player = self.players.get_mut(player.0 as usize)?;
        Some((room, player))
    }

    /// SHA-256 over the bincode encoding of the whole state.
    ///
    /// Two states with equal digests are byte-for-byte identical.
    #[cfg(feature = "serde")]
    pub fn digest(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        // bincode serialization is deterministic and consistent
        if let Ok(bytes) = bincode::serialize(self) {
            hasher.update(&bytes);
        }
        hasher.finalize().into()
    }
}
