use std::collections::BTreeSet;

use crate::catalog::{KindId, MonsterKind, Weapon};
use crate::config::GameConfig;

use super::{GameState, Monster, MonsterId, Player, Room, RoomId, RoomReward, StateError};

/// Monster placement recorded by a [`RoomBuilder`] before IDs are allocated.
#[derive(Clone, Debug, PartialEq, Eq)]
struct MonsterSpec {
    kind: MonsterKind,
    custom_protector: Option<KindId>,
}

/// Builder for one room; monster IDs are allocated by [`GameStateBuilder`].
#[derive(Clone, Debug)]
pub struct RoomBuilder {
    name: String,
    monsters: Vec<MonsterSpec>,
    reward: RoomReward,
}

impl RoomBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            monsters: Vec::new(),
            reward: RoomReward::new(),
        }
    }

    /// Add a monster protected by its kind's default protector
    pub fn monster(mut self, kind: MonsterKind) -> Self {
        self.monsters.push(MonsterSpec {
            kind,
            custom_protector: None,
        });
        self
    }

    /// Add `count` monsters of the same kind
    pub fn monsters(mut self, kind: MonsterKind, count: usize) -> Self {
        for _ in 0..count {
            self = self.monster(kind);
        }
        self
    }

    /// Add a monster protected by `protector` instead of its kind's default
    pub fn guarded_monster(mut self, kind: MonsterKind, protector: KindId) -> Self {
        self.monsters.push(MonsterSpec {
            kind,
            custom_protector: Some(protector),
        });
        self
    }

    /// Set the full completion reward
    pub fn reward(mut self, reward: RoomReward) -> Self {
        self.reward = reward;
        self
    }

    pub fn reward_weapon(mut self, weapon: Weapon) -> Self {
        self.reward = self.reward.weapon(weapon);
        self
    }

    pub fn reward_ammunition(mut self, weapon: Weapon, rounds: u32) -> Self {
        self.reward = self.reward.ammunition(weapon, rounds);
        self
    }

    pub fn reward_health(mut self, health: i32) -> Self {
        self.reward = self.reward.health(health);
        self
    }
}

/// Builder assembling rooms and players into a [`GameState`].
#[derive(Default)]
pub struct GameStateBuilder {
    config: GameConfig,
    rooms: Vec<RoomBuilder>,
    players: Vec<Player>,
}

impl GameStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Rooms are visited in the order they are added.
    pub fn room(mut self, room: RoomBuilder) -> Self {
        self.rooms.push(room);
        self
    }

    /// Players are tried in the order they are added.
    pub fn player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    /// Add a player with only the configured default weapon
    pub fn basic_player(self, name: impl Into<String>, health: i32) -> Self {
        let player = Player::with_config(name, health, &self.config);
        self.player(player)
    }

    pub fn build(self) -> Result<GameState, StateError> {
        let mut names = BTreeSet::new();
        for player in &self.players {
            if !names.insert(player.name()) {
                return Err(StateError::DuplicatePlayer(player.name().to_owned()));
            }
        }

        let mut room_names = BTreeSet::new();
        let mut next_monster: u32 = 0;
        let mut rooms = Vec::with_capacity(self.rooms.len());
        for (index, builder) in self.rooms.into_iter().enumerate() {
            if !room_names.insert(builder.name.clone()) {
                return Err(StateError::DuplicateRoom(builder.name));
            }
            if builder.monsters.is_empty() {
                return Err(StateError::EmptyRoom(builder.name));
            }
            let room_id = u32::try_from(index)
                .map(RoomId)
                .map_err(|_| StateError::IdOverflow { current: u32::MAX })?;

            let mut monsters = Vec::with_capacity(builder.monsters.len());
            for spec in builder.monsters {
                let id = MonsterId(next_monster);
                next_monster = next_monster
                    .checked_add(1)
                    .ok_or(StateError::IdOverflow {
                        current: next_monster,
                    })?;
                monsters.push(match spec.custom_protector {
                    Some(protector) => Monster::with_custom_protector(id, spec.kind, protector),
                    None => Monster::new(id, spec.kind),
                });
            }
            rooms.push(Room::new(room_id, builder.name, monsters, builder.reward));
        }

        Ok(GameState::from_parts(self.config, rooms, self.players))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_ids_in_insertion_order() {
        let state = GameStateBuilder::new()
            .room(RoomBuilder::new("a").monsters(MonsterKind::IMP, 2))
            .room(RoomBuilder::new("b").monster(MonsterKind::DEMON))
            .basic_player("doomguy", 100)
            .build()
            .unwrap();

        let ids: Vec<_> = state.monsters().map(|m| m.id().0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(state.room(RoomId(1)).map(Room::name), Some("b"));
    }

    #[test]
    fn rejects_malformed_games() {
        let dup = GameStateBuilder::new()
            .room(RoomBuilder::new("a").monster(MonsterKind::IMP))
            .basic_player("doomguy", 100)
            .basic_player("doomguy", 50)
            .build();
        assert_eq!(dup.unwrap_err(), StateError::DuplicatePlayer("doomguy".into()));

        let dup = GameStateBuilder::new()
            .room(RoomBuilder::new("a").monster(MonsterKind::IMP))
            .room(RoomBuilder::new("a").monster(MonsterKind::IMP))
            .build();
        assert_eq!(dup.unwrap_err(), StateError::DuplicateRoom("a".into()));

        let empty = GameStateBuilder::new().room(RoomBuilder::new("void")).build();
        assert_eq!(empty.unwrap_err(), StateError::EmptyRoom("void".into()));
    }
}
