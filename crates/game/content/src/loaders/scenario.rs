//! Scenario loader: rooms, rewards and players of one game.

use std::collections::BTreeMap;
use std::path::Path;

use doom_core::{
    Bestiary, GameConfig, GameState, Player, RoomBuilder, RoomReward, Weapon,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Scenario file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    /// Rooms in visiting order.
    pub rooms: Vec<RoomSpec>,
    /// Players in trying order.
    pub players: Vec<PlayerSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSpec {
    pub name: String,
    pub monsters: Vec<MonsterSpec>,
    #[serde(default)]
    pub reward: RewardSpec,
}

/// A group of identical monsters, referring to its kind by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterSpec {
    pub kind: String,
    #[serde(default = "one")]
    pub count: usize,
    /// Overrides the kind's protector for these monsters.
    #[serde(default)]
    pub protector: Option<String>,
}

fn one() -> usize {
    1
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardSpec {
    pub weapons: Vec<Weapon>,
    pub ammunition: BTreeMap<Weapon, u32>,
    pub health: i32,
}

impl From<RewardSpec> for RoomReward {
    fn from(spec: RewardSpec) -> Self {
        let reward = spec
            .weapons
            .into_iter()
            .fold(RoomReward::new(), RoomReward::weapon);
        spec.ammunition
            .into_iter()
            .fold(reward, |reward, (weapon, rounds)| reward.ammunition(weapon, rounds))
            .health(spec.health)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
    pub health: i32,
    /// Weapons owned besides the default one, with their rounds.
    #[serde(default)]
    pub weapons: BTreeMap<Weapon, u32>,
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ScenarioSpec> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }

    /// Resolves kind names through `bestiary` and builds the game.
    pub fn build(
        spec: ScenarioSpec,
        bestiary: &Bestiary,
        config: GameConfig,
    ) -> LoadResult<GameState> {
        let mut builder = GameState::builder().config(config.clone());

        for room in spec.rooms {
            let mut room_builder = RoomBuilder::new(room.name.clone());
            for monster in room.monsters {
                let kind = bestiary
                    .by_name(&monster.kind)
                    .map_err(|e| anyhow::anyhow!("Room '{}': {}", room.name, e))?;
                match &monster.protector {
                    Some(protector) => {
                        let protector = bestiary
                            .by_name(protector)
                            .map_err(|e| anyhow::anyhow!("Room '{}': {}", room.name, e))?;
                        for _ in 0..monster.count {
                            room_builder = room_builder.guarded_monster(kind, protector.id);
                        }
                    }
                    None => room_builder = room_builder.monsters(kind, monster.count),
                }
            }
            builder = builder.room(room_builder.reward(room.reward.into()));
        }

        for player in spec.players {
            let player = player
                .weapons
                .into_iter()
                .fold(
                    Player::builder(player.name, player.health).config(&config),
                    |builder, (weapon, rounds)| builder.weapon(weapon, rounds),
                )
                .build();
            builder = builder.player(player);
        }

        builder
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid scenario: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doom_core::{KindId, RoomId};

    const OUTPOST: &str = r#"
(
    rooms: [
        (
            name: "gate",
            monsters: [(kind: "imp", count: 2)],
            reward: (weapons: [shotgun], ammunition: {shotgun: 4}, health: 10),
        ),
        (
            name: "hall",
            monsters: [
                (kind: "demon"),
                (kind: "spectre", protector: Some("imp")),
            ],
        ),
    ],
    players: [
        (name: "ranger", health: 50, weapons: {pistol: 6}),
        (name: "rookie", health: 30),
    ],
)
"#;

    #[test]
    fn builds_rooms_and_players_in_file_order() {
        let spec = ScenarioLoader::parse(OUTPOST).unwrap();
        let state = ScenarioLoader::build(spec, &Bestiary::classic(), GameConfig::default()).unwrap();

        let names: Vec<&str> = state.rooms().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["gate", "hall"]);
        assert_eq!(state.monsters().count(), 4);

        let gate = state.room(RoomId(0)).unwrap();
        assert!(gate.reward().weapons.has(Weapon::Shotgun));
        assert_eq!(gate.reward().ammunition.get(&Weapon::Shotgun), Some(&4));
        assert_eq!(gate.reward().health, 10);

        let ranger = &state.players()[0];
        assert_eq!(ranger.name(), "ranger");
        assert_eq!(ranger.rounds(Weapon::Pistol), 6);
        assert!(ranger.has_weapon(Weapon::Fist));
        assert!(!state.players()[1].has_weapon(Weapon::Pistol));
    }

    #[test]
    fn custom_protector_overrides_the_kind() {
        let spec = ScenarioLoader::parse(OUTPOST).unwrap();
        let state = ScenarioLoader::build(spec, &Bestiary::classic(), GameConfig::default()).unwrap();

        let hall = state.room(RoomId(1)).unwrap();
        let spectre = hall
            .monsters()
            .find(|m| m.kind().id == KindId(2))
            .unwrap();
        assert_eq!(spectre.protector(), Some(KindId(0)));
    }

    #[test]
    fn unknown_kind_names_the_room() {
        let spec = ScenarioLoader::parse(
            r#"(rooms: [(name: "crypt", monsters: [(kind: "lich")])], players: [])"#,
        )
        .unwrap();
        let err = ScenarioLoader::build(spec, &Bestiary::classic(), GameConfig::default())
            .unwrap_err()
            .to_string();
        assert!(err.contains("crypt"));
        assert!(err.contains("lich"));
    }

    #[test]
    fn empty_room_is_rejected() {
        let spec =
            ScenarioLoader::parse(r#"(rooms: [(name: "void", monsters: [])], players: [])"#).unwrap();
        let err = ScenarioLoader::build(spec, &Bestiary::classic(), GameConfig::default())
            .unwrap_err()
            .to_string();
        assert!(err.contains("Invalid scenario"));
    }
}
