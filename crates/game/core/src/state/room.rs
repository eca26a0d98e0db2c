use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::{Weapon, WeaponSet};

use super::{InvalidOperation, KillOrder, Monster, MonsterId, RoomId};

/// Payload granted once to the player who kills a room's last living monster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomReward {
    pub weapons: WeaponSet,
    pub ammunition: BTreeMap<Weapon, u32>,
    pub health: i32,
}

impl RoomReward {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn weapon(mut self, weapon: Weapon) -> Self {
        self.weapons.add(weapon);
        self
    }

    #[must_use]
    pub fn ammunition(mut self, weapon: Weapon, rounds: u32) -> Self {
        *self.ammunition.entry(weapon).or_default() += rounds;
        self
    }

    #[must_use]
    pub fn health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }
}

/// A room holding a fixed set of monsters.
///
/// The monsters are partitioned into alive and dead subsets at all times,
/// both kept in [`KillOrder`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    id: RoomId,
    name: String,
    monsters: BTreeMap<MonsterId, Monster>,
    alive: BTreeSet<KillOrder>,
    dead: BTreeSet<KillOrder>,
    danger_level: u32,
    reward: RoomReward,
}

impl Room {
    pub fn new(
        id: RoomId,
        name: impl Into<String>,
        monsters: impl IntoIterator<Item = Monster>,
        reward: RoomReward,
    ) -> Self {
        let mut monsters: BTreeMap<MonsterId, Monster> =
            monsters.into_iter().map(|m| (m.id(), m)).collect();

        let positions = kill_positions(&monsters);
        for (id, position) in positions {
            if let Some(monster) = monsters.get_mut(&id) {
                monster.set_position(position);
            }
        }

        let mut room = Self {
            id,
            name: name.into(),
            monsters,
            alive: BTreeSet::new(),
            dead: BTreeSet::new(),
            danger_level: 0,
            reward,
        };
        for monster in room.monsters.values() {
            if monster.is_alive() {
                room.alive.insert(monster.order());
            } else {
                room.dead.insert(monster.order());
            }
        }
        room.danger_level = room.recompute_danger_level();
        room
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reward(&self) -> &RoomReward {
        &self.reward
    }

    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.get(&id)
    }

    pub fn contains(&self, id: MonsterId) -> bool {
        self.monsters.contains_key(&id)
    }

    pub fn is_alive(&self, id: MonsterId) -> bool {
        self.monsters.get(&id).is_some_and(Monster::is_alive)
    }

    /// Every monster in the room, alive or dead, in kill order.
    pub fn monsters(&self) -> impl Iterator<Item = &Monster> {
        let mut all: Vec<&KillOrder> = self.alive.iter().chain(self.dead.iter()).collect();
        all.sort();
        all.into_iter().filter_map(|order| self.monsters.get(&order.id))
    }

    /// Living monsters in kill order.
    pub fn live_monsters(&self) -> impl Iterator<Item = &Monster> {
        self.alive.iter().filter_map(|order| self.monsters.get(&order.id))
    }

    pub fn dead_monsters(&self) -> impl Iterator<Item = &Monster> {
        self.dead.iter().filter_map(|order| self.monsters.get(&order.id))
    }

    /// IDs of the living monsters at this moment, in kill order.
    pub fn live_snapshot(&self) -> Vec<MonsterId> {
        self.alive.iter().map(|order| order.id).collect()
    }

    pub fn live_count(&self) -> usize {
        self.alive.len()
    }

    /// Health a player loses per encounter: the exposure cost of every living monster.
    ///
    /// Summed in `u64` so that any `u32` exposures fit.
    pub fn encounter_cost(&self) -> u64 {
        self.live_monsters().map(|m| u64::from(m.kind().exposure)).sum()
    }

    /// Sum of (kind rank + 1) over living monsters, maintained as monsters die.
    pub fn danger_level(&self) -> u32 {
        self.danger_level
    }

    /// Danger level computed from scratch over the live set.
    pub fn recompute_danger_level(&self) -> u32 {
        self.live_monsters().map(|m| m.kind().danger()).sum()
    }

    pub fn is_completed(&self) -> bool {
        self.alive.is_empty()
    }

    /// Attacks one of this room's monsters, moving it to the dead set if the
    /// attack kills it. Returns whether it died.
    pub fn attack_monster(
        &mut self,
        id: MonsterId,
        weapon: Weapon,
        rounds: u32,
    ) -> Result<bool, InvalidOperation> {
        let room = self.id;
        let monster = self
            .monsters
            .get_mut(&id)
            .ok_or(InvalidOperation::MonsterNotInRoom { monster: id, room })?;

        let died = monster.attack(weapon, rounds)?;
        if died {
            let order = monster.order();
            let danger = monster.kind().danger();
            self.alive.remove(&order);
            self.dead.insert(order);
            self.danger_level = self.danger_level.saturating_sub(danger);
        }
        Ok(died)
    }
}

/// Kill sequence of a room: protectors before the monsters they protect,
/// otherwise lowest kind rank first, then lowest id.
///
/// Protector edges are collected depth-first and an edge back onto the
/// current path is dropped, so a protector cycle still yields a sequence.
fn kill_positions(monsters: &BTreeMap<MonsterId, Monster>) -> BTreeMap<MonsterId, u32> {
    fn collect(
        id: MonsterId,
        monsters: &BTreeMap<MonsterId, Monster>,
        prerequisites: &mut BTreeMap<MonsterId, BTreeSet<MonsterId>>,
        stack: &mut BTreeSet<MonsterId>,
    ) {
        if prerequisites.contains_key(&id) {
            return;
        }
        let Some(monster) = monsters.get(&id) else {
            return;
        };
        stack.insert(id);
        prerequisites.insert(id, BTreeSet::new());
        for other in monsters.values() {
            if !monster.is_protected_by(other) || stack.contains(&other.id()) {
                continue;
            }
            if let Some(edges) = prerequisites.get_mut(&id) {
                edges.insert(other.id());
            }
            collect(other.id(), monsters, prerequisites, stack);
        }
        stack.remove(&id);
    }

    let mut prerequisites = BTreeMap::new();
    let mut stack = BTreeSet::new();
    for id in monsters.keys() {
        collect(*id, monsters, &mut prerequisites, &mut stack);
    }

    let mut dependents: BTreeMap<MonsterId, Vec<MonsterId>> = BTreeMap::new();
    for (id, edges) in &prerequisites {
        for protector in edges {
            dependents.entry(*protector).or_default().push(*id);
        }
    }
    let mut waiting: BTreeMap<MonsterId, usize> = prerequisites
        .iter()
        .map(|(id, edges)| (*id, edges.len()))
        .collect();

    let key = |id: MonsterId| (monsters.get(&id).map_or(0, |m| m.kind().rank()), id);
    let mut ready: BTreeSet<(u8, MonsterId)> = waiting
        .iter()
        .filter(|(_, count)| **count == 0)
        .map(|(id, _)| key(*id))
        .collect();

    let mut positions = BTreeMap::new();
    let mut next: u32 = 0;
    while let Some((_, id)) = ready.pop_first() {
        positions.insert(id, next);
        next = next.saturating_add(1);
        for dependent in dependents.get(&id).into_iter().flatten() {
            if let Some(count) = waiting.get_mut(dependent) {
                *count -= 1;
                if *count == 0 {
                    ready.insert(key(*dependent));
                }
            }
        }
    }
    positions
}
