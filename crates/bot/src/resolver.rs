//! Protector dependency resolution.

use std::collections::BTreeSet;

use doom_core::{KillOrder, Monster, MonsterId, Room};

/// Every living monster of `room` that must die before `monster`, directly or
/// through a chain of protectors, in kill order.
///
/// The result never contains `monster` itself or a dead monster, and the
/// room is only read. Each monster is collected at most once, so cyclic
/// protector relations terminate. An id that is not in the room has no
/// protectors.
pub fn protectors(room: &Room, monster: MonsterId) -> Vec<MonsterId> {
    let Some(target) = room.monster(monster) else {
        return Vec::new();
    };

    let mut found = BTreeSet::new();
    collect(room, target, monster, &mut found);
    found.into_iter().map(|order| order.id).collect()
}

fn collect(room: &Room, monster: &Monster, origin: MonsterId, found: &mut BTreeSet<KillOrder>) {
    for candidate in room.live_monsters() {
        if candidate.id() == origin || found.contains(&candidate.order()) {
            continue;
        }
        if monster.is_protected_by(candidate) {
            found.insert(candidate.order());
            collect(room, candidate, origin, found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doom_core::{MonsterKind, Room, RoomId, RoomReward, Weapon};

    fn room(monsters: Vec<Monster>) -> Room {
        Room::new(RoomId(0), "test", monsters, RoomReward::new())
    }

    #[test]
    fn follows_the_chain_transitively() {
        let mut room = room(vec![
            Monster::new(MonsterId(0), MonsterKind::BARON_OF_HELL),
            Monster::new(MonsterId(1), MonsterKind::SPECTRE),
            Monster::new(MonsterId(2), MonsterKind::DEMON),
            Monster::new(MonsterId(3), MonsterKind::IMP),
            Monster::new(MonsterId(4), MonsterKind::IMP),
        ]);

        assert_eq!(
            protectors(&room, MonsterId(0)),
            vec![MonsterId(3), MonsterId(4), MonsterId(2), MonsterId(1)]
        );
        assert_eq!(protectors(&room, MonsterId(2)), vec![MonsterId(3), MonsterId(4)]);
        assert!(protectors(&room, MonsterId(3)).is_empty());

        room.attack_monster(MonsterId(3), Weapon::Pistol, 3).unwrap();
        assert_eq!(protectors(&room, MonsterId(2)), vec![MonsterId(4)]);
    }

    #[test]
    fn dead_link_cuts_the_chain() {
        let mut room = room(vec![
            Monster::new(MonsterId(0), MonsterKind::SPECTRE),
            Monster::new(MonsterId(1), MonsterKind::DEMON),
            Monster::new(MonsterId(2), MonsterKind::IMP),
        ]);
        room.attack_monster(MonsterId(1), Weapon::Shotgun, 4).unwrap();
        assert!(protectors(&room, MonsterId(0)).is_empty());
    }

    #[test]
    fn cycles_exclude_the_origin() {
        let imp = MonsterKind::IMP.protected_by(MonsterKind::DEMON.id);
        let room = room(vec![
            Monster::new(MonsterId(0), imp),
            Monster::new(MonsterId(1), MonsterKind::DEMON),
        ]);
        assert_eq!(protectors(&room, MonsterId(0)), vec![MonsterId(1)]);
        assert_eq!(protectors(&room, MonsterId(1)), vec![MonsterId(0)]);
    }

    #[test]
    fn unknown_monster_has_no_protectors() {
        let room = room(vec![Monster::new(MonsterId(0), MonsterKind::IMP)]);
        assert!(protectors(&room, MonsterId(9)).is_empty());
    }
}
