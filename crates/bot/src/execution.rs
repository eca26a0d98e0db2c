//! Committing a kill chain to real state.

use std::collections::BTreeSet;

use doom_core::{InvalidOperation, MonsterId, Player, Room};
use tracing::debug;

use crate::error::BotError;
use crate::resolver::protectors;

/// Has `player` kill every living protector of `monster`, then `monster`
/// itself, mutating the room and the player for real.
///
/// [`can_kill`](crate::can_kill) must have returned true for the same
/// player, room and monster; feasibility is not checked again here. Each
/// kill costs the player the room's encounter cost at that moment and
/// exactly the rounds the monster's kind requires.
pub fn kill_monster(player: &mut Player, room: &mut Room, monster: MonsterId) -> Result<(), BotError> {
    let mut in_progress = BTreeSet::new();
    kill(player, room, monster, &mut in_progress)
}

fn kill(
    player: &mut Player,
    room: &mut Room,
    id: MonsterId,
    in_progress: &mut BTreeSet<MonsterId>,
) -> Result<(), BotError> {
    if !in_progress.insert(id) {
        return Err(BotError::ProtectorCycle {
            room: room.id(),
            monster: id,
        });
    }
    for protector in protectors(room, id) {
        // an earlier branch of this chain may already have killed it
        if room.is_alive(protector) {
            kill(player, room, protector, in_progress)?;
        }
    }
    in_progress.remove(&id);

    let kind = *room
        .monster(id)
        .ok_or(InvalidOperation::MonsterNotInRoom {
            monster: id,
            room: room.id(),
        })?
        .kind();

    let cost = room.encounter_cost();
    player.change_health(-i32::try_from(cost).unwrap_or(i32::MAX))?;
    let rounds = kind.rounds_to_kill();
    room.attack_monster(id, kind.weapon, rounds)?;
    player.spend_rounds(kind.weapon, rounds)?;

    debug!(
        target: "doom_bot::execution",
        player = player.name(),
        room = room.name(),
        monster = %id,
        weapon = %kind.weapon,
        rounds,
        cost,
        health = player.health(),
        "monster killed"
    );
    Ok(())
}
