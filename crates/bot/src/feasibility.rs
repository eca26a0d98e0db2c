//! Speculative kill-chain simulation.
//!
//! [`assess`] walks the protector chain of a target monster against a
//! private [`Ledger`] of committed rounds and simulated health. The real
//! player and room are only borrowed immutably, so nothing about them can
//! change while a chain is judged.

use std::collections::{BTreeMap, BTreeSet};

use doom_core::{MonsterId, Player, Room, Weapon};

use crate::resolver::protectors;

/// Why a kill chain cannot be carried out right now.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Infeasible {
    /// Entering the room would leave the player at or below zero health.
    #[error("encounter cost {cost} is not below player health {health}")]
    Overexposed { health: i32, cost: u64 },

    #[error("{0} is not alive in this room")]
    NotAlive(MonsterId),

    #[error("{monster} needs {weapon}, which the player lacks")]
    MissingWeapon { monster: MonsterId, weapon: Weapon },

    #[error("{monster} needs {needed} {weapon} rounds, only {available} left")]
    OutOfRounds {
        monster: MonsterId,
        weapon: Weapon,
        needed: u32,
        available: u32,
    },

    #[error("killing {monster} would cost {exposure} health with {health} left")]
    WouldDie {
        monster: MonsterId,
        health: i64,
        exposure: i64,
    },

    /// The monster protects, through some chain, one of its own protectors.
    #[error("{0} is guarded by a protector cycle")]
    ProtectorCycle(MonsterId),
}

/// A feasible kill chain, as simulated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KillPlan {
    /// Monsters in the order they would die; the target is last.
    pub order: Vec<MonsterId>,
    /// Rounds committed per weapon over the whole chain.
    pub rounds: BTreeMap<Weapon, u32>,
    /// Simulated health once the chain is done.
    pub health_after: i64,
}

/// Running totals of one speculative walk. Lives for one [`assess`] call.
#[derive(Debug)]
struct Ledger {
    committed: BTreeMap<Weapon, u32>,
    health: i64,
    resolved: BTreeSet<MonsterId>,
    order: Vec<MonsterId>,
    in_progress: BTreeSet<MonsterId>,
}

impl Ledger {
    fn new(health: i32) -> Self {
        Self {
            committed: BTreeMap::new(),
            health: i64::from(health),
            resolved: BTreeSet::new(),
            order: Vec::new(),
            in_progress: BTreeSet::new(),
        }
    }

    fn committed(&self, weapon: Weapon) -> u32 {
        self.committed.get(&weapon).copied().unwrap_or(0)
    }

    fn commit(&mut self, weapon: Weapon, rounds: u32) {
        let slot = self.committed.entry(weapon).or_default();
        *slot = slot.saturating_add(rounds);
    }

    fn resolve(&mut self, monster: MonsterId, exposure: i64) {
        self.health -= exposure;
        self.resolved.insert(monster);
        self.order.push(monster);
    }
}

/// Returns true if `player` can kill `monster` in `room` together with every
/// protector standing in the way, without running out of rounds or health.
pub fn can_kill(player: &Player, room: &Room, monster: MonsterId) -> bool {
    assess(player, room, monster).is_ok()
}

/// Simulates the kill chain for `monster` and returns the plan, or the first
/// reason it fails.
pub fn assess(player: &Player, room: &Room, monster: MonsterId) -> Result<KillPlan, Infeasible> {
    let cost = room.encounter_cost();
    if !u64::try_from(player.health()).is_ok_and(|health| health > cost) {
        return Err(Infeasible::Overexposed {
            health: player.health(),
            cost,
        });
    }

    let mut ledger = Ledger::new(player.health());
    walk(player, room, monster, &mut ledger)?;
    Ok(KillPlan {
        order: ledger.order,
        rounds: ledger.committed,
        health_after: ledger.health,
    })
}

fn walk(player: &Player, room: &Room, id: MonsterId, ledger: &mut Ledger) -> Result<(), Infeasible> {
    let monster = room
        .monster(id)
        .filter(|m| m.is_alive() && !ledger.resolved.contains(&id))
        .ok_or(Infeasible::NotAlive(id))?;

    let kind = *monster.kind();
    if !player.has_weapon(kind.weapon) {
        return Err(Infeasible::MissingWeapon {
            monster: id,
            weapon: kind.weapon,
        });
    }

    if !ledger.in_progress.insert(id) {
        return Err(Infeasible::ProtectorCycle(id));
    }
    for protector in protectors(room, id) {
        // shared protectors are resolved once, by whichever branch got there first
        if ledger.resolved.contains(&protector) {
            continue;
        }
        if ledger.in_progress.contains(&protector) {
            return Err(Infeasible::ProtectorCycle(protector));
        }
        walk(player, room, protector, ledger)?;
    }
    ledger.in_progress.remove(&id);

    let needed = kind.rounds_to_kill();
    let available = player
        .rounds(kind.weapon)
        .saturating_sub(ledger.committed(kind.weapon));
    if available < needed {
        return Err(Infeasible::OutOfRounds {
            monster: id,
            weapon: kind.weapon,
            needed,
            available,
        });
    }
    ledger.commit(kind.weapon, needed);

    // Exposure to every monster still standing at this point of the chain,
    // the target included.
    let exposure: i64 = room
        .live_monsters()
        .filter(|m| !ledger.resolved.contains(&m.id()))
        .map(|m| i64::from(m.kind().exposure))
        .sum();
    if ledger.health - exposure <= 0 {
        return Err(Infeasible::WouldDie {
            monster: id,
            health: ledger.health,
            exposure,
        });
    }

    ledger.resolve(id, exposure);
    Ok(())
}
