//! The convergence loop.
//!
//! [`GameBot`] owns a [`GameState`] and repeatedly sweeps every room,
//! monster and player, committing each feasible kill, until a full pass
//! completes no new room.

use std::collections::BTreeSet;

use doom_core::{GameState, Monster, MonsterId, Player, PlayerId, Room, RoomId, Weapon};
use tracing::{debug, info, warn};

use crate::error::BotError;
use crate::execution::kill_monster;
use crate::feasibility::assess;

/// Plays a game to completion, or to the point where no progress is possible.
#[derive(Clone, Debug)]
pub struct GameBot {
    state: GameState,
    completed: BTreeSet<RoomId>,
    uncompleted: BTreeSet<RoomId>,
    rewarded: BTreeSet<RoomId>,
    passes: u32,
}

impl GameBot {
    pub fn new(state: GameState) -> Self {
        let uncompleted = state.room_ids().collect();
        Self {
            state,
            completed: BTreeSet::new(),
            uncompleted,
            rewarded: BTreeSet::new(),
            passes: 0,
        }
    }

    /// Runs passes while each one completes at least one more room.
    ///
    /// Returns true if every room ended up completed. A false return means
    /// the game is stuck: another pass would change nothing.
    pub fn play(&mut self) -> Result<bool, BotError> {
        let mut completed = self.completed.len();
        loop {
            self.pass_through_rooms()?;
            let now = self.completed.len();
            if now <= completed {
                break;
            }
            completed = now;
        }

        let cleared = self.uncompleted.is_empty();
        if cleared {
            info!(
                target: "doom_bot::bot",
                passes = self.passes,
                rooms = self.completed.len(),
                "all rooms cleared"
            );
        } else {
            warn!(
                target: "doom_bot::bot",
                passes = self.passes,
                completed = self.completed.len(),
                remaining = self.uncompleted.len(),
                "no further progress possible"
            );
        }
        Ok(cleared)
    }

    /// One sweep over every room, live monster and player, in construction
    /// order. Returns the rooms completed during this pass.
    ///
    /// Each room's live monsters are snapshotted before the room is swept,
    /// so kills made during the sweep do not disturb the iteration.
    pub fn pass_through_rooms(&mut self) -> Result<Vec<RoomId>, BotError> {
        self.passes += 1;
        let before = self.completed.clone();
        let rooms: Vec<RoomId> = self.state.room_ids().collect();
        let players: Vec<PlayerId> = self.state.player_ids().collect();

        for room in rooms {
            let snapshot = self.room_ref(room)?.live_snapshot();
            for monster in snapshot {
                for &player in &players {
                    if self.can_kill(player, monster, room) {
                        self.kill_monster(player, room, monster)?;
                        if self.room_ref(room)?.is_completed() {
                            self.reap_completion_rewards(player, room)?;
                        }
                    }
                }
            }
        }

        self.refresh_completion();
        let newly: Vec<RoomId> = self.completed.difference(&before).copied().collect();
        info!(
            target: "doom_bot::bot",
            pass = self.passes,
            newly_completed = newly.len(),
            completed = self.completed.len(),
            remaining = self.uncompleted.len(),
            "pass finished"
        );
        Ok(newly)
    }

    /// Can `player` kill `monster` in `room` right now, protectors included?
    ///
    /// Unknown ids answer false.
    pub fn can_kill(&self, player: PlayerId, monster: MonsterId, room: RoomId) -> bool {
        let (Some(player_state), Some(room_state)) = (self.state.player(player), self.state.room(room))
        else {
            return false;
        };

        match assess(player_state, room_state, monster) {
            Ok(plan) => {
                debug!(
                    target: "doom_bot::feasibility",
                    player = player_state.name(),
                    room = room_state.name(),
                    %monster,
                    chain = plan.order.len(),
                    health_after = plan.health_after,
                    "kill is feasible"
                );
                true
            }
            Err(reason) => {
                debug!(
                    target: "doom_bot::feasibility",
                    player = player_state.name(),
                    room = room_state.name(),
                    %monster,
                    %reason,
                    "kill is infeasible"
                );
                false
            }
        }
    }

    /// Commits the kill chain for `monster`. [`GameBot::can_kill`] must have
    /// returned true for the same arguments.
    pub fn kill_monster(
        &mut self,
        player: PlayerId,
        room: RoomId,
        monster: MonsterId,
    ) -> Result<(), BotError> {
        let (room_state, player_state) = self.entities_mut(room, player)?;
        kill_monster(player_state, room_state, monster)?;
        let completed = room_state.is_completed();
        if completed {
            self.mark_completed(room);
        }
        Ok(())
    }

    /// Grants the room's completion reward to `player`.
    ///
    /// Returns false, granting nothing, if the room is not completed or its
    /// reward was already claimed.
    pub fn reap_completion_rewards(&mut self, player: PlayerId, room: RoomId) -> Result<bool, BotError> {
        if self.rewarded.contains(&room) {
            return Ok(false);
        }
        let (room_state, player_state) = self.entities_mut(room, player)?;
        if !room_state.is_completed() {
            return Ok(false);
        }

        let reward = room_state.reward();
        for weapon in reward.weapons.weapons() {
            player_state.add_weapon(weapon)?;
        }
        for (&weapon, &rounds) in &reward.ammunition {
            player_state.add_ammunition(weapon, rounds)?;
        }
        player_state.change_health(reward.health)?;

        info!(
            target: "doom_bot::bot",
            player = player_state.name(),
            room = room_state.name(),
            weapons = ?reward.weapons,
            health = player_state.health(),
            "room completed, reward granted"
        );
        self.rewarded.insert(room);
        Ok(true)
    }

    fn mark_completed(&mut self, room: RoomId) -> bool {
        self.uncompleted.remove(&room);
        self.completed.insert(room)
    }

    /// Moves every room whose live set is empty to the completed set.
    fn refresh_completion(&mut self) {
        let done: Vec<RoomId> = self
            .state
            .rooms()
            .iter()
            .filter(|room| room.is_completed())
            .map(Room::id)
            .collect();
        for room in done {
            self.mark_completed(room);
        }
    }

    fn entities_mut(
        &mut self,
        room: RoomId,
        player: PlayerId,
    ) -> Result<(&mut Room, &mut Player), BotError> {
        if self.state.room(room).is_none() {
            return Err(BotError::UnknownRoom(room));
        }
        self.state
            .room_and_player_mut(room, player)
            .ok_or(BotError::UnknownPlayer(player))
    }

    fn room_ref(&self, room: RoomId) -> Result<&Room, BotError> {
        self.state.room(room).ok_or(BotError::UnknownRoom(room))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Number of passes run so far.
    pub fn passes(&self) -> u32 {
        self.passes
    }

    pub fn completed_rooms(&self) -> &BTreeSet<RoomId> {
        &self.completed
    }

    pub fn uncompleted_rooms(&self) -> &BTreeSet<RoomId> {
        &self.uncompleted
    }

    pub fn all_rooms(&self) -> &[Room] {
        self.state.rooms()
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.state.room(id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.state.player(id)
    }

    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.state.player_id(name).and_then(|id| self.state.player(id))
    }

    /// The monster pool: every monster of every room.
    pub fn monsters(&self) -> impl Iterator<Item = &Monster> {
        self.state.monsters()
    }

    /// Living players, least ready first; construction order breaks ties.
    pub fn live_players(&self) -> Vec<PlayerId> {
        self.live_players_matching(|_| true)
    }

    /// Living players owning `weapon` with at least `rounds` for it.
    pub fn live_players_with(&self, weapon: Weapon, rounds: u32) -> Vec<PlayerId> {
        self.live_players_matching(|player| {
            player.has_weapon(weapon) && player.rounds(weapon) >= rounds
        })
    }

    fn live_players_matching(&self, filter: impl Fn(&Player) -> bool) -> Vec<PlayerId> {
        let mut live: Vec<(PlayerId, &Player)> = self
            .state
            .player_ids()
            .filter_map(|id| self.state.player(id).map(|player| (id, player)))
            .filter(|(_, player)| player.is_alive() && filter(player))
            .collect();
        live.sort_by_key(|(id, player)| (player.readiness(), *id));
        live.into_iter().map(|(id, _)| id).collect()
    }
}
