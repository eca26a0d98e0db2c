//! Invariants of the solver that hold for any game, checked on a handful of
//! representative configurations.

use std::collections::BTreeSet;

use doom_bot::{GameBot, assess};
use doom_core::{
    GameState, KindId, MonsterKind, Player, PlayerId, RoomBuilder, RoomId, Weapon,
};

fn arsenal(name: &str, health: i32) -> Player {
    Player::builder(name, health)
        .weapon(Weapon::Pistol, 12)
        .weapon(Weapon::Shotgun, 12)
        .weapon(Weapon::Chaingun, 12)
        .build()
}

fn crowded() -> GameState {
    GameState::builder()
        .room(
            RoomBuilder::new("barracks")
                .monster(MonsterKind::SPECTRE)
                .monsters(MonsterKind::DEMON, 2)
                .monster(MonsterKind::IMP),
        )
        .room(RoomBuilder::new("annex").monsters(MonsterKind::IMP, 3))
        .room(
            RoomBuilder::new("keep")
                .monster(MonsterKind::BARON_OF_HELL)
                .reward_health(25),
        )
        .player(arsenal("alpha", 60))
        .player(arsenal("bravo", 40))
        .build()
        .expect("valid game")
}

#[test]
fn feasibility_checks_leave_the_game_untouched() {
    let bot = GameBot::new(crowded());
    let before = bot.state().digest();

    let rooms: Vec<RoomId> = bot.state().room_ids().collect();
    let players: Vec<PlayerId> = bot.state().player_ids().collect();
    for &room in &rooms {
        let monsters = bot.room(room).map(|r| r.live_snapshot()).unwrap_or_default();
        for monster in monsters {
            for &player in &players {
                let _ = bot.can_kill(player, monster, room);
            }
        }
    }

    assert_eq!(hex::encode(before), hex::encode(bot.state().digest()));
}

#[test]
fn feasible_kill_succeeds_and_clears_the_whole_chain() {
    let mut bot = GameBot::new(crowded());
    let (player, room) = (PlayerId(0), RoomId(0));
    let target = bot
        .room(room)
        .and_then(|r| r.live_monsters().last().map(|m| m.id()))
        .expect("barracks has monsters");

    let plan = {
        let state = bot.state();
        assess(
            state.player(player).expect("player"),
            state.room(room).expect("room"),
            target,
        )
        .expect("alpha can clear the barracks")
    };
    assert!(bot.can_kill(player, target, room));
    bot.kill_monster(player, room, target).expect("kill succeeds");

    let barracks = bot.room(room).expect("room");
    for id in &plan.order {
        assert!(!barracks.is_alive(*id), "{id} should be dead");
    }
    assert_eq!(
        bot.player(player).map(|p| i64::from(p.health())),
        Some(plan.health_after)
    );
}

#[test]
fn completed_rooms_only_grow() {
    let mut bot = GameBot::new(crowded());
    let mut seen = BTreeSet::new();

    for _ in 0..4 {
        bot.pass_through_rooms().expect("pass runs");
        let now = bot.completed_rooms().clone();
        assert!(now.is_superset(&seen));
        assert!(now.is_disjoint(bot.uncompleted_rooms()));
        seen = now;
    }
}

#[test]
fn hopeless_game_stops_after_one_pass() {
    let state = GameState::builder()
        .room(RoomBuilder::new("keep").monster(MonsterKind::BARON_OF_HELL))
        .basic_player("rookie", 100)
        .build()
        .expect("valid game");
    let mut bot = GameBot::new(state);
    let before = bot.state().digest();

    assert_eq!(bot.play(), Ok(false));
    assert_eq!(bot.passes(), 1);
    assert_eq!(before, bot.state().digest());
}

#[test]
fn protector_cycle_terminates_without_progress() {
    let left = MonsterKind::new(KindId(0), Weapon::Pistol, 1, 1).protected_by(KindId(1));
    let right = MonsterKind::new(KindId(1), Weapon::Pistol, 1, 1).protected_by(KindId(0));
    let state = GameState::builder()
        .room(RoomBuilder::new("loop").monster(left).monster(right))
        .room(RoomBuilder::new("side").monster(MonsterKind::IMP))
        .player(arsenal("alpha", 30))
        .build()
        .expect("valid game");
    let mut bot = GameBot::new(state);

    assert_eq!(bot.play(), Ok(false));
    assert_eq!(bot.completed_rooms().iter().copied().collect::<Vec<_>>(), vec![RoomId(1)]);
    assert_eq!(bot.room(RoomId(0)).map(|r| r.live_count()), Some(2));
}

#[test]
fn completion_reward_is_granted_once() {
    let state = GameState::builder()
        .room(
            RoomBuilder::new("shrine")
                .monster(MonsterKind::IMP)
                .reward_health(10),
        )
        .player(arsenal("alpha", 20))
        .player(arsenal("bravo", 20))
        .build()
        .expect("valid game");
    let mut bot = GameBot::new(state);

    assert_eq!(bot.play(), Ok(true));
    assert_eq!(bot.player(PlayerId(0)).map(Player::health), Some(29));
    assert_eq!(bot.reap_completion_rewards(PlayerId(0), RoomId(0)), Ok(false));
    assert_eq!(bot.reap_completion_rewards(PlayerId(1), RoomId(0)), Ok(false));
    assert_eq!(bot.player(PlayerId(1)).map(Player::health), Some(20));
}

#[test]
fn readiness_orders_live_players() {
    let state = GameState::builder()
        .room(RoomBuilder::new("hall").monster(MonsterKind::IMP))
        .player(arsenal("alpha", 60))
        .basic_player("rookie", 100)
        .player(Player::builder("scout", 10).weapon(Weapon::Shotgun, 2).build())
        .build()
        .expect("valid game");
    let bot = GameBot::new(state);

    assert_eq!(bot.live_players(), vec![PlayerId(1), PlayerId(2), PlayerId(0)]);
    assert_eq!(bot.live_players_with(Weapon::Shotgun, 5), vec![PlayerId(0)]);
}

#[test]
fn huge_exposures_make_kills_infeasible_instead_of_wrapping() {
    let heavy = MonsterKind::new(KindId(0), Weapon::Pistol, 1, u32::MAX / 2 + 1);
    let state = GameState::builder()
        .room(RoomBuilder::new("furnace").monsters(heavy, 2))
        .player(arsenal("alpha", i32::MAX))
        .build()
        .expect("valid game");
    let mut bot = GameBot::new(state);

    assert!(!bot.can_kill(PlayerId(0), doom_core::MonsterId(0), RoomId(0)));
    assert_eq!(bot.play(), Ok(false));
    assert_eq!(bot.player(PlayerId(0)).map(Player::health), Some(i32::MAX));
}
