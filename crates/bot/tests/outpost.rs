//! Solves the sample scenario from the workspace data directory.

use std::path::PathBuf;

use doom_bot::GameBot;
use doom_content::ContentFactory;
use doom_core::{RoomId, Weapon};

#[test]
fn outpost_is_cleared_in_two_productive_passes() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data");
    let state = ContentFactory::new(dir)
        .load_scenario("outpost")
        .expect("sample scenario loads");
    let mut bot = GameBot::new(state);

    assert_eq!(bot.pass_through_rooms(), Ok(vec![RoomId(1)]));
    assert_eq!(bot.pass_through_rooms(), Ok(vec![RoomId(0), RoomId(2)]));
    assert_eq!(bot.play(), Ok(true));
    assert_eq!(bot.passes(), 3);

    let ranger = bot.player_by_name("ranger").expect("ranger");
    assert_eq!(ranger.health(), 89);
    assert_eq!(ranger.rounds(Weapon::Pistol), 3);
    assert_eq!(ranger.rounds(Weapon::RocketLauncher), 5);
    assert_eq!(bot.player_by_name("rookie").map(|p| p.health()), Some(60));
}
