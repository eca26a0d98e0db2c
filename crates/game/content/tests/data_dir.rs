//! Loads the sample data directory shipped with the workspace.

use std::path::PathBuf;

use doom_content::ContentFactory;
use doom_core::{Bestiary, RoomId, Weapon};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

#[test]
fn sample_bestiary_is_the_classic_one() {
    let factory = ContentFactory::new(data_dir());
    assert_eq!(factory.load_bestiary().unwrap(), Bestiary::classic());
}

#[test]
fn outpost_scenario_loads() {
    let state = ContentFactory::new(data_dir())
        .load_scenario("outpost")
        .unwrap();

    assert_eq!(state.rooms().len(), 3);
    assert_eq!(state.monsters().count(), 7);
    assert_eq!(state.players().len(), 2);

    let armory = state.room(RoomId(1)).unwrap();
    assert_eq!(armory.name(), "armory");
    assert_eq!(armory.reward().health, 20);
    assert!(armory.reward().weapons.has(Weapon::Chaingun));

    let ranger = state.player(doom_core::PlayerId(0)).unwrap();
    assert_eq!(ranger.rounds(Weapon::Pistol), 12);
}
