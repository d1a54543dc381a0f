//! Rendering of `look` output.
//!
//! Every description starts with the subject's name on its own line followed
//! by its description text, even when that text is empty. Rooms then append
//! a `Contents:` line and an `Exits:` line when they have something to list;
//! the player appends a `Carrying:` line. List lines end with a period and
//! separate names with a comma and a space. Returned strings never carry a
//! trailing newline; an empty description shows up as an empty line.

use crate::entity::{Room, RoomId, ThingId};
use crate::world::World;

/// What a `look` can be aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// The player (`look me`).
    Player,
    /// A room, normally the one the player is standing in.
    Room(RoomId),
    /// A single thing.
    Thing(ThingId),
}

/// Render the description of a subject. Returns `None` when the subject's
/// id does not exist in this world.
pub fn describe(world: &World, subject: Subject) -> Option<String> {
    match subject {
        Subject::Player => Some(describe_player(world)),
        Subject::Room(id) => world.room(id).map(|room| describe_room(world, room)),
        Subject::Thing(id) => world
            .thing(id)
            .map(|thing| format!("{}\n{}", thing.name, thing.description)),
    }
}

fn describe_player(world: &World) -> String {
    let player = world.player();
    let mut out = format!("{}\n{}", player.name, player.description);
    if !player.inventory.is_empty() {
        out.push_str(&format!(
            "\nCarrying: {}.",
            thing_names(world, &player.inventory)
        ));
    }
    out
}

fn describe_room(world: &World, room: &Room) -> String {
    let mut out = format!("{}\n{}", room.name, room.description);
    if !room.contents.is_empty() {
        out.push_str(&format!(
            "\nContents: {}.",
            thing_names(world, &room.contents)
        ));
    }
    if !room.exits.is_empty() {
        let names: Vec<&str> = room.exits.iter().map(|e| e.name.as_str()).collect();
        out.push_str(&format!("\nExits: {}.", names.join(", ")));
    }
    out
}

fn thing_names(world: &World, ids: &[ThingId]) -> String {
    let names: Vec<&str> = ids
        .iter()
        .filter_map(|&id| world.thing(id).map(|t| t.name.as_str()))
        .collect();
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Exit, Player, PlayerId, Thing};

    fn test_world() -> World {
        let things = vec![
            Thing::new(ThingId(1), "lamp").with_description("A battered brass lamp."),
            Thing::new(ThingId(2), "rope").with_description("Coiled hemp, slightly frayed."),
            Thing::new(ThingId(3), "coin").with_description("A worn silver coin."),
        ];
        let rooms = vec![
            Room::new(RoomId(1), "tower")
                .with_description("Dust covers every surface.")
                .with_thing(ThingId(1))
                .with_thing(ThingId(2))
                .with_exit(Exit::new("down", RoomId(2)))
                .with_exit(Exit::new("window", RoomId(2))),
            Room::new(RoomId(2), "yard"),
        ];
        let player = Player::new(PlayerId(1), "wanderer", RoomId(1))
            .with_description("Tired but determined.")
            .with_thing(ThingId(3));
        World::new(things, rooms, player).unwrap()
    }

    #[test]
    fn thing_is_name_then_description() {
        let world = test_world();
        let out = describe(&world, Subject::Thing(ThingId(1))).unwrap();
        insta::assert_snapshot!(out, @r"
lamp
A battered brass lamp.
");
    }

    #[test]
    fn room_lists_contents_and_exits() {
        let world = test_world();
        let out = describe(&world, Subject::Room(RoomId(1))).unwrap();
        insta::assert_snapshot!(out, @r"
tower
Dust covers every surface.
Contents: lamp, rope.
Exits: down, window.
");
    }

    #[test]
    fn player_lists_carried_things() {
        let world = test_world();
        let out = describe(&world, Subject::Player).unwrap();
        insta::assert_snapshot!(out, @r"
wanderer
Tired but determined.
Carrying: coin.
");
    }

    #[test]
    fn empty_description_renders_as_empty_line() {
        let world = test_world();
        let out = describe(&world, Subject::Room(RoomId(2))).unwrap();
        assert_eq!(out, "yard\n");
    }

    #[test]
    fn empty_room_and_empty_hands_list_nothing() {
        let world = test_world();
        let out = describe(&world, Subject::Room(RoomId(2))).unwrap();
        assert!(!out.contains("Contents:"));
        assert!(!out.contains("Exits:"));

        let things = vec![Thing::new(ThingId(1), "lamp")];
        let rooms = vec![Room::new(RoomId(1), "cell").with_thing(ThingId(1))];
        let player = Player::new(PlayerId(1), "p", RoomId(1));
        let world = World::new(things, rooms, player).unwrap();
        let out = describe(&world, Subject::Player).unwrap();
        assert!(!out.contains("Carrying:"));
    }

    #[test]
    fn unknown_ids_describe_to_none() {
        let world = test_world();
        assert_eq!(describe(&world, Subject::Thing(ThingId(99))), None);
        assert_eq!(describe(&world, Subject::Room(RoomId(99))), None);
    }
}
