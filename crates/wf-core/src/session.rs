//! The interactive session: one world, one player, a turn loop over text.
//!
//! Every command produces exactly one response string; commands never fail
//! out of the loop. The fixed responses live here as constants so that the
//! CLI and the tests agree on the exact wording.

use crate::command::{Command, parse_command};
use crate::describe::{Subject, describe};
use crate::world::World;

/// Response when `look <name>` finds nothing by that name.
pub const LOOK_FAIL: &str = "You don't see that here.";
/// Response to `inventory` with empty hands.
pub const INVENTORY_EMPTY: &str = "You aren't carrying anything.";
/// Response to a successful `take`.
pub const TAKE_OK: &str = "Taken.";
/// Response when `take` names nothing that can be picked up here.
pub const TAKE_FAIL: &str = "You can't take that.";
/// Response to a successful `drop`.
pub const DROP_OK: &str = "Dropped.";
/// Response when `drop` names nothing the player carries.
pub const DROP_FAIL: &str = "You aren't carrying that.";
/// Response when `go` names no exit of the current room.
pub const GO_FAIL: &str = "You can't go that way.";
/// Response to `quit`.
pub const GOODBYE: &str = "Goodbye.";
/// Response to an unrecognized verb.
pub const UNKNOWN_VERB: &str = "I don't understand that.";

/// Whether a session still accepts commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Commands are interpreted normally.
    Running,
    /// `quit` has been processed. The session is over.
    Terminated,
}

/// A running game: a world plus the state of its turn loop.
#[derive(Debug, Clone)]
pub struct Session {
    world: World,
    status: Status,
}

impl Session {
    /// Start a session over a world.
    pub fn new(world: World) -> Self {
        Self {
            world,
            status: Status::Running,
        }
    }

    /// The world as this session currently sees it.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Whether the session is still accepting commands.
    pub fn status(&self) -> Status {
        self.status
    }

    /// True once `quit` has been processed.
    pub fn is_terminated(&self) -> bool {
        self.status == Status::Terminated
    }

    /// Take the world back out of the session, e.g. to write it to disk.
    pub fn into_world(self) -> World {
        self.world
    }

    /// Interpret one line of input and return the response. Blank input
    /// returns an empty response and consumes no turn, as does any input
    /// arriving after termination.
    pub fn process(&mut self, input: &str) -> String {
        if self.is_terminated() {
            return String::new();
        }
        match parse_command(input) {
            Some(command) => self.execute(command),
            None => String::new(),
        }
    }

    /// Execute an already-parsed command and return the response.
    pub fn execute(&mut self, command: Command) -> String {
        match command {
            Command::Look { noun } => self.do_look(noun.as_deref()),
            Command::Inventory => self.do_inventory(),
            Command::Take { noun } => self.do_take(&noun),
            Command::Drop { noun } => self.do_drop(&noun),
            Command::Go { noun } => self.do_go(&noun),
            Command::Quit => {
                self.status = Status::Terminated;
                GOODBYE.to_string()
            }
            Command::Unknown { .. } => UNKNOWN_VERB.to_string(),
        }
    }

    /// `me` and `here` are reserved and always win; after that the
    /// inventory shadows the room floor.
    fn do_look(&self, noun: Option<&str>) -> String {
        let subject = match noun {
            None | Some("here") => Some(Subject::Room(self.world.player().location)),
            Some("me") => Some(Subject::Player),
            Some(name) => self
                .world
                .find_in_inventory(name)
                .or_else(|| {
                    self.world
                        .find_in_contents(self.world.player().location, name)
                })
                .map(Subject::Thing),
        };
        subject
            .and_then(|subject| describe(&self.world, subject))
            .unwrap_or_else(|| LOOK_FAIL.to_string())
    }

    fn do_inventory(&self) -> String {
        let inventory = &self.world.player().inventory;
        if inventory.is_empty() {
            return INVENTORY_EMPTY.to_string();
        }
        let names: Vec<&str> = inventory
            .iter()
            .filter_map(|&id| self.world.thing(id).map(|t| t.name.as_str()))
            .collect();
        format!("Inventory: {}", names.join(", "))
    }

    fn do_take(&mut self, noun: &str) -> String {
        let room = self.world.player().location;
        let Some(id) = self.world.find_in_contents(room, noun) else {
            return TAKE_FAIL.to_string();
        };
        match self.world.take(id) {
            Ok(()) => TAKE_OK.to_string(),
            Err(_) => TAKE_FAIL.to_string(),
        }
    }

    fn do_drop(&mut self, noun: &str) -> String {
        let Some(id) = self.world.find_in_inventory(noun) else {
            return DROP_FAIL.to_string();
        };
        match self.world.put_down(id) {
            Ok(()) => DROP_OK.to_string(),
            Err(_) => DROP_FAIL.to_string(),
        }
    }

    fn do_go(&mut self, noun: &str) -> String {
        let Some(room) = self.world.current_room() else {
            return GO_FAIL.to_string();
        };
        let Some(exit) = room.exits.iter().find(|exit| exit.name == noun) else {
            return GO_FAIL.to_string();
        };
        let destination = exit.destination;
        if let Some(lock) = &exit.lock {
            if !self.world.player().inventory.contains(&lock.key) {
                return lock.message.clone();
            }
        }
        if self.world.move_player(destination).is_err() {
            return GO_FAIL.to_string();
        }
        describe(&self.world, Subject::Room(destination)).unwrap_or_else(|| GO_FAIL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Exit, Player, PlayerId, Room, RoomId, Thing, ThingId};

    fn test_world() -> World {
        let things = vec![
            Thing::new(ThingId(1), "brass key").with_description("Small and green with age."),
            Thing::new(ThingId(2), "lantern").with_description("An iron lantern."),
        ];
        let rooms = vec![
            Room::new(RoomId(1), "cell")
                .with_description("A damp stone cell.")
                .with_thing(ThingId(1))
                .with_thing(ThingId(2))
                .with_exit(Exit::new("door", RoomId(2)).with_key(ThingId(1), "The door is locked.")),
            Room::new(RoomId(2), "corridor")
                .with_description("A torchlit corridor.")
                .with_exit(Exit::new("back", RoomId(1))),
        ];
        let player =
            Player::new(PlayerId(1), "prisoner", RoomId(1)).with_description("Bruised but unbroken.");
        World::new(things, rooms, player).unwrap()
    }

    fn test_session() -> Session {
        Session::new(test_world())
    }

    #[test]
    fn look_shows_the_current_room() {
        let mut session = test_session();
        let out = session.process("look");
        assert_eq!(
            out,
            "cell\nA damp stone cell.\nContents: brass key, lantern.\nExits: door."
        );
    }

    #[test]
    fn look_here_is_the_same_as_bare_look() {
        let mut session = test_session();
        let bare = session.process("look");
        let here = session.process("look here");
        assert_eq!(bare, here);
    }

    #[test]
    fn look_me_shows_the_player() {
        let mut session = test_session();
        let out = session.process("look me");
        assert_eq!(out, "prisoner\nBruised but unbroken.");
    }

    #[test]
    fn look_at_a_thing_in_the_room() {
        let mut session = test_session();
        let out = session.process("look lantern");
        assert_eq!(out, "lantern\nAn iron lantern.");
    }

    #[test]
    fn look_at_something_absent_fails() {
        let mut session = test_session();
        assert_eq!(session.process("look sword"), LOOK_FAIL);
    }

    #[test]
    fn look_prefers_the_inventory_over_the_floor() {
        let things = vec![
            Thing::new(ThingId(1), "coin").with_description("The carried coin."),
            Thing::new(ThingId(2), "coin").with_description("The coin on the floor."),
        ];
        let rooms = vec![Room::new(RoomId(1), "vault").with_thing(ThingId(2))];
        let player = Player::new(PlayerId(1), "p", RoomId(1)).with_thing(ThingId(1));
        let mut session = Session::new(World::new(things, rooms, player).unwrap());
        assert_eq!(session.process("look coin"), "coin\nThe carried coin.");
    }

    #[test]
    fn empty_hands_have_a_fixed_reply() {
        let mut session = test_session();
        assert_eq!(session.process("inventory"), INVENTORY_EMPTY);
    }

    #[test]
    fn take_then_inventory_lists_names_in_pickup_order() {
        let mut session = test_session();
        assert_eq!(session.process("take lantern"), TAKE_OK);
        assert_eq!(session.process("take brass key"), TAKE_OK);
        assert_eq!(session.process("inventory"), "Inventory: lantern, brass key");
    }

    #[test]
    fn take_something_absent_fails() {
        let mut session = test_session();
        assert_eq!(session.process("take sword"), TAKE_FAIL);
    }

    #[test]
    fn taken_things_cannot_be_taken_again() {
        let mut session = test_session();
        session.process("take lantern");
        assert_eq!(session.process("take lantern"), TAKE_FAIL);
    }

    #[test]
    fn take_picks_the_earliest_of_identically_named_things() {
        let things = vec![
            Thing::new(ThingId(1), "coin"),
            Thing::new(ThingId(2), "coin"),
        ];
        let rooms = vec![
            Room::new(RoomId(1), "vault")
                .with_thing(ThingId(1))
                .with_thing(ThingId(2)),
        ];
        let player = Player::new(PlayerId(1), "p", RoomId(1));
        let mut session = Session::new(World::new(things, rooms, player).unwrap());
        assert_eq!(session.process("take coin"), TAKE_OK);
        assert_eq!(session.world().player().inventory, vec![ThingId(1)]);
    }

    #[test]
    fn drop_puts_the_thing_at_the_end_of_the_room() {
        let mut session = test_session();
        session.process("take brass key");
        assert_eq!(session.process("drop brass key"), DROP_OK);
        assert_eq!(
            session.world().current_room().unwrap().contents,
            vec![ThingId(2), ThingId(1)]
        );
    }

    #[test]
    fn drop_something_not_carried_fails() {
        let mut session = test_session();
        assert_eq!(session.process("drop lantern"), DROP_FAIL);
    }

    #[test]
    fn locked_exit_refuses_without_the_key() {
        let mut session = test_session();
        assert_eq!(session.process("go door"), "The door is locked.");
        assert_eq!(session.world().current_room().unwrap().name, "cell");
    }

    #[test]
    fn carrying_the_key_opens_the_exit() {
        let mut session = test_session();
        session.process("take brass key");
        let out = session.process("go door");
        assert_eq!(out, "corridor\nA torchlit corridor.\nExits: back.");
        assert_eq!(session.world().current_room().unwrap().name, "corridor");
    }

    #[test]
    fn go_through_an_unknown_exit_fails() {
        let mut session = test_session();
        assert_eq!(session.process("go window"), GO_FAIL);
    }

    #[test]
    fn the_lock_checks_the_key_by_id_not_by_name() {
        let things = vec![Thing::new(ThingId(1), "key"), Thing::new(ThingId(2), "key")];
        let rooms = vec![
            Room::new(RoomId(1), "cell")
                .with_thing(ThingId(1))
                .with_thing(ThingId(2))
                .with_exit(Exit::new("door", RoomId(2)).with_key(ThingId(2), "Locked.")),
            Room::new(RoomId(2), "corridor"),
        ];
        let player = Player::new(PlayerId(1), "p", RoomId(1));
        let mut session = Session::new(World::new(things, rooms, player).unwrap());

        // The first "key" by name is not the one the lock wants.
        assert_eq!(session.process("take key"), TAKE_OK);
        assert_eq!(session.process("go door"), "Locked.");
        assert_eq!(session.process("take key"), TAKE_OK);
        assert_eq!(session.process("go door"), "corridor\n");
    }

    #[test]
    fn quit_terminates_the_session() {
        let mut session = test_session();
        assert_eq!(session.process("quit"), GOODBYE);
        assert!(session.is_terminated());
        assert_eq!(session.status(), Status::Terminated);
        // A terminated session stays silent.
        assert_eq!(session.process("look"), "");
    }

    #[test]
    fn unknown_verbs_get_a_fixed_reply() {
        let mut session = test_session();
        assert_eq!(session.process("dance"), UNKNOWN_VERB);
        assert!(!session.is_terminated());
    }

    #[test]
    fn blank_input_is_silent_and_keeps_running() {
        let mut session = test_session();
        assert_eq!(session.process(""), "");
        assert_eq!(session.process("   "), "");
        assert_eq!(session.status(), Status::Running);
    }
}
