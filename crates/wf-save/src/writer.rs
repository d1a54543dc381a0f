//! Encoding a world back into save-file text.
//!
//! Emission order is fixed: things gathered room by room and then from the
//! inventory, rooms with their contents lists, the player block, then every
//! room's exits. A thing that sits in no container is never gathered, so it
//! does not reach the file. When every key sits in a container, [`encode`]
//! produces exactly the text [`crate::load`] accepts; a lock keyed on an
//! unplaced thing still writes its `#id` reference, and the emitted text
//! then fails to load.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use wf_core::World;

/// Serialize a world into save-file text.
pub fn encode(world: &World) -> String {
    let mut out = String::new();

    for id in world.placed_things() {
        if let Some(thing) = world.thing(id) {
            out.push_str(&format!("thing {} {}\n", thing.id, thing.name));
            out.push_str(&format!("{}\n", thing.description));
        }
    }

    for room in world.rooms() {
        out.push_str(&format!("room {} {}\n", room.id, room.name));
        out.push_str(&format!("{}\n", room.description));
        out.push_str("contents");
        for id in &room.contents {
            out.push_str(&format!(" {id}"));
        }
        out.push('\n');
    }

    let player = world.player();
    out.push_str(&format!("player {} {}\n", player.id, player.name));
    out.push_str(&format!("{}\n", player.description));
    out.push_str("inventory");
    for id in &player.inventory {
        out.push_str(&format!(" {id}"));
    }
    out.push('\n');
    out.push_str(&format!("location {}\n", player.location));

    for room in world.rooms() {
        for exit in &room.exits {
            match &exit.lock {
                Some(lock) => {
                    out.push_str(&format!(
                        "keyexit {} {} {}\n",
                        room.id, exit.destination, exit.name
                    ));
                    out.push_str(&format!("{} {}\n", lock.key, lock.message));
                }
                None => {
                    out.push_str(&format!(
                        "exit {} {} {}\n",
                        room.id, exit.destination, exit.name
                    ));
                }
            }
        }
    }

    out
}

/// Write a world to `path`.
///
/// The text goes to a temporary file in the target directory first and is
/// renamed over `path` in one step, so an interrupted save never leaves a
/// truncated file behind.
pub fn save_file(world: &World, path: &Path) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(encode(world).as_bytes())?;
    file.persist(path)?;
    Ok(())
}
