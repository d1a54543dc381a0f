//! Turning parsed records into a validated [`World`].
//!
//! The builder resolves every `#id` reference against the definitions in
//! the file, walking the sections in file order, and collects all reference
//! errors instead of stopping at the first one, so a single load reports
//! everything wrong with a file. A world is only handed out when there are
//! no errors at all; things that are defined but placed nowhere load fine
//! and produce a warning, because the next save will drop them.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use wf_core::{Exit, Lock, Player, PlayerId, Room, RoomId, Thing, ThingId, World};

use crate::diagnostics::{Diagnostic, Severity};
use crate::record::{SaveFile, Span, Spanned};

/// The outcome of loading save-file text.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded world. `None` whenever any diagnostic is an error.
    pub world: Option<World>,
    /// Errors and warnings, roughly in source order.
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadResult {
    /// Returns `true` if any diagnostic has error severity.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

/// Resolve a parsed save file into a world.
pub fn build(save: &SaveFile) -> LoadResult {
    Builder::default().build(save)
}

#[derive(Default)]
struct Builder {
    diagnostics: Vec<Diagnostic>,
}

impl Builder {
    fn build(mut self, save: &SaveFile) -> LoadResult {
        // Definitions first: things, then rooms.
        let mut things: Vec<Thing> = Vec::new();
        let mut thing_ids: HashMap<u32, Span> = HashMap::new();
        for record in &save.things {
            match thing_ids.entry(record.id.node) {
                Entry::Occupied(_) => {
                    self.diagnostics.push(
                        Diagnostic::error(
                            record.id.span.clone(),
                            format!("duplicate thing id #{}", record.id.node),
                        )
                        .with_label("a thing with this id is already defined"),
                    );
                }
                Entry::Vacant(entry) => {
                    entry.insert(record.id.span.clone());
                    things.push(Thing {
                        id: ThingId(record.id.node),
                        name: record.name.clone(),
                        description: record.description.clone(),
                    });
                }
            }
        }

        let mut rooms: Vec<Room> = Vec::new();
        let mut room_pos: HashMap<u32, usize> = HashMap::new();
        let mut placed: HashMap<u32, Span> = HashMap::new();
        for record in &save.rooms {
            match room_pos.entry(record.id.node) {
                Entry::Occupied(_) => {
                    self.diagnostics.push(
                        Diagnostic::error(
                            record.id.span.clone(),
                            format!("duplicate room id #{}", record.id.node),
                        )
                        .with_label("a room with this id is already defined"),
                    );
                    continue;
                }
                Entry::Vacant(entry) => {
                    entry.insert(rooms.len());
                }
            }
            let mut contents = Vec::new();
            for reference in &record.contents {
                if let Some(id) = resolve_thing(&mut self.diagnostics, &thing_ids, reference) {
                    if place_thing(&mut self.diagnostics, &mut placed, reference) {
                        contents.push(id);
                    }
                }
            }
            rooms.push(Room {
                id: RoomId(record.id.node),
                name: record.name.clone(),
                description: record.description.clone(),
                contents,
                exits: Vec::new(),
            });
        }

        // The player's inventory and location.
        let mut inventory = Vec::new();
        for reference in &save.player.inventory {
            if let Some(id) = resolve_thing(&mut self.diagnostics, &thing_ids, reference) {
                if place_thing(&mut self.diagnostics, &mut placed, reference) {
                    inventory.push(id);
                }
            }
        }
        let location = resolve_room(&mut self.diagnostics, &room_pos, &save.player.location);

        // Exits attach to their origin room.
        for record in &save.exits {
            let pos = resolve_room(&mut self.diagnostics, &room_pos, &record.room)
                .and_then(|id| room_pos.get(&id.0).copied());
            let destination = resolve_room(&mut self.diagnostics, &room_pos, &record.destination);
            let mut key_ok = true;
            let lock = match &record.key {
                Some(key) => match resolve_thing(&mut self.diagnostics, &thing_ids, &key.thing) {
                    Some(thing) => Some(Lock {
                        key: thing,
                        message: key.message.clone(),
                    }),
                    None => {
                        key_ok = false;
                        None
                    }
                },
                None => None,
            };
            if let (Some(pos), Some(destination), true) = (pos, destination, key_ok) {
                rooms[pos].exits.push(Exit {
                    name: record.name.clone(),
                    destination,
                    lock,
                });
            }
        }

        // Things nobody can ever reach deserve a word.
        for record in &save.things {
            if !placed.contains_key(&record.id.node) {
                self.diagnostics.push(
                    Diagnostic::warning(
                        record.id.span.clone(),
                        format!("thing #{} is not placed anywhere", record.id.node),
                    )
                    .with_label("it is unreachable in play and the next save will drop it"),
                );
            }
        }

        let has_errors = self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error);
        if has_errors {
            return LoadResult {
                world: None,
                diagnostics: self.diagnostics,
            };
        }
        let Some(location) = location else {
            return LoadResult {
                world: None,
                diagnostics: self.diagnostics,
            };
        };

        let player = Player {
            id: PlayerId(save.player.id.node),
            name: save.player.name.clone(),
            description: save.player.description.clone(),
            inventory,
            location,
        };
        match World::new(things, rooms, player) {
            Ok(world) => LoadResult {
                world: Some(world),
                diagnostics: self.diagnostics,
            },
            Err(e) => {
                self.diagnostics.push(Diagnostic::error(0..0, e.to_string()));
                LoadResult {
                    world: None,
                    diagnostics: self.diagnostics,
                }
            }
        }
    }
}

fn resolve_thing(
    diagnostics: &mut Vec<Diagnostic>,
    defs: &HashMap<u32, Span>,
    reference: &Spanned<u32>,
) -> Option<ThingId> {
    if defs.contains_key(&reference.node) {
        Some(ThingId(reference.node))
    } else {
        diagnostics.push(
            Diagnostic::error(
                reference.span.clone(),
                format!("reference to undefined thing #{}", reference.node),
            )
            .with_label("not defined in the things section"),
        );
        None
    }
}

fn resolve_room(
    diagnostics: &mut Vec<Diagnostic>,
    defs: &HashMap<u32, usize>,
    reference: &Spanned<u32>,
) -> Option<RoomId> {
    if defs.contains_key(&reference.node) {
        Some(RoomId(reference.node))
    } else {
        diagnostics.push(
            Diagnostic::error(
                reference.span.clone(),
                format!("reference to undefined room #{}", reference.node),
            )
            .with_label("not defined in the rooms section"),
        );
        None
    }
}

fn place_thing(
    diagnostics: &mut Vec<Diagnostic>,
    placed: &mut HashMap<u32, Span>,
    reference: &Spanned<u32>,
) -> bool {
    match placed.entry(reference.node) {
        Entry::Occupied(_) => {
            diagnostics.push(
                Diagnostic::error(
                    reference.span.clone(),
                    format!("thing #{} is placed more than once", reference.node),
                )
                .with_label("already placed earlier in the file"),
            );
            false
        }
        Entry::Vacant(entry) => {
            entry.insert(reference.span.clone());
            true
        }
    }
}
