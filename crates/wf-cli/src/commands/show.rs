use std::collections::HashSet;
use std::path::Path;

use colored::Colorize;
use strsim::jaro_winkler;
use wf_core::{Subject, World, describe};

pub fn run(file: &Path, name: &str) -> Result<(), String> {
    let world = super::load_world(file)?;

    let Some(subject) = find_subject(&world, name) else {
        let suggestions = suggest(&world, name);
        let mut msg = format!("name not found: \"{name}\"");
        if !suggestions.is_empty() {
            msg.push_str(&format!(" (did you mean {}?)", suggestions.join(", ")));
        }
        return Err(msg);
    };

    let kind = match subject {
        Subject::Player => "player",
        Subject::Room(_) => "room",
        Subject::Thing(_) => "thing",
    };
    let Some(text) = describe(&world, subject) else {
        return Err(format!("name not found: \"{name}\""));
    };

    let mut lines = text.lines();
    if let Some(first) = lines.next() {
        println!("  {} [{}]", first.bold(), kind.dimmed());
    }
    for line in lines {
        println!("  {line}");
    }

    Ok(())
}

/// Exact-name lookup across the player, rooms, and things, in that order.
fn find_subject(world: &World, name: &str) -> Option<Subject> {
    if name == "me" || name == world.player().name {
        return Some(Subject::Player);
    }
    if let Some(room) = world.rooms().iter().find(|r| r.name == name) {
        return Some(Subject::Room(room.id));
    }
    world
        .things()
        .iter()
        .find(|t| t.name == name)
        .map(|t| Subject::Thing(t.id))
}

/// Names close to the input, best first, drawn from the same pool as
/// [`find_subject`].
fn suggest(world: &World, input: &str) -> Vec<String> {
    let input_lower = input.to_lowercase();
    let mut suggestions: Vec<(String, f64)> = std::iter::once(world.player().name.clone())
        .chain(world.rooms().iter().map(|r| r.name.clone()))
        .chain(world.things().iter().map(|t| t.name.clone()))
        .filter_map(|name| {
            let name_lower = name.to_lowercase();
            if name_lower.starts_with(&input_lower) {
                Some((name, 2.0))
            } else {
                let score = jaro_winkler(&input_lower, &name_lower);
                if score >= 0.6 { Some((name, score)) } else { None }
            }
        })
        .collect();

    suggestions.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    let mut seen = HashSet::new();
    suggestions.retain(|(name, _)| seen.insert(name.clone()));
    suggestions.truncate(3);
    suggestions.into_iter().map(|(name, _)| name).collect()
}
