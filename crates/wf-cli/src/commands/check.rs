use std::path::Path;

pub fn run(file: &Path) -> Result<(), String> {
    let world = super::load_world(file)?;

    println!("  All checks passed for '{}'.", file.display());
    println!(
        "  {} rooms, {} things, {} exits",
        world.rooms().len(),
        world.things().len(),
        world.rooms().iter().map(|r| r.exits.len()).sum::<usize>(),
    );

    Ok(())
}
