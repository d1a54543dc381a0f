use std::fs;
use std::path::Path;

/// A tiny playable world; the format spelled out by example.
const TEMPLATE: &str = "thing #1 rusty key
It smells of old iron.
room #1 gatehouse
A cold stone gatehouse. The portcullis is down.
contents #1
room #2 courtyard
Grass grows between the flagstones.
contents
player #1 wanderer
Travel-worn and curious.
inventory
location #1
keyexit #1 #2 gate
#1 The gate is locked.
exit #2 #1 gatehouse
";

pub fn run(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Err(format!("'{}' already exists", path.display()));
    }

    fs::write(path, TEMPLATE).map_err(|e| format!("cannot write {}: {e}", path.display()))?;

    println!("Created {}", path.display());
    println!();
    println!("Get started:");
    println!("  wf play {}    # Walk around in it", path.display());
    println!("  wf check {}   # Validate after editing", path.display());
    println!("  wf show {} gatehouse", path.display());

    Ok(())
}
