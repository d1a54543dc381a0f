use std::path::Path;

use wf_core::World;

pub fn run(file: &Path, format: &str, output: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(file)?;

    let content = match format {
        "json" => export_json(&world)?,
        _ => {
            return Err(format!("unsupported format: \"{format}\". Use: json"));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}

fn export_json(world: &World) -> Result<String, String> {
    let export = serde_json::json!({
        "player": world.player(),
        "rooms": world.rooms(),
        "things": world.things(),
    });

    serde_json::to_string_pretty(&export).map_err(|e| format!("JSON serialization error: {e}"))
}
