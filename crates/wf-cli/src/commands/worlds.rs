use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(dir: &Path) -> Result<(), String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("cannot read directory {}: {e}", dir.display()))?;
    let mut files: Vec<_> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "wld"))
        .collect();
    files.sort();

    if files.is_empty() {
        println!("  No world files found in {}.", dir.display());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["File", "Status", "Rooms", "Things"]);

    for path in &files {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => path.display().to_string(),
        };
        let result = wf_save::load_file(path);
        match result.world {
            Some(world) => {
                let status = if result.diagnostics.is_empty() {
                    "ok"
                } else {
                    "warnings"
                };
                table.add_row(vec![
                    name,
                    status.to_string(),
                    world.rooms().len().to_string(),
                    world.things().len().to_string(),
                ]);
            }
            None => {
                table.add_row(vec![name, "errors".to_string(), "-".into(), "-".into()]);
            }
        }
    }

    println!("{table}");
    println!();
    println!(
        "  {} world file{}",
        files.len(),
        if files.len() == 1 { "" } else { "s" },
    );

    Ok(())
}
