pub mod check;
pub mod export;
pub mod new;
pub mod play;
pub mod show;
pub mod worlds;

use std::path::Path;

use wf_core::World;
use wf_save::{LoadResult, Severity, render_diagnostics};

/// Load a world file and print its diagnostics.
/// Returns the world if there are no errors.
fn load_world(path: &Path) -> Result<World, String> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let result = wf_save::load(&source);
    print_diagnostics(&source, path, &result);

    match result.world {
        Some(world) => Ok(world),
        None => Err("loading failed with errors".into()),
    }
}

/// Print diagnostics to stderr using ariadne.
fn print_diagnostics(source: &str, path: &Path, result: &LoadResult) {
    if result.diagnostics.is_empty() {
        return;
    }

    let filename = path.display().to_string();
    let rendered = render_diagnostics(source, &filename, &result.diagnostics);
    eprint!("{rendered}");

    let errors = result
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warnings = result
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();

    if errors > 0 {
        eprintln!(
            "  {} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        );
    } else if warnings > 0 {
        eprintln!(
            "  {} warning{}",
            warnings,
            if warnings == 1 { "" } else { "s" },
        );
    }
}
