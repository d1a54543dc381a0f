//! The interactive play loop.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use wf_core::{Session, Subject, describe};

pub fn run(file: &Path) -> Result<(), String> {
    let world = super::load_world(file)?;
    let mut session = Session::new(world);

    println!("loaded <{}>", file.display());
    println!();
    println!("INSTRUCTIONS");
    println!("-use \"go <exit>\" to go to <exit>");
    println!("-use \"take <item>\" or \"drop <item>\" to take or drop items");
    println!("-use \"quit\" to quit");
    println!("-use \"save <file>\" to save your progress");
    println!();

    let location = session.world().player().location;
    if let Some(text) = describe(session.world(), Subject::Room(location)) {
        println!("{text}");
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("- ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim_end_matches(['\r', '\n']);

        // Saving is a frontend concern; the session never sees it.
        if let Some(rest) = input.strip_prefix("save ") {
            let target = rest.trim();
            match wf_save::save_file(session.world(), Path::new(target)) {
                Ok(()) => println!("Saved to {target}."),
                Err(e) => println!("{}", format!("cannot save to {target}: {e}").yellow()),
            }
            continue;
        }

        let output = session.process(input);
        if !output.is_empty() {
            println!("{output}");
        }
        if session.is_terminated() {
            break;
        }
    }

    Ok(())
}
