//! Command parsing for player input.
//!
//! The command language is deliberately rigid: the first whitespace-separated
//! word is the verb, matched exactly and case-sensitively, and everything
//! after it is the noun, re-joined with single spaces. There are no synonyms
//! and no articles. `Go` is the only way to move.

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look at the current room, the player, or a named thing.
    Look {
        /// What to look at. `None` means the current room.
        noun: Option<String>,
    },
    /// List carried things.
    Inventory,
    /// Pick up a thing from the current room.
    Take {
        /// The thing name.
        noun: String,
    },
    /// Put down a carried thing.
    Drop {
        /// The thing name.
        noun: String,
    },
    /// Leave through a named exit.
    Go {
        /// The exit name.
        noun: String,
    },
    /// End the session.
    Quit,
    /// Anything with an unrecognized verb.
    Unknown {
        /// The verb that was not recognized.
        verb: String,
    },
}

/// Parse one line of player input. Returns `None` for blank input, which
/// is not a command and must not consume a turn.
pub fn parse_command(input: &str) -> Option<Command> {
    let words: Vec<&str> = input.split_whitespace().collect();
    let verb = *words.first()?;
    let noun = words[1..].join(" ");

    let command = match verb {
        "look" => Command::Look {
            noun: if noun.is_empty() { None } else { Some(noun) },
        },
        "inventory" => Command::Inventory,
        "take" => Command::Take { noun },
        "drop" => Command::Drop { noun },
        "go" => Command::Go { noun },
        "quit" => Command::Quit,
        _ => Command::Unknown {
            verb: verb.to_string(),
        },
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_not_a_command() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("\t"), None);
    }

    #[test]
    fn bare_look_targets_the_room() {
        assert_eq!(parse_command("look"), Some(Command::Look { noun: None }));
    }

    #[test]
    fn look_with_noun() {
        assert_eq!(
            parse_command("look brass lamp"),
            Some(Command::Look {
                noun: Some("brass lamp".to_string())
            })
        );
    }

    #[test]
    fn noun_words_are_rejoined_with_single_spaces() {
        assert_eq!(
            parse_command("take   brass    lamp"),
            Some(Command::Take {
                noun: "brass lamp".to_string()
            })
        );
    }

    #[test]
    fn take_drop_go_carry_their_noun() {
        assert_eq!(
            parse_command("drop rope"),
            Some(Command::Drop {
                noun: "rope".to_string()
            })
        );
        assert_eq!(
            parse_command("go north"),
            Some(Command::Go {
                noun: "north".to_string()
            })
        );
    }

    #[test]
    fn missing_noun_is_an_empty_noun() {
        // An empty noun is still a command; it fails at lookup time unless
        // something really is named "".
        assert_eq!(
            parse_command("take"),
            Some(Command::Take {
                noun: String::new()
            })
        );
    }

    #[test]
    fn inventory_and_quit_ignore_trailing_words() {
        assert_eq!(parse_command("inventory all"), Some(Command::Inventory));
        assert_eq!(parse_command("quit now"), Some(Command::Quit));
    }

    #[test]
    fn verbs_are_case_sensitive() {
        assert_eq!(
            parse_command("Look"),
            Some(Command::Unknown {
                verb: "Look".to_string()
            })
        );
    }

    #[test]
    fn unrecognized_verb_is_unknown() {
        assert_eq!(
            parse_command("dance wildly"),
            Some(Command::Unknown {
                verb: "dance".to_string()
            })
        );
    }
}
