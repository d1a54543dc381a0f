//! The save-file parser: lines in, spanned records out.
//!
//! A save file is a flat list of lines in fixed section order: `thing`
//! records (two lines each), `room` records (three lines), the single
//! `player` record (four lines), then exit records until a blank line or
//! the end of input. Description lines are identified purely by position
//! and taken verbatim, so there is no token grammar to recover with; the
//! parser stops at the first structural error instead of guessing where
//! the next record starts. A trailing `\r` is stripped from every line so
//! CRLF files load.

use crate::diagnostics::Diagnostic;
use crate::record::{
    ExitRecord, KeyRecord, PlayerRecord, RoomRecord, SaveFile, Span, Spanned, ThingRecord,
};

/// Parse save-file text into records, stopping at the first structural
/// error. Anything after the blank line that ends the exits section is
/// ignored.
pub fn parse(source: &str) -> Result<SaveFile, Diagnostic> {
    Parser::new(source).parse_save()
}

struct Line<'a> {
    text: &'a str,
    span: Span,
}

fn split_lines(source: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut start = 0;
    for segment in source.split('\n') {
        let text = segment.strip_suffix('\r').unwrap_or(segment);
        lines.push(Line {
            text,
            span: start..start + text.len(),
        });
        start += segment.len() + 1;
    }
    lines
}

fn tokens(text: &str, base: usize) -> Vec<(&str, Span)> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;
    for (i, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                out.push((&text[s..i], base + s..base + i));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        out.push((&text[s..], base + s..base + text.len()));
    }
    out
}

fn join(words: &[(&str, Span)]) -> String {
    let parts: Vec<&str> = words.iter().map(|(text, _)| *text).collect();
    parts.join(" ")
}

/// Parse an id token of the form `#<number>`.
fn parse_ref(token: &str, span: Span) -> Result<Spanned<u32>, Diagnostic> {
    let digits = token.strip_prefix('#').ok_or_else(|| {
        Diagnostic::error(
            span.clone(),
            format!("expected an id like '#1', found '{token}'"),
        )
    })?;
    let node = digits
        .parse::<u32>()
        .map_err(|_| Diagnostic::error(span.clone(), format!("invalid id '{token}'")))?;
    Ok(Spanned { node, span })
}

struct Parser<'a> {
    lines: Vec<Line<'a>>,
    pos: usize,
    eof: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &str) -> Parser<'_> {
        Parser {
            lines: split_lines(source),
            pos: 0,
            eof: source.len(),
        }
    }

    fn line(&self) -> Option<(&'a str, Span)> {
        self.lines.get(self.pos).map(|l| (l.text, l.span.clone()))
    }

    fn keyword(&self) -> Option<&'a str> {
        self.line()
            .and_then(|(text, _)| text.split_whitespace().next())
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eof_span(&self) -> Span {
        self.eof..self.eof
    }

    fn parse_save(mut self) -> Result<SaveFile, Diagnostic> {
        let mut things = Vec::new();
        while self.keyword() == Some("thing") {
            things.push(self.parse_thing()?);
        }

        let mut rooms = Vec::new();
        while self.keyword() == Some("room") {
            rooms.push(self.parse_room()?);
        }

        let player = self.parse_player()?;
        let exits = self.parse_exits()?;

        Ok(SaveFile {
            things,
            rooms,
            player,
            exits,
        })
    }

    /// Consume a `<kind> #<id> <name...>` header line.
    fn parse_header(&mut self, kind: &str) -> Result<(Spanned<u32>, String, Span), Diagnostic> {
        let (text, span) = match self.line() {
            Some(line) => line,
            None => {
                return Err(Diagnostic::error(
                    self.eof_span(),
                    format!("unexpected end of file: expected a {kind} record"),
                ));
            }
        };
        let words = tokens(text, span.start);
        let Some((id_token, id_span)) = words.get(1).cloned() else {
            return Err(
                Diagnostic::error(span, format!("{kind} record is missing an id"))
                    .with_label("expected an id like '#1' after the keyword"),
            );
        };
        let id = parse_ref(id_token, id_span)?;
        let name = join(&words[2..]);
        self.bump();
        Ok((id, name, span))
    }

    /// Consume the verbatim description line that follows a header.
    fn parse_description(&mut self, owner: String, header: &Span) -> Result<String, Diagnostic> {
        match self.line() {
            Some((text, _)) => {
                self.bump();
                Ok(text.to_string())
            }
            None => Err(Diagnostic::error(
                header.clone(),
                format!("unexpected end of file: {owner} has no description line"),
            )),
        }
    }

    fn parse_thing(&mut self) -> Result<ThingRecord, Diagnostic> {
        let (id, name, header) = self.parse_header("thing")?;
        let description = self.parse_description(format!("thing #{}", id.node), &header)?;
        Ok(ThingRecord {
            id,
            name,
            description,
        })
    }

    fn parse_room(&mut self) -> Result<RoomRecord, Diagnostic> {
        let (id, name, header) = self.parse_header("room")?;
        let description = self.parse_description(format!("room #{}", id.node), &header)?;

        let (text, span) = match self.line() {
            Some(line) => line,
            None => {
                return Err(Diagnostic::error(
                    header,
                    format!("unexpected end of file: room #{} has no contents line", id.node),
                ));
            }
        };
        let words = tokens(text, span.start);
        if words.first().map(|(text, _)| *text) != Some("contents") {
            return Err(
                Diagnostic::error(span, format!("expected a 'contents' line for room #{}", id.node))
                    .with_label("every room header and description is followed by one"),
            );
        }
        let mut contents = Vec::new();
        for (token, token_span) in &words[1..] {
            contents.push(parse_ref(token, token_span.clone())?);
        }
        self.bump();

        Ok(RoomRecord {
            id,
            name,
            description,
            contents,
        })
    }

    fn parse_player(&mut self) -> Result<PlayerRecord, Diagnostic> {
        match self.keyword() {
            Some("player") => {}
            Some(other) => {
                let (_, span) = self.line().unwrap_or(("", self.eof_span()));
                return Err(Diagnostic::error(
                    span,
                    format!("expected a player record, found '{other}'"),
                )
                .with_label("sections run things, rooms, player, exits"));
            }
            None => {
                let span = match self.line() {
                    Some((_, span)) => span,
                    None => self.eof_span(),
                };
                return Err(Diagnostic::error(span, "expected a player record"));
            }
        }

        let (id, name, header) = self.parse_header("player")?;
        let description = self.parse_description("the player".to_string(), &header)?;

        let inventory = self.parse_id_list("inventory", &header)?;

        let (text, span) = match self.line() {
            Some(line) => line,
            None => {
                return Err(Diagnostic::error(
                    header,
                    "unexpected end of file: the player has no location line",
                ));
            }
        };
        let words = tokens(text, span.start);
        if words.first().map(|(text, _)| *text) != Some("location") {
            return Err(Diagnostic::error(
                span,
                "expected a 'location' line for the player",
            ));
        }
        let Some((token, token_span)) = words.get(1).cloned() else {
            return Err(Diagnostic::error(
                span,
                "the location line is missing a room id",
            ));
        };
        let location = parse_ref(token, token_span)?;
        if let (Some((_, first)), Some((_, last))) = (words.get(2), words.last()) {
            return Err(Diagnostic::error(
                first.start..last.end,
                "unexpected text after the room id on the location line",
            ));
        }
        self.bump();

        Ok(PlayerRecord {
            id,
            name,
            description,
            inventory,
            location,
        })
    }

    /// Consume a `<keyword> [#id ...]` line, e.g. `inventory #1 #2`.
    fn parse_id_list(
        &mut self,
        keyword: &str,
        header: &Span,
    ) -> Result<Vec<Spanned<u32>>, Diagnostic> {
        let (text, span) = match self.line() {
            Some(line) => line,
            None => {
                return Err(Diagnostic::error(
                    header.clone(),
                    format!("unexpected end of file: the player has no {keyword} line"),
                ));
            }
        };
        let words = tokens(text, span.start);
        if words.first().map(|(text, _)| *text) != Some(keyword) {
            return Err(Diagnostic::error(
                span,
                format!("expected an '{keyword}' line for the player"),
            ));
        }
        let mut ids = Vec::new();
        for (token, token_span) in &words[1..] {
            ids.push(parse_ref(token, token_span.clone())?);
        }
        self.bump();
        Ok(ids)
    }

    fn parse_exits(&mut self) -> Result<Vec<ExitRecord>, Diagnostic> {
        let mut exits = Vec::new();
        loop {
            let Some((text, span)) = self.line() else {
                break;
            };
            if text.is_empty() {
                break;
            }
            let words = tokens(text, span.start);
            let keyword = words.first().map(|(text, _)| *text);
            match keyword {
                Some("exit") => {
                    exits.push(self.parse_exit_header(&words, span)?);
                }
                Some("keyexit") => {
                    let mut record = self.parse_exit_header(&words, span.clone())?;
                    record.key = Some(self.parse_key_line(&span)?);
                    exits.push(record);
                }
                Some(other) => {
                    return Err(Diagnostic::error(
                        span,
                        format!("expected 'exit' or 'keyexit', found '{other}'"),
                    )
                    .with_label("exit records run until a blank line"));
                }
                None => {
                    return Err(Diagnostic::error(
                        span,
                        "expected 'exit' or 'keyexit', found only whitespace",
                    ));
                }
            }
        }
        Ok(exits)
    }

    /// Consume an `exit #<room> #<destination> <name...>` header line.
    fn parse_exit_header(
        &mut self,
        words: &[(&str, Span)],
        span: Span,
    ) -> Result<ExitRecord, Diagnostic> {
        if words.len() < 3 {
            return Err(Diagnostic::error(
                span,
                "an exit needs a room id and a destination id",
            ));
        }
        let (room_token, room_span) = words[1].clone();
        let room = parse_ref(room_token, room_span)?;
        let (dest_token, dest_span) = words[2].clone();
        let destination = parse_ref(dest_token, dest_span)?;
        let name = join(&words[3..]);
        self.bump();
        Ok(ExitRecord {
            room,
            destination,
            name,
            key: None,
        })
    }

    /// Consume the `#<key> <message...>` line that follows a keyexit header.
    fn parse_key_line(&mut self, header: &Span) -> Result<KeyRecord, Diagnostic> {
        let (text, span) = match self.line() {
            Some(line) => line,
            None => {
                return Err(Diagnostic::error(
                    header.clone(),
                    "unexpected end of file: keyexit has no key line",
                ));
            }
        };
        let words = tokens(text, span.start);
        let Some((token, token_span)) = words.first().cloned() else {
            return Err(Diagnostic::error(span, "keyexit key line is missing a key id"));
        };
        let thing = parse_ref(token, token_span)?;
        let message = join(&words[1..]);
        self.bump();
        Ok(KeyRecord { thing, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: &str = "thing #1 brass key
Small and green with age.
thing #2 lantern
An iron lantern.
room #1 cell
A damp stone cell.
contents #1 #2
room #2 corridor
A torchlit corridor.
contents
player #1 prisoner
Bruised but unbroken.
inventory
location #1
keyexit #1 #2 door
#1 The door is locked.
exit #2 #1 back
";

    const PLAYER_ONLY: &str = "player #1 someone
A face in the dark.
inventory
location #1
";

    #[test]
    fn parses_the_full_fixture() {
        let save = parse(CELL).unwrap();

        assert_eq!(save.things.len(), 2);
        assert_eq!(save.things[0].id.node, 1);
        assert_eq!(save.things[0].name, "brass key");
        assert_eq!(save.things[0].description, "Small and green with age.");

        assert_eq!(save.rooms.len(), 2);
        let contents: Vec<u32> = save.rooms[0].contents.iter().map(|id| id.node).collect();
        assert_eq!(contents, vec![1, 2]);
        assert!(save.rooms[1].contents.is_empty());

        assert_eq!(save.player.id.node, 1);
        assert_eq!(save.player.name, "prisoner");
        assert!(save.player.inventory.is_empty());
        assert_eq!(save.player.location.node, 1);

        assert_eq!(save.exits.len(), 2);
        assert_eq!(save.exits[0].name, "door");
        assert_eq!(save.exits[0].room.node, 1);
        assert_eq!(save.exits[0].destination.node, 2);
        let key = save.exits[0].key.as_ref().unwrap();
        assert_eq!(key.thing.node, 1);
        assert_eq!(key.message, "The door is locked.");
        assert_eq!(save.exits[1].name, "back");
        assert!(save.exits[1].key.is_none());
    }

    #[test]
    fn id_spans_point_into_the_source() {
        let save = parse(CELL).unwrap();
        let span = save.things[0].id.span.clone();
        assert_eq!(&CELL[span], "#1");
        let span = save.player.location.span.clone();
        assert_eq!(&CELL[span], "#1");
    }

    #[test]
    fn names_join_inner_whitespace() {
        let source = format!("thing #9 old  iron \t key\nRusty.\n{PLAYER_ONLY}");
        let save = parse(&source).unwrap();
        assert_eq!(save.things[0].name, "old iron key");
    }

    #[test]
    fn description_lines_are_verbatim() {
        let source = format!("thing #1 lamp\n  two leading spaces.  \n{PLAYER_ONLY}");
        let save = parse(&source).unwrap();
        assert_eq!(save.things[0].description, "  two leading spaces.  ");

        // A description that happens to look like a record header stays a
        // description; lines are identified by position, not content.
        let source = format!("thing #1 lamp\nroom #1 fake\n{PLAYER_ONLY}");
        let save = parse(&source).unwrap();
        assert_eq!(save.things[0].description, "room #1 fake");
    }

    #[test]
    fn exits_end_at_a_blank_line_and_trailing_text_is_ignored() {
        let source = format!("{CELL}\nanything at all down here\nis ignored\n");
        let save = parse(&source).unwrap();
        assert_eq!(save.exits.len(), 2);
    }

    #[test]
    fn exits_end_at_end_of_input() {
        let source = format!("{PLAYER_ONLY}exit #1 #1 loop");
        let save = parse(&source).unwrap();
        assert_eq!(save.exits.len(), 1);
        assert_eq!(save.exits[0].name, "loop");
    }

    #[test]
    fn empty_exit_name_is_allowed() {
        let source = format!("{PLAYER_ONLY}exit #1 #1\n");
        let save = parse(&source).unwrap();
        assert_eq!(save.exits[0].name, "");
    }

    #[test]
    fn missing_id_is_an_error() {
        let err = parse("thing lamp\n").unwrap_err();
        assert!(err.message.contains("expected an id"), "{}", err.message);
    }

    #[test]
    fn id_without_hash_is_an_error() {
        let source = format!("thing 1 lamp\nA lamp.\n{PLAYER_ONLY}");
        let err = parse(&source).unwrap_err();
        assert!(err.message.contains("found '1'"), "{}", err.message);
    }

    #[test]
    fn negative_id_is_an_error() {
        let source = format!("thing #-1 lamp\nA lamp.\n{PLAYER_ONLY}");
        let err = parse(&source).unwrap_err();
        assert!(err.message.contains("invalid id '#-1'"), "{}", err.message);
    }

    #[test]
    fn truncated_thing_record_is_an_error() {
        let err = parse("thing #1 lamp").unwrap_err();
        assert!(
            err.message.contains("no description line"),
            "{}",
            err.message
        );
    }

    #[test]
    fn room_without_contents_line_is_an_error() {
        let source = format!("room #1 cell\nA cell.\nroom #2 yard\nA yard.\ncontents\n{PLAYER_ONLY}");
        let err = parse(&source).unwrap_err();
        assert!(
            err.message.contains("expected a 'contents' line for room #1"),
            "{}",
            err.message
        );
    }

    #[test]
    fn missing_player_record_is_an_error() {
        let err = parse("thing #1 lamp\nA lamp.\n").unwrap_err();
        assert!(
            err.message.contains("expected a player record"),
            "{}",
            err.message
        );
    }

    #[test]
    fn thing_after_the_rooms_section_is_an_error() {
        // Once the rooms section starts, thing records can no longer appear.
        let source = "room #1 cell\nA damp cell.\ncontents\nthing #1 lamp\nA lamp.\n";
        let err = parse(source).unwrap_err();
        assert!(
            err.message.contains("expected a player record, found 'thing'"),
            "{}",
            err.message
        );
        assert_eq!(&source[err.span], "thing #1 lamp");
    }

    #[test]
    fn junk_in_the_exits_section_is_an_error() {
        let source = format!("{PLAYER_ONLY}banana\n");
        let err = parse(&source).unwrap_err();
        assert!(err.message.contains("found 'banana'"), "{}", err.message);
    }

    #[test]
    fn keyexit_without_key_line_is_an_error() {
        // With a trailing newline the key line exists but is blank.
        let source = format!("{PLAYER_ONLY}keyexit #1 #1 door\n");
        let err = parse(&source).unwrap_err();
        assert!(err.message.contains("missing a key id"), "{}", err.message);

        // Without one the file simply ends.
        let source = format!("{PLAYER_ONLY}keyexit #1 #1 door");
        let err = parse(&source).unwrap_err();
        assert!(
            err.message.contains("unexpected end of file"),
            "{}",
            err.message
        );
    }

    #[test]
    fn location_line_trailing_text_is_an_error() {
        let source = "player #1 someone\nA face.\ninventory\nlocation #1 junk\n";
        let err = parse(source).unwrap_err();
        assert!(
            err.message.contains("after the room id"),
            "{}",
            err.message
        );
        assert_eq!(&source[err.span], "junk");
    }

    #[test]
    fn crlf_input_parses() {
        let source = CELL.replace('\n', "\r\n");
        let save = parse(&source).unwrap();
        assert_eq!(save.things[0].description, "Small and green with age.");
        assert_eq!(save.exits.len(), 2);
    }
}
