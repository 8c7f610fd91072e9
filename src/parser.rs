//! Turns a raw input line into a `Command`. The engine never looks at raw text.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Help,
    Look,
    Take,
    Drop,
    Status,
    Go,
    Use,
    Quit,
}

impl Verb {
    pub const ALL: [Verb; 8] = [
        Verb::Help,
        Verb::Look,
        Verb::Take,
        Verb::Drop,
        Verb::Status,
        Verb::Go,
        Verb::Use,
        Verb::Quit,
    ];

    pub fn word(self) -> &'static str {
        match self {
            Verb::Help => "help",
            Verb::Look => "look",
            Verb::Take => "take",
            Verb::Drop => "drop",
            Verb::Status => "status",
            Verb::Go => "go",
            Verb::Use => "use",
            Verb::Quit => "quit",
        }
    }

    pub fn from_word(word: &str) -> Option<Verb> {
        Verb::ALL
            .into_iter()
            .find(|v| v.word().eq_ignore_ascii_case(word))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// `None` when the first word is not a known verb.
    pub verb: Option<Verb>,
    pub second_word: Option<String>,
}

impl Command {
    pub fn new(verb: Verb, second_word: Option<&str>) -> Self {
        Command {
            verb: Some(verb),
            second_word: second_word.map(str::to_string),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.verb.is_none()
    }

    pub fn has_second_word(&self) -> bool {
        self.second_word.is_some()
    }
}

/// Split a line into verb + argument. Extra words are ignored.
/// Returns `None` for a blank line.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let first = words.next()?;

    Some(Command {
        verb: Verb::from_word(first),
        second_word: words.next().map(str::to_string),
    })
}

/// "help look take ..." for the help screen.
pub fn valid_commands() -> String {
    Verb::ALL
        .iter()
        .map(|v| v.word())
        .collect::<Vec<&str>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_verb_and_argument() {
        let cmd = parse_command("  go   armory  now").expect("command");
        assert_eq!(cmd.verb, Some(Verb::Go));
        assert_eq!(cmd.second_word.as_deref(), Some("armory"));
    }

    #[test]
    fn verb_is_case_insensitive_argument_is_verbatim() {
        let cmd = parse_command("TAKE Key").expect("command");
        assert_eq!(cmd.verb, Some(Verb::Take));
        assert_eq!(cmd.second_word.as_deref(), Some("Key"));
    }

    #[test]
    fn unknown_verb_is_flagged() {
        let cmd = parse_command("dance wildly").expect("command");
        assert!(cmd.is_unknown());
    }

    #[test]
    fn blank_line_is_no_command() {
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn lists_every_verb() {
        assert_eq!(valid_commands(), "help look take drop status go use quit");
    }
}
