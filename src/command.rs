use std::str::FromStr;

use crate::{loader_error::LoaderError, weight::Weight, widget::Event};

pub const HELP: &str = "\
<weight>        set the target weight
target <text>   set the target text verbatim
add <weight>    load one plate of that weight on each side
rm <index>      remove the plate at that position
bar <weight>    select a bar
collars         toggle collars
unit            toggle kg/lb
clear           unload everything
help            show this message
quit            leave";

/// A line typed at the terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));
        let invalid = || LoaderError::InvalidCommand(line.to_string());

        let command = match (word.to_lowercase().as_str(), rest.is_empty()) {
            ("", _) => Command::Show,
            ("help" | "?", true) => Command::Help,
            ("quit" | "exit" | "q", true) => Command::Quit,
            ("collars", true) => Command::Event(Event::ToggleCollars),
            ("unit", true) => Command::Event(Event::ToggleUnit),
            ("clear", true) => Command::Event(Event::Clear),
            ("target" | "t", _) => Command::Event(Event::TargetInput(rest.to_string())),
            ("add" | "a", false) => Command::Event(Event::AddPlate(rest.parse::<Weight>()?)),
            ("bar" | "b", false) => Command::Event(Event::SelectBar(rest.parse::<Weight>()?)),
            ("rm" | "remove", false) => Command::Event(Event::RemovePlate(
                rest.parse::<usize>().map_err(|_| invalid())?,
            )),
            _ if line.starts_with(|c: char| c.is_ascii_digit() || c == '.' || c == '-') => {
                Command::Event(Event::TargetInput(line.to_string()))
            }
            _ => return Err(invalid()),
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, LoaderError> {
        line.parse()
    }

    #[test]
    fn bare_number_is_a_target() {
        assert_eq!(
            parse("102.5"),
            Ok(Command::Event(Event::TargetInput("102.5".to_string())))
        );
        assert_eq!(
            parse("10a"),
            Ok(Command::Event(Event::TargetInput("10a".to_string())))
        );
    }

    #[test]
    fn parses_plate_and_bar_commands() {
        assert_eq!(
            parse("add 1.25"),
            Ok(Command::Event(Event::AddPlate(Weight::from_milli(1250))))
        );
        assert_eq!(parse("rm 2"), Ok(Command::Event(Event::RemovePlate(2))));
        assert_eq!(
            parse("BAR 15"),
            Ok(Command::Event(Event::SelectBar(Weight::from_units(15))))
        );
        assert_eq!(
            parse("target  "),
            Ok(Command::Event(Event::TargetInput(String::new())))
        );
    }

    #[test]
    fn parses_toggles_and_meta() {
        assert_eq!(parse("collars"), Ok(Command::Event(Event::ToggleCollars)));
        assert_eq!(parse(" unit "), Ok(Command::Event(Event::ToggleUnit)));
        assert_eq!(parse("clear"), Ok(Command::Event(Event::Clear)));
        assert_eq!(parse(""), Ok(Command::Show));
        assert_eq!(parse("?"), Ok(Command::Help));
        assert_eq!(parse("quit"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(
            parse("rm first"),
            Err(LoaderError::InvalidCommand("rm first".to_string()))
        );
        assert_eq!(
            parse("add heavy"),
            Err(LoaderError::InvalidWeight("heavy".to_string()))
        );
        assert_eq!(
            parse("deadlift"),
            Err(LoaderError::InvalidCommand("deadlift".to_string()))
        );
        assert!(parse("add").is_err());
    }
}
