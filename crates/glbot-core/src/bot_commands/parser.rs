use lazy_static::lazy_static;
use regex::Regex;

use super::BotCommand;

lazy_static! {
    static ref COMMAND_RGX: Regex = Regex::new(r"set (\S+) (\S+)").unwrap();
}

/// Chat message command parser.
pub struct CommandParser;

impl CommandParser {
    /// Parse a command from an inbound chat message.
    ///
    /// Unknown subcommands fall through silently; that is an edge case, not
    /// an error.
    pub fn parse(message: &str) -> Option<BotCommand> {
        let captures = COMMAND_RGX.captures(message)?;
        let subcommand = captures.get(1)?.as_str();
        let value = captures.get(2)?.as_str();

        match subcommand {
            "token" => Some(BotCommand::SetToken(value.into())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{BotCommand, CommandParser};

    #[test]
    fn parse_set_token() {
        assert_eq!(
            CommandParser::parse("set token ABC123"),
            Some(BotCommand::SetToken("ABC123".into()))
        );
    }

    #[test]
    fn parse_unknown_subcommand() {
        assert_eq!(CommandParser::parse("set color blue"), None);
    }

    #[test]
    fn parse_non_command() {
        assert_eq!(CommandParser::parse("hello there"), None);
        assert_eq!(CommandParser::parse("set token"), None);
    }
}
