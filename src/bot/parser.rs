//! Chat line parser: a one-character prefix followed by a keyword.
//!
//! Commands are recognised only with the configured prefix (default `!`) so
//! normal conversation never triggers the bot. The keyword must be followed by
//! whitespace or end of line: `!pc trit` parses, `!pcx` does not. Everything
//! after the keyword is passed to the handler untouched except for trimming.
use log::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    Help,
    PriceCheck(String),
    Jumps(String),
    LightYears(String),
    Who(String),
    Unknown,
}

pub struct CommandParser {
    prefix: char,
}

impl CommandParser {
    pub fn new() -> Self {
        Self { prefix: '!' }
    }

    pub fn with_prefix(prefix: char) -> Self {
        Self { prefix }
    }

    pub fn prefix(&self) -> char {
        self.prefix
    }

    pub fn parse(&self, raw: &str) -> BotCommand {
        let Some(body) = raw.trim().strip_prefix(self.prefix) else {
            return BotCommand::Unknown;
        };
        let (keyword, args) = match body.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim().to_string()),
            None => (body, String::new()),
        };
        let command = match keyword.to_ascii_lowercase().as_str() {
            "help" | "?" => BotCommand::Help,
            "pc" | "price" => BotCommand::PriceCheck(args),
            "jumps" | "route" => BotCommand::Jumps(args),
            "ly" | "lightyears" => BotCommand::LightYears(args),
            "who" => BotCommand::Who(args),
            _ => BotCommand::Unknown,
        };
        trace!("Parsed {:?} from '{}'", command, raw);
        command
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}
