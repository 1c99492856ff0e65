//! Command definitions
//!
//! A line-oriented text language for driving a restricted store.
//!
//! ## Grammar
//! ```text
//! SET <key> <value>
//! GET <key>
//! RESTRICT <slave=value> <master=value>
//! MRESTRICT <slave=value> <master=value> [<master=value> ...]
//! UNRESTRICT <slave=value> <master=value>
//! UNRESTRICT_ALL <slave=value>
//! RULES
//! PING
//! ```
//!
//! Verbs are case-insensitive; arguments are separated by whitespace.
//! Rule text is passed through untouched and validated by the store.

use crate::error::{RestrictError, Result};

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Set,
    Get,
    Restrict,
    MultiRestrict,
    Unrestrict,
    UnrestrictAll,
    Rules,
    Ping,
}

impl CommandType {
    /// Keyword used in the text form
    pub fn keyword(&self) -> &'static str {
        match self {
            CommandType::Set => "SET",
            CommandType::Get => "GET",
            CommandType::Restrict => "RESTRICT",
            CommandType::MultiRestrict => "MRESTRICT",
            CommandType::Unrestrict => "UNRESTRICT",
            CommandType::UnrestrictAll => "UNRESTRICT_ALL",
            CommandType::Rules => "RULES",
            CommandType::Ping => "PING",
        }
    }

    fn from_keyword(word: &str) -> Option<Self> {
        let ty = match word.to_ascii_uppercase().as_str() {
            "SET" => CommandType::Set,
            "GET" => CommandType::Get,
            "RESTRICT" => CommandType::Restrict,
            "MRESTRICT" => CommandType::MultiRestrict,
            "UNRESTRICT" => CommandType::Unrestrict,
            "UNRESTRICT_ALL" => CommandType::UnrestrictAll,
            "RULES" => CommandType::Rules,
            "PING" => CommandType::Ping,
            _ => return None,
        };
        Some(ty)
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set a key-value pair (subject to restrictions)
    Set { key: String, value: String },

    /// Get a value by key
    Get { key: String },

    /// Restrict a slave pair by one master pair
    Restrict { slave: String, master: String },

    /// Restrict a slave pair by several master pairs
    MultiRestrict { slave: String, masters: Vec<String> },

    /// Remove one restriction
    Unrestrict { slave: String, master: String },

    /// Remove every restriction on a slave pair
    UnrestrictAll { slave: String },

    /// List all restrictions
    Rules,

    /// Ping (health check)
    Ping,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Set { .. } => CommandType::Set,
            Command::Get { .. } => CommandType::Get,
            Command::Restrict { .. } => CommandType::Restrict,
            Command::MultiRestrict { .. } => CommandType::MultiRestrict,
            Command::Unrestrict { .. } => CommandType::Unrestrict,
            Command::UnrestrictAll { .. } => CommandType::UnrestrictAll,
            Command::Rules => CommandType::Rules,
            Command::Ping => CommandType::Ping,
        }
    }

    /// Parse one line of text
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let verb = words
            .next()
            .ok_or_else(|| RestrictError::InvalidArgument("empty command".to_string()))?;
        let ty = CommandType::from_keyword(verb)
            .ok_or_else(|| RestrictError::InvalidArgument(format!("unknown command '{}'", verb)))?;
        let args: Vec<String> = words.map(str::to_string).collect();

        let command = match (ty, args.as_slice()) {
            (CommandType::Set, [key, value]) => Command::Set {
                key: key.clone(),
                value: value.clone(),
            },
            (CommandType::Get, [key]) => Command::Get { key: key.clone() },
            (CommandType::Restrict, [slave, master]) => Command::Restrict {
                slave: slave.clone(),
                master: master.clone(),
            },
            (CommandType::MultiRestrict, [slave, masters @ ..]) if !masters.is_empty() => {
                Command::MultiRestrict {
                    slave: slave.clone(),
                    masters: masters.to_vec(),
                }
            }
            (CommandType::Unrestrict, [slave, master]) => Command::Unrestrict {
                slave: slave.clone(),
                master: master.clone(),
            },
            (CommandType::UnrestrictAll, [slave]) => Command::UnrestrictAll {
                slave: slave.clone(),
            },
            (CommandType::Rules, []) => Command::Rules,
            (CommandType::Ping, []) => Command::Ping,
            (ty, args) => {
                return Err(RestrictError::InvalidArgument(format!(
                    "wrong number of arguments for {}: {}",
                    ty.keyword(),
                    args.len()
                )))
            }
        };

        Ok(command)
    }
}
