//! Console input grammar
//!
//! ```text
//! join <name> [admin]                   bring a player online at spawn
//! leave <name>                          disconnect a player
//! move <name> <x> <y> <z> [world]       teleport a player
//! click <name> <left|right> <x> <y> <z> [world]
//! sign <x> <y> <z> [world]              place a sign block
//! as <name> <command...>                run a trial command as a player
//! players                               list who is online
//! help | quit
//! <command...>                          run a trial command as the console
//! ```
//!
//! Trial commands may carry the root label (`/botanybay vote execute`) or
//! omit it (`vote execute`).

use bay_trial::{BlockPos, Interaction};
use thiserror::Error;

/// Short alias accepted in place of the command label.
pub const LABEL_ALIAS: &str = "bbay";

/// One parsed console line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleInput {
    Join {
        name: String,
        admin: bool,
    },
    Leave {
        name: String,
    },
    Move {
        name: String,
        position: BlockPos,
        world: Option<String>,
    },
    Click {
        name: String,
        interaction: Interaction,
        position: BlockPos,
        world: Option<String>,
    },
    PlaceSign {
        position: BlockPos,
        world: Option<String>,
    },
    /// Trial command issued by an online player
    As {
        name: String,
        command: String,
    },
    /// Trial command issued by the console
    Command(String),
    Players,
    Help,
    Quit,
    Blank,
}

/// Console grammar errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a block coordinate")]
    BadCoordinate(String),

    #[error("'{0}' is not a click; use left or right")]
    BadClick(String),
}

/// Help text shown by `help`.
pub const HELP: &[&str] = &[
    "join <name> [admin]",
    "leave <name>",
    "move <name> <x> <y> <z> [world]",
    "click <name> <left|right> <x> <y> <z> [world]",
    "sign <x> <y> <z> [world]",
    "as <name> <command...>",
    "players | help | quit",
    "<command...>  (start, ban, vote, status, cancel, set ...)",
];

/// Drop a leading `/label`, `label` or alias from a trial command.
pub fn strip_label<'a>(line: &'a str, command_label: &str) -> &'a str {
    let line = line.trim();
    let unslashed = line.strip_prefix('/').unwrap_or(line);
    let mut parts = unslashed.splitn(2, char::is_whitespace);
    match parts.next() {
        Some(first)
            if first.eq_ignore_ascii_case(command_label)
                || first.eq_ignore_ascii_case(LABEL_ALIAS) =>
        {
            parts.next().unwrap_or("").trim()
        }
        _ => unslashed,
    }
}

fn coordinate(word: Option<&str>, usage: &'static str) -> Result<i32, ConsoleError> {
    let word = word.ok_or(ConsoleError::Usage(usage))?;
    word.parse()
        .map_err(|_| ConsoleError::BadCoordinate(word.to_string()))
}

fn position<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    usage: &'static str,
) -> Result<BlockPos, ConsoleError> {
    let x = coordinate(words.next(), usage)?;
    let y = coordinate(words.next(), usage)?;
    let z = coordinate(words.next(), usage)?;
    Ok(BlockPos::new(x, y, z))
}

/// Parse one console line.
pub fn parse_line(line: &str, command_label: &str) -> Result<ConsoleInput, ConsoleError> {
    let line = line.trim();
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(ConsoleInput::Blank);
    };

    match verb.to_lowercase().as_str() {
        "join" => {
            const USAGE: &str = "join <name> [admin]";
            let name = words.next().ok_or(ConsoleError::Usage(USAGE))?;
            let admin = match words.next() {
                None => false,
                Some(role) if role.eq_ignore_ascii_case("admin") => true,
                Some(_) => return Err(ConsoleError::Usage(USAGE)),
            };
            Ok(ConsoleInput::Join {
                name: name.to_string(),
                admin,
            })
        }
        "leave" => {
            let name = words.next().ok_or(ConsoleError::Usage("leave <name>"))?;
            Ok(ConsoleInput::Leave {
                name: name.to_string(),
            })
        }
        "move" => {
            const USAGE: &str = "move <name> <x> <y> <z> [world]";
            let name = words.next().ok_or(ConsoleError::Usage(USAGE))?;
            let position = position(&mut words, USAGE)?;
            Ok(ConsoleInput::Move {
                name: name.to_string(),
                position,
                world: words.next().map(str::to_string),
            })
        }
        "click" => {
            const USAGE: &str = "click <name> <left|right> <x> <y> <z> [world]";
            let name = words.next().ok_or(ConsoleError::Usage(USAGE))?;
            let interaction = match words.next().map(str::to_lowercase).as_deref() {
                Some("left") | Some("primary") => Interaction::Primary,
                Some("right") | Some("secondary") => Interaction::Secondary,
                Some(other) => return Err(ConsoleError::BadClick(other.to_string())),
                None => return Err(ConsoleError::Usage(USAGE)),
            };
            let position = position(&mut words, USAGE)?;
            Ok(ConsoleInput::Click {
                name: name.to_string(),
                interaction,
                position,
                world: words.next().map(str::to_string),
            })
        }
        "sign" => {
            const USAGE: &str = "sign <x> <y> <z> [world]";
            let position = position(&mut words, USAGE)?;
            Ok(ConsoleInput::PlaceSign {
                position,
                world: words.next().map(str::to_string),
            })
        }
        "as" => {
            const USAGE: &str = "as <name> <command...>";
            let name = words.next().ok_or(ConsoleError::Usage(USAGE))?;
            let command = words.collect::<Vec<_>>().join(" ");
            let command = strip_label(&command, command_label).to_string();
            if command.is_empty() {
                return Err(ConsoleError::Usage(USAGE));
            }
            Ok(ConsoleInput::As {
                name: name.to_string(),
                command,
            })
        }
        "players" | "list" => Ok(ConsoleInput::Players),
        "help" | "?" => Ok(ConsoleInput::Help),
        "quit" | "exit" | "stop" => Ok(ConsoleInput::Quit),
        _ => Ok(ConsoleInput::Command(
            strip_label(line, command_label).to_string(),
        )),
    }
}
