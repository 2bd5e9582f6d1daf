use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::area::area::{AreaKind, LightNumber};

const ALERT: &str = "🛑";
const WAVE: &str = "👋";
const SEPARATOR_WIDTH: usize = 41;

/// Top-level menu commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    SelectArea,
    AddOccupants,
    RemoveOccupants,
    LightOn,
    LightOff,
    Report,
    Quit,
}

impl ConsoleCommand {
    pub const ALL: [ConsoleCommand; 7] = [
        Self::SelectArea,
        Self::AddOccupants,
        Self::RemoveOccupants,
        Self::LightOn,
        Self::LightOff,
        Self::Report,
        Self::Quit,
    ];

    pub fn key(&self) -> char {
        match self {
            Self::SelectArea => 'S',
            Self::AddOccupants => 'W',
            Self::RemoveOccupants => 'X',
            Self::LightOn => 'Y',
            Self::LightOff => 'Z',
            Self::Report => 'R',
            Self::Quit => 'Q',
        }
    }

    /// Menu line describing the command.
    pub fn description(&self) -> &'static str {
        match self {
            Self::SelectArea => "Select active area (G=Gym, P=Swimming)",
            Self::AddOccupants => "Add occupants (n)",
            Self::RemoveOccupants => "Remove occupants (n)",
            Self::LightOn => "Switch ON light (1-3)",
            Self::LightOff => "Switch OFF light (1-3)",
            Self::Report => "Report status",
            Self::Quit => "Quit the program",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command {0:?}")]
pub struct UnknownCommand(pub String);

impl FromStr for ConsoleCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|command| key.len() == 1 && key.starts_with(command.key()))
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// Text written before reading a line of input. Prompts never end in a newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Command,
    AreaSelection,
    AddCount,
    RemoveCount,
    LightNumber { on: bool },
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command => {
                let keys: Vec<String> = ConsoleCommand::ALL
                    .iter()
                    .map(|command| command.key().to_string())
                    .collect();
                write!(f, "\nEnter Command ({}): ", keys.join(", "))
            }
            Self::AreaSelection => f.write_str("Select (G)ym or (P)ool: "),
            Self::AddCount => f.write_str("Enter number of occupants to ADD: "),
            Self::RemoveCount => f.write_str("Enter number of occupants to REMOVE: "),
            Self::LightNumber { on } => write!(
                f,
                "Enter light number (1, 2, or 3) to switch {}: ",
                on_off(*on)
            ),
        }
    }
}

/// Everything the console reports back to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Started { facility: String, area: AreaKind },
    Menu { area: AreaKind },
    Separator,

    AreaSelected { area: AreaKind },
    InvalidSelection { active: AreaKind },

    OccupantsAdded { area: AreaKind, count: u32 },
    NegativeAdd,
    RemovalClamped { requested: u32, removed: u32 },
    OccupantsRemoved { area: AreaKind, count: u32 },
    NegativeRemove,

    LightSwitched { area: AreaKind, number: LightNumber, on: bool },
    InvalidLightNumber,
    InvalidInteger,

    StatusReport { area: AreaKind, report: String },

    InvalidCommand,
    Goodbye,
}

impl ConsoleEvent {
    /// Render the event as one or more output lines, without a trailing newline.
    /// `plain` drops the decorative glyphs.
    pub fn render(&self, plain: bool) -> String {
        match self {
            Self::Started { facility, area } => format!(
                "{} Estates Manager Application started.\nDefault active area: {}",
                facility, area
            ),
            Self::Menu { area } => {
                let mut lines = vec![format!("\n--- MAIN MENU (Active Area: {}) ---", area)];
                lines.extend(
                    ConsoleCommand::ALL
                        .iter()
                        .map(|command| format!("{} - {}", command.key(), command.description())),
                );
                lines.join("\n")
            }
            Self::Separator => format!("\n{}", "-".repeat(SEPARATOR_WIDTH)),
            Self::AreaSelected { area } => format!("Active area is now: {}", area),
            Self::InvalidSelection { active } => alert(
                plain,
                &format!("Invalid selection. Active area remains: {}", active),
            ),
            Self::OccupantsAdded { area, count } => {
                format!("{} occupants added to {}.", count, area)
            }
            Self::NegativeAdd => alert(plain, "Cannot add a negative number of occupants."),
            Self::RemovalClamped { requested, removed } => format!(
                "Warning: Cannot remove {}. Removing all {} occupants instead.",
                requested, removed
            ),
            Self::OccupantsRemoved { area, count } => {
                format!("{} occupants removed from {}.", count, area)
            }
            Self::NegativeRemove => alert(plain, "Cannot remove a negative number of occupants."),
            Self::LightSwitched { area, number, on } => {
                format!("Light {} switched {} in {}.", number, on_off(*on), area)
            }
            Self::InvalidLightNumber => alert(plain, "Invalid light number. Must be 1, 2, or 3."),
            Self::InvalidInteger => alert(plain, "Invalid input. Please enter an INTEGER only."),
            Self::StatusReport { area, report } => {
                format!("\n--- STATUS REPORT FOR {} ---\n{}", area, report)
            }
            Self::InvalidCommand => alert(plain, "Invalid command. Please try again."),
            Self::Goodbye => {
                if plain {
                    "Program terminated successfully. Goodbye!".to_string()
                } else {
                    format!("Program terminated successfully. Goodbye! {}", WAVE)
                }
            }
        }
    }
}

fn alert(plain: bool, message: &str) -> String {
    if plain {
        message.to_string()
    } else {
        format!("{} {}", ALERT, message)
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "ON"
    } else {
        "OFF"
    }
}
