pub use area::area::{
    AreaKind, AreaState, LightNumber, LightNumberError, Removal, UnknownArea, LIGHT_COUNT,
};
pub use area::facility::Facility;
pub use config::{ConfigError, Settings};
pub use console::{ConsoleError, EstatesConsole, SessionEnd};
pub use input::{InputError, Prompter};
pub use messages::{ConsoleCommand, ConsoleEvent, Prompt, UnknownCommand};

mod area;
mod config;
mod console;
mod input;
pub mod messages;
