use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::area::area::{AreaKind, LightNumber};
use crate::area::facility::Facility;
use crate::config::Settings;
use crate::input::{InputError, Prompter};
use crate::messages::{ConsoleCommand, ConsoleEvent, Prompt};

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Failed to exchange operator input")]
    Input(#[source] io::Error),

    #[error("Failed to write console output")]
    Output(#[from] io::Error),
}

/// How a console session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The operator entered `Q`.
    Quit,
    /// Input ran out before `Q` was entered.
    InputClosed,
}

/// Menu-driven controller over the gym and pool.
///
/// Reads one command per line, applies it to the active area and reports the
/// result. Malformed input never ends the session; only `Q` or the input stream
/// closing does.
pub struct EstatesConsole<R, W> {
    settings: Settings,
    facility: Facility,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> EstatesConsole<R, W> {
    pub fn new(settings: Settings, input: R, output: W) -> Self {
        let facility = Facility::new(settings.initial_area);
        let prompter = Prompter::new(input, output, settings.plain_output);
        Self {
            settings,
            facility,
            prompter,
        }
    }

    pub fn facility(&self) -> &Facility {
        &self.facility
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run the menu loop until the operator quits or input is exhausted.
    pub fn run(&mut self) -> Result<SessionEnd, ConsoleError> {
        log::info!(
            "Starting estates console for {} (active area: {})",
            self.settings.facility_name,
            self.facility.active_kind()
        );
        self.prompter.emit(&ConsoleEvent::Started {
            facility: self.settings.facility_name.clone(),
            area: self.facility.active_kind(),
        })?;

        loop {
            self.prompter.emit(&ConsoleEvent::Menu {
                area: self.facility.active_kind(),
            })?;

            let (command, events) = match self.next_command() {
                Ok(Some(command)) => {
                    log::debug!("Dispatching {:?}", command);
                    match self.execute(command) {
                        Ok(events) => (Some(command), events),
                        Err(e) => return Self::closed_or_fail(e),
                    }
                }
                Ok(None) => (None, vec![ConsoleEvent::InvalidCommand]),
                Err(e) => return Self::closed_or_fail(e),
            };

            for event in &events {
                self.prompter.emit(event)?;
            }
            self.prompter.emit(&ConsoleEvent::Separator)?;

            if command == Some(ConsoleCommand::Quit) {
                log::info!("Operator quit the estates console");
                return Ok(SessionEnd::Quit);
            }
        }
    }

    fn next_command(&mut self) -> Result<Option<ConsoleCommand>, InputError> {
        let line = self.prompter.read_line(Prompt::Command)?;
        match line.parse::<ConsoleCommand>() {
            Ok(command) => Ok(Some(command)),
            Err(e) => {
                log::debug!("{}", e);
                Ok(None)
            }
        }
    }

    fn closed_or_fail(err: InputError) -> Result<SessionEnd, ConsoleError> {
        match err {
            InputError::Closed => {
                log::warn!("Input closed before quit command, ending session");
                Ok(SessionEnd::InputClosed)
            }
            InputError::Io(e) => Err(ConsoleError::Input(e)),
        }
    }

    /// Gather any operands for `command` from the operator, then apply it.
    pub fn execute(&mut self, command: ConsoleCommand) -> Result<Vec<ConsoleEvent>, InputError> {
        let events = match command {
            ConsoleCommand::SelectArea => {
                let selection = self.prompter.read_line(Prompt::AreaSelection)?;
                match selection.parse::<AreaKind>() {
                    Ok(kind) => vec![self.select_area(kind)],
                    Err(e) => {
                        log::debug!("{}", e);
                        vec![ConsoleEvent::InvalidSelection {
                            active: self.facility.active_kind(),
                        }]
                    }
                }
            }
            ConsoleCommand::AddOccupants => {
                let n = self.prompter.read_integer(Prompt::AddCount)?;
                self.add_occupants(n)
            }
            ConsoleCommand::RemoveOccupants => {
                let n = self.prompter.read_integer(Prompt::RemoveCount)?;
                self.remove_occupants(n)
            }
            ConsoleCommand::LightOn => {
                let number = self.prompter.read_light_number(true)?;
                vec![self.switch_light(number, true)]
            }
            ConsoleCommand::LightOff => {
                let number = self.prompter.read_light_number(false)?;
                vec![self.switch_light(number, false)]
            }
            ConsoleCommand::Report => vec![self.report()],
            ConsoleCommand::Quit => vec![ConsoleEvent::Goodbye],
        };
        Ok(events)
    }

    pub fn select_area(&mut self, kind: AreaKind) -> ConsoleEvent {
        let previous = self.facility.select(kind);
        if previous != kind {
            log::info!("Active area changed from {} to {}", previous, kind);
        }
        ConsoleEvent::AreaSelected { area: kind }
    }

    /// Zero is ignored without a message; negative counts are refused.
    pub fn add_occupants(&mut self, n: i32) -> Vec<ConsoleEvent> {
        if n < 0 {
            return vec![ConsoleEvent::NegativeAdd];
        }
        if n == 0 {
            return Vec::new();
        }

        let area = self.facility.active_mut();
        let count = area.add_occupants(n.unsigned_abs());
        if count < n.unsigned_abs() {
            log::warn!("{} occupant count saturated at {}", area.name(), area.occupants());
        }
        vec![ConsoleEvent::OccupantsAdded {
            area: area.kind(),
            count,
        }]
    }

    pub fn remove_occupants(&mut self, n: i32) -> Vec<ConsoleEvent> {
        if n < 0 {
            return vec![ConsoleEvent::NegativeRemove];
        }
        if n == 0 {
            return Vec::new();
        }

        let area = self.facility.active_mut();
        let removal = area.remove_occupants(n.unsigned_abs());
        let mut events = Vec::with_capacity(2);
        if removal.was_clamped() {
            log::warn!(
                "Requested removal of {} from {} clamped to {}",
                removal.requested,
                area.name(),
                removal.removed
            );
            events.push(ConsoleEvent::RemovalClamped {
                requested: removal.requested,
                removed: removal.removed,
            });
        }
        events.push(ConsoleEvent::OccupantsRemoved {
            area: area.kind(),
            count: removal.removed,
        });
        events
    }

    pub fn switch_light(&mut self, number: LightNumber, on: bool) -> ConsoleEvent {
        let area = self.facility.active_mut();
        area.switch_light(number, on);
        ConsoleEvent::LightSwitched {
            area: area.kind(),
            number,
            on,
        }
    }

    pub fn report(&self) -> ConsoleEvent {
        let area = self.facility.active();
        ConsoleEvent::StatusReport {
            area: area.kind(),
            report: area.status_report(),
        }
    }
}
