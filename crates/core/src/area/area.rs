use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of independently switchable lights in every area.
pub const LIGHT_COUNT: usize = 3;

/// The two facility areas tracked by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AreaKind {
    #[default]
    Gym,
    SwimmingPool,
}

impl AreaKind {
    pub const ALL: [AreaKind; 2] = [AreaKind::Gym, AreaKind::SwimmingPool];

    /// Human-readable label shown in menus and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gym => "Gym",
            Self::SwimmingPool => "Swimming Pool",
        }
    }
}

impl fmt::Display for AreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown area selection {0:?}")]
pub struct UnknownArea(pub String);

/// Parses the single-letter selection code (`G` or `P`), trimmed and case-insensitive.
impl FromStr for AreaKind {
    type Err = UnknownArea;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "G" => Ok(Self::Gym),
            "P" => Ok(Self::SwimmingPool),
            _ => Err(UnknownArea(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("light number {0} is out of range, must be 1, 2, or 3")]
pub struct LightNumberError(pub i32);

/// A user-facing light number, guaranteed to be in `1..=LIGHT_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LightNumber(u8);

impl LightNumber {
    pub fn get(&self) -> u8 {
        self.0
    }

    fn index(&self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn all() -> impl Iterator<Item = LightNumber> {
        (1..=LIGHT_COUNT as u8).map(LightNumber)
    }
}

impl TryFrom<i32> for LightNumber {
    type Error = LightNumberError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if (1..=LIGHT_COUNT as i32).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(LightNumberError(value))
        }
    }
}

impl fmt::Display for LightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a removal request. `removed` is smaller than `requested` when the
/// request was clamped to the current occupant count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    pub requested: u32,
    pub removed: u32,
}

impl Removal {
    pub fn was_clamped(&self) -> bool {
        self.removed < self.requested
    }
}

/// Occupancy and light state for a single area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaState {
    kind: AreaKind,
    occupants: u32,
    lights: [bool; LIGHT_COUNT],
}

impl AreaState {
    /// Create an empty area with every light off.
    pub fn new(kind: AreaKind) -> Self {
        Self {
            kind,
            occupants: 0,
            lights: [false; LIGHT_COUNT],
        }
    }

    pub fn kind(&self) -> AreaKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.label()
    }

    pub fn occupants(&self) -> u32 {
        self.occupants
    }

    pub fn lights(&self) -> &[bool; LIGHT_COUNT] {
        &self.lights
    }

    pub fn light(&self, number: LightNumber) -> bool {
        self.lights[number.index()]
    }

    /// Add `n` occupants. The count saturates at `u32::MAX`; the number actually
    /// added is returned.
    pub fn add_occupants(&mut self, n: u32) -> u32 {
        let before = self.occupants;
        self.occupants = self.occupants.saturating_add(n);
        self.occupants - before
    }

    /// Remove `n` occupants, clamping at zero.
    pub fn remove_occupants(&mut self, n: u32) -> Removal {
        let removed = n.min(self.occupants);
        self.occupants -= removed;
        Removal {
            requested: n,
            removed,
        }
    }

    pub fn switch_light(&mut self, number: LightNumber, on: bool) {
        self.lights[number.index()] = on;
    }

    /// Multi-line status text: name, occupant count, then lights 1 to 3.
    pub fn status_report(&self) -> String {
        let lights = LightNumber::all()
            .map(|number| {
                let state = if self.light(number) { "ON" } else { "OFF" };
                format!("Light {}: {}", number, state)
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Area Name: {}\nOccupants: {}\nLight States: {}",
            self.name(),
            self.occupants,
            lights
        )
    }
}

impl fmt::Display for AreaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.status_report())
    }
}
