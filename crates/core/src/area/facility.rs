use crate::area::area::{AreaKind, AreaState};

/// Owns both areas and tracks which one commands apply to.
#[derive(Debug, Clone)]
pub struct Facility {
    gym: AreaState,
    pool: AreaState,
    active: AreaKind,
}

impl Facility {
    pub fn new(initial: AreaKind) -> Self {
        Self {
            gym: AreaState::new(AreaKind::Gym),
            pool: AreaState::new(AreaKind::SwimmingPool),
            active: initial,
        }
    }

    pub fn active_kind(&self) -> AreaKind {
        self.active
    }

    pub fn active(&self) -> &AreaState {
        self.area(self.active)
    }

    pub fn active_mut(&mut self) -> &mut AreaState {
        match self.active {
            AreaKind::Gym => &mut self.gym,
            AreaKind::SwimmingPool => &mut self.pool,
        }
    }

    pub fn area(&self, kind: AreaKind) -> &AreaState {
        match kind {
            AreaKind::Gym => &self.gym,
            AreaKind::SwimmingPool => &self.pool,
        }
    }

    /// Make `kind` the active area, returning the previously active one.
    pub fn select(&mut self, kind: AreaKind) -> AreaKind {
        std::mem::replace(&mut self.active, kind)
    }
}

impl Default for Facility {
    fn default() -> Self {
        Self::new(AreaKind::default())
    }
}
