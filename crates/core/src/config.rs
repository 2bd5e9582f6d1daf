use thiserror::Error;

use crate::area::area::AreaKind;

/// Session settings for the estates console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Name shown in the startup banner
    pub facility_name: String,
    /// Area that commands target until the operator selects another
    pub initial_area: AreaKind,
    /// Omit decorative glyphs from messages
    pub plain_output: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            facility_name: "Speke Apartments".to_string(),
            initial_area: AreaKind::Gym,
            plain_output: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Config validation errors: {}", .0.join(", "))]
    ValidationError(Vec<String>),
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let name = self.facility_name.trim();
        if name.is_empty() {
            errors.push("facility name must not be empty".to_string());
        }
        if name.contains('\n') {
            errors.push("facility name must be a single line".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationError(errors))
        }
    }
}
