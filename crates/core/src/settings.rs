//! Dashboard preferences kept by the dashboard itself.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timezone {
    #[default]
    Utc,
    Est,
    Pst,
    Cet,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationLevel {
    #[default]
    Strict,
    Standard,
    Relaxed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Settings {
    #[validate(length(min = 1, max = 200))]
    pub company_name: String,
    pub timezone: Timezone,
    #[validate(range(min = 1, max = 100))]
    pub max_file_size_mb: u32,
    pub validation_level: ValidationLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            company_name: "AzStat Corp".to_string(),
            timezone: Timezone::Utc,
            max_file_size_mb: 10,
            validation_level: ValidationLevel::Strict,
        }
    }
}

impl Settings {
    /// Validate field constraints, mapping failures to [`CoreError::Validation`].
    pub fn checked(self) -> Result<Self, CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        Ok(self)
    }
}
