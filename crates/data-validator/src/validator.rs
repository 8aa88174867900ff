//! Profile Validator for Range Checking

use crate::error::ValidationError;
use census_record::Profile;
use serde::{Deserialize, Serialize};

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Age valid range (years)
    pub age_range: (u32, u32),
    /// Hours-per-week valid range
    pub hours_range: (u32, u32),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            age_range: Profile::AGE_RANGE,
            hours_range: Profile::HOURS_RANGE,
        }
    }
}

/// Result of validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether all values are valid
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Number of fields validated
    pub fields_checked: usize,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid(fields_checked: usize) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            fields_checked,
        }
    }

    /// Create an invalid result with errors
    pub fn invalid(errors: Vec<ValidationError>, fields_checked: usize) -> Self {
        Self {
            valid: false,
            errors,
            fields_checked,
        }
    }
}

/// Validator for demographic profiles.
///
/// Categorical fields are closed enums and cannot hold out-of-domain values,
/// so only the numeric fields need range checks here.
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a single value against a range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: u32,
        range: (u32, u32),
    ) -> Result<(), ValidationError> {
        if value < range.0 || value > range.1 {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate age
    pub fn validate_age(&self, age: u32) -> Result<(), ValidationError> {
        self.validate_range("age", age, self.config.age_range)
    }

    /// Validate hours per week
    pub fn validate_hours_per_week(&self, hours: u32) -> Result<(), ValidationError> {
        self.validate_range("hours_per_week", hours, self.config.hours_range)
    }

    /// Validate a whole profile, collecting every failure
    pub fn validate_profile(&self, profile: &Profile) -> ValidationResult {
        let checks = [
            self.validate_age(profile.age),
            self.validate_hours_per_week(profile.hours_per_week),
        ];
        let fields_checked = checks.len();

        let errors: Vec<ValidationError> =
            checks.into_iter().filter_map(Result::err).collect();

        if errors.is_empty() {
            ValidationResult::valid(fields_checked)
        } else {
            ValidationResult::invalid(errors, fields_checked)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
