//! Configuration parameters for the workplace simulation

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Main configuration for a simulated company
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyParams {
    // Staffing
    /// Fewest employees hired when the company is generated
    pub min_headcount: u32,
    /// Most employees hired when the company is generated
    pub max_headcount: u32,
    /// Lowest weekly target of working days for a generated employee
    pub min_target_days: u32,
    /// Highest weekly target of working days for a generated employee
    pub max_target_days: u32,
    /// Initial unavailable counter is drawn from 0..=this
    pub max_initial_unavailable: u32,

    // Shifts
    /// Scheduling stops adding people once this many are on shift
    pub min_shift_size: usize,
    /// Schedules larger than this are downsampled
    pub max_shift_size: usize,

    // Money
    /// Mean hourly rate of generated employees ($1.35 per eight-hour shift)
    pub hourly_wage: f64,
    /// Standard deviation of generated hourly rates
    pub hourly_wage_spread: f64,
    /// Revenue earned per labor hour
    pub hourly_revenue: f64,
    /// Fixed weekly costs
    pub weekly_operating_expenses: f64,

    // People
    /// Youngest generated person
    pub min_age: u32,
    /// Oldest generated person
    pub max_age: u32,
    /// Chance a generated person has a middle initial
    pub middle_initial_chance: f64,

    // Pacing
    /// Each day draws 0..=this many events
    pub max_events_per_day: u32,
    /// Number of applicants offered by the hiring menu
    pub hiring_pool_size: usize,
}

impl Default for CompanyParams {
    fn default() -> Self {
        CompanyParams {
            min_headcount: 5,
            max_headcount: 15,
            min_target_days: 1,
            max_target_days: 6,
            max_initial_unavailable: 2,
            min_shift_size: 5,
            max_shift_size: 10,
            hourly_wage: 1.35 / 8.0,
            hourly_wage_spread: 0.03,
            hourly_revenue: 0.25,
            weekly_operating_expenses: 21.00,
            min_age: 16,
            max_age: 80,
            middle_initial_chance: 0.25,
            max_events_per_day: 3,
            hiring_pool_size: 5,
        }
    }
}

impl CompanyParams {
    /// Load parameters from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let params: CompanyParams = serde_json::from_str(&text)?;
        params.validate()?;
        Ok(params)
    }

    /// Reject inverted ranges and impossible shift sizes
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_headcount > self.max_headcount {
            return Err(ConfigError::Invalid(format!(
                "min_headcount ({}) exceeds max_headcount ({})",
                self.min_headcount, self.max_headcount
            )));
        }
        if self.min_target_days > self.max_target_days || self.max_target_days > 7 {
            return Err(ConfigError::Invalid(format!(
                "target days must satisfy min <= max <= 7 (got {}..={})",
                self.min_target_days, self.max_target_days
            )));
        }
        if self.min_shift_size > self.max_shift_size {
            return Err(ConfigError::Invalid(format!(
                "min_shift_size ({}) exceeds max_shift_size ({})",
                self.min_shift_size, self.max_shift_size
            )));
        }
        if self.max_shift_size == 0 {
            return Err(ConfigError::Invalid("max_shift_size must be positive".to_string()));
        }
        if self.min_age > self.max_age {
            return Err(ConfigError::Invalid(format!(
                "min_age ({}) exceeds max_age ({})",
                self.min_age, self.max_age
            )));
        }
        if !(0.0..=1.0).contains(&self.middle_initial_chance) {
            return Err(ConfigError::Invalid(format!(
                "middle_initial_chance must be within [0, 1] (got {})",
                self.middle_initial_chance
            )));
        }
        if self.hourly_wage < 0.0 || self.hourly_wage_spread < 0.0 || self.hourly_revenue < 0.0 {
            return Err(ConfigError::Invalid("wages and revenue must not be negative".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(CompanyParams::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_shift_sizes_rejected() {
        let params = CompanyParams {
            min_shift_size: 12,
            max_shift_size: 10,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: CompanyParams = serde_json::from_str(r#"{ "min_shift_size": 3 }"#).unwrap();
        assert_eq!(params.min_shift_size, 3);
        assert_eq!(params.max_shift_size, 10);
        assert_eq!(params.max_events_per_day, 3);
    }
}
