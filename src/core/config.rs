//! Generator configuration with documented constants
//!
//! One `GeneratorConfig` is built per run and threaded explicitly through
//! every stage; nothing in the crate reads process-wide settings.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::calendar;
use crate::core::error::{HrError, Result};
use crate::core::types::Language;

/// Smallest workforce the generator is tuned for
pub const MIN_EMPLOYEES: u32 = 100;

/// Largest workforce the generator is tuned for
pub const MAX_EMPLOYEES: u32 = 500;

pub const DEFAULT_EMPLOYEES: u32 = 300;

/// Longest supported horizon (two years)
pub const MAX_MONTHS: u32 = 24;

/// Configuration for one dataset generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Vocabulary language for the catalog and the name source
    pub language: Language,

    /// Exact headcount of the first simulated month
    pub employee_count: u32,

    /// Number of monthly snapshots to produce
    pub num_months: u32,

    /// Inclusive age range in years, `(min, max)`
    pub age_range: (u32, u32),

    /// Inclusive annual salary range, `(min, max)`
    pub salary_range: (u64, u64),

    /// Annual resignation probability
    ///
    /// Converted to a monthly hazard of `1 - (1 - p)^(1/12)` so twelve
    /// monthly draws compound back to `p`.
    pub resignation_rate: f64,

    /// Emit secondary-department rows for some employees
    pub include_concurrent_positions: bool,

    /// Per-row probability of a secondary-department row
    pub concurrent_position_rate: f64,

    /// Seed for every random source; `None` draws from OS entropy
    pub random_seed: Option<u64>,

    /// The simulated "now"; `None` means today's local date
    pub as_of: Option<NaiveDate>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            employee_count: DEFAULT_EMPLOYEES,
            num_months: 1,
            age_range: (25, 55),
            salary_range: (4_000_000, 10_000_000),
            resignation_rate: 0.10,
            include_concurrent_positions: false,
            concurrent_position_rate: 0.05,
            random_seed: None,
            as_of: None,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reference date for the run
    pub fn reference_date(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(calendar::today)
    }

    pub fn monthly_resignation_probability(&self) -> f64 {
        1.0 - (1.0 - self.resignation_rate).powf(1.0 / 12.0)
    }

    /// Check the configuration against the bounds the generator is tuned for
    ///
    /// The generator itself does not call this: a config that fails here
    /// (for instance a zero-width age range) can make population building
    /// spin forever, so front ends should reject it first.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_EMPLOYEES..=MAX_EMPLOYEES).contains(&self.employee_count) {
            return Err(HrError::InvalidConfig(format!(
                "employee_count ({}) must be within {}..={}",
                self.employee_count, MIN_EMPLOYEES, MAX_EMPLOYEES
            )));
        }

        if !(1..=MAX_MONTHS).contains(&self.num_months) {
            return Err(HrError::InvalidConfig(format!(
                "num_months ({}) must be within 1..={}",
                self.num_months, MAX_MONTHS
            )));
        }

        let (age_min, age_max) = self.age_range;
        if age_min >= age_max {
            return Err(HrError::InvalidConfig(format!(
                "age_range ({}, {}) must be strictly increasing",
                age_min, age_max
            )));
        }

        let (salary_min, salary_max) = self.salary_range;
        if salary_min > salary_max {
            return Err(HrError::InvalidConfig(format!(
                "salary_range ({}, {}) is inverted",
                salary_min, salary_max
            )));
        }

        for (name, p) in [
            ("resignation_rate", self.resignation_rate),
            ("concurrent_position_rate", self.concurrent_position_rate),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(HrError::InvalidConfig(format!(
                    "{} ({}) must be a probability",
                    name, p
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.employee_count, 300);
        assert_eq!(config.resignation_rate, 0.10);
        assert_eq!(config.concurrent_position_rate, 0.05);
        assert!(!config.include_concurrent_positions);
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let config = GeneratorConfig {
            employee_count: 0,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            age_range: (40, 40),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            salary_range: (10, 5),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            resignation_rate: 1.5,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_monthly_probability_compounds_to_annual() {
        let config = GeneratorConfig::default();
        let monthly = config.monthly_resignation_probability();
        let annual = 1.0 - (1.0 - monthly).powi(12);
        assert!((annual - 0.10).abs() < 1e-12);
    }

    #[test]
    fn test_from_toml() {
        let config = GeneratorConfig::from_toml_str(
            r#"
            language = "Japanese"
            employee_count = 150
            num_months = 6
            age_range = [30, 50]
            random_seed = 7
            as_of = "2024-06-15"
            "#,
        )
        .unwrap();
        assert_eq!(config.language, Language::Japanese);
        assert_eq!(config.employee_count, 150);
        assert_eq!(config.age_range, (30, 50));
        assert_eq!(config.salary_range, (4_000_000, 10_000_000));
        assert_eq!(config.random_seed, Some(7));
        assert_eq!(
            config.reference_date(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
    }
}
