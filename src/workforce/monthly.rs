//! Monthly workforce simulation
//!
//! Each call to [`MonthlySimulator::advance`] emits one month's snapshot
//! and writes every lasting change (resignations, promotions, reviews,
//! engagement drift) back into the population.
//!
//! Per employee, in order:
//! 1. resignation check (active, non-temporary, at least a year of service)
//! 2. promotion check (year boundaries only)
//! 3. performance review (year boundaries, in the employee's hire month)
//! 4. engagement drift
//!
//! An employee who resigns this month still gets this month's row with the
//! new resign date, and is absent from every later month.

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::core::calendar::{self, MonthCalendar};
use crate::core::config::GeneratorConfig;
use crate::workforce::employee::Employee;
use crate::workforce::population::Population;
use crate::workforce::rules;

/// One employee as seen in one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRow {
    pub employee: Employee,
    pub base_date: NaiveDate,
    /// False only for rows added by the concurrent-position expander
    pub is_primary_position: bool,
}

/// Lifecycle events applied during one month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthEvents {
    pub resignations: u32,
    pub promotions: u32,
    pub reviews: u32,
    pub drifts: u32,
}

/// Immutable output of one simulated month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSnapshot {
    pub month_index: u32,
    pub base_date: NaiveDate,
    pub rows: Vec<SnapshotRow>,
    pub events: MonthEvents,
}

/// Applies the monthly lifecycle rules to a population
pub struct MonthlySimulator<'a> {
    config: &'a GeneratorConfig,
    catalog: &'a Catalog,
    monthly_resignation: f64,
}

impl<'a> MonthlySimulator<'a> {
    pub fn new(config: &'a GeneratorConfig, catalog: &'a Catalog) -> Self {
        Self {
            config,
            catalog,
            monthly_resignation: config.monthly_resignation_probability(),
        }
    }

    /// Simulate month `month_index` whose first day is `base_date`
    pub fn advance(
        &self,
        population: &mut Population,
        month_index: u32,
        base_date: NaiveDate,
        rng: &mut ChaCha8Rng,
    ) -> MonthSnapshot {
        let year_boundary = MonthCalendar::is_year_boundary(month_index);
        let mut events = MonthEvents::default();
        let mut rows = Vec::with_capacity(population.len());

        for employee in population.iter_mut() {
            if employee.left_before(base_date) {
                continue;
            }

            let resigned_now = self.check_resignation(employee, base_date, rng);
            if resigned_now {
                events.resignations += 1;
            }

            if year_boundary && !resigned_now && self.check_promotion(employee, rng) {
                events.promotions += 1;
            }

            if year_boundary && self.review(employee, base_date) {
                events.reviews += 1;
            }

            if self.drift_engagement(employee, base_date, rng) {
                events.drifts += 1;
            }

            rows.push(SnapshotRow {
                employee: employee.clone(),
                base_date,
                is_primary_position: true,
            });
        }

        tracing::debug!(
            month = month_index,
            %base_date,
            rows = rows.len(),
            resignations = events.resignations,
            promotions = events.promotions,
            reviews = events.reviews,
            "month simulated"
        );

        MonthSnapshot {
            month_index,
            base_date,
            rows,
            events,
        }
    }

    fn check_resignation(&self, employee: &mut Employee, base_date: NaiveDate, rng: &mut ChaCha8Rng) -> bool {
        if !employee.is_active() || employee.is_temporary() {
            return false;
        }
        if calendar::years_between(employee.hire_date, base_date) < 1.0 {
            return false;
        }
        if rng.gen::<f64>() >= self.monthly_resignation {
            return false;
        }

        employee.resign_date = calendar::month_end(base_date);
        true
    }

    /// Moves the employee one rung up; a no-op at the top rung
    ///
    /// Besides the org path and salary, a promotion also refreshes
    /// `job_grade` so it keeps tracking the rung.
    fn check_promotion(&self, employee: &mut Employee, rng: &mut ChaCha8Rng) -> bool {
        if employee.is_temporary() {
            return false;
        }
        if rng.gen::<f64>() >= rules::PROMOTION_PROBABILITY {
            return false;
        }
        if employee.rung >= self.catalog.top_rung() {
            return false;
        }

        let rung = employee.rung + 1;
        employee.rung = rung;
        employee.org.apply_rank(self.catalog.rank_of(rung));
        if employee.salary.is_some() {
            employee.salary = rules::salary_for(
                employee.emp_type,
                self.config.salary_range,
                rung,
                self.catalog.positions.len(),
            );
        }
        if employee.job_grade.is_some() {
            employee.job_grade = Some(rules::job_grade_for(rung));
        }
        true
    }

    fn review(&self, employee: &mut Employee, base_date: NaiveDate) -> bool {
        if employee.is_temporary() {
            return false;
        }
        let Some(score) = employee.engagement_score else {
            return false;
        };
        if base_date.month() != employee.hire_date.month() || !employee.employed_after(base_date) {
            return false;
        }

        let grade = rules::performance_level_of(score);
        employee.performance = Some(grade);
        if let Some(salary) = employee.salary {
            employee.salary = Some(rules::adjust_salary_by_performance(
                salary,
                grade,
                self.config.salary_range,
            ));
        }
        true
    }

    fn drift_engagement(&self, employee: &mut Employee, base_date: NaiveDate, rng: &mut ChaCha8Rng) -> bool {
        if employee.is_temporary() || !employee.employed_after(base_date) {
            return false;
        }
        let Some(score) = employee.engagement_score else {
            return false;
        };
        if rng.gen::<f64>() >= rules::DRIFT_PROBABILITY {
            return false;
        }

        let (low, high) = rules::DRIFT_BAND;
        let factor = rng.gen_range(low..=high);
        employee.engagement_score = Some(rules::clamp_engagement(score as f64 * factor));
        true
    }
}
