//! Base population and its builder

use ahash::AHashMap;

use crate::catalog::Catalog;
use crate::core::config::GeneratorConfig;
use crate::core::error::Result;
use crate::core::types::EmployeeId;
use crate::names::NameSource;
use crate::workforce::employee::Employee;
use crate::workforce::factory::EmployeeFactory;
use crate::workforce::rng::RandomSources;
use crate::workforce::validator::{self, Rejection};

/// Consecutive rejections after which the builder starts warning
const REJECTION_STREAK_WARNING: u64 = 10_000;

/// Persistent employee state carried across simulated months
#[derive(Debug, Clone, Default)]
pub struct Population {
    employees: Vec<Employee>,
    index: AHashMap<EmployeeId, usize>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, employee: Employee) {
        self.index.insert(employee.id, self.employees.len());
        self.employees.push(employee);
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.index.get(&id).map(|&idx| &self.employees[idx])
    }

    pub fn get_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        match self.index.get(&id) {
            Some(&idx) => self.employees.get_mut(idx),
            None => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Employee> {
        self.employees.iter_mut()
    }

    pub fn active_count(&self) -> usize {
        self.employees.iter().filter(|e| e.is_active()).count()
    }
}

/// Statistics from one build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub accepted: usize,
    pub rejected: u64,
}

/// Build exactly `config.employee_count` valid employees
///
/// Every candidate consumes the next sequence number whether or not it is
/// kept, so ids are unique but not necessarily contiguous. There is no
/// attempt cap: a configuration the factory cannot satisfy (for instance a
/// zero-width age range) keeps this loop running, which is why front ends
/// call `GeneratorConfig::validate` first.
pub fn build_population(
    factory: &EmployeeFactory<'_>,
    config: &GeneratorConfig,
    catalog: &Catalog,
    rng: &mut RandomSources,
    names: &mut dyn NameSource,
) -> (Population, BuildReport) {
    let target = config.employee_count as usize;
    let mut population = Population::new();
    let mut report = BuildReport::default();
    let mut streak: u64 = 0;
    let mut seq: u32 = 1;

    while population.len() < target {
        let candidate = factory.create(rng, names, seq);
        seq = seq.wrapping_add(1);

        match validator::validate(
            &candidate,
            config.age_range,
            config.salary_range,
            catalog,
            factory.today(),
        ) {
            Ok(()) => {
                population.push(candidate);
                streak = 0;
            }
            Err(rejection) => {
                report.rejected += 1;
                streak += 1;
                log_rejection(&candidate, &rejection, streak);
            }
        }
    }

    report.accepted = population.len();
    (population, report)
}

fn log_rejection(candidate: &Employee, rejection: &Rejection, streak: u64) {
    tracing::trace!(id = %candidate.id, %rejection, "candidate rejected");
    if streak % REJECTION_STREAK_WARNING == 0 {
        tracing::warn!(
            streak,
            last_reason = %rejection,
            "population builder keeps rejecting candidates; check age and salary ranges"
        );
    }
}

/// Convenience wrapper constructing the factory for a reference date
pub fn build(
    config: &GeneratorConfig,
    catalog: &Catalog,
    rng: &mut RandomSources,
    names: &mut dyn NameSource,
) -> Result<Population> {
    let factory = EmployeeFactory::new(config, catalog, config.reference_date())?;
    let (population, report) = build_population(&factory, config, catalog, rng, names);
    tracing::debug!(
        accepted = report.accepted,
        rejected = report.rejected,
        "base population built"
    );
    Ok(population)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::PoolNameSource;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn config(count: u32) -> GeneratorConfig {
        GeneratorConfig {
            employee_count: count,
            random_seed: Some(42),
            as_of: NaiveDate::from_ymd_opt(2024, 10, 18),
            ..GeneratorConfig::default()
        }
    }

    fn build_for(config: &GeneratorConfig) -> Population {
        let catalog = Catalog::english();
        let mut rng = RandomSources::seeded(42);
        let mut names = PoolNameSource::seeded(catalog.names.clone(), 42);
        build(config, &catalog, &mut rng, &mut names).unwrap()
    }

    #[test]
    fn test_exact_headcount() {
        for count in [1, 100, 200, 500] {
            let population = build_for(&config(count));
            assert_eq!(population.len(), count as usize);
            assert_eq!(population.active_count(), count as usize);
        }
    }

    #[test]
    fn test_unique_ids_and_lookup() {
        let population = build_for(&config(200));
        let ids: HashSet<_> = population.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 200);
        for emp in population.iter() {
            assert_eq!(population.get(emp.id).map(|e| e.id), Some(emp.id));
        }
        assert!(population.get(EmployeeId(999_999)).is_none());
    }

    #[test]
    fn test_ids_increase() {
        let population = build_for(&config(150));
        let ids: Vec<u32> = population.iter().map(|e| e.id.0).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_rejected_ids_are_skipped() {
        let config = config(300);
        let catalog = Catalog::english();
        let today = config.reference_date();
        let factory = EmployeeFactory::new(&config, &catalog, today).unwrap();
        let mut rng = RandomSources::seeded(42);
        let mut names = PoolNameSource::seeded(catalog.names.clone(), 42);
        let (population, report) = build_population(&factory, &config, &catalog, &mut rng, &mut names);

        let last = population.iter().last().map(|e| e.id.0).unwrap();
        assert_eq!(report.accepted, 300);
        assert_eq!(last as u64, 300 + report.rejected);
    }

    #[test]
    fn test_get_mut_persists() {
        let mut population = build_for(&config(100));
        let id = population.iter().next().unwrap().id;
        population.get_mut(id).unwrap().is_married = true;
        assert!(population.get(id).unwrap().is_married);
    }
}
