//! Employee factory
//!
//! Builds one employee with mutually consistent attributes. Creation is
//! total: every call returns a structurally complete record, and the
//! population builder filters the rare candidate that fails validation.

use chrono::NaiveDate;
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;

use crate::catalog::{Catalog, DEFAULT_JOB_CATEGORY, DEFAULT_SUB_DEPARTMENT, MANAGEMENT_JOB_CATEGORY};
use crate::core::calendar;
use crate::core::config::GeneratorConfig;
use crate::core::error::{HrError, Result};
use crate::core::types::{EmployeeId, EmploymentType, RankGroup};
use crate::names::NameSource;
use crate::workforce::employee::{Employee, OrgPath};
use crate::workforce::rng::RandomSources;
use crate::workforce::rules;

/// Uniform pick from a list; `None` when the list is empty
pub(crate) fn pick(rng: &mut ChaCha8Rng, items: &[String]) -> Option<String> {
    items.choose(rng).cloned()
}

/// Factory bound to one config, catalog and reference date
pub struct EmployeeFactory<'a> {
    config: &'a GeneratorConfig,
    catalog: &'a Catalog,
    today: NaiveDate,
    positions: WeightedIndex<u32>,
    employment: WeightedIndex<u32>,
    engagement: Normal<f64>,
}

impl<'a> EmployeeFactory<'a> {
    pub fn new(config: &'a GeneratorConfig, catalog: &'a Catalog, today: NaiveDate) -> Result<Self> {
        let positions = WeightedIndex::new(catalog.positions.iter().map(|p| p.weight))
            .map_err(|e| HrError::InvalidCatalog(format!("position weights: {}", e)))?;
        let employment = WeightedIndex::new(catalog.employment_types.iter().map(|e| e.weight))
            .map_err(|e| HrError::InvalidCatalog(format!("employment weights: {}", e)))?;
        let engagement = Normal::new(rules::ENGAGEMENT_MEAN, rules::ENGAGEMENT_STD_DEV)
            .map_err(|e| HrError::Sampler(e.to_string()))?;

        Ok(Self {
            config,
            catalog,
            today,
            positions,
            employment,
            engagement,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Create the employee with sequence number `seq`
    pub fn create(
        &self,
        rng: &mut RandomSources,
        names: &mut dyn NameSource,
        seq: u32,
    ) -> Employee {
        let catalog = self.catalog;
        let orgs = &catalog.organizations;
        let draws = &mut rng.draws;

        let name = names.name();
        let (age_min, age_max) = self.config.age_range;
        let birth_date = names.date_between(
            calendar::years_before(self.today, age_max),
            calendar::years_before(self.today, age_min),
        );

        let gender = pick(draws, &catalog.genders).unwrap_or_default();

        let org_lv1 = pick(draws, &orgs.org_lv1).unwrap_or_default();
        let org_lv2 = pick(draws, &orgs.org_lv2).unwrap_or_default();
        let department = catalog.resolved_department(rules::department_key_of(&org_lv2));
        let org_lv3 = pick(draws, catalog.sub_departments(department))
            .unwrap_or_else(|| DEFAULT_SUB_DEPARTMENT.to_string());
        let org_lv4 = pick(draws, &orgs.org_lv4);

        let mut rung = self.positions.sample(draws);
        let emp_type = catalog.employment_types[self.employment.sample(draws)].kind;

        let mut org = OrgPath {
            lv1: org_lv1,
            lv2: Some(org_lv2),
            lv3: Some(org_lv3),
            lv4: org_lv4,
        };
        org.apply_rank(catalog.rank_of(rung));

        if emp_type.pinned_to_lowest_rung() {
            rung = catalog.lowest_rung();
        }
        let salary = rules::salary_for(
            emp_type,
            self.config.salary_range,
            rung,
            catalog.positions.len(),
        );

        let mut employee = Employee {
            id: EmployeeId(seq),
            name,
            birth_date,
            gender,
            org,
            rung,
            emp_type,
            salary,
            hire_date: self.today,
            resign_date: calendar::active_sentinel(),
            engagement_score: None,
            performance: None,
            is_married: false,
            address: None,
            job_category: None,
            job_grade: None,
        };

        if emp_type != EmploymentType::Temporary {
            let score = rules::clamp_engagement(self.engagement.sample(&mut rng.gauss));
            employee.engagement_score = Some(score);
            employee.performance = Some(rules::performance_level_of(score));

            let draws = &mut rng.draws;
            let tier = if draws.gen::<f64>() < rules::MAJOR_CITY_PROBABILITY {
                &catalog.cities.major
            } else {
                &catalog.cities.other
            };
            employee.address = pick(draws, tier);

            employee.job_category = if catalog.rank_of(rung) == RankGroup::Executive {
                Some(MANAGEMENT_JOB_CATEGORY.to_string())
            } else {
                Some(
                    pick(draws, catalog.job_categories(department))
                        .unwrap_or_else(|| DEFAULT_JOB_CATEGORY.to_string()),
                )
            };
            employee.job_grade = Some(rules::job_grade_for(rung));
        }

        let draws = &mut rng.draws;
        let days_ago = draws.gen_range(0..=rules::HIRE_WINDOW_DAYS);
        employee.hire_date = calendar::days_before(self.today, days_ago);
        employee.is_married = draws.gen::<bool>();

        employee
    }
}
