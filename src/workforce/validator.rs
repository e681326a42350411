//! Employee validation
//!
//! Pure range and consistency checks, run in a fixed order; the first
//! failing check is reported.

use chrono::NaiveDate;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::core::calendar;
use crate::core::types::RankGroup;
use crate::workforce::employee::Employee;

/// Why a candidate employee was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("Hire date is in the future")]
    HireInFuture,

    #[error("Resign date before hire date")]
    ResignBeforeHire,

    #[error("Age out of range: {0:.1}")]
    AgeOutOfRange(f64),

    #[error("Salary out of range: {0}")]
    SalaryOutOfRange(u64),

    #[error("Engagement score out of range: {0}")]
    EngagementOutOfRange(u8),

    #[error("Executive should not have lower org levels")]
    ExecutiveOrgLevels,

    #[error("Director should not have org_lv3/lv4")]
    DirectorOrgLevels,

    #[error("Manager should not have org_lv4")]
    ManagerOrgLevels,
}

/// Reason string for a validation outcome ("OK" when valid)
pub fn reason(outcome: &Result<(), Rejection>) -> String {
    match outcome {
        Ok(()) => "OK".to_string(),
        Err(rejection) => rejection.to_string(),
    }
}

/// Check an employee against the configured ranges as of `today`
///
/// The age check allows one year of slack above the maximum while the
/// minimum is strict.
pub fn validate(
    employee: &Employee,
    age_range: (u32, u32),
    salary_range: (u64, u64),
    catalog: &Catalog,
    today: NaiveDate,
) -> Result<(), Rejection> {
    if employee.hire_date > today {
        return Err(Rejection::HireInFuture);
    }
    if !employee.is_active() && employee.resign_date < employee.hire_date {
        return Err(Rejection::ResignBeforeHire);
    }

    let age = calendar::years_between(employee.birth_date, today);
    if !(age_range.0 as f64 <= age && age <= age_range.1 as f64 + 1.0) {
        return Err(Rejection::AgeOutOfRange(age));
    }

    if let Some(salary) = employee.salary {
        if !(salary_range.0..=salary_range.1).contains(&salary) {
            return Err(Rejection::SalaryOutOfRange(salary));
        }
    }

    if let Some(score) = employee.engagement_score {
        if score > 100 {
            return Err(Rejection::EngagementOutOfRange(score));
        }
    }

    let rank = catalog.rank_of(employee.rung);
    if !employee.org.fits_rank(rank) {
        return Err(match rank {
            RankGroup::Executive => Rejection::ExecutiveOrgLevels,
            RankGroup::Director => Rejection::DirectorOrgLevels,
            RankGroup::Manager | RankGroup::Individual => Rejection::ManagerOrgLevels,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{EmployeeId, EmploymentType, PerformanceGrade};
    use crate::workforce::employee::OrgPath;

    const AGES: (u32, u32) = (25, 55);
    const SALARIES: (u64, u64) = (4_000_000, 10_000_000);

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 10, 18)
    }

    fn staff() -> Employee {
        Employee {
            id: EmployeeId(1),
            name: "Mary Smith".into(),
            birth_date: date(1990, 4, 1),
            gender: "Female".into(),
            org: OrgPath {
                lv1: "Hogehoge inc.".into(),
                lv2: Some("Engineering".into()),
                lv3: Some("Data Engineering".into()),
                lv4: Some("Team Beta".into()),
            },
            rung: 0,
            emp_type: EmploymentType::FullTime,
            salary: Some(4_000_000),
            hire_date: date(2015, 6, 1),
            resign_date: calendar::active_sentinel(),
            engagement_score: Some(80),
            performance: Some(PerformanceGrade::A),
            is_married: true,
            address: Some("Chicago".into()),
            job_category: Some("Data Engineer".into()),
            job_grade: Some("Lv1".into()),
        }
    }

    fn check(emp: &Employee) -> Result<(), Rejection> {
        validate(emp, AGES, SALARIES, &Catalog::english(), today())
    }

    #[test]
    fn test_valid_employee() {
        let outcome = check(&staff());
        assert_eq!(outcome, Ok(()));
        assert_eq!(reason(&outcome), "OK");
    }

    #[test]
    fn test_future_hire() {
        let mut emp = staff();
        emp.hire_date = date(2025, 1, 1);
        assert_eq!(check(&emp), Err(Rejection::HireInFuture));
    }

    #[test]
    fn test_resign_before_hire() {
        let mut emp = staff();
        emp.resign_date = date(2014, 12, 31);
        assert_eq!(check(&emp), Err(Rejection::ResignBeforeHire));
    }

    #[test]
    fn test_age_bounds_are_asymmetric() {
        let mut emp = staff();
        // 55 and a half: inside the one-year slack
        emp.birth_date = date(1969, 4, 18);
        assert_eq!(check(&emp), Ok(()));

        emp.birth_date = date(1967, 1, 1);
        assert!(matches!(check(&emp), Err(Rejection::AgeOutOfRange(_))));

        // A day short of 25 is rejected
        emp.birth_date = date(1999, 10, 19);
        assert!(matches!(check(&emp), Err(Rejection::AgeOutOfRange(_))));
    }

    #[test]
    fn test_salary_out_of_range() {
        let mut emp = staff();
        emp.salary = Some(12_000_000);
        assert_eq!(check(&emp), Err(Rejection::SalaryOutOfRange(12_000_000)));
        emp.salary = None;
        assert_eq!(check(&emp), Ok(()));
    }

    #[test]
    fn test_engagement_out_of_range() {
        let mut emp = staff();
        emp.engagement_score = Some(101);
        assert_eq!(check(&emp), Err(Rejection::EngagementOutOfRange(101)));
    }

    #[test]
    fn test_rank_org_consistency() {
        let mut emp = staff();
        emp.rung = 5;
        assert_eq!(check(&emp), Err(Rejection::ExecutiveOrgLevels));
        emp.rung = 3;
        assert_eq!(check(&emp), Err(Rejection::DirectorOrgLevels));
        emp.rung = 2;
        assert_eq!(check(&emp), Err(Rejection::ManagerOrgLevels));
        emp.org.lv4 = None;
        assert_eq!(check(&emp), Ok(()));
    }

    #[test]
    fn test_first_failure_wins() {
        let mut emp = staff();
        emp.hire_date = date(2030, 1, 1);
        emp.salary = Some(1);
        assert_eq!(reason(&check(&emp)), "Hire date is in the future");
    }
}
