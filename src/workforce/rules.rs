//! Canonical HR rules shared by the factory and the monthly simulator
//!
//! Department lookup, performance grading, salary-by-rung and salary
//! adjustment each live here exactly once.

use crate::core::types::{DepartmentKey, EmploymentType, PerformanceGrade};

/// Minimum engagement score per grade, best grade first
pub const PERFORMANCE_THRESHOLDS: [(PerformanceGrade, u8); 4] = [
    (PerformanceGrade::S, 90),
    (PerformanceGrade::A, 75),
    (PerformanceGrade::B, 50),
    (PerformanceGrade::C, 0),
];

/// Contract salary as a share of the rung's full-time salary
pub const CONTRACT_SALARY_FACTOR: f64 = 0.8;

pub const ENGAGEMENT_MEAN: f64 = 70.0;
pub const ENGAGEMENT_STD_DEV: f64 = 15.0;

/// Share of addresses drawn from the major-city tier
pub const MAJOR_CITY_PROBABILITY: f64 = 0.8;

/// Hire dates fall within this many days before the reference date
pub const HIRE_WINDOW_DAYS: i64 = 20 * 365;

/// Yearly promotion chance, checked on year boundaries
pub const PROMOTION_PROBABILITY: f64 = 0.05;

/// Monthly chance that an engagement score drifts
pub const DRIFT_PROBABILITY: f64 = 0.3;

/// Multiplicative band of a single engagement drift
pub const DRIFT_BAND: (f64, f64) = (0.9, 1.1);

/// Department key from an org_lv2 name, by keyword in either language
pub fn department_key_of(org_lv2: &str) -> DepartmentKey {
    if org_lv2.contains("Engineering") || org_lv2.contains("エンジニアリング") {
        DepartmentKey::Engineering
    } else if org_lv2.contains("HR") || org_lv2.contains("人事") {
        DepartmentKey::Hr
    } else if org_lv2.contains("Finance") || org_lv2.contains("財務") {
        DepartmentKey::Finance
    } else {
        DepartmentKey::Sales
    }
}

pub fn performance_level_of(engagement_score: u8) -> PerformanceGrade {
    PERFORMANCE_THRESHOLDS
        .iter()
        .find(|(_, threshold)| engagement_score >= *threshold)
        .map(|(grade, _)| *grade)
        .unwrap_or(PerformanceGrade::C)
}

pub fn salary_adjustment_for(grade: PerformanceGrade) -> f64 {
    match grade {
        PerformanceGrade::S => 1.20,
        PerformanceGrade::A => 1.10,
        PerformanceGrade::B => 1.05,
        PerformanceGrade::C => 0.97,
    }
}

/// Round half away from zero to the nearest thousand
pub fn round_to_thousand(amount: f64) -> u64 {
    ((amount / 1000.0).round() * 1000.0).max(0.0) as u64
}

pub fn clamp_to_range(amount: u64, range: (u64, u64)) -> u64 {
    amount.clamp(range.0, range.1.max(range.0))
}

/// Numeric level of a ladder rung
pub fn rung_level(rung: usize) -> f64 {
    1.0 + rung as f64 * 0.5
}

/// Full-time salary for a rung: linear in the rung's level across the range
pub fn salary_for_rung(range: (u64, u64), rung: usize, rung_count: usize) -> u64 {
    let (min_salary, max_salary) = range;
    let min_level = rung_level(0);
    let max_level = rung_level(rung_count.saturating_sub(1));
    let level_range = max_level - min_level;

    let percentage = if level_range <= 0.0 {
        0.0
    } else {
        ((rung_level(rung) - min_level) / level_range).clamp(0.0, 1.0)
    };

    let salary = min_salary as f64 + (max_salary as f64 - min_salary as f64) * percentage;
    clamp_to_range(round_to_thousand(salary), range)
}

/// Contract salary: 80% of the rung salary, never below the range minimum
pub fn contract_salary(range: (u64, u64), rung: usize, rung_count: usize) -> u64 {
    let base = salary_for_rung(range, rung, rung_count) as f64;
    round_to_thousand(base * CONTRACT_SALARY_FACTOR).max(range.0)
}

/// Salary an employee of this kind earns on a rung
pub fn salary_for(
    emp_type: EmploymentType,
    range: (u64, u64),
    rung: usize,
    rung_count: usize,
) -> Option<u64> {
    match emp_type {
        EmploymentType::FullTime => Some(salary_for_rung(range, rung, rung_count)),
        EmploymentType::Contract => Some(contract_salary(range, rung, rung_count)),
        EmploymentType::Temporary => None,
    }
}

/// Annual review adjustment, kept inside the configured range
pub fn adjust_salary_by_performance(salary: u64, grade: PerformanceGrade, range: (u64, u64)) -> u64 {
    let adjusted = round_to_thousand(salary as f64 * salary_adjustment_for(grade));
    clamp_to_range(adjusted, range)
}

pub fn job_grade_for(rung: usize) -> String {
    format!("Lv{}", rung + 1)
}

/// Clamp and round a drifted or sampled engagement score
pub fn clamp_engagement(score: f64) -> u8 {
    score.clamp(0.0, 100.0).round() as u8
}
