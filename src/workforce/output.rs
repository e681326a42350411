//! Dataset table and serialization

use std::collections::BTreeMap;

use ahash::AHashSet;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::core::error::Result;
use crate::core::types::PerformanceGrade;
use crate::workforce::monthly::{MonthEvents, SnapshotRow};

/// Column order of the exported table
pub const COLUMNS: [&str; 21] = [
    "emp_id",
    "name",
    "birth_date",
    "gender",
    "org_lv1",
    "org_lv2",
    "org_lv3",
    "org_lv4",
    "position",
    "emp_type",
    "salary",
    "hire_date",
    "resign_date",
    "engagement_score",
    "performance",
    "is_married",
    "address",
    "job_category",
    "job_grade",
    "base_date",
    "is_primary_position",
];

/// One flat output record
///
/// Dates serialize as `YYYY-MM-DD`; active employees carry the
/// `2999-12-31` resign date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub emp_id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub org_lv1: String,
    pub org_lv2: Option<String>,
    pub org_lv3: Option<String>,
    pub org_lv4: Option<String>,
    pub position: String,
    pub emp_type: String,
    pub salary: Option<u64>,
    pub hire_date: NaiveDate,
    pub resign_date: NaiveDate,
    pub engagement_score: Option<u8>,
    pub performance: Option<PerformanceGrade>,
    pub is_married: bool,
    pub address: Option<String>,
    pub job_category: Option<String>,
    pub job_grade: Option<String>,
    pub base_date: NaiveDate,
    pub is_primary_position: bool,
}

impl DatasetRow {
    pub fn from_snapshot(row: SnapshotRow, catalog: &Catalog) -> Self {
        let emp = row.employee;
        Self {
            emp_id: emp.id.label(),
            name: emp.name,
            birth_date: emp.birth_date,
            gender: emp.gender,
            org_lv1: emp.org.lv1,
            org_lv2: emp.org.lv2,
            org_lv3: emp.org.lv3,
            org_lv4: emp.org.lv4,
            position: catalog.position_title(emp.rung).to_string(),
            emp_type: catalog.employment_label(emp.emp_type).to_string(),
            salary: emp.salary,
            hire_date: emp.hire_date,
            resign_date: emp.resign_date,
            engagement_score: emp.engagement_score,
            performance: emp.performance,
            is_married: emp.is_married,
            address: emp.address,
            job_category: emp.job_category,
            job_grade: emp.job_grade,
            base_date: row.base_date,
            is_primary_position: row.is_primary_position,
        }
    }

    /// True while the row's resign date is the active sentinel
    pub fn is_active(&self) -> bool {
        crate::core::calendar::is_active_sentinel(self.resign_date)
    }
}

/// Per-month headcount and event tally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub month_index: u32,
    pub base_date: NaiveDate,
    /// Primary rows only
    pub headcount: usize,
    pub secondary_rows: usize,
    pub events: MonthEvents,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub rows: usize,
    pub months: usize,
    pub distinct_employees: usize,
    pub resigned_employees: usize,
    pub secondary_rows: usize,
}

/// Complete generated table, month by month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    rows: Vec<DatasetRow>,
    months: Vec<MonthSummary>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one month's (already expanded) rows
    pub fn push_month(
        &mut self,
        month_index: u32,
        base_date: NaiveDate,
        rows: Vec<SnapshotRow>,
        events: MonthEvents,
        catalog: &Catalog,
    ) {
        let secondary_rows = rows.iter().filter(|r| !r.is_primary_position).count();
        let headcount = rows.len() - secondary_rows;
        self.months.push(MonthSummary {
            month_index,
            base_date,
            headcount,
            secondary_rows,
            events,
        });
        self.rows.extend(
            rows.into_iter()
                .map(|row| DatasetRow::from_snapshot(row, catalog)),
        );
    }

    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    pub fn months(&self) -> &[MonthSummary] {
        &self.months
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    /// Distinct base dates in month order
    pub fn base_dates(&self) -> Vec<NaiveDate> {
        self.months.iter().map(|m| m.base_date).collect()
    }

    /// Primary-row headcount per base date
    pub fn month_counts(&self) -> BTreeMap<NaiveDate, usize> {
        let mut counts = BTreeMap::new();
        for row in self.rows.iter().filter(|r| r.is_primary_position) {
            *counts.entry(row.base_date).or_insert(0) += 1;
        }
        counts
    }

    /// Every row of one employee, primary and secondary, in month order
    pub fn rows_for(&self, emp_id: &str) -> Vec<&DatasetRow> {
        self.rows.iter().filter(|r| r.emp_id == emp_id).collect()
    }

    pub fn stats(&self) -> DatasetStats {
        let mut employees = AHashSet::new();
        let mut resigned = AHashSet::new();
        for row in &self.rows {
            employees.insert(row.emp_id.as_str());
            if !row.is_active() {
                resigned.insert(row.emp_id.as_str());
            }
        }

        DatasetStats {
            rows: self.rows.len(),
            months: self.months.len(),
            distinct_employees: employees.len(),
            resigned_employees: resigned.len(),
            secondary_rows: self.months.iter().map(|m| m.secondary_rows).sum(),
        }
    }

    /// JSON array of records, one object per row
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.rows)?)
    }

    pub fn summary(&self) -> String {
        let stats = self.stats();
        let (first, last) = match (self.months.first(), self.months.last()) {
            (Some(first), Some(last)) => (first.headcount, last.headcount),
            _ => (0, 0),
        };
        let events = self.months.iter().fold(MonthEvents::default(), |acc, m| MonthEvents {
            resignations: acc.resignations + m.events.resignations,
            promotions: acc.promotions + m.events.promotions,
            reviews: acc.reviews + m.events.reviews,
            drifts: acc.drifts + m.events.drifts,
        });

        format!(
            "Generated {} rows over {} months ({} secondary)\n\
             {} employees, headcount {} -> {}\n\
             {} resignations, {} promotions, {} reviews",
            stats.rows,
            stats.months,
            stats.secondary_rows,
            stats.distinct_employees,
            first,
            last,
            events.resignations,
            events.promotions,
            events.reviews,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar;
    use crate::core::types::{EmployeeId, EmploymentType};
    use crate::workforce::employee::{Employee, OrgPath};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot_row(id: u32, base_date: NaiveDate, primary: bool) -> SnapshotRow {
        SnapshotRow {
            employee: Employee {
                id: EmployeeId(id),
                name: "Jane Doe".into(),
                birth_date: date(1990, 5, 5),
                gender: "Female".into(),
                org: OrgPath {
                    lv1: "Hogehoge inc.".into(),
                    lv2: Some("HR".into()),
                    lv3: Some("People Operations".into()),
                    lv4: None,
                },
                rung: 2,
                emp_type: EmploymentType::FullTime,
                salary: Some(6_400_000),
                hire_date: date(2019, 9, 1),
                resign_date: calendar::active_sentinel(),
                engagement_score: Some(91),
                performance: Some(PerformanceGrade::S),
                is_married: false,
                address: Some("Boston".into()),
                job_category: Some("Recruiter".into()),
                job_grade: Some("Lv3".into()),
            },
            base_date,
            is_primary_position: primary,
        }
    }

    fn sample() -> Dataset {
        let catalog = Catalog::english();
        let mut dataset = Dataset::new();
        let september = date(2024, 9, 1);
        let october = date(2024, 10, 1);
        dataset.push_month(
            0,
            september,
            vec![snapshot_row(1, september, true), snapshot_row(1, september, false), snapshot_row(2, september, true)],
            MonthEvents::default(),
            &catalog,
        );
        dataset.push_month(1, october, vec![snapshot_row(1, october, true)], MonthEvents::default(), &catalog);
        dataset
    }

    #[test]
    fn test_month_counts_skip_secondary_rows() {
        let dataset = sample();
        let counts: Vec<_> = dataset.month_counts().into_values().collect();
        assert_eq!(counts, vec![2, 1]);
        assert_eq!(dataset.base_dates(), vec![date(2024, 9, 1), date(2024, 10, 1)]);
        assert_eq!(dataset.months()[0].secondary_rows, 1);
    }

    #[test]
    fn test_rows_for_employee() {
        let dataset = sample();
        assert_eq!(dataset.rows_for("EMP000001").len(), 3);
        assert_eq!(dataset.rows_for("EMP000002").len(), 1);
        assert!(dataset.rows_for("EMP000003").is_empty());
    }

    #[test]
    fn test_row_uses_catalog_labels() {
        let dataset = sample();
        let row = &dataset.rows()[0];
        assert_eq!(row.position, "Manager");
        assert_eq!(row.emp_type, "Full-time");
        assert_eq!(row.emp_id, "EMP000001");
    }

    #[test]
    fn test_json_records() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 4);

        let first = &records[0];
        assert_eq!(first["resign_date"], "2999-12-31");
        assert_eq!(first["base_date"], "2024-09-01");
        assert_eq!(first["performance"], "S");
        assert!(first["org_lv4"].is_null());
        for column in COLUMNS {
            assert!(first.get(column).is_some(), "missing column {}", column);
        }
    }

    #[test]
    fn test_stats_and_summary() {
        let dataset = sample();
        let stats = dataset.stats();
        assert_eq!(stats.rows, 4);
        assert_eq!(stats.months, 2);
        assert_eq!(stats.distinct_employees, 2);
        assert_eq!(stats.resigned_employees, 0);
        assert_eq!(stats.secondary_rows, 1);
        assert!(dataset.summary().contains("headcount 2 -> 1"));
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::new();
        assert!(dataset.is_empty());
        assert_eq!(dataset.to_json().unwrap(), "[]");
        assert!(dataset.summary().contains("Generated 0 rows"));
    }
}
