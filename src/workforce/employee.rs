//! Employee record and organization path

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::calendar;
use crate::core::types::{EmployeeId, EmploymentType, PerformanceGrade, RankGroup};

/// Four-level organization path; lv2..lv4 empty out as rank rises
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgPath {
    pub lv1: String,
    pub lv2: Option<String>,
    pub lv3: Option<String>,
    pub lv4: Option<String>,
}

impl OrgPath {
    /// Clear the levels a rank does not own
    pub fn apply_rank(&mut self, rank: RankGroup) {
        let kept = rank.kept_org_levels();
        if kept < 3 {
            self.lv4 = None;
        }
        if kept < 2 {
            self.lv3 = None;
        }
        if kept < 1 {
            self.lv2 = None;
        }
    }

    /// True when no level below the rank's reach is filled in
    pub fn fits_rank(&self, rank: RankGroup) -> bool {
        let lower = [&self.lv2, &self.lv3, &self.lv4];
        lower
            .iter()
            .skip(rank.kept_org_levels())
            .all(|level| level.is_none())
    }
}

/// One employee's persistent state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub org: OrgPath,
    /// Index into the catalog's position ladder
    pub rung: usize,
    pub emp_type: EmploymentType,
    pub salary: Option<u64>,
    pub hire_date: NaiveDate,
    /// `calendar::active_sentinel()` while employed
    pub resign_date: NaiveDate,
    pub engagement_score: Option<u8>,
    pub performance: Option<PerformanceGrade>,
    pub is_married: bool,
    pub address: Option<String>,
    pub job_category: Option<String>,
    pub job_grade: Option<String>,
}

impl Employee {
    pub fn is_active(&self) -> bool {
        calendar::is_active_sentinel(self.resign_date)
    }

    pub fn is_temporary(&self) -> bool {
        self.emp_type == EmploymentType::Temporary
    }

    /// Resigned on a date strictly before `date`
    pub fn left_before(&self, date: NaiveDate) -> bool {
        !self.is_active() && self.resign_date < date
    }

    /// Still on the books after `date` (sentinel counts as employed)
    pub fn employed_after(&self, date: NaiveDate) -> bool {
        self.resign_date > date
    }
}
