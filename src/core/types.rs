//! Core type definitions used throughout the codebase

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::HrError;

/// Supported vocabulary languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Japanese,
}

impl Language {
    pub fn all() -> [Language; 2] {
        [Language::English, Language::Japanese]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Japanese => "Japanese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = HrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" | "en_us" => Ok(Language::English),
            "japanese" | "ja" | "ja_jp" | "日本語" => Ok(Language::Japanese),
            _ => Err(HrError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Hierarchy group a position rung belongs to
///
/// Drives how much of the organization path an employee keeps: the higher
/// the rank, the fewer org levels below the company are filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankGroup {
    Executive,
    Director,
    Manager,
    #[default]
    Individual,
}

impl RankGroup {
    /// Number of org levels below lv1 that stay populated (lv2..lv4)
    pub fn kept_org_levels(&self) -> usize {
        match self {
            RankGroup::Executive => 0,
            RankGroup::Director => 1,
            RankGroup::Manager => 2,
            RankGroup::Individual => 3,
        }
    }
}

/// Employment contract kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    Contract,
    Temporary,
}

impl EmploymentType {
    pub fn all() -> [EmploymentType; 3] {
        [
            EmploymentType::FullTime,
            EmploymentType::Contract,
            EmploymentType::Temporary,
        ]
    }

    /// Contract and temporary staff always sit on the lowest ladder rung
    pub fn pinned_to_lowest_rung(&self) -> bool {
        !matches!(self, EmploymentType::FullTime)
    }
}

/// Department key used to pick sub-departments and job categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DepartmentKey {
    Sales,
    Engineering,
    #[serde(rename = "HR")]
    Hr,
    Finance,
}

impl DepartmentKey {
    pub fn all() -> [DepartmentKey; 4] {
        [
            DepartmentKey::Sales,
            DepartmentKey::Engineering,
            DepartmentKey::Hr,
            DepartmentKey::Finance,
        ]
    }
}

/// Annual performance grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PerformanceGrade {
    S,
    A,
    B,
    C,
}

impl PerformanceGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceGrade::S => "S",
            PerformanceGrade::A => "A",
            PerformanceGrade::B => "B",
            PerformanceGrade::C => "C",
        }
    }
}

impl fmt::Display for PerformanceGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sequential employee identifier, rendered as `EMP` + six digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmployeeId(pub u32);

impl EmployeeId {
    pub fn label(&self) -> String {
        format!("EMP{:06}", self.0)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EMP{:06}", self.0)
    }
}
