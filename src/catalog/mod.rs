//! Vocabulary catalog
//!
//! Static, language-specific vocabulary the generator draws from:
//! organization names, the position ladder with rank groups, the
//! employment-type ladder, job categories per department, genders, city
//! tiers and the name pools used by the built-in name source.
//!
//! Catalogs are plain data. The built-in English and Japanese instances
//! live in their own modules; custom catalogs load from TOML.

mod english;
mod japanese;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{HrError, Result};
use crate::core::types::{DepartmentKey, EmploymentType, Language, RankGroup};

/// Label used when a department has no sub-departments at all
pub const DEFAULT_SUB_DEPARTMENT: &str = "Default Department";

/// Label used when a department has no job categories
pub const DEFAULT_JOB_CATEGORY: &str = "Default";

/// Job category given to executive-rank employees
pub const MANAGEMENT_JOB_CATEGORY: &str = "Management";

/// One value per department key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerDepartment<T> {
    #[serde(rename = "Sales", default)]
    pub sales: T,
    #[serde(rename = "Engineering", default)]
    pub engineering: T,
    #[serde(rename = "HR", default)]
    pub hr: T,
    #[serde(rename = "Finance", default)]
    pub finance: T,
}

impl<T> PerDepartment<T> {
    pub fn get(&self, key: DepartmentKey) -> &T {
        match key {
            DepartmentKey::Sales => &self.sales,
            DepartmentKey::Engineering => &self.engineering,
            DepartmentKey::Hr => &self.hr,
            DepartmentKey::Finance => &self.finance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organizations {
    /// Company name; a singleton in the built-in catalogs
    pub org_lv1: Vec<String>,
    /// Departments
    pub org_lv2: Vec<String>,
    /// Sub-departments per department key
    pub org_lv3: PerDepartment<Vec<String>>,
    /// Team names, shared by every department
    pub org_lv4: Vec<String>,
}

/// One rung of the position ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRung {
    pub title: String,
    pub weight: u32,
    #[serde(default)]
    pub rank: RankGroup,
}

/// One rung of the employment-type ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentRung {
    pub kind: EmploymentType,
    pub label: String,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cities {
    pub major: Vec<String>,
    pub other: Vec<String>,
}

/// Name pools for the built-in name source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamePool {
    pub given: Vec<String>,
    pub family: Vec<String>,
    /// Render "Family Given" instead of "Given Family"
    #[serde(default)]
    pub family_first: bool,
}

/// Language-specific vocabulary consumed by the generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Locale tag of the vocabulary, e.g. `en_US`
    pub locale: String,
    pub organizations: Organizations,
    /// Ordered lowest rung first
    pub positions: Vec<PositionRung>,
    pub employment_types: Vec<EmploymentRung>,
    pub job_categories: PerDepartment<Vec<String>>,
    pub genders: Vec<String>,
    pub cities: Cities,
    pub names: NamePool,
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Catalog {
    pub fn english() -> Self {
        english::catalog()
    }

    pub fn japanese() -> Self {
        japanese::catalog()
    }

    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self::english(),
            Language::Japanese => Self::japanese(),
        }
    }

    /// Parse and validate a catalog from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check the catalog has the shape the generator relies on
    pub fn validate(&self) -> Result<()> {
        let require = |ok: bool, what: &str| -> Result<()> {
            if ok {
                Ok(())
            } else {
                Err(HrError::InvalidCatalog(what.to_string()))
            }
        };

        let orgs = &self.organizations;
        require(!orgs.org_lv1.is_empty(), "org_lv1 is empty")?;
        require(!orgs.org_lv2.is_empty(), "org_lv2 is empty")?;
        require(!orgs.org_lv4.is_empty(), "org_lv4 is empty")?;
        require(!self.positions.is_empty(), "position ladder is empty")?;
        require(
            self.positions.iter().any(|rung| rung.weight > 0),
            "position weights are all zero",
        )?;
        require(
            self.employment_types.iter().any(|rung| rung.weight > 0),
            "employment weights are all zero",
        )?;
        for kind in EmploymentType::all() {
            let count = self
                .employment_types
                .iter()
                .filter(|rung| rung.kind == kind)
                .count();
            if count != 1 {
                return Err(HrError::InvalidCatalog(format!(
                    "expected exactly one {:?} employment rung, found {}",
                    kind, count
                )));
            }
        }
        require(!self.genders.is_empty(), "genders is empty")?;
        require(!self.cities.major.is_empty(), "major cities is empty")?;
        require(!self.cities.other.is_empty(), "other cities is empty")?;
        require(!self.names.given.is_empty(), "given names is empty")?;
        require(!self.names.family.is_empty(), "family names is empty")?;

        Ok(())
    }

    pub fn lowest_rung(&self) -> usize {
        0
    }

    pub fn top_rung(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }

    pub fn rank_of(&self, rung: usize) -> RankGroup {
        self.positions
            .get(rung)
            .map(|p| p.rank)
            .unwrap_or_default()
    }

    pub fn position_title(&self, rung: usize) -> &str {
        self.positions
            .get(rung)
            .map(|p| p.title.as_str())
            .unwrap_or_default()
    }

    pub fn rung_of_title(&self, title: &str) -> Option<usize> {
        self.positions.iter().position(|p| p.title == title)
    }

    /// Ladder titles belonging to one rank group
    pub fn titles_in(&self, rank: RankGroup) -> Vec<&str> {
        self.positions
            .iter()
            .filter(|p| p.rank == rank)
            .map(|p| p.title.as_str())
            .collect()
    }

    pub fn employment_label(&self, kind: EmploymentType) -> &str {
        self.employment_types
            .iter()
            .find(|rung| rung.kind == kind)
            .map(|rung| rung.label.as_str())
            .unwrap_or_default()
    }

    /// Department key that drives lv3 and job-category draws
    ///
    /// A department without sub-departments is treated as Sales for both.
    pub fn resolved_department(&self, key: DepartmentKey) -> DepartmentKey {
        if self.organizations.org_lv3.get(key).is_empty() {
            DepartmentKey::Sales
        } else {
            key
        }
    }

    /// Sub-departments for a key, falling back to the Sales list
    pub fn sub_departments(&self, key: DepartmentKey) -> &[String] {
        self.organizations.org_lv3.get(self.resolved_department(key))
    }

    pub fn job_categories(&self, key: DepartmentKey) -> &[String] {
        self.job_categories.get(key)
    }
}
