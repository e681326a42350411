//! Built-in English vocabulary

use super::{
    strings, Catalog, Cities, EmploymentRung, NamePool, Organizations, PerDepartment,
    PositionRung,
};
use crate::core::types::{EmploymentType, RankGroup};

pub(super) fn catalog() -> Catalog {
    Catalog {
        locale: "en_US".to_string(),
        organizations: Organizations {
            org_lv1: strings(&["Hogehoge inc."]),
            org_lv2: strings(&["Sales & Marketing", "Engineering", "HR", "Finance"]),
            org_lv3: PerDepartment {
                sales: strings(&[
                    "Global Sales",
                    "Regional Sales",
                    "Sales Operations",
                    "Business Development",
                ]),
                engineering: strings(&[
                    "Software Development",
                    "Cloud Infrastructure",
                    "Data Engineering",
                    "Product Development",
                ]),
                hr: strings(&[
                    "Talent Acquisition",
                    "People Operations",
                    "Learning & Development",
                    "HR Operations",
                ]),
                finance: strings(&[
                    "Financial Planning",
                    "Accounting",
                    "Treasury",
                    "Internal Audit",
                ]),
            },
            org_lv4: strings(&[
                "Team Alpha",
                "Team Beta",
                "Team Gamma",
                "Team Delta",
                "Team Epsilon",
            ]),
        },
        positions: vec![
            rung("Staff", 50, RankGroup::Individual),
            rung("Team Lead", 30, RankGroup::Individual),
            rung("Manager", 10, RankGroup::Manager),
            rung("General Manager", 5, RankGroup::Director),
            rung("VP", 3, RankGroup::Executive),
            rung("C-level", 2, RankGroup::Executive),
        ],
        employment_types: vec![
            employment(EmploymentType::FullTime, "Full-time", 70),
            employment(EmploymentType::Contract, "Contract", 20),
            employment(EmploymentType::Temporary, "Temporary", 10),
        ],
        job_categories: PerDepartment {
            sales: strings(&[
                "Sales Representative",
                "Account Manager",
                "Sales Operations",
                "Business Development",
            ]),
            engineering: strings(&[
                "Software Engineer",
                "Data Engineer",
                "Cloud Architect",
                "DevOps Engineer",
            ]),
            hr: strings(&[
                "HR Specialist",
                "Recruiter",
                "HR Operations",
                "Training Specialist",
            ]),
            finance: strings(&[
                "Financial Analyst",
                "Accountant",
                "Treasury Analyst",
                "Auditor",
            ]),
        },
        genders: strings(&["Male", "Female", "Other"]),
        cities: Cities {
            major: strings(&["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"]),
            other: strings(&["Seattle", "Boston", "Denver", "Austin", "Portland"]),
        },
        names: NamePool {
            given: strings(&[
                "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael",
                "Linda", "David", "Elizabeth", "William", "Barbara", "Richard", "Susan",
                "Joseph", "Jessica", "Thomas", "Sarah", "Christopher", "Karen", "Daniel",
                "Lisa", "Matthew", "Nancy", "Anthony", "Sandra", "Mark", "Ashley",
                "Steven", "Emily", "Andrew", "Michelle", "Kevin", "Amanda", "Brian",
                "Melissa",
            ]),
            family: strings(&[
                "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller",
                "Davis", "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez",
                "Wilson", "Anderson", "Thomas", "Taylor", "Moore", "Jackson", "Martin",
                "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez", "Clark",
                "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King",
            ]),
            family_first: false,
        },
    }
}

fn rung(title: &str, weight: u32, rank: RankGroup) -> PositionRung {
    PositionRung {
        title: title.to_string(),
        weight,
        rank,
    }
}

fn employment(kind: EmploymentType, label: &str, weight: u32) -> EmploymentRung {
    EmploymentRung {
        kind,
        label: label.to_string(),
        weight,
    }
}
