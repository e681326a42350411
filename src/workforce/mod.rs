//! Employee population and its month-by-month evolution

pub mod concurrent;
pub mod employee;
pub mod factory;
pub mod monthly;
pub mod output;
pub mod population;
pub mod rng;
pub mod rules;
pub mod simulation;
pub mod validator;

pub use employee::{Employee, OrgPath};
pub use factory::EmployeeFactory;
pub use monthly::{MonthEvents, MonthSnapshot, MonthlySimulator, SnapshotRow};
pub use output::{Dataset, DatasetRow, DatasetStats, MonthSummary, COLUMNS};
pub use population::{BuildReport, Population};
pub use rng::RandomSources;
pub use simulation::{generate, generate_with_catalog, generate_with_sources};
pub use validator::Rejection;
