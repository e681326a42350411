pub mod calendar;
pub mod config;
pub mod error;
pub mod types;

pub use calendar::MonthCalendar;
pub use config::GeneratorConfig;
pub use error::{HrError, Result};
