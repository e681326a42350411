//! HR Datagen - Entry Point
//!
//! Generates a synthetic month-by-month HR dataset and writes it as JSON
//! records. Settings come from an optional TOML config file, overridden by
//! command-line flags.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hr_datagen::catalog::Catalog;
use hr_datagen::core::config::GeneratorConfig;
use hr_datagen::core::error::Result;
use hr_datagen::core::types::Language;
use hr_datagen::workforce::generate_with_catalog;

/// HR Datagen - synthesize an employee dataset month by month
#[derive(Parser, Debug)]
#[command(name = "hr_datagen")]
#[command(about = "Generate a synthetic monthly HR dataset")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Vocabulary language (english, japanese)
    #[arg(long)]
    language: Option<Language>,

    /// Number of employees in the first month
    #[arg(long)]
    employees: Option<u32>,

    /// Number of simulated months
    #[arg(long)]
    months: Option<u32>,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated "today" (YYYY-MM-DD)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Add secondary-department rows
    #[arg(long, default_value_t = false)]
    concurrent: bool,

    /// Per-employee probability of a secondary position
    #[arg(long)]
    concurrent_rate: Option<f64>,

    /// Custom vocabulary catalog (TOML)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output file for the JSON records
    #[arg(long, default_value = "hr_data.json")]
    output: PathBuf,
}

impl Args {
    fn to_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(language) = self.language {
            config.language = language;
        }
        if let Some(employees) = self.employees {
            config.employee_count = employees;
        }
        if let Some(months) = self.months {
            config.num_months = months;
        }
        if self.seed.is_some() {
            config.random_seed = self.seed;
        }
        if self.as_of.is_some() {
            config.as_of = self.as_of;
        }
        if self.concurrent {
            config.include_concurrent_positions = true;
        }
        if let Some(rate) = self.concurrent_rate {
            config.concurrent_position_rate = rate;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hr_datagen=info")),
        )
        .init();

    let args = Args::parse();
    let config = args.to_config()?;

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::for_language(config.language),
    };

    println!("=== HR DATAGEN ===");
    println!(
        "{} employees, {} months, language {}, seed {}",
        config.employee_count,
        config.num_months,
        config.language,
        config
            .random_seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "none".to_string()),
    );

    let dataset = generate_with_catalog(&config, &catalog)?;

    println!();
    println!("{}", dataset.summary());
    println!();
    println!("Headcount by month:");
    for month in dataset.months() {
        println!(
            "  {}  {:>4} employees  {:>3} resigned  {:>3} promoted",
            month.base_date, month.headcount, month.events.resignations, month.events.promotions
        );
    }

    std::fs::write(&args.output, dataset.to_json()?)?;
    println!();
    println!("Wrote {} rows to {}", dataset.len(), args.output.display());

    Ok(())
}
