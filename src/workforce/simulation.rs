//! Dataset orchestration
//!
//! Builds the base population once, then steps the monthly simulator over
//! every month of the horizon and collects the (optionally expanded) rows.

use std::time::Instant;

use crate::catalog::Catalog;
use crate::core::calendar::MonthCalendar;
use crate::core::config::GeneratorConfig;
use crate::core::error::Result;
use crate::names::{NameSource, PoolNameSource};
use crate::workforce::concurrent;
use crate::workforce::monthly::MonthlySimulator;
use crate::workforce::output::Dataset;
use crate::workforce::population;
use crate::workforce::rng::RandomSources;

/// Generate a dataset with the built-in catalog for `config.language`
pub fn generate(config: &GeneratorConfig) -> Result<Dataset> {
    let catalog = Catalog::for_language(config.language);
    generate_with_catalog(config, &catalog)
}

/// Generate a dataset from a caller-supplied catalog
///
/// With a seed every random source (draws, engagement sampler, names) is
/// seeded from it, so the same config yields the same dataset.
pub fn generate_with_catalog(config: &GeneratorConfig, catalog: &Catalog) -> Result<Dataset> {
    catalog.validate()?;

    let mut rng = RandomSources::from_seed_option(config.random_seed);
    let mut names = match config.random_seed {
        Some(seed) => PoolNameSource::seeded(catalog.names.clone(), seed),
        None => PoolNameSource::from_entropy(catalog.names.clone()),
    };
    generate_with_sources(config, catalog, &mut rng, &mut names)
}

/// Generate a dataset with injected random and name sources
pub fn generate_with_sources(
    config: &GeneratorConfig,
    catalog: &Catalog,
    rng: &mut RandomSources,
    names: &mut dyn NameSource,
) -> Result<Dataset> {
    let mut dataset = Dataset::new();
    if config.num_months == 0 {
        return Ok(dataset);
    }

    let start = Instant::now();
    let today = config.reference_date();
    tracing::info!(
        employees = config.employee_count,
        months = config.num_months,
        language = %config.language,
        seed = ?config.random_seed,
        %today,
        "generating dataset"
    );

    let mut population = population::build(config, catalog, rng, names)?;
    let simulator = MonthlySimulator::new(config, catalog);
    let calendar = MonthCalendar::new(today, config.num_months);

    for (month_index, base_date) in calendar.base_dates() {
        let snapshot = simulator.advance(&mut population, month_index, base_date, &mut rng.draws);
        let rows = concurrent::expand(snapshot.rows, config, catalog, &mut rng.draws);
        dataset.push_month(month_index, base_date, rows, snapshot.events, catalog);
    }

    let stats = dataset.stats();
    tracing::info!(
        rows = stats.rows,
        employees = stats.distinct_employees,
        resigned = stats.resigned_employees,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "dataset generated"
    );

    Ok(dataset)
}
