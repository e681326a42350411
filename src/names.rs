//! Synthetic personal names and calendar draws
//!
//! The generator only needs two things from a name source: a full name and
//! a uniformly drawn date. `PoolNameSource` combines the catalog's name
//! pools on its own RNG stream so seeding it never disturbs the other
//! random sources.

use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::catalog::NamePool;
use crate::core::calendar;

/// Stream reserved for name and date draws when seeded from the run seed
pub const NAME_STREAM: u64 = 2;

/// Source of synthetic personal names and dates
pub trait NameSource {
    fn name(&mut self) -> String;

    /// Uniform date in `[start, end]`; returns `start` when the window is empty
    fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate;
}

/// Name source drawing from a catalog's given/family name pools
pub struct PoolNameSource {
    pool: NamePool,
    rng: ChaCha8Rng,
}

impl PoolNameSource {
    pub fn new(pool: NamePool, rng: ChaCha8Rng) -> Self {
        Self { pool, rng }
    }

    /// Seeded source on its own ChaCha stream
    pub fn seeded(pool: NamePool, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(NAME_STREAM);
        Self::new(pool, rng)
    }

    pub fn from_entropy(pool: NamePool) -> Self {
        Self::new(pool, ChaCha8Rng::from_entropy())
    }

    fn pick<'a>(rng: &mut ChaCha8Rng, items: &'a [String]) -> &'a str {
        if items.is_empty() {
            return "";
        }
        &items[rng.gen_range(0..items.len())]
    }
}

impl NameSource for PoolNameSource {
    fn name(&mut self) -> String {
        let given = Self::pick(&mut self.rng, &self.pool.given);
        let family = Self::pick(&mut self.rng, &self.pool.family);
        if self.pool.family_first {
            format!("{} {}", family, given)
        } else {
            format!("{} {}", given, family)
        }
    }

    fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let span = (end - start).num_days();
        if span <= 0 {
            return start;
        }
        let offset = self.rng.gen_range(0..=span);
        calendar::days_before(end, span - offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_seeded_names_repeat() {
        let pool = Catalog::english().names;
        let mut a = PoolNameSource::seeded(pool.clone(), 42);
        let mut b = PoolNameSource::seeded(pool, 42);
        for _ in 0..20 {
            assert_eq!(a.name(), b.name());
        }
    }

    #[test]
    fn test_japanese_family_name_first() {
        let catalog = Catalog::japanese();
        let mut source = PoolNameSource::seeded(catalog.names.clone(), 1);
        let name = source.name();
        let family = name.split(' ').next().unwrap();
        assert!(catalog.names.family.iter().any(|f| f == family), "{}", name);
    }

    #[test]
    fn test_date_between_stays_in_window() {
        let mut source = PoolNameSource::seeded(Catalog::english().names, 7);
        let start = date(1970, 1, 1);
        let end = date(1999, 12, 31);
        for _ in 0..500 {
            let d = source.date_between(start, end);
            assert!(d >= start && d <= end);
        }
    }

    #[test]
    fn test_date_between_empty_window() {
        let mut source = PoolNameSource::seeded(Catalog::english().names, 7);
        let day = date(2020, 5, 5);
        assert_eq!(source.date_between(day, day), day);
        assert_eq!(source.date_between(day, date(2020, 1, 1)), day);
    }
}
