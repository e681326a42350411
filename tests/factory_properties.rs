use chrono::NaiveDate;
use hr_datagen::catalog::Catalog;
use hr_datagen::core::config::GeneratorConfig;
use hr_datagen::core::types::{EmploymentType, Language, PerformanceGrade};
use hr_datagen::names::PoolNameSource;
use hr_datagen::workforce::rules;
use hr_datagen::workforce::validator::{self, Rejection};
use hr_datagen::workforce::{EmployeeFactory, RandomSources};
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 18).unwrap()
}

fn language() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::English), Just(Language::Japanese)]
}

fn grade() -> impl Strategy<Value = PerformanceGrade> {
    prop_oneof![
        Just(PerformanceGrade::S),
        Just(PerformanceGrade::A),
        Just(PerformanceGrade::B),
        Just(PerformanceGrade::C),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn created_employees_are_structurally_consistent(
        seed in any::<u64>(),
        seq in 1u32..999_999,
        language in language(),
    ) {
        let config = GeneratorConfig {
            language,
            as_of: Some(today()),
            ..GeneratorConfig::default()
        };
        let catalog = Catalog::for_language(language);
        let factory = EmployeeFactory::new(&config, &catalog, today()).unwrap();
        let mut rng = RandomSources::seeded(seed);
        let mut names = PoolNameSource::seeded(catalog.names.clone(), seed);

        let emp = factory.create(&mut rng, &mut names, seq);

        prop_assert_eq!(emp.id.label(), format!("EMP{:06}", seq));
        prop_assert!(emp.hire_date <= today());
        prop_assert!(emp.is_active());
        prop_assert!(emp.org.fits_rank(catalog.rank_of(emp.rung)));

        match emp.emp_type {
            EmploymentType::Temporary => {
                prop_assert_eq!(emp.rung, catalog.lowest_rung());
                prop_assert!(emp.salary.is_none());
                prop_assert!(emp.engagement_score.is_none());
                prop_assert!(emp.performance.is_none());
                prop_assert!(emp.address.is_none());
                prop_assert!(emp.job_category.is_none());
                prop_assert!(emp.job_grade.is_none());
            }
            EmploymentType::Contract => {
                prop_assert_eq!(emp.rung, catalog.lowest_rung());
                let ladder = rules::salary_for_rung(config.salary_range, emp.rung, catalog.positions.len());
                let expected = rules::round_to_thousand(ladder as f64 * rules::CONTRACT_SALARY_FACTOR)
                    .max(config.salary_range.0);
                prop_assert_eq!(emp.salary, Some(expected));
            }
            EmploymentType::FullTime => {
                let score = emp.engagement_score.unwrap();
                prop_assert!(score <= 100);
                prop_assert_eq!(emp.performance, Some(rules::performance_level_of(score)));
                prop_assert_eq!(emp.job_grade.clone(), Some(rules::job_grade_for(emp.rung)));
            }
        }
    }

    #[test]
    fn validator_accepts_or_names_age(
        seed in any::<u64>(),
        seq in 1u32..10_000,
    ) {
        // Birth dates are drawn inside the age window, so the only way a fresh
        // candidate can fail is the strict lower age bound on a boundary day.
        let config = GeneratorConfig {
            as_of: Some(today()),
            ..GeneratorConfig::default()
        };
        let catalog = Catalog::english();
        let factory = EmployeeFactory::new(&config, &catalog, today()).unwrap();
        let mut rng = RandomSources::seeded(seed);
        let mut names = PoolNameSource::seeded(catalog.names.clone(), seed);
        let emp = factory.create(&mut rng, &mut names, seq);

        let outcome = validator::validate(&emp, config.age_range, config.salary_range, &catalog, today());
        prop_assert!(matches!(outcome, Ok(()) | Err(Rejection::AgeOutOfRange(_))), "{}", validator::reason(&outcome));
    }

    #[test]
    fn ladder_salary_stays_in_range(
        min in 1_000u64..5_000_000,
        span in 0u64..20_000_000,
        rung in 0usize..6,
        grade in grade(),
    ) {
        let range = (min, min + span);
        let salary = rules::salary_for_rung(range, rung, 6);
        prop_assert!(salary >= range.0 && salary <= range.1);

        let adjusted = rules::adjust_salary_by_performance(salary, grade, range);
        prop_assert!(adjusted >= range.0 && adjusted <= range.1);
    }

    #[test]
    fn engagement_clamp_is_bounded(raw in -500.0f64..500.0) {
        let score = rules::clamp_engagement(raw);
        prop_assert!(score <= 100);
        if (0.0..=100.0).contains(&raw) {
            prop_assert_eq!(score as f64, raw.round());
        }
    }
}
