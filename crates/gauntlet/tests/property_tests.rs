//! Property-based tests for the harness building blocks.
//!
//! These verify the invariants that must hold for any input: generators
//! stay within their contracts, outcome renderings stay bounded, the
//! reporter's counters stay consistent, and the targets fail cleanly
//! instead of panicking.

use proptest::prelude::*;

use chrono::NaiveDate;
use gauntlet::generate::{materialize_file, random_string};
use gauntlet::report::{MAX_INPUT_RENDER, Outcome, Reporter};
use gauntlet::targets::{DateArg, FailureKind, NameArg, SourceParser, mining};

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

proptest! {
    #[test]
    fn prop_random_string_respects_explicit_length(len in 0usize..300) {
        prop_assert_eq!(random_string(Some(len)).chars().count(), len);
    }

    #[test]
    fn prop_outcome_input_always_bounded(input in "\\PC{0,400}") {
        let outcome = Outcome::success("parse", &input, "()".to_string());
        prop_assert!(outcome.input.chars().count() <= MAX_INPUT_RENDER);
    }

    #[test]
    fn prop_reporter_counters_consistent(failures in proptest::collection::vec(any::<bool>(), 0..50)) {
        let mut reporter = Reporter::new();
        for &failed in &failures {
            let outcome = if failed {
                Outcome::failure(
                    "parse",
                    "input",
                    gauntlet::report::FailureRecord {
                        kind: FailureKind::Unclassified,
                        message: "boom".to_string(),
                        trace: String::new(),
                    },
                )
            } else {
                Outcome::success("parse", "input", "()".to_string())
            };
            reporter.log(outcome);
        }

        prop_assert_eq!(reporter.total(), failures.len());
        prop_assert!(reporter.failures() <= reporter.total());
        match reporter.success_rate() {
            Some(rate) => prop_assert!((0.0..=100.0).contains(&rate)),
            None => prop_assert_eq!(reporter.total(), 0),
        }
    }

    #[test]
    fn prop_days_between_symmetric_and_nonnegative(a in -2000i64..2000, b in -2000i64..2000) {
        let d1 = DateArg::Date(epoch() + chrono::Duration::days(a));
        let d2 = DateArg::Date(epoch() + chrono::Duration::days(b));
        let forward = mining::days_between(&d1, &d2).unwrap();
        let backward = mining::days_between(&d2, &d1).unwrap();
        prop_assert_eq!(forward, backward);
        prop_assert!(forward >= 0);
        prop_assert_eq!(forward, (a - b).abs());
    }

    #[test]
    fn prop_parser_never_panics(content in "\\PC{0,300}") {
        let parser = SourceParser::load().unwrap();
        let file = materialize_file(&content).unwrap();
        // Ok or a classified error; either way it must not panic.
        let _ = parser.parse(file.path());
    }

    #[test]
    fn prop_logging_check_rejects_numbers(n in any::<i64>()) {
        let parser = SourceParser::load().unwrap();
        let file = materialize_file("logging.info(data)\n").unwrap();
        let parsed = parser.parse(file.path()).unwrap();
        let err = parser
            .check_logging_usage(&parsed, &NameArg::Number(n))
            .unwrap_err();
        prop_assert_eq!(err.kind(), FailureKind::TypeMismatch);
    }
}
