// crates/stress-module-items/tests/proptest_random.rs
// ============================================================================
// Module: Random Item Property-Based Tests
// Description: Range and identity properties for the parameterized items.
// Purpose: Ensure bounded draws stay in range for arbitrary bounds.
// ============================================================================

//! Random item property-based tests.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

mod common;

use std::path::Path;

use proptest::prelude::*;
use stress_module_core::ItemError;
use stress_module_core::ItemValue;
use stress_module_items::RandomGenerator;
use stress_module_items::handlers::parse_lenient_int;

use crate::common::params;
use crate::common::seeded_module;

proptest! {
    #[test]
    fn random_range_stays_within_bounds(a in any::<i32>(), b in any::<i32>(), seed in any::<u64>()) {
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        let module = seeded_module(Path::new("/nonexistent"), seed);
        let value = module
            .dispatch("stress.random", &params(&[&from.to_string(), &to.to_string()]))
            .unwrap()
            .as_unsigned()
            .unwrap();
        let signed = value.cast_signed();
        prop_assert!(i64::from(from) <= signed && signed <= i64::from(to));
    }

    #[test]
    fn inverted_bounds_always_fail(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a != b);
        let (from, to) = if a > b { (a, b) } else { (b, a) };
        let module = seeded_module(Path::new("/nonexistent"), 1);
        let outcome = module.dispatch("stress.random", &params(&[&from.to_string(), &to.to_string()]));
        prop_assert_eq!(outcome, Err(ItemError::InvalidRange));
    }

    #[test]
    fn echo_returns_its_parameter(message in ".{0,80}") {
        let module = seeded_module(Path::new("/nonexistent"), 1);
        let outcome = module.dispatch("stress.echo", &[message.clone()]);
        prop_assert_eq!(outcome, Ok(ItemValue::Str(message)));
    }

    #[test]
    fn lenient_parse_matches_strict_parse_for_integers(value in any::<i32>()) {
        prop_assert_eq!(parse_lenient_int(&value.to_string()), value);
        prop_assert_eq!(parse_lenient_int(&format!("  {value}xyz")), value);
    }

    #[test]
    fn random_strings_have_requested_length(length in 0usize..600, seed in any::<u64>()) {
        let text = RandomGenerator::from_seed(seed).random_string(length);
        prop_assert_eq!(text.len(), length);
        prop_assert!(text.bytes().all(|byte| byte.is_ascii_alphanumeric()));
    }
}
