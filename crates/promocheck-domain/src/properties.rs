//! Property-based tests for the eligibility engine.
//!
//! These tests use proptest to verify:
//! - eligibility equals membership in both sources for every valid code
//! - the membership source is only consulted for campaign hits
//! - invalid input never reaches either source

use crate::error::EligibilityError;
use crate::test_support::engine;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn arb_code() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,3}").unwrap()
}

fn arb_codes() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(arb_code(), 0..24)
}

/// Strings that break at least one validation rule.
fn arb_invalid() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::string::string_regex("[a-z]{6,12}").unwrap(),
        prop::string::string_regex("[a-z]{0,2}[A-Z0-9 _.-][a-z]{0,2}").unwrap(),
    ]
}

fn as_strs(set: &BTreeSet<String>) -> Vec<&str> {
    set.iter().map(String::as_str).collect()
}

proptest! {
    #[test]
    fn eligible_iff_present_in_both(
        campaign in arb_codes(),
        membership in arb_codes(),
        queries in prop::collection::vec(arb_code(), 1..16),
    ) {
        let (eng, campaign_src, _) = engine(&as_strs(&campaign), &as_strs(&membership));
        for q in &queries {
            let expected = campaign.contains(q) && membership.contains(q);
            prop_assert_eq!(eng.is_eligible(q).expect("readable sources"), expected);
        }
        prop_assert_eq!(campaign_src.load_calls(), 1);
    }

    #[test]
    fn membership_is_only_consulted_for_campaign_hits(
        campaign in arb_codes(),
        membership in arb_codes(),
        queries in prop::collection::vec(arb_code(), 1..16),
    ) {
        let (eng, _, membership_src) = engine(&as_strs(&campaign), &as_strs(&membership));
        for q in &queries {
            let _ = eng.is_eligible(q);
        }
        let hits = queries.iter().filter(|q| campaign.contains(*q)).count();
        prop_assert_eq!(membership_src.exists_calls(), hits);
    }

    #[test]
    fn invalid_input_never_reaches_a_source(
        campaign in arb_codes(),
        input in arb_invalid(),
    ) {
        let (eng, campaign_src, membership_src) = engine(&as_strs(&campaign), &as_strs(&campaign));
        prop_assert!(matches!(eng.is_eligible(&input), Err(EligibilityError::Validation(_))));
        prop_assert_eq!(campaign_src.load_calls(), 0);
        prop_assert_eq!(membership_src.exists_calls(), 0);
    }

    #[test]
    fn repeated_queries_are_idempotent(
        campaign in arb_codes(),
        membership in arb_codes(),
        q in arb_code(),
    ) {
        let (eng, _, _) = engine(&as_strs(&campaign), &as_strs(&membership));
        let first = eng.is_eligible(&q).expect("query");
        for _ in 0..3 {
            prop_assert_eq!(eng.is_eligible(&q).expect("query"), first);
        }
    }
}
