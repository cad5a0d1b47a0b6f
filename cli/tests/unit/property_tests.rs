//! Property-based tests for target parsing and topology plans.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use strata_cli::domain::topology::is_stateful;
use strata_cli::domain::{Plan, ScaleTarget, Targets, TopologyMode, Verb, is_scalable};

fn verb() -> impl Strategy<Value = Verb> {
    prop_oneof![
        Just(Verb::Install),
        Just(Verb::Start),
        Just(Verb::Stop),
        Just(Verb::Uninstall),
    ]
}

proptest! {
    /// Well-formed targets parse back to exactly their parts.
    #[test]
    fn prop_scale_target_parses_component_and_count(
        component in "[a-z-]{1,20}",
        count in 0u32..100_000,
    ) {
        let t = ScaleTarget::parse(&format!("{component}={count}")).expect("well-formed");
        prop_assert_eq!(t.component, component);
        prop_assert_eq!(t.count, count);
    }

    /// Anything with a character outside the grammar is rejected.
    #[test]
    fn prop_scale_target_rejects_foreign_characters(
        prefix in "[a-z]{1,5}",
        bad in "[A-Z_ .@]",
        count in 0u32..10,
    ) {
        let target = format!("{prefix}{bad}={count}");
        prop_assert!(ScaleTarget::parse(&target).is_err(), "accepted {}", target);
    }

    /// The policy check agrees with the scalable-kinds predicate.
    #[test]
    fn prop_parse_scalable_matches_policy(component in "[a-z-]{1,20}", count in 0u32..10) {
        let result = ScaleTarget::parse_scalable(&format!("{component}={count}"));
        prop_assert_eq!(result.is_ok(), is_scalable(&component));
    }

    /// Stateless plans never name a stateful component, for any verb.
    #[test]
    fn prop_stateless_plans_exclude_stateful(verb in verb()) {
        let plan = Plan::platform(verb, TopologyMode::Stateless);
        for stage in &plan.stages {
            for name in stage.warm_up.iter().chain(stage.batches.iter()).flatten() {
                prop_assert!(!is_stateful(name), "{:?} plan contains {}", verb, name);
            }
        }
    }

    /// Two or more names never resolve to a topology, keywords included.
    #[test]
    fn prop_multi_name_lists_are_literal(
        names in proptest::collection::vec(
            prop_oneof![Just("platform".to_string()), "[a-z@0-9*]{1,10}"],
            2..6,
        ),
    ) {
        let resolved = Targets::resolve(names.clone()).expect("non-empty");
        prop_assert_eq!(resolved, Targets::Literal(names));
    }
}
