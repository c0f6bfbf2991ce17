//! Property tests for the cost model, the update rule and the search.

use glucopath_kernel::config::GlycemicConfigV1;
use glucopath_kernel::rules::update_blood_sugar;
use glucopath_kernel::state::HealthStateV1;
use glucopath_search::cost::heuristic;
use glucopath_search::graph::TerminationReasonV1;
use glucopath_search::policy::SearchPolicyV1;
use glucopath_search::search::search;
use proptest::prelude::*;

fn arb_state() -> impl Strategy<Value = HealthStateV1> {
    (14.0f64..40.0, 18u32..90, 0.0f64..100.0, 0.0f64..400.0)
        .prop_map(|(bmi, age, activity, bs)| HealthStateV1::new(bmi, age, activity, bs))
}

proptest! {
    /// Property: the heuristic is non-negative and zero exactly at target.
    #[test]
    fn prop_heuristic_non_negative(state in arb_state(), target in 0.0f64..400.0) {
        let config = GlycemicConfigV1 { target, ..GlycemicConfigV1::default() };
        let h = heuristic(&state, &config);
        prop_assert!(h >= 0.0);
        prop_assert_eq!(h == 0.0, state.blood_sugar == target);
    }

    /// Property: the update never drops below the floor and never raises a
    /// level that is already at or above it.
    #[test]
    fn prop_update_is_bounded(
        current in 0.0f64..500.0,
        bmi_change in 0.0f64..5.0,
        activity_change in 0.0f64..20.0,
        alpha in 0.0f64..20.0,
        beta in 0.0f64..20.0,
        floor in 0.0f64..200.0,
    ) {
        let config = GlycemicConfigV1 { alpha, beta, floor, ..GlycemicConfigV1::default() };
        let next = update_blood_sugar(bmi_change, activity_change, current, &config);
        prop_assert!(next >= floor);
        if current >= floor {
            prop_assert!(next <= current);
        } else {
            prop_assert_eq!(next, floor);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: default constants always reach the target, and the path
    /// starts at `start`, ends at or below target and never climbs.
    #[test]
    fn prop_default_constants_reach_target(state in arb_state()) {
        let config = GlycemicConfigV1::default();
        let result = search(state, &config, &SearchPolicyV1::default())
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert!(
            matches!(result.termination_reason(), TerminationReasonV1::GoalReached { .. }),
            "terminated with {:?}", result.termination_reason()
        );
        let path = result.path().ok_or_else(|| TestCaseError::fail("no path"))?;
        prop_assert_eq!(path[0], state);
        prop_assert!(path[path.len() - 1].blood_sugar <= config.target);

        for pair in path.windows(2) {
            prop_assert!(
                pair[1].blood_sugar <= pair[0].blood_sugar,
                "blood sugar rose from {} to {}", pair[0].blood_sugar, pair[1].blood_sugar
            );
            prop_assert_eq!(pair[1].age, state.age);
        }
    }
}
