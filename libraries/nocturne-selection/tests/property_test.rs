//! Property-based tests for the selection state machine
//!
//! Uses proptest to verify the zone rules and supersede invariants
//! across many random inputs.

use nocturne_core::Profile;
use nocturne_selection::{focus_for, zone_for, PointerSample, SelectionMachine, Zone};
use proptest::prelude::*;

fn at(x: f32) -> PointerSample {
    PointerSample { x, y: 50.0 }
}

proptest! {
    /// Property: every x below 40 maps to the left zone / Princesa
    #[test]
    fn left_zone_maps_to_princesa(x in -50.0f32..40.0) {
        let zone = zone_for(x);
        prop_assert_eq!(zone, Some(Zone::Left));
        prop_assert_eq!(zone.unwrap().profile(), Profile::Princesa);
    }

    /// Property: every x above 60 maps to the right zone / Joha
    #[test]
    fn right_zone_maps_to_joha(x in 60.0f32..150.0) {
        prop_assume!(x > 60.0);
        let zone = zone_for(x);
        prop_assert_eq!(zone, Some(Zone::Right));
        prop_assert_eq!(zone.unwrap().profile(), Profile::Joha);
    }

    /// Property: the 40-60 band is neutral, no zone assigned
    #[test]
    fn center_band_is_neutral(x in 40.0f32..=60.0) {
        prop_assert_eq!(zone_for(x), None);
    }

    /// Property: the focus band contains the commit zone on both sides
    #[test]
    fn focus_band_contains_commit_zone(x in -50.0f32..150.0) {
        if let Some(zone) = zone_for(x) {
            prop_assert_eq!(focus_for(x), Some(zone));
        }
    }

    /// Property: releases in a zone always leave the machine pending on
    /// that zone's profile, regardless of drag history
    #[test]
    fn release_in_zone_pends_that_profile(
        history in prop::collection::vec(-20.0f32..120.0, 0..30),
        last in -20.0f32..120.0,
    ) {
        let mut machine = SelectionMachine::new();
        for x in history {
            machine.pointer_moved(at(x));
        }
        machine.pointer_moved(at(last));

        let request = machine.drag_ended();
        match zone_for(last) {
            Some(zone) => {
                prop_assert_eq!(request.map(|r| r.profile), Some(zone.profile()));
            }
            None => prop_assert!(request.is_none()),
        }
    }

    /// Property: after any sequence of supersedes, only the newest
    /// token can commit, and it commits the newest profile
    #[test]
    fn only_newest_token_commits(xs in prop::collection::vec(
        prop_oneof![-20.0f32..40.0, 61.0f32..120.0], 1..10
    )) {
        let mut machine = SelectionMachine::new();
        let mut requests = Vec::new();
        for x in &xs {
            machine.pointer_moved(at(*x));
            if let Some(request) = machine.drag_ended() {
                requests.push(request);
            }
        }

        let newest = *requests.last().unwrap();

        // Every stale token is rejected.
        for stale in &requests[..requests.len() - 1] {
            prop_assert_eq!(machine.commit(stale.token), None);
        }

        prop_assert_eq!(machine.commit(newest.token), Some(newest.profile));
        prop_assert_eq!(machine.committed(), Some(newest.profile));
    }
}
