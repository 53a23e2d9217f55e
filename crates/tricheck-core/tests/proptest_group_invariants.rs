//! Property-based invariant tests for tri-state groups.
//!
//! 1. checked is true iff every child is checked.
//! 2. Mixed children derive indeterminate and unchecked.
//! 3. A parent toggle derives `{v, false}` whatever came before.
//! 4. Child toggles are idempotent.
//! 5. Out-of-range child toggles fail and leave the state alone.
//! 6. The controller agrees with folding `transition` over the same events.
//! 7. Subscribers fire exactly once per version bump.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;
use tricheck_core::{
    DerivedParentState, GroupError, GroupEvent, GroupState, TriStateGroupController,
    derive_parent_state, transition,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn child_values(max_len: usize) -> impl Strategy<Value = Vec<bool>> {
    proptest::collection::vec(any::<bool>(), 1..=max_len)
}

/// Values plus an in-range index.
fn values_and_index(max_len: usize) -> impl Strategy<Value = (Vec<bool>, usize)> {
    child_values(max_len).prop_flat_map(|v| {
        let len = v.len();
        (Just(v), 0..len)
    })
}

fn event(max_index: usize) -> impl Strategy<Value = GroupEvent> {
    prop_oneof![
        any::<bool>().prop_map(GroupEvent::ParentToggled),
        (0..max_index, any::<bool>())
            .prop_map(|(index, value)| GroupEvent::ChildToggled { index, value }),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. checked iff all true
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn checked_iff_all_true(values in child_values(32)) {
        let derived = derive_parent_state(&values);
        prop_assert_eq!(derived.checked, values.iter().all(|&v| v));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. mixed → indeterminate, not checked
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn mixed_is_indeterminate((mut values, idx) in values_and_index(32)) {
        // Force at least two distinct values.
        values.push(!values[idx]);
        let derived = derive_parent_state(&values);
        prop_assert!(derived.indeterminate);
        prop_assert!(!derived.checked);
    }

    #[test]
    fn uniform_is_never_indeterminate(v in any::<bool>(), len in 1usize..32) {
        let derived = derive_parent_state(&vec![v; len]);
        prop_assert!(!derived.indeterminate);
        prop_assert_eq!(derived.checked, v);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. parent broadcast overrides history
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn parent_toggle_overrides_history(
        initial in child_values(16),
        history in proptest::collection::vec(event(16), 0..20),
        v in any::<bool>(),
    ) {
        let mut group = TriStateGroupController::new(initial).unwrap();
        for e in history {
            let _ = group.dispatch(e);
        }
        group.on_parent_toggle(v);
        prop_assert_eq!(
            group.parent_state(),
            DerivedParentState { checked: v, indeterminate: false }
        );
        prop_assert!(group.state().iter().all(|c| c == v));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. child toggle idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn child_toggle_idempotent((values, idx) in values_and_index(16), v in any::<bool>()) {
        let mut once = TriStateGroupController::new(values.clone()).unwrap();
        once.on_child_toggle(idx, v).unwrap();

        let mut twice = TriStateGroupController::new(values).unwrap();
        twice.on_child_toggle(idx, v).unwrap();
        twice.on_child_toggle(idx, v).unwrap();

        prop_assert_eq!(once.state(), twice.state());
        prop_assert_eq!(once.parent_state(), twice.parent_state());
        prop_assert_eq!(once.version(), twice.version());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. out-of-range child toggles
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn out_of_range_rejected(values in child_values(16), extra in 0usize..100, v in any::<bool>()) {
        let len = values.len();
        let index = len + extra;
        let mut group = TriStateGroupController::new(values.clone()).unwrap();

        prop_assert_eq!(
            group.on_child_toggle(index, v),
            Err(GroupError::InvalidIndex { index, len })
        );
        prop_assert_eq!(group.state().as_slice(), values.as_slice());
        prop_assert_eq!(group.version(), 0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. controller agrees with the pure transition function
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn controller_matches_pure_fold(
        initial in child_values(8),
        events in proptest::collection::vec(event(10), 0..30),
    ) {
        let mut group = TriStateGroupController::new(initial.clone()).unwrap();
        let mut pure = GroupState::new(initial).unwrap();

        for e in events {
            let controller_result = group.dispatch(e);
            match transition(&pure, e) {
                Ok(next) => {
                    prop_assert_eq!(controller_result, Ok(next != pure));
                    pure = next;
                }
                Err(err) => {
                    prop_assert_eq!(controller_result, Err(err));
                }
            }
            prop_assert_eq!(group.state(), &pure);
            prop_assert_eq!(group.parent_state(), pure.parent());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. one notification per version bump
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn notifications_match_version(
        initial in child_values(8),
        events in proptest::collection::vec(event(10), 0..30),
    ) {
        let mut group = TriStateGroupController::new(initial).unwrap();
        let count = Rc::new(Cell::new(0u64));
        let count_clone = Rc::clone(&count);
        let _sub = group.subscribe(move |_| count_clone.set(count_clone.get() + 1));

        for e in events {
            let _ = group.dispatch(e);
        }
        prop_assert_eq!(count.get(), group.version());
    }
}
