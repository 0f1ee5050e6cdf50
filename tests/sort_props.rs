mod common;

use common::{run_sort, sorted_copy, RecordingSink};
use proptest::prelude::*;
use sortty::algorithms::{SortAlgorithm, Traversal};
use sortty::collections::BinarySearchTree;
use sortty::controller::RunStatus;

fn algorithm() -> impl Strategy<Value = SortAlgorithm> {
    prop_oneof![
        Just(SortAlgorithm::Bubble),
        Just(SortAlgorithm::Selection),
        Just(SortAlgorithm::Insertion),
        Just(SortAlgorithm::Merge),
        Just(SortAlgorithm::Quick),
    ]
}

proptest! {
    #[test]
    fn completed_runs_sort_ascending(
        algorithm in algorithm(),
        input in proptest::collection::vec(-500i32..500, 0..40),
    ) {
        let mut sink = RecordingSink::default();
        let (values, outcome) = run_sort(algorithm, &input, &mut sink);

        prop_assert_eq!(outcome.status, RunStatus::Completed);
        prop_assert_eq!(values, sorted_copy(&input));
        prop_assert_eq!(sink.pauses.len(), outcome.steps);
        let indices_in_bounds = sink
            .steps
            .iter()
            .all(|step| step.highlighted.iter().all(|&i| i < input.len()));
        prop_assert!(indices_in_bounds, "highlighted index out of bounds");
    }

    #[test]
    fn cancelled_runs_keep_a_permutation(
        algorithm in algorithm(),
        input in proptest::collection::vec(-50i32..50, 2..30),
        cancel_after in 1usize..60,
    ) {
        let mut sink = RecordingSink::cancelling_after(cancel_after);
        let (values, outcome) = run_sort(algorithm, &input, &mut sink);

        prop_assert_eq!(sorted_copy(&values), sorted_copy(&input));
        prop_assert!(outcome.steps <= cancel_after, "steps emitted after cancel");
        if outcome.status == RunStatus::Cancelled {
            prop_assert!(sink.finished().is_none());
        }
    }

    #[test]
    fn bst_in_order_is_sorted_and_unique(
        inserts in proptest::collection::vec(-100i32..100, 0..60),
        deletes in proptest::collection::vec(-100i32..100, 0..30),
    ) {
        let mut tree = BinarySearchTree::new();
        for &value in &inserts {
            tree.insert(value);
        }
        for &value in &deletes {
            tree.delete(value);
        }

        let mut expected: Vec<i32> = inserts
            .iter()
            .copied()
            .filter(|v| !deletes.contains(v))
            .collect();
        expected.sort_unstable();
        expected.dedup();

        prop_assert_eq!(tree.traverse(Traversal::InOrder), expected.clone());
        prop_assert_eq!(tree.count(), expected.len());
        prop_assert!(tree.height() <= tree.count());

        // traversals read the tree without changing it
        for order in Traversal::ALL {
            let first = tree.traverse(order);
            prop_assert_eq!(first.len(), expected.len());
            prop_assert_eq!(first, tree.traverse(order));
        }
    }
}
