// Integration tests for the animated sorts

mod common;

use common::{run_sort, sorted_copy, RecordingSink};
use sortty::algorithms::SortAlgorithm;
use sortty::controller::RunStatus;
use sortty::stepper::{Controls, Emitter, Pacing, RunState, Signal, Step, StepKind, StepSink};
use std::time::Duration;

const SAMPLE: [i32; 4] = [5, 3, 8, 1];

#[test]
fn test_every_sort_completes() {
    let inputs: [&[i32]; 6] = [
        &[],
        &[42],
        &[2, 1],
        &SAMPLE,
        &[7, 7, 3, 3, 9, -4, 0, 7],
        &[10, 9, 8, 7, 6, 5, 4, 3, 2, 1],
    ];

    for algorithm in SortAlgorithm::ALL {
        for input in inputs {
            let mut sink = RecordingSink::default();
            let (values, outcome) = run_sort(algorithm, input, &mut sink);

            assert_eq!(values, sorted_copy(input), "{} on {:?}", algorithm, input);
            assert_eq!(outcome.status, RunStatus::Completed);
            assert_eq!(outcome.steps, sink.paced().len());

            let finished = sink.finished().expect("finished step delivered");
            assert_eq!(finished.values, values);
            assert!(finished.highlighted.is_empty());
            assert_eq!(sink.steps.last(), Some(finished));
        }
    }
}

#[test]
fn test_bubble_sort_trace() {
    let mut sink = RecordingSink::default();
    let (values, outcome) = run_sort(SortAlgorithm::Bubble, &SAMPLE, &mut sink);

    let expected: Vec<(StepKind, Vec<i32>, Vec<usize>, bool)> = vec![
        (StepKind::Compare, vec![5, 3, 8, 1], vec![0, 1], false),
        (StepKind::Swap, vec![3, 5, 8, 1], vec![0, 1], true),
        (StepKind::Compare, vec![3, 5, 8, 1], vec![1, 2], false),
        (StepKind::Compare, vec![3, 5, 8, 1], vec![2, 3], false),
        (StepKind::Swap, vec![3, 5, 1, 8], vec![2, 3], true),
        (StepKind::Compare, vec![3, 5, 1, 8], vec![0, 1], false),
        (StepKind::Compare, vec![3, 5, 1, 8], vec![1, 2], false),
        (StepKind::Swap, vec![3, 1, 5, 8], vec![1, 2], true),
        (StepKind::Compare, vec![3, 1, 5, 8], vec![0, 1], false),
        (StepKind::Swap, vec![1, 3, 5, 8], vec![0, 1], true),
    ];

    let actual: Vec<_> = sink
        .paced()
        .into_iter()
        .map(|s| (s.kind, s.values.clone(), s.highlighted.clone(), s.mutated))
        .collect();
    assert_eq!(actual, expected);

    assert_eq!(values, vec![1, 3, 5, 8]);
    assert_eq!(outcome.steps, 10);
    // one mutation per inversion in the input
    assert_eq!(sink.mutated_count(), 4);
    assert_eq!(sink.accents, 4);
}

#[test]
fn test_selection_sort_trace() {
    let mut sink = RecordingSink::default();
    let (values, _) = run_sort(SortAlgorithm::Selection, &SAMPLE, &mut sink);

    let highlights: Vec<_> = sink
        .paced()
        .into_iter()
        .map(|s| (s.kind, s.highlighted.clone()))
        .collect();
    assert_eq!(
        highlights,
        vec![
            (StepKind::Compare, vec![0, 1]),
            (StepKind::Compare, vec![1, 2]),
            (StepKind::Compare, vec![1, 3]),
            (StepKind::Swap, vec![0, 3]),
            (StepKind::Compare, vec![1, 2]),
            (StepKind::Compare, vec![1, 3]),
            (StepKind::Compare, vec![2, 3]),
            (StepKind::Swap, vec![2, 3]),
        ]
    );
    assert_eq!(values, vec![1, 3, 5, 8]);
    assert_eq!(sink.accents, 2);
}

#[test]
fn test_insertion_sort_trace() {
    let mut sink = RecordingSink::default();
    let (values, _) = run_sort(SortAlgorithm::Insertion, &SAMPLE, &mut sink);

    let steps: Vec<_> = sink
        .paced()
        .into_iter()
        .map(|s| (s.kind, s.values.clone(), s.highlighted.clone()))
        .collect();
    assert_eq!(
        steps,
        vec![
            (StepKind::Compare, vec![5, 3, 8, 1], vec![0, 1]),
            (StepKind::Write, vec![3, 5, 8, 1], vec![0]),
            (StepKind::Write, vec![3, 5, 8, 1], vec![2]),
            (StepKind::Compare, vec![3, 5, 8, 1], vec![2, 3]),
            (StepKind::Compare, vec![3, 5, 8, 8], vec![1, 2]),
            (StepKind::Compare, vec![3, 5, 5, 8], vec![0, 1]),
            (StepKind::Write, vec![1, 3, 5, 8], vec![0]),
        ]
    );
    assert_eq!(values, vec![1, 3, 5, 8]);
    assert_eq!(sink.mutated_count(), 3);
}

#[test]
fn test_merge_sort_trace() {
    let mut sink = RecordingSink::default();
    let (values, _) = run_sort(SortAlgorithm::Merge, &SAMPLE, &mut sink);

    let steps: Vec<_> = sink
        .paced()
        .into_iter()
        .map(|s| (s.values.clone(), s.highlighted.clone(), s.mutated))
        .collect();
    assert_eq!(
        steps,
        vec![
            (vec![5, 3, 8, 1], vec![0], true),
            (vec![3, 5, 8, 1], vec![2], true),
            (vec![3, 5, 1, 8], vec![0], true),
            (vec![1, 5, 1, 8], vec![1], true),
            (vec![1, 3, 1, 8], vec![2], true),
        ]
    );
    assert_eq!(values, vec![1, 3, 5, 8]);
    // the tail copy of 8 only shows up in the finished step
    assert_eq!(sink.finished().map(|s| s.values.clone()), Some(vec![1, 3, 5, 8]));
}

#[test]
fn test_quick_sort_trace() {
    let mut sink = RecordingSink::default();
    let (values, outcome) = run_sort(SortAlgorithm::Quick, &SAMPLE, &mut sink);

    let highlights: Vec<_> = sink
        .paced()
        .into_iter()
        .map(|s| s.highlighted.clone())
        .collect();
    assert_eq!(
        highlights,
        vec![
            vec![0, 0, 3],
            vec![0, 1, 3],
            vec![0, 2, 3],
            vec![1, 1, 3],
            vec![2, 2, 3],
        ]
    );
    assert!(sink.paced().iter().all(|s| !s.mutated));
    assert_eq!(sink.accents, 1);
    assert_eq!(values, vec![1, 3, 5, 8]);
    assert_eq!(outcome.steps, 5);
}

#[test]
fn test_cancel_stops_bubble_sort() {
    let mut sink = RecordingSink::cancelling_after(2);
    let (values, outcome) = run_sort(SortAlgorithm::Bubble, &SAMPLE, &mut sink);

    assert_eq!(outcome.status, RunStatus::Cancelled);
    assert_eq!(outcome.steps, 2);
    assert_eq!(values, vec![3, 5, 8, 1]);
    assert!(sink.finished().is_none());
}

#[test]
fn test_cancel_mid_shift_keeps_insertion_key() {
    // cancelled after the compare at [1, 2] while 1 is being shifted left
    let mut sink = RecordingSink::cancelling_after(5);
    let (values, outcome) = run_sort(SortAlgorithm::Insertion, &SAMPLE, &mut sink);

    assert_eq!(outcome.status, RunStatus::Cancelled);
    assert_eq!(outcome.steps, 5);
    assert_eq!(values, vec![3, 1, 5, 8]);
}

#[test]
fn test_cancel_mid_merge_writes_back_halves() {
    let mut sink = RecordingSink::cancelling_after(2);
    let (values, outcome) = run_sort(SortAlgorithm::Merge, &SAMPLE, &mut sink);

    assert_eq!(outcome.status, RunStatus::Cancelled);
    assert_eq!(values, vec![3, 5, 1, 8]);

    let input = [9, 2, 7, 4, 6, 1, 8, 3];
    for k in 1..12 {
        let mut sink = RecordingSink::cancelling_after(k);
        let (values, _) = run_sort(SortAlgorithm::Merge, &input, &mut sink);
        assert_eq!(sorted_copy(&values), sorted_copy(&input), "cancel after {}", k);
    }
}

#[test]
fn test_quick_sort_places_pivot_after_last_compare() {
    // the cancel lands in the pause after the final scan comparison, so the
    // pivot swap still happens before the next partition observes it
    let mut sink = RecordingSink::cancelling_after(3);
    let (values, outcome) = run_sort(SortAlgorithm::Quick, &SAMPLE, &mut sink);

    assert_eq!(outcome.status, RunStatus::Cancelled);
    assert_eq!(outcome.steps, 3);
    assert_eq!(sink.paced()[2].values, vec![5, 3, 8, 1]);
    assert_eq!(values, vec![1, 3, 8, 5]);
}

#[test]
fn test_cancellation_is_deterministic_and_conserves_values() {
    let input = [12, -3, 45, 7, 7, 0, 99, 18, 5, -20];

    for algorithm in SortAlgorithm::ALL {
        let mut full = RecordingSink::default();
        let (_, outcome) = run_sort(algorithm, &input, &mut full);

        for k in 1..=outcome.steps {
            let mut first = RecordingSink::cancelling_after(k);
            let (a, first_outcome) = run_sort(algorithm, &input, &mut first);
            let mut second = RecordingSink::cancelling_after(k);
            let (b, _) = run_sort(algorithm, &input, &mut second);

            assert_eq!(a, b, "{} cancelled after {}", algorithm, k);
            assert_eq!(first.steps, second.steps);
            assert_eq!(sorted_copy(&a), sorted_copy(&input));

            // the first k steps match the uncancelled run
            assert_eq!(first.paced().len(), k);
            assert_eq!(first.steps[..k], full.steps[..k]);
            if k < outcome.steps {
                assert_eq!(first_outcome.status, RunStatus::Cancelled);
            }
        }
    }
}

#[test]
fn test_emit_after_cancel_skips_sink_and_pause() {
    let run = RunState::new();
    let pacing = Pacing::new(1_000);
    let mut sink = RecordingSink::default();
    let mut emitter = Emitter::new(
        Controls {
            run: &run,
            pacing: &pacing,
        },
        &mut sink,
    );

    run.request_cancel();
    let signal = emitter.emit(StepKind::Compare, &[1, 2], &[0, 1], true);

    assert_eq!(signal, Signal::Cancelled);
    assert_eq!(emitter.emitted(), 0);
    assert!(sink.steps.is_empty());
    assert!(sink.pauses.is_empty());
    assert_eq!(sink.accents, 0);
}

#[test]
fn test_pacing_is_read_at_each_emission() {
    struct SlowingSink {
        inner: RecordingSink,
    }

    impl StepSink for SlowingSink {
        fn on_step(&mut self, step: &Step<'_>) {
            self.inner.on_step(step);
        }

        fn pause(&mut self, interval: Duration, controls: &Controls<'_>) {
            self.inner.pauses.push(interval);
            controls.pacing.set_millis(0);
        }
    }

    let run = RunState::new();
    let pacing = Pacing::new(7);
    let mut sink = SlowingSink {
        inner: RecordingSink::default(),
    };
    let mut emitter = Emitter::new(
        Controls {
            run: &run,
            pacing: &pacing,
        },
        &mut sink,
    );

    assert_eq!(emitter.emit(StepKind::Compare, &[2, 1], &[0, 1], false), Signal::Continue);
    assert_eq!(emitter.emit(StepKind::Swap, &[1, 2], &[0, 1], true), Signal::Continue);
    drop(emitter);

    assert_eq!(
        sink.inner.pauses,
        vec![Duration::from_millis(7), Duration::from_millis(0)]
    );
}

#[test]
fn test_complexity_table() {
    let merge = SortAlgorithm::Merge.complexity();
    assert_eq!(merge.time, "O(n log n)");
    assert_eq!(merge.space, "O(n)");
    assert!(merge.stable);

    let quick = SortAlgorithm::Quick.complexity();
    assert_eq!(quick.time, "O(n²)");
    assert_eq!(quick.space, "O(log n)");
    assert!(!quick.stable);

    assert!(!SortAlgorithm::Selection.complexity().stable);
    assert_eq!("QUICK".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Quick));
    assert!("shell".parse::<SortAlgorithm>().is_err());
    assert_eq!(SortAlgorithm::Quick.next(), SortAlgorithm::Bubble);
}
