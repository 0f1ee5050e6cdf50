// Control surface and text command tests

mod common;

use common::RecordingSink;
use sortty::algorithms::{SortAlgorithm, Traversal};
use sortty::controller::RunPhase;
use sortty::errors::{Structure, VisualError};
use sortty::session::{join_values, Session};

fn session() -> Session {
    Session::new(0, Some(42))
}

fn run(session: &mut Session, line: &str) -> Result<String, VisualError> {
    session.execute_line(line, &mut RecordingSink::default())
}

#[test]
fn test_seeded_sessions_match() {
    let a = Session::new(0, Some(9));
    let b = Session::new(0, Some(9));
    assert_eq!(a.sequence(), b.sequence());
    assert_eq!(a.sequence().len(), 10);
    assert_eq!(a.algorithm(), SortAlgorithm::Bubble);
}

#[test]
fn test_sort_command_sorts_sequence() {
    let mut session = session();
    run(&mut session, "values 5,3,8,1").expect("values load");

    let mut sink = RecordingSink::default();
    let message = session
        .execute_line("sort quick", &mut sink)
        .expect("sort runs");

    assert_eq!(message, "Quick Sort finished in 5 steps");
    assert_eq!(session.sequence().values(), &[1, 3, 5, 8]);
    assert_eq!(session.algorithm(), SortAlgorithm::Quick);
    assert_eq!(session.controller().phase(), RunPhase::Completed);

    // new values reset the finished state
    run(&mut session, "gen 12").expect("size in range");
    assert_eq!(session.sequence().len(), 12);
    assert_eq!(session.controller().phase(), RunPhase::Idle);
}

#[test]
fn test_cancelled_sort_reports_progress() {
    let mut session = session();
    session.set_custom_values("5,3,8,1").expect("values load");
    session.set_algorithm(SortAlgorithm::Bubble);

    let mut sink = RecordingSink::cancelling_after(3);
    let message = session.execute_line("sort", &mut sink).expect("sort runs");
    assert_eq!(message, "Bubble Sort stopped after 3 steps");
    assert_eq!(session.controller().phase(), RunPhase::Cancelled);
}

#[test]
fn test_stack_and_queue_commands() {
    let mut session = session();
    assert_eq!(
        run(&mut session, "pop"),
        Err(VisualError::EmptyStructure(Structure::Stack))
    );
    assert_eq!(session.stack().len(), 0);

    run(&mut session, "push 4").expect("push");
    run(&mut session, "push 9").expect("push");
    assert_eq!(run(&mut session, "peek").as_deref(), Ok("Top element: 9"));
    assert_eq!(run(&mut session, "pop").as_deref(), Ok("Popped: 9"));

    assert_eq!(
        run(&mut session, "dequeue"),
        Err(VisualError::EmptyStructure(Structure::Queue))
    );
    run(&mut session, "enqueue 1").expect("enqueue");
    run(&mut session, "enqueue 2").expect("enqueue");
    assert_eq!(run(&mut session, "front").as_deref(), Ok("Front element: 1"));
    assert_eq!(run(&mut session, "rear").as_deref(), Ok("Rear element: 2"));
    assert_eq!(run(&mut session, "dequeue").as_deref(), Ok("Dequeued: 1"));

    run(&mut session, "clear queue").expect("clear");
    assert!(session.queue().is_empty());
}

#[test]
fn test_list_commands() {
    let mut session = session();
    run(&mut session, "addtail 2").expect("addtail");
    run(&mut session, "addhead 1").expect("addhead");
    run(&mut session, "insertat 3 2").expect("insertat");
    assert_eq!(session.list().to_vec(), vec![1, 2, 3]);

    assert_eq!(
        run(&mut session, "search 3").as_deref(),
        Ok("Value 3 found at index 2")
    );
    assert_eq!(
        run(&mut session, "find 8").as_deref(),
        Ok("Value 8 not found in the list")
    );
    assert!(matches!(
        run(&mut session, "insertat 9 7"),
        Err(VisualError::InvalidInput(_))
    ));
    assert_eq!(session.list().len(), 3);
}

#[test]
fn test_tree_commands() {
    let mut session = session();
    for value in [5, 3, 8, 7] {
        run(&mut session, &format!("insert {}", value)).expect("insert");
    }
    assert_eq!(
        run(&mut session, "insert 5").as_deref(),
        Ok("5 is already in the tree")
    );

    assert_eq!(
        run(&mut session, "traverse pre").as_deref(),
        Ok("Pre-order: 5, 3, 8, 7")
    );
    assert_eq!(
        session.last_traversal(),
        Some((Traversal::PreOrder, &[5, 3, 8, 7][..]))
    );

    assert_eq!(
        run(&mut session, "delete 5").as_deref(),
        Ok("Node with value 5 has been deleted")
    );
    assert_eq!(session.last_traversal(), None);
    assert_eq!(session.tree().root().map(|n| n.value), Some(7));

    run(&mut session, "clear tree").expect("clear");
    assert_eq!(
        run(&mut session, "traverse in").as_deref(),
        Ok("In-order: None")
    );
}

#[test]
fn test_invalid_commands_leave_state_alone() {
    let mut session = session();
    let before = session.sequence().clone();

    assert!(matches!(
        run(&mut session, "values x, y"),
        Err(VisualError::InvalidInput(_))
    ));
    assert!(matches!(
        run(&mut session, "gen 500"),
        Err(VisualError::InvalidInput(_))
    ));
    assert!(matches!(
        run(&mut session, "push seven"),
        Err(VisualError::InvalidInput(_))
    ));
    assert_eq!(session.sequence(), &before);
    assert!(session.stack().is_empty());
    assert_eq!(session.cancel(), Err(VisualError::NotRunning));
}

#[test]
fn test_speed_command_sets_pacing() {
    let mut session = session();
    assert_eq!(
        run(&mut session, "speed 10").as_deref(),
        Ok("Speed 10 (100 ms per step)")
    );
    assert_eq!(session.controller().pacing_ms(), 100);

    session.set_pacing(0);
    assert_eq!(session.controller().pacing_ms(), 0);
}

#[test]
fn test_join_values() {
    assert_eq!(join_values(&[]), "None");
    assert_eq!(join_values(&[1, 2, 3]), "1, 2, 3");
}
