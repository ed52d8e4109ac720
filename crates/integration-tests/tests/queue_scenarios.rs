//! Queue engine end-to-end scenarios
//!
//! Walks one tracked token from issuance through relax, soon, now and missed.

use lineless_core::application::{register, QueueEngine, RegistrationForm};
use lineless_core::domain::{classify, EngineConfig, EntryRole, QueueStatus};
use lineless_core::port::id_provider::mocks::SequentialIdProvider;
use lineless_core::port::time_provider::mocks::FixedTimeProvider;
use std::sync::Arc;

fn fresh_engine() -> QueueEngine {
    QueueEngine::new(
        EngineConfig::default(),
        Arc::new(SequentialIdProvider::default()),
        Arc::new(FixedTimeProvider {
            now: 1_700_000_000_000,
        }),
    )
}

fn advance_times(engine: &mut QueueEngine, n: usize) {
    for _ in 0..n {
        engine.advance();
    }
}

/// Scenario A: fresh engine, first token
#[test]
fn test_scenario_a_issue_on_fresh_engine() {
    let mut engine = fresh_engine();
    assert_eq!(engine.serving_pointer(), 36);
    assert_eq!(engine.last_issued_number(), 42);

    let token = engine.issue("Jane", "5550001001", "General OP");

    assert_eq!(token.number.to_string(), "A-43");
    assert_eq!(engine.people_ahead(), 6);
    assert_eq!(classify(6), QueueStatus::Relax);
    assert_eq!(engine.status(), QueueStatus::Relax);
    assert_eq!(engine.estimated_wait_minutes(), 18);
}

/// Scenario B: five advances later the token is close
#[test]
fn test_scenario_b_soon_after_five_advances() {
    let mut engine = fresh_engine();
    engine.issue("Jane", "5550001001", "General OP");

    advance_times(&mut engine, 5);

    assert_eq!(engine.serving_pointer(), 41);
    assert_eq!(engine.people_ahead(), 1);
    assert_eq!(classify(1), QueueStatus::Soon);
    assert_eq!(engine.status(), QueueStatus::Soon);
}

/// Scenario C: one more advance and it is the token's turn
#[test]
fn test_scenario_c_now() {
    let mut engine = fresh_engine();
    engine.issue("Jane", "5550001001", "General OP");

    advance_times(&mut engine, 6);

    assert_eq!(engine.serving_pointer(), 42);
    assert_eq!(engine.people_ahead(), 0);
    assert_eq!(classify(0), QueueStatus::Now);
    assert_eq!(engine.status(), QueueStatus::Now);
}

/// Scenario D: the pointer reaches the token; clamped count hides the miss
#[test]
fn test_scenario_d_missed() {
    let mut engine = fresh_engine();
    engine.issue("Jane", "5550001001", "General OP");

    advance_times(&mut engine, 7);

    assert_eq!(engine.serving_pointer(), 43);
    assert_eq!(engine.people_ahead(), 0);
    assert_eq!(engine.raw_people_ahead(), Some(-1));
    assert_eq!(classify(-1), QueueStatus::Missed);
    assert_eq!(engine.status(), QueueStatus::Missed);
    assert_eq!(engine.progress_percent(), 100.0);
}

#[test]
fn test_advance_n_times_moves_pointer_by_n() {
    for n in [0usize, 1, 7, 25] {
        let mut without_token = fresh_engine();
        let mut with_token = fresh_engine();
        with_token.issue("Jane", "5550001001", "General OP");

        advance_times(&mut without_token, n);
        advance_times(&mut with_token, n);

        assert_eq!(without_token.serving_pointer(), 36 + n as u64);
        assert_eq!(with_token.serving_pointer(), 36 + n as u64);
    }
}

#[test]
fn test_snapshot_follows_pointer() {
    let mut engine = fresh_engine();
    advance_times(&mut engine, 10);

    let snapshot = engine.queue_snapshot(9);
    assert_eq!(snapshot.len(), 10);
    assert_eq!(snapshot[0].identifier, "A-46");
    assert_eq!(snapshot[0].role, EntryRole::Current);
    assert_eq!(snapshot[1].role, EntryRole::Next);
    assert!(snapshot[2..].iter().all(|e| e.role == EntryRole::Waiting));
    assert_eq!(snapshot[9].identifier, "A-55");
}

#[test]
fn test_progress_in_range_along_the_way() {
    let mut engine = fresh_engine();
    engine.issue("Jane", "5550001001", "General OP");

    let mut last = engine.progress_percent();
    for _ in 0..10 {
        engine.advance();
        let progress = engine.progress_percent();
        assert!((0.0..=100.0).contains(&progress));
        assert!(progress >= last);
        last = progress;
    }
    assert_eq!(last, 100.0);
}

#[test]
fn test_registration_then_scenario() {
    let mut engine = fresh_engine();
    let form = RegistrationForm::new("Jane", "5550001001", "General OP");

    let token = register(&mut engine, &form).unwrap();
    assert_eq!(token.id, "token-1");
    assert_eq!(token.issued_at, 1_700_000_000_000);

    let report = engine.report();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["status"], "relax");
    assert_eq!(json["people_ahead"], 6);
    assert_eq!(json["now_serving"], "A-36");
}
