//! Capacity invariants: person and session limits, checked before mutation.

use taconnect::core::limits::{MAX_PERSON_COUNT, MAX_SESSION_COUNT};
use taconnect::error::Error;
use taconnect::logic::error::CommandError;

use crate::fixtures::{harness_with, PersonBuilder};

/// Unique-email persons spread across a bounded set of sessions.
fn bulk_persons(count: usize, sessions: &[String]) -> Vec<taconnect::Person> {
    (0..count)
        .map(|i| {
            PersonBuilder::new()
                .email(&format!("p{i}@x.com"))
                .telegram(None)
                .session(Some(sessions[i % sessions.len()].as_str()))
                .build()
        })
        .collect()
}

/// 250 distinct valid sessions: A1..A99, B1..B99, C1..C52.
fn max_sessions() -> Vec<String> {
    let mut sessions = Vec::with_capacity(MAX_SESSION_COUNT);
    'outer: for letter in ['A', 'B', 'C'] {
        for n in 1..=99 {
            sessions.push(format!("{letter}{n}"));
            if sessions.len() == MAX_SESSION_COUNT {
                break 'outer;
            }
        }
    }
    sessions
}

#[test]
fn person_limit_rejects_the_2501st_add_and_leaves_store_unchanged() {
    let sessions = vec!["G1".to_string()];
    let mut h = harness_with(bulk_persons(MAX_PERSON_COUNT, &sessions));
    assert_eq!(h.logic.store().counter().person_count(), MAX_PERSON_COUNT);

    let err = h
        .logic
        .execute("add n/Overflow p/900 e/overflow@x.com t/student s/G1")
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Command(CommandError::MaxPersonCountReached)
    ));
    assert_eq!(
        err.to_string(),
        "The contact list has reached the maximum 2500 person limit"
    );
    assert_eq!(h.logic.store().counter().person_count(), MAX_PERSON_COUNT);
    assert_eq!(h.storage.save_count(), 0);
}

#[test]
fn session_limit_rejects_a_new_session_but_accepts_existing_ones() {
    let sessions = max_sessions();
    let mut h = harness_with(bulk_persons(sessions.len(), &sessions));
    assert_eq!(
        h.logic.store().counter().unique_session_count(),
        MAX_SESSION_COUNT
    );

    // A 251st distinct session is over the limit.
    let err = h
        .logic
        .execute("add n/Overflow p/900 e/overflow@x.com t/student s/D1")
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Command(CommandError::MaxSessionCountReached)
    ));
    assert_eq!(
        err.to_string(),
        "The contact list has reached the maximum 250 session limit"
    );

    // An existing session does not raise the unique count, so it is fine.
    h.logic
        .execute("add n/Fits p/900 e/fits@x.com t/student s/A1")
        .unwrap();
    assert_eq!(
        h.logic.store().counter().unique_session_count(),
        MAX_SESSION_COUNT
    );
}

#[test]
fn deleting_frees_person_capacity() {
    let sessions = vec!["G1".to_string()];
    let mut h = harness_with(bulk_persons(MAX_PERSON_COUNT, &sessions));

    h.logic.execute("delete 1").unwrap();
    h.logic
        .execute("add n/Fits p/900 e/fits@x.com t/student s/G1")
        .unwrap();
    assert_eq!(h.logic.store().counter().person_count(), MAX_PERSON_COUNT);
}

#[test]
fn instructors_do_not_consume_session_capacity() {
    let sessions = max_sessions();
    let mut h = harness_with(bulk_persons(sessions.len(), &sessions));

    h.logic
        .execute("add n/Prof Lee p/900 e/prof@x.com t/instructor")
        .unwrap();
    assert_eq!(
        h.logic.store().counter().unique_session_count(),
        MAX_SESSION_COUNT
    );
}
