use super::*;

#[test]
fn fresh_session_has_no_current_generation() {
    let session = SearchSession::new();
    assert!(!session.is_current(0));
    assert!(!session.is_current(1));
}

#[test]
fn generation_zero_is_never_current() {
    let mut session = SearchSession::new();
    session.begin();
    assert!(!session.is_current(0));
}

#[test]
fn begin_returns_current_generation() {
    let mut session = SearchSession::new();
    let generation = session.begin();
    assert!(session.is_current(generation));
}

#[test]
fn newer_search_supersedes_older_one() {
    let mut session = SearchSession::new();
    let first = session.begin();
    let second = session.begin();
    assert!(!session.is_current(first));
    assert!(session.is_current(second));
}

#[test]
fn generations_are_strictly_increasing() {
    let mut session = SearchSession::new();
    let a = session.begin();
    let b = session.begin();
    let c = session.begin();
    assert!(a < b && b < c);
}
