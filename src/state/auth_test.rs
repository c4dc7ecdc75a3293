use super::*;
use crate::net::types::ROLE_OWNER;
use crate::util::session::MemorySession;

fn user(name: &str, email: &str) -> OwnerUser {
    OwnerUser {
        name: name.to_owned(),
        email: email.to_owned(),
        role: ROLE_OWNER.to_owned(),
    }
}

#[test]
fn restoring_state_is_not_authenticated() {
    let state = AuthState::restoring();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn restore_from_empty_store_is_unauthenticated() {
    let store = MemorySession::new();
    let state = restore_session(&store);
    assert!(!state.loading);
    assert_eq!(state.user, None);
}

#[test]
fn restore_recovers_stored_profile() {
    let store = MemorySession::new();
    store.set_auth("tok-1", &user("Ann", "a@x.com"));
    let state = restore_session(&store);
    assert!(!state.loading);
    assert_eq!(state.user, Some(user("Ann", "a@x.com")));
}

#[test]
fn login_overwrites_whatever_was_stored_before() {
    let store = MemorySession::new();

    // From an empty store.
    let state = login_session(&store, "tok-1", &user("Ann", "a@x.com"));
    assert_eq!(store.get_token().as_deref(), Some("tok-1"));
    assert_eq!(store.get_user(), Some(user("Ann", "a@x.com")));
    assert!(state.is_authenticated());

    // From a store holding a different user's session.
    let state = login_session(&store, "tok-2", &user("Bob", "b@x.com"));
    assert_eq!(store.get_token().as_deref(), Some("tok-2"));
    assert_eq!(store.get_user(), Some(user("Bob", "b@x.com")));
    assert_eq!(state.user, Some(user("Bob", "b@x.com")));
}

#[test]
fn logout_clears_store_and_state() {
    let store = MemorySession::new();
    login_session(&store, "tok-1", &user("Ann", "a@x.com"));

    let state = logout_session(&store);
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(store.get_token(), None);
    assert!(store.get_user().is_none());
}

#[test]
fn login_then_logout_example_scenario() {
    let store = MemorySession::new();

    let state = login_session(&store, "tok123", &user("Ann", "a@x.com"));
    assert!(state.is_authenticated());
    assert!(store.is_authenticated());
    assert_eq!(store.get_user().unwrap().role, ROLE_OWNER);

    let state = logout_session(&store);
    assert!(!state.is_authenticated());
    assert!(!store.is_authenticated());
    assert!(store.get_user().is_none());
}
