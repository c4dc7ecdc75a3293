use super::*;
use crate::net::types::ROLE_OWNER;

fn ann() -> OwnerUser {
    OwnerUser {
        name: "Ann".to_owned(),
        email: "a@x.com".to_owned(),
        role: ROLE_OWNER.to_owned(),
    }
}

#[test]
fn empty_store_reads_absent() {
    let store = MemorySession::new();
    assert_eq!(store.get_token(), None);
    assert!(store.get_user().is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn set_auth_round_trips_last_written_pair() {
    let store = MemorySession::new();
    store.set_auth("tok-1", &ann());
    assert_eq!(store.get_token().as_deref(), Some("tok-1"));
    assert_eq!(store.get_user().unwrap(), ann());
    assert!(store.is_authenticated());

    let bob = OwnerUser {
        name: "Bob".to_owned(),
        email: "b@x.com".to_owned(),
        role: ROLE_OWNER.to_owned(),
    };
    store.set_auth("tok-2", &bob);
    assert_eq!(store.get_token().as_deref(), Some("tok-2"));
    assert_eq!(store.get_user().unwrap(), bob);
}

#[test]
fn clear_auth_removes_both_entries() {
    let store = MemorySession::new();
    store.set_auth("tok-1", &ann());
    store.clear_auth();
    assert_eq!(store.get_token(), None);
    assert!(store.get_user().is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn corrupt_stored_user_reads_absent() {
    let store = MemorySession::new();
    store.set_item(USER_KEY, "not json");
    assert!(store.get_user().is_none());
}

#[test]
fn user_is_stored_under_dedicated_key_as_json() {
    let store = MemorySession::new();
    store.set_auth("tok-1", &ann());
    let raw = store.get_item(USER_KEY).unwrap();
    let parsed: OwnerUser = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, ann());
    assert_eq!(store.get_item(TOKEN_KEY).as_deref(), Some("tok-1"));
}

#[test]
fn browser_session_is_inert_natively() {
    let store = BrowserSession;
    store.set_auth("tok-1", &ann());
    assert_eq!(store.get_token(), None);
    assert!(!store.is_authenticated());
}
