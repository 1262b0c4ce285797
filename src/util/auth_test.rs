use super::*;
use crate::net::types::User;
use crate::util::storage::{KeyValueStore, MemoryStorage};

fn alice() -> User {
    User {
        id: Some(1),
        email: "a@b.com".to_owned(),
        name: "Alice".to_owned(),
        phone: None,
        token: "tok".to_owned(),
    }
}

#[test]
fn should_not_redirect_before_restore() {
    let mut storage = MemoryStorage::new();
    storage.set("user", &serde_json::to_string(&alice()).unwrap()).unwrap();
    storage.set("token", "tok").unwrap();
    let session = SessionStore::new(storage);
    assert!(!session.is_authenticated());
    assert!(!should_redirect_unauth(&session));
}

#[test]
fn should_not_redirect_restored_returning_user() {
    let mut storage = MemoryStorage::new();
    storage.set("user", &serde_json::to_string(&alice()).unwrap()).unwrap();
    storage.set("token", "tok").unwrap();
    let session = SessionStore::open(storage);
    assert!(!should_redirect_unauth(&session));
}

#[test]
fn should_redirect_unauth_when_user_missing() {
    let session = SessionStore::open(MemoryStorage::new());
    assert!(should_redirect_unauth(&session));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let mut session = SessionStore::open(MemoryStorage::new());
    session.login(alice());
    assert!(!should_redirect_unauth(&session));
}

#[test]
fn should_redirect_again_after_logout() {
    let mut session = SessionStore::open(MemoryStorage::new());
    session.login(alice());
    session.logout();
    assert!(should_redirect_unauth(&session));
}
