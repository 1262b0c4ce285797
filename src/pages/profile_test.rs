use super::*;
use crate::net::types::User;
use crate::util::storage::MemoryStorage;

fn signed_in() -> SessionStore<MemoryStorage> {
    let mut session = SessionStore::new(MemoryStorage::new());
    session.login(User {
        id: Some(7),
        email: "lan@example.com".to_owned(),
        name: "Lan".to_owned(),
        phone: None,
        token: "tok123".to_owned(),
    });
    session
}

fn account(full_name: &str, phone: Option<&str>) -> AccountResponse {
    AccountResponse {
        id: 7,
        email: "lan@example.com".to_owned(),
        full_name: full_name.to_owned(),
        phone: phone.map(str::to_owned),
        created_at: None,
    }
}

// =============================================================
// validate_profile_input
// =============================================================

#[test]
fn validate_profile_input_normalizes_both_fields() {
    assert_eq!(
        validate_profile_input(" Lan Nguyen ", " 0912345678 "),
        Ok(("Lan Nguyen".to_owned(), Some("0912345678".to_owned())))
    );
}

#[test]
fn validate_profile_input_allows_clearing_phone() {
    assert_eq!(validate_profile_input("Lan Nguyen", ""), Ok(("Lan Nguyen".to_owned(), None)));
}

#[test]
fn validate_profile_input_rejects_short_name() {
    assert_eq!(validate_profile_input("L", "0912345678"), Err("Name must be at least 3 characters."));
}

#[test]
fn validate_profile_input_rejects_bad_phone() {
    assert_eq!(validate_profile_input("Lan Nguyen", "0912"), Err("Phone must be 10 digits starting with 0."));
}

// =============================================================
// apply_account_refresh
// =============================================================

#[test]
fn account_refresh_updates_name_and_phone() {
    let mut session = signed_in();
    apply_account_refresh(&mut session, Ok(account("Lan Nguyen", Some("0912345678"))));
    let user = session.user().unwrap();
    assert_eq!(user.name, "Lan Nguyen");
    assert_eq!(user.phone.as_deref(), Some("0912345678"));
    assert_eq!(session.token(), Some("tok123"));
}

#[test]
fn account_refresh_rejected_token_logs_out() {
    let mut session = signed_in();
    let rejected = ApiError::Status { status: 401, detail: "Invalid token".to_owned() };
    apply_account_refresh(&mut session, Err(rejected));
    assert!(!session.is_authenticated());
    assert!(session.storage().is_empty());
}

#[test]
fn account_refresh_other_failures_keep_session() {
    let mut session = signed_in();
    apply_account_refresh(&mut session, Err(ApiError::Network("offline".to_owned())));
    apply_account_refresh(&mut session, Err(ApiError::Status { status: 500, detail: "boom".to_owned() }));
    assert!(session.is_authenticated());
    assert_eq!(session.user().unwrap().name, "Lan");
}

#[test]
fn account_refresh_without_session_stays_signed_out() {
    let mut session = SessionStore::new(MemoryStorage::new());
    apply_account_refresh(&mut session, Ok(account("Lan Nguyen", None)));
    assert!(!session.is_authenticated());
    assert!(session.storage().is_empty());
}
