use super::*;

use crate::storage::MemoryStorage;

fn store_with_storage() -> (SessionStore, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let store = SessionStore::new(storage.clone());
    (store, storage)
}

fn member_login(user_id: i64) -> LoginResponse {
    LoginResponse {
        user_id: Some(user_id),
        id: None,
        username: Some("alice".to_owned()),
        role: Some("member".to_owned()),
        real_name: Some("Alice Li".to_owned()),
        token: None,
        extra: Map::new(),
    }
}

// =============================================================
// establish
// =============================================================

#[test]
fn establish_maps_user_id_to_canonical_id() {
    let (mut store, storage) = store_with_storage();

    let identity = store.establish(&member_login(7)).expect("establish");

    assert_eq!(identity.id, 7);
    assert!(store.is_authenticated());
    assert_eq!(store.current_role().as_deref(), Some("member"));
    assert_eq!(storage.get(ROLE_KEY).as_deref(), Some("member"));
    assert!(storage.get(TOKEN_KEY).is_some());

    let record: Value =
        serde_json::from_str(&storage.get(USER_KEY).expect("user record")).expect("valid json");
    assert_eq!(record.get("id").and_then(Value::as_i64), Some(7));
    assert_eq!(record.get("username").and_then(Value::as_str), Some("alice"));
}

#[test]
fn establish_falls_back_to_id_field() {
    let (mut store, _storage) = store_with_storage();
    let mut login = member_login(0);
    login.user_id = None;
    login.id = Some(42);

    let identity = store.establish(&login).expect("establish");
    assert_eq!(identity.id, 42);
}

#[test]
fn establish_prefers_user_id_over_id() {
    let (mut store, _storage) = store_with_storage();
    let mut login = member_login(7);
    login.id = Some(99);

    let identity = store.establish(&login).expect("establish");
    assert_eq!(identity.id, 7);
}

#[test]
fn establish_without_any_id_fails_and_persists_nothing() {
    let (mut store, storage) = store_with_storage();
    let mut login = member_login(0);
    login.user_id = None;
    login.id = None;

    let error = store.establish(&login).expect_err("must fail");
    assert!(matches!(error, SessionError::MissingUserId));
    assert!(storage.get(USER_KEY).is_none());
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(!store.is_authenticated());
    assert!(!store.session().present());
}

#[test]
fn establish_stores_backend_token_when_present() {
    let (mut store, storage) = store_with_storage();
    let mut login = member_login(7);
    login.token = Some("jwt-abc".to_owned());

    store.establish(&login).expect("establish");
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("jwt-abc"));
}

#[test]
fn establish_without_token_stores_placeholder() {
    let (mut store, storage) = store_with_storage();

    store.establish(&member_login(7)).expect("establish");
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some(PLACEHOLDER_TOKEN));
}

#[test]
fn establish_carries_extra_fields_through() {
    let (mut store, storage) = store_with_storage();
    let mut login = member_login(7);
    login
        .extra
        .insert("avatarUrl".to_owned(), Value::from("https://x/a.png"));

    let identity = store.establish(&login).expect("establish");
    assert_eq!(
        identity.extra.get("avatarUrl").and_then(Value::as_str),
        Some("https://x/a.png")
    );

    let record: Value =
        serde_json::from_str(&storage.get(USER_KEY).expect("user record")).expect("valid json");
    assert_eq!(
        record.get("avatarUrl").and_then(Value::as_str),
        Some("https://x/a.png")
    );
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_without_stored_user_leaves_session_empty() {
    let (mut store, _storage) = store_with_storage();

    assert_eq!(store.restore(), RestoreOutcome::NoSession);
    assert!(!store.session().present());
}

#[test]
fn restore_reconciles_legacy_user_id_record() {
    let (mut store, storage) = store_with_storage();
    storage.set(USER_KEY, r#"{"username":"a","userId":5}"#);
    storage.set(ROLE_KEY, "coach");

    assert_eq!(store.restore(), RestoreOutcome::Restored);

    let identity = store.session().identity.clone().expect("identity");
    assert_eq!(identity.id, 5);
    assert_eq!(store.session().role.as_deref(), Some("coach"));

    // The reconciled record is written back with the canonical id.
    let record: Value =
        serde_json::from_str(&storage.get(USER_KEY).expect("user record")).expect("valid json");
    assert_eq!(record.get("id").and_then(Value::as_i64), Some(5));
}

#[test]
fn restore_with_null_id_uses_user_id() {
    let (mut store, storage) = store_with_storage();
    storage.set(USER_KEY, r#"{"username":"a","id":null,"userId":5}"#);

    assert_eq!(store.restore(), RestoreOutcome::Restored);
    assert_eq!(store.session().identity.as_ref().map(|i| i.id), Some(5));
}

#[test]
fn restore_without_any_id_clears_session() {
    let (mut store, storage) = store_with_storage();
    storage.set(USER_KEY, r#"{"username":"a"}"#);
    storage.set(ROLE_KEY, "member");
    storage.set(TOKEN_KEY, PLACEHOLDER_TOKEN);

    assert_eq!(store.restore(), RestoreOutcome::InvalidCleared);
    assert!(!store.session().present());
    assert!(storage.get(USER_KEY).is_none());
    assert!(storage.get(ROLE_KEY).is_none());
    assert!(storage.get(TOKEN_KEY).is_none());
}

#[test]
fn restore_with_unparseable_record_clears_session() {
    let (mut store, storage) = store_with_storage();
    storage.set(USER_KEY, "definitely not json");

    assert_eq!(store.restore(), RestoreOutcome::CorruptCleared);
    assert!(!store.session().present());
    assert!(storage.get(USER_KEY).is_none());
}

#[test]
fn restore_with_non_object_record_clears_session() {
    let (mut store, storage) = store_with_storage();
    storage.set(USER_KEY, "[1,2,3]");

    assert_eq!(store.restore(), RestoreOutcome::CorruptCleared);
    assert!(!store.session().present());
}

// =============================================================
// clear / teardown / lifecycle
// =============================================================

#[test]
fn clear_removes_all_session_keys() {
    let (mut store, storage) = store_with_storage();
    store.establish(&member_login(7)).expect("establish");

    store.clear();

    assert!(storage.get(USER_KEY).is_none());
    assert!(storage.get(ROLE_KEY).is_none());
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(!store.is_authenticated());
    assert!(store.current_role().is_none());
}

#[test]
fn clear_is_idempotent() {
    let (mut store, _storage) = store_with_storage();
    store.clear();
    store.clear();
    assert!(!store.session().present());
}

#[test]
fn teardown_keeps_durable_storage() {
    let (mut store, storage) = store_with_storage();
    store.establish(&member_login(7)).expect("establish");

    store.teardown();

    assert!(!store.session().present());
    assert!(storage.get(USER_KEY).is_some());

    // A fresh restore picks the session back up.
    assert_eq!(store.restore(), RestoreOutcome::Restored);
    assert!(store.session().present());
}

#[test]
fn establish_clear_restore_round_trip_yields_empty_session() {
    let (mut store, _storage) = store_with_storage();
    store.establish(&member_login(7)).expect("establish");
    store.clear();

    assert_eq!(store.restore(), RestoreOutcome::NoSession);
    assert!(!store.session().present());
    assert!(!store.is_authenticated());
}
