use super::*;

use crate::storage::MemoryStorage;

fn guard_with_storage() -> (RouteGuard, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let guard = RouteGuard::new(storage.clone());
    (guard, storage)
}

#[test]
fn login_path_is_always_allowed() {
    let (guard, _storage) = guard_with_storage();
    assert_eq!(guard.check(LOGIN_PATH), RouteDecision::Allowed);
}

#[test]
fn login_path_is_allowed_even_with_session_present() {
    let (guard, storage) = guard_with_storage();
    storage.set(USER_KEY, r#"{"id":1}"#);
    assert_eq!(guard.check(LOGIN_PATH), RouteDecision::Allowed);
}

#[test]
fn protected_path_without_session_redirects_to_login() {
    let (guard, _storage) = guard_with_storage();
    assert_eq!(
        guard.check("/dashboard"),
        RouteDecision::Redirect(LOGIN_PATH)
    );
}

#[test]
fn protected_path_with_user_record_is_allowed() {
    let (guard, storage) = guard_with_storage();
    storage.set(USER_KEY, r#"{"id":1,"username":"a"}"#);
    assert_eq!(guard.check("/admin/members"), RouteDecision::Allowed);
}

#[test]
fn guard_reads_raw_storage_without_store_restore() {
    // The guard must pass on a raw `user` record even when the session
    // store has never validated it.
    let (guard, storage) = guard_with_storage();
    storage.set(USER_KEY, "not even json");
    assert_eq!(guard.check("/dashboard"), RouteDecision::Allowed);
}

#[test]
fn unknown_path_redirects_to_login() {
    let (guard, storage) = guard_with_storage();
    storage.set(USER_KEY, r#"{"id":1}"#);
    assert_eq!(
        guard.check("/no/such/view"),
        RouteDecision::Redirect(LOGIN_PATH)
    );
}

#[test]
fn logout_locks_protected_routes_again() {
    use crate::net::types::LoginResponse;
    use crate::state::session::SessionStore;

    let (guard, storage) = guard_with_storage();
    let mut store = SessionStore::new(storage.clone());

    let login: LoginResponse =
        serde_json::from_str(r#"{"userId":7,"role":"member"}"#).expect("parse");
    store.establish(&login).expect("establish");
    assert_eq!(guard.check("/dashboard"), RouteDecision::Allowed);

    store.clear();
    assert_eq!(
        guard.check("/dashboard"),
        RouteDecision::Redirect(LOGIN_PATH)
    );
    assert_eq!(guard.check(LOGIN_PATH), RouteDecision::Allowed);
}

#[test]
fn route_tables_cover_all_roles() {
    assert!(MEMBER_ROUTES.contains(&"/member/membership"));
    assert!(COACH_ROUTES.contains(&"/coach/schedule"));
    assert!(ADMIN_ROUTES.contains(&"/admin/card-types"));
}

#[test]
fn public_paths_are_not_protected() {
    for path in PUBLIC_PATHS {
        assert!(!is_protected_route(path));
    }
}
