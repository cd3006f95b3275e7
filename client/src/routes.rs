//! Route table and the pre-navigation guard.
//!
//! DESIGN
//! ======
//! The guard's presence check reads the `user` storage key directly instead
//! of going through the session store, so it has no dependency on store
//! initialization order and stays synchronous. It does not validate the
//! stored identity's shape; an unusable record is invalidated later when
//! the store's `restore()` runs.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::sync::Arc;

use crate::storage::{SessionStorage, USER_KEY};

/// The only public path; every denied navigation lands here.
pub const LOGIN_PATH: &str = "/login";

/// Paths reachable without a session.
pub const PUBLIC_PATHS: &[&str] = &[LOGIN_PATH];

/// Member-facing views.
pub const MEMBER_ROUTES: &[&str] = &[
    "/dashboard",
    "/my-courses",
    "/member/coaches",
    "/member/courses",
    "/member/membership",
    "/member/payments",
    "/member/attendance",
];

/// Coach-facing views.
pub const COACH_ROUTES: &[&str] = &[
    "/coach/dashboard",
    "/coach/students",
    "/coach/schedule",
    "/coach/courses",
];

/// Admin-facing views.
pub const ADMIN_ROUTES: &[&str] = &[
    "/admin/dashboard",
    "/admin/members",
    "/admin/coaches",
    "/admin/programs",
    "/admin/card-types",
    "/admin/facilities",
    "/admin/attendance",
];

/// Whether `path` is part of the authenticated route tree.
#[must_use]
pub fn is_protected_route(path: &str) -> bool {
    MEMBER_ROUTES.contains(&path) || COACH_ROUTES.contains(&path) || ADMIN_ROUTES.contains(&path)
}

/// Terminal decision for one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Navigation proceeds to the requested path.
    Allowed,
    /// Navigation is sent to the contained path instead.
    Redirect(&'static str),
}

/// Pre-navigation gate consulted before every route transition.
pub struct RouteGuard {
    storage: Arc<dyn SessionStorage>,
}

impl RouteGuard {
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Decide whether navigation to `path` may proceed.
    ///
    /// Public paths are always allowed, regardless of session state.
    /// Protected paths require a persisted `user` record. Paths outside the
    /// route table redirect to the login page, mirroring the route table's
    /// catch-all.
    #[must_use]
    pub fn check(&self, path: &str) -> RouteDecision {
        if PUBLIC_PATHS.contains(&path) {
            return RouteDecision::Allowed;
        }
        if !is_protected_route(path) {
            return RouteDecision::Redirect(LOGIN_PATH);
        }
        if self.storage.get(USER_KEY).is_some() {
            RouteDecision::Allowed
        } else {
            RouteDecision::Redirect(LOGIN_PATH)
        }
    }
}
