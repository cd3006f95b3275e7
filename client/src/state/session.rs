//! Session state: the single source of truth for "who is logged in".
//!
//! DESIGN
//! ======
//! The store is an explicitly constructed value handed to whoever needs it
//! (the application shell, guard wiring); there is no ambient global. It is
//! the only writer of the session storage keys. Recovery paths degrade to a
//! logged-out session instead of surfacing errors: a stored identity we
//! cannot trust must never grant access.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::net::types::LoginResponse;
use crate::storage::{ROLE_KEY, SessionStorage, TOKEN_KEY, USER_KEY};

/// Stored under the token key when the login response carries no token of
/// its own. Presence of any token value marks the session as logged in.
pub const PLACEHOLDER_TOKEN: &str = "session-active";

/// Errors surfaced by [`SessionStore::establish`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The login response carried neither `userId` nor `id`.
    #[error("login response has no resolvable user id")]
    MissingUserId,
    /// The identity record could not be serialized for persistence.
    #[error("failed to serialize identity: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Canonical representation of the logged-in user.
///
/// The backend login DTO names the numeric id `userId` while this client and
/// its persisted records use `id`; the store rewrites the field at establish
/// and restore time so `id` is always resolvable here. Everything else from
/// the login response is carried through `extra` untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// In-memory session: the identity plus the role read from storage.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub identity: Option<Identity>,
    pub role: Option<String>,
}

impl Session {
    /// Whether a usable identity is present.
    #[must_use]
    pub fn present(&self) -> bool {
        self.identity.is_some()
    }
}

/// Outcome of [`SessionStore::restore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// A persisted identity was loaded, after any legacy reconciliation.
    Restored,
    /// No persisted session existed.
    NoSession,
    /// The persisted record was unparseable; the session was cleared.
    CorruptCleared,
    /// The persisted record had no resolvable id; the session was cleared.
    InvalidCleared,
}

/// Owner of the in-memory session and the persisted session keys.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    session: Session,
}

impl SessionStore {
    /// Create an empty store over `storage`.
    ///
    /// Call [`SessionStore::restore`] to pick up a session persisted by a
    /// previous run.
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            session: Session::default(),
        }
    }

    /// The current in-memory session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Establish a session from a successful login response.
    ///
    /// The canonical `id` is taken from the response's `userId`, falling
    /// back to `id`. The full record, canonical id injected, is persisted
    /// under the `user` key, the role under `role`, and the session token
    /// under `token` — the backend's token when it sent one, a fixed
    /// placeholder otherwise.
    ///
    /// # Errors
    ///
    /// [`SessionError::MissingUserId`] when neither `userId` nor `id`
    /// resolves. Nothing is persisted in that case.
    pub fn establish(&mut self, login: &LoginResponse) -> Result<Identity, SessionError> {
        let id = login.user_id.or(login.id).ok_or(SessionError::MissingUserId)?;

        let mut record = serde_json::to_value(login)?;
        if let Some(map) = record.as_object_mut() {
            map.insert("id".to_owned(), Value::from(id));
        }
        let identity: Identity = serde_json::from_value(record.clone())?;

        self.storage.set(USER_KEY, &record.to_string());
        if let Some(role) = &login.role {
            self.storage.set(ROLE_KEY, role);
        }
        let token = login.token.as_deref().unwrap_or(PLACEHOLDER_TOKEN);
        self.storage.set(TOKEN_KEY, token);

        self.session.identity = Some(identity.clone());
        self.session.role = login.role.clone();
        Ok(identity)
    }

    /// Restore a session persisted by a previous run.
    ///
    /// Never fails: unparseable or id-less records are logged and cleared.
    /// Records persisted by older builds with only a `userId` field are
    /// migrated to the canonical `id` and written back.
    pub fn restore(&mut self) -> RestoreOutcome {
        let Some(raw) = self.storage.get(USER_KEY) else {
            return RestoreOutcome::NoSession;
        };

        let mut record = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                tracing::warn!("stored identity is not a JSON object, clearing session");
                self.clear();
                return RestoreOutcome::CorruptCleared;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to parse stored identity, clearing session");
                self.clear();
                return RestoreOutcome::CorruptCleared;
            }
        };

        // Legacy records carry the backend's `userId` spelling only.
        if record.get("id").is_none_or(Value::is_null) {
            if let Some(user_id) = record.get("userId").filter(|v| !v.is_null()).cloned() {
                record.insert("id".to_owned(), user_id);
                self.storage
                    .set(USER_KEY, &Value::Object(record.clone()).to_string());
            }
        }

        match serde_json::from_value::<Identity>(Value::Object(record)) {
            Ok(identity) => {
                self.session.role = self.storage.get(ROLE_KEY);
                self.session.identity = Some(identity);
                RestoreOutcome::Restored
            }
            Err(error) => {
                tracing::warn!(%error, "stored identity has no resolvable id, clearing session");
                self.clear();
                RestoreOutcome::InvalidCleared
            }
        }
    }

    /// Log out: empty the in-memory session and delete every persisted key.
    ///
    /// Idempotent; clearing an already-empty session only repeats the
    /// removes.
    pub fn clear(&mut self) {
        self.session = Session::default();
        self.storage.remove(USER_KEY);
        self.storage.remove(ROLE_KEY);
        self.storage.remove(TOKEN_KEY);
    }

    /// Drop in-memory state without touching durable storage.
    ///
    /// A persisted session survives for the next process start to
    /// [`SessionStore::restore`].
    pub fn teardown(&mut self) {
        self.session = Session::default();
    }

    /// Whether a session token is currently persisted.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.storage
            .get(TOKEN_KEY)
            .is_some_and(|token| !token.is_empty())
    }

    /// Role of the current session, from memory or the persisted role key.
    #[must_use]
    pub fn current_role(&self) -> Option<String> {
        self.session
            .role
            .clone()
            .or_else(|| self.storage.get(ROLE_KEY))
    }
}
