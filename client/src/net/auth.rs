//! Authentication calls.

use super::api::{Api, ApiError};
use super::types::{ApiEnvelope, LoginRequest, LoginResponse};

/// `POST /auth/login` — authenticate with credentials and a role.
///
/// Login is the one enveloped response in the backend surface; callers
/// unwrap `data` themselves and decide what a missing payload means.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn login(
    api: &Api,
    request: &LoginRequest,
) -> Result<ApiEnvelope<LoginResponse>, ApiError> {
    api.post_json("/auth/login", request).await
}
