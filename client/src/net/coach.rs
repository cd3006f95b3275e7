//! Coach directory and reporting calls.

use serde_json::Value;

use super::api::{Api, ApiError};
use super::types::{Coach, FitnessProgram};

/// `GET /coach/all` — every coach on staff.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn all_coaches(api: &Api) -> Result<Vec<Coach>, ApiError> {
    api.get("/coach/all", &[]).await
}

/// `GET /fitness-program/coach/{id}` — programs taught by a coach.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn coach_programs(api: &Api, coach_id: i64) -> Result<Vec<FitnessProgram>, ApiError> {
    api.get(&format!("/fitness-program/coach/{coach_id}"), &[])
        .await
}

/// `GET /report/coach-work-data/{id}` — workload report for a coach.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn coach_work_data(api: &Api, coach_id: i64) -> Result<Value, ApiError> {
    api.get(&format!("/report/coach-work-data/{coach_id}"), &[])
        .await
}
