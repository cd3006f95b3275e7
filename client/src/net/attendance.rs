//! Gym floor attendance calls.

#[cfg(test)]
#[path = "attendance_test.rs"]
mod attendance_test;

use serde_json::Value;

use super::api::{Api, ApiError};
use super::types::Attendance;

/// `POST /attendance/checkin` — open an attendance record for a member.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn check_in(
    api: &Api,
    member_id: i64,
    notes: Option<&str>,
) -> Result<Attendance, ApiError> {
    api.post("/attendance/checkin", &check_in_query(member_id, notes))
        .await
}

/// `POST /attendance/checkout/{id}` — close an open attendance record.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn check_out(api: &Api, id: i64) -> Result<Attendance, ApiError> {
    api.post(&format!("/attendance/checkout/{id}"), &[]).await
}

/// `GET /attendance/member/{id}` — a member's attendance history.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn member_attendance(api: &Api, member_id: i64) -> Result<Vec<Attendance>, ApiError> {
    api.get(&format!("/attendance/member/{member_id}"), &[])
        .await
}

/// `GET /attendance/date-range` — all attendance inside an optional window.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn by_date_range(
    api: &Api,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<Vec<Attendance>, ApiError> {
    api.get("/attendance/date-range", &date_range_query(start_date, end_date))
        .await
}

/// `GET /attendance/count/{id}` — attendance aggregates for a member.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn attendance_stats(api: &Api, member_id: i64) -> Result<Value, ApiError> {
    api.get(&format!("/attendance/count/{member_id}"), &[])
        .await
}

fn check_in_query(member_id: i64, notes: Option<&str>) -> Vec<(&'static str, String)> {
    let mut query = vec![("memberId", member_id.to_string())];
    if let Some(notes) = notes {
        query.push(("notes", notes.to_owned()));
    }
    query
}

fn date_range_query(
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(start_date) = start_date {
        query.push(("startDate", start_date.to_owned()));
    }
    if let Some(end_date) = end_date {
        query.push(("endDate", end_date.to_owned()));
    }
    query
}
