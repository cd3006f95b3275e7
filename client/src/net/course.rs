//! Fitness program and booking calls.

#[cfg(test)]
#[path = "course_test.rs"]
mod course_test;

use serde::Serialize;

use super::api::{Api, ApiError};
use super::types::{Booking, FitnessProgram};

/// `GET /fitness-program/all` — every program on offer.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn all_programs(api: &Api) -> Result<Vec<FitnessProgram>, ApiError> {
    api.get("/fitness-program/all", &[]).await
}

/// `POST /booking/create` — book a program for a member.
///
/// The draft may be any serializable subset of the booking shape; the
/// backend fills in the rest.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn create_booking<B: Serialize + ?Sized>(
    api: &Api,
    draft: &B,
) -> Result<Booking, ApiError> {
    api.post_json("/booking/create", draft).await
}

/// `GET /booking/member/{id}` — a member's bookings.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn member_bookings(api: &Api, member_id: i64) -> Result<Vec<Booking>, ApiError> {
    api.get(&format!("/booking/member/{member_id}"), &[]).await
}

/// `POST /booking/cancel/{id}` — cancel a booking, optionally with a reason.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn cancel_booking(
    api: &Api,
    booking_id: i64,
    reason: Option<&str>,
) -> Result<bool, ApiError> {
    api.post(
        &format!("/booking/cancel/{booking_id}"),
        &cancel_query(reason),
    )
    .await
}

/// `POST /booking/update-status/{id}` — move a booking to a new status.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn update_booking_status(
    api: &Api,
    booking_id: i64,
    status: i32,
) -> Result<bool, ApiError> {
    api.post(
        &format!("/booking/update-status/{booking_id}"),
        &[("status", status.to_string())],
    )
    .await
}

/// `POST /booking/checkin/{id}` — mark a booking as attended.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn booking_check_in(api: &Api, booking_id: i64) -> Result<bool, ApiError> {
    api.post(&format!("/booking/checkin/{booking_id}"), &[]).await
}

/// `GET /booking/coach/{id}` — bookings on a coach's schedule.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn coach_bookings(api: &Api, coach_id: i64) -> Result<Vec<Booking>, ApiError> {
    api.get(&format!("/booking/coach/{coach_id}"), &[]).await
}

/// `POST /fitness-program/add` — create a program.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn add_program<B: Serialize + ?Sized>(
    api: &Api,
    draft: &B,
) -> Result<FitnessProgram, ApiError> {
    api.post_json("/fitness-program/add", draft).await
}

/// `PUT /fitness-program/update` — update a program in place.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn update_program<B: Serialize + ?Sized>(
    api: &Api,
    draft: &B,
) -> Result<FitnessProgram, ApiError> {
    api.put_json("/fitness-program/update", draft).await
}

/// `DELETE /fitness-program/delete/{id}` — remove a program.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn delete_program(api: &Api, program_id: i64) -> Result<bool, ApiError> {
    api.delete(&format!("/fitness-program/delete/{program_id}"))
        .await
}

/// `GET /fitness-program/coach/{id}` — programs taught by a coach.
///
/// Same endpoint as [`super::coach::coach_programs`]; kept here too so
/// course management flows do not reach into the coach module.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn programs_by_coach(api: &Api, coach_id: i64) -> Result<Vec<FitnessProgram>, ApiError> {
    api.get(&format!("/fitness-program/coach/{coach_id}"), &[])
        .await
}

fn cancel_query(reason: Option<&str>) -> Vec<(&'static str, String)> {
    match reason {
        Some(reason) => vec![("cancelReason", reason.to_owned())],
        None => Vec::new(),
    }
}
