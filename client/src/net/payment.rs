//! Payment history calls.

use super::api::{Api, ApiError};
use super::types::PaymentRecord;

/// `GET /payment/member/{id}` — a member's payment records.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn payment_records(api: &Api, member_id: i64) -> Result<Vec<PaymentRecord>, ApiError> {
    api.get(&format!("/payment/member/{member_id}"), &[]).await
}

/// `GET /payment/total-consumption/{id}` — lifetime spend for a member.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn total_consumption(api: &Api, member_id: i64) -> Result<f64, ApiError> {
    api.get(&format!("/payment/total-consumption/{member_id}"), &[])
        .await
}
