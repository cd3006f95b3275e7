//! Membership card calls.

use serde::Serialize;

use super::api::{Api, ApiError};
use super::types::{CardType, MemberCard};

/// `GET /card-type/status/1` — card types currently on sale.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn on_sale_card_types(api: &Api) -> Result<Vec<CardType>, ApiError> {
    api.get("/card-type/status/1", &[]).await
}

/// `GET /member-card/member/{id}` — cards held by a member.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn member_cards(api: &Api, member_id: i64) -> Result<Vec<MemberCard>, ApiError> {
    api.get(&format!("/member-card/member/{member_id}"), &[])
        .await
}

/// `POST /member-card/create` — issue a new card to a member.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn create_member_card<B: Serialize + ?Sized>(
    api: &Api,
    draft: &B,
) -> Result<MemberCard, ApiError> {
    api.post_json("/member-card/create", draft).await
}

/// `POST /member-card/pay/{id}` — pay toward a card's balance.
///
/// # Errors
///
/// Transport failures are passed through untranslated.
pub async fn pay_card(api: &Api, card_id: i64, amount: f64) -> Result<bool, ApiError> {
    api.post(
        &format!("/member-card/pay/{card_id}"),
        &[("amount", amount.to_string())],
    )
    .await
}
