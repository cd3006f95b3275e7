//! Shared DTOs for the backend REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON shapes field for field, camelCase
//! wire names included, so resource clients stay schema-driven. Optional
//! backend fields are `Option` here; collection endpoints return the same
//! shapes in `Vec`s.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Account role selected at login and attached to every session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Coach,
    Admin,
}

impl Role {
    /// Parse a role from its wire spelling.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "member" => Some(Self::Member),
            "coach" => Some(Self::Coach),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// The wire spelling of this role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Coach => "coach",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrapper the backend puts around the login response body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i32,
    pub message: String,
    /// Absent when the request was rejected.
    #[serde(default)]
    pub data: Option<T>,
}

/// Credentials sent to `POST /auth/login`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Body of a successful login, as named by the backend DTO.
///
/// The numeric id arrives as `userId`; the session store rewrites it into
/// the canonical `id` field when the session is established. Fields this
/// client does not model are carried through `extra` untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Some backend builds already send `id`; kept as an establish fallback.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A gym member account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub username: String,
    /// Only sent on registration or password update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub real_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// 0 female, 1 male.
    #[serde(default)]
    pub gender: Option<i32>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// 0 disabled, 1 active.
    pub status: i32,
    #[serde(default)]
    pub active_card_count: Option<i64>,
    #[serde(default)]
    pub create_time: Option<String>,
}

/// A purchasable membership card type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardType {
    pub id: i64,
    pub name: String,
    pub duration_days: i32,
    pub price: f64,
    pub description: String,
    /// 0 off sale, 1 on sale.
    pub status: i32,
}

/// A coach account and profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coach {
    pub id: i64,
    pub username: String,
    /// Only required when creating the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub real_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub certificate: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub experience_years: Option<i32>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    /// 0 female, 1 male.
    #[serde(default)]
    pub gender: Option<i32>,
    /// 0 departed, 1 employed.
    pub status: i32,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A bookable fitness program.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessProgram {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub coach_id: i64,
    #[serde(default)]
    pub coach: Option<Coach>,
    pub price: f64,
    pub duration_minutes: i32,
    pub max_participants: i32,
    /// 1 beginner, 2 intermediate, 3 advanced.
    pub difficulty_level: i32,
    /// 1 group, 2 private, 3 free.
    #[serde(rename = "type")]
    pub program_type: i32,
    /// 0 off shelf, 1 on shelf.
    pub status: i32,
}

/// A member's booking of a program, private session, or venue slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub member_id: i64,
    /// 1 group class, 2 private session.
    pub booking_type: i32,
    /// The booked entity, e.g. a program id.
    pub related_id: i64,
    #[serde(default)]
    pub coach_id: Option<i64>,
    #[serde(default)]
    pub venue_id: Option<i64>,
    /// 0 pending, 1 confirmed, 2 cancelled, 3 completed.
    pub status: i32,
    pub create_time: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub program_title: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub participants_count: Option<i32>,
    #[serde(default)]
    pub booking_status: Option<i32>,
    /// 0 not checked in, 1 checked in, 2 late, 3 missed.
    #[serde(default)]
    pub attendance_status: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub fitness_program: Option<FitnessProgram>,
}

/// A membership card held by a member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCard {
    pub id: i64,
    pub member_id: i64,
    pub card_type_id: i64,
    pub card_number: String,
    pub start_date: String,
    pub end_date: String,
    pub remaining_days: i32,
    pub total_amount: f64,
    pub paid_amount: f64,
    /// 0 unpaid, 1 paid.
    pub payment_status: i32,
    /// 1 valid.
    pub card_status: i32,
    #[serde(default)]
    pub card_type: Option<CardType>,
}

/// A bookable venue inside the club.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: i64,
    pub name: String,
    /// 1 classroom, 2 private, 3 free weights, 4 pool, 5 yoga.
    #[serde(rename = "type")]
    pub venue_type: i32,
    pub area: f64,
    pub capacity: i32,
    /// 0 closed, 1 open, 2 maintenance.
    pub status: i32,
    #[serde(default)]
    pub description: Option<String>,
}

/// A piece of gym equipment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: String,
    pub brand: String,
    pub model: String,
    pub purchase_date: String,
    pub purchase_price: f64,
    #[serde(default)]
    pub usage_hours: Option<f64>,
    /// 0 scrapped, 1 normal, 2 repair, 3 maintenance.
    pub status: i32,
    pub location: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A gym floor check-in/check-out record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: i64,
    pub member_id: i64,
    #[serde(default)]
    pub member: Option<Member>,
    pub check_in_time: String,
    #[serde(default)]
    pub check_out_time: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub booking_id: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
}

/// A payment made by a member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: i64,
    pub member_id: i64,
    pub order_number: String,
    /// 1 card, 2 course, 3 coach.
    pub payment_type: i32,
    #[serde(default)]
    pub related_id: Option<i64>,
    pub amount: f64,
    /// 1 wechat, 2 alipay, 3 cash, 4 bank.
    pub payment_method: i32,
    /// 0 pending, 1 success, 2 fail, 3 refunded.
    pub payment_status: i32,
    #[serde(default)]
    pub pay_time: Option<String>,
    pub create_time: String,
}

/// Revenue aggregates for the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueTrend {
    #[serde(default)]
    pub monthly_revenue: Option<Map<String, Value>>,
    #[serde(default)]
    pub revenue_by_source: Option<Map<String, Value>>,
    #[serde(default)]
    pub total_revenue: Option<f64>,
}

/// Membership aggregates for the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    #[serde(default)]
    pub total_members: Option<i64>,
    #[serde(default)]
    pub new_members_this_month: Option<i64>,
    #[serde(default)]
    pub active_members: Option<i64>,
    #[serde(default)]
    pub inactive_members: Option<i64>,
    #[serde(default)]
    pub age_distribution: Option<Map<String, Value>>,
    #[serde(default)]
    pub gender_distribution: Option<Map<String, Value>>,
}

/// Attendance aggregates for the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStats {
    #[serde(default)]
    pub avg_daily_checkins: Option<f64>,
    #[serde(default)]
    pub peak_hours: Option<String>,
}

/// A course ranked by booking volume.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularCourse {
    pub course_name: String,
    pub booking_count: i64,
}
