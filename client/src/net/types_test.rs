use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parses_wire_spellings() {
    assert_eq!(Role::parse("member"), Some(Role::Member));
    assert_eq!(Role::parse("coach"), Some(Role::Coach));
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("manager"), None);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&Role::Member).expect("serialize"),
        "\"member\""
    );
    assert_eq!(Role::Admin.to_string(), "admin");
}

// =============================================================
// Login shapes
// =============================================================

#[test]
fn login_response_reads_camel_case_user_id() {
    let login: LoginResponse = serde_json::from_str(
        r#"{"userId":7,"username":"alice","role":"member","realName":"Alice Li","token":"jwt"}"#,
    )
    .expect("parse");

    assert_eq!(login.user_id, Some(7));
    assert_eq!(login.real_name.as_deref(), Some("Alice Li"));
    assert_eq!(login.token.as_deref(), Some("jwt"));
}

#[test]
fn login_response_keeps_unmodeled_fields() {
    let login: LoginResponse = serde_json::from_str(
        r#"{"userId":7,"role":"member","avatarUrl":"https://x/a.png"}"#,
    )
    .expect("parse");

    assert_eq!(
        login.extra.get("avatarUrl").and_then(Value::as_str),
        Some("https://x/a.png")
    );
}

#[test]
fn login_response_tolerates_sparse_bodies() {
    let login: LoginResponse = serde_json::from_str("{}").expect("parse");
    assert!(login.user_id.is_none());
    assert!(login.id.is_none());
}

#[test]
fn login_request_serializes_role_inline() {
    let request = LoginRequest {
        username: "alice".to_owned(),
        password: "secret".to_owned(),
        role: Role::Coach,
    };
    let rendered = serde_json::to_value(&request).expect("serialize");
    assert_eq!(rendered.get("role").and_then(Value::as_str), Some("coach"));
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_with_payload_round_trips() {
    let envelope: ApiEnvelope<i64> =
        serde_json::from_str(r#"{"code":200,"message":"ok","data":5}"#).expect("parse");
    assert_eq!(envelope.code, 200);
    assert_eq!(envelope.data, Some(5));
}

#[test]
fn envelope_without_payload_parses() {
    let envelope: ApiEnvelope<i64> =
        serde_json::from_str(r#"{"code":401,"message":"bad credentials"}"#).expect("parse");
    assert!(envelope.data.is_none());
    assert_eq!(envelope.message, "bad credentials");
}

// =============================================================
// Entity shapes
// =============================================================

#[test]
fn fitness_program_maps_reserved_type_field() {
    let program: FitnessProgram = serde_json::from_str(
        r#"{
            "id": 3,
            "name": "HIIT Basics",
            "description": "45 minute intervals",
            "coachId": 2,
            "price": 29.0,
            "durationMinutes": 45,
            "maxParticipants": 12,
            "difficultyLevel": 1,
            "type": 1,
            "status": 1
        }"#,
    )
    .expect("parse");

    assert_eq!(program.program_type, 1);
    assert_eq!(program.coach_id, 2);
    assert!(program.coach.is_none());

    let rendered = serde_json::to_value(&program).expect("serialize");
    assert_eq!(rendered.get("type").and_then(Value::as_i64), Some(1));
}

#[test]
fn booking_parses_with_minimal_fields() {
    let booking: Booking = serde_json::from_str(
        r#"{
            "id": 11,
            "memberId": 7,
            "bookingType": 1,
            "relatedId": 3,
            "status": 0,
            "createTime": "2024-03-01T10:00:00"
        }"#,
    )
    .expect("parse");

    assert_eq!(booking.member_id, 7);
    assert!(booking.coach_id.is_none());
    assert!(booking.attendance_status.is_none());
}

#[test]
fn member_card_nests_card_type() {
    let card: MemberCard = serde_json::from_str(
        r#"{
            "id": 1,
            "memberId": 7,
            "cardTypeId": 2,
            "cardNumber": "MC-0001",
            "startDate": "2024-01-01",
            "endDate": "2024-04-01",
            "remainingDays": 45,
            "totalAmount": 299.0,
            "paidAmount": 299.0,
            "paymentStatus": 1,
            "cardStatus": 1,
            "cardType": {
                "id": 2,
                "name": "Quarterly",
                "durationDays": 90,
                "price": 299.0,
                "description": "90 day pass",
                "status": 1
            }
        }"#,
    )
    .expect("parse");

    assert_eq!(
        card.card_type.as_ref().map(|t| t.duration_days),
        Some(90)
    );
}

#[test]
fn attendance_tolerates_open_records() {
    let attendance: Attendance = serde_json::from_str(
        r#"{"id":4,"memberId":7,"checkInTime":"2024-03-01T18:00:00"}"#,
    )
    .expect("parse");

    assert!(attendance.check_out_time.is_none());
    assert!(attendance.duration_minutes.is_none());
}
