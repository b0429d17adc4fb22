use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use salonbook_core::models::appointment::{
    Appointment, AppointmentStatus, CreateAppointmentResponse, ListAppointmentsResponse,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::{admin_auth, basic_auth, TestContext, ADMIN_EMAIL};

fn booking(staff_id: Uuid, date: &str, time: &str) -> Value {
    json!({
        "customerId": Uuid::new_v4(),
        "customerName": "Naledi",
        "staffId": staff_id,
        "date": date,
        "time": time,
        "serviceIds": [Uuid::new_v4()],
        "totalPrice": 450.0
    })
}

async fn book(ctx: &TestContext, staff_id: Uuid, date: &str, time: &str) -> Appointment {
    let (name, value) = admin_auth();
    let response = ctx
        .server
        .post("/api/appointments")
        .add_header(name, value)
        .json(&booking(staff_id, date, time))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<CreateAppointmentResponse>().data
}

#[test_log::test(tokio::test)]
async fn test_create_appointment() {
    let ctx = TestContext::new().await;
    let (name, value) = admin_auth();

    let response = ctx
        .server
        .post("/api/appointments")
        .add_header(name, value)
        .json(&booking(Uuid::new_v4(), "2024-06-01", "10:00 am"))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<CreateAppointmentResponse>();
    assert_eq!(body.appointment_id, body.data.id);
    assert_eq!(body.data.status, AppointmentStatus::Booked);
    assert_eq!(body.data.time, "10:00 am");
}

#[tokio::test]
async fn test_create_requires_admin() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/appointments")
        .json(&booking(Uuid::new_v4(), "2024-06-01", "10:00 am"))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = ctx
        .server
        .post("/api/appointments")
        .add_header(axum::http::header::AUTHORIZATION, basic_auth(ADMIN_EMAIL, "wrong password"))
        .json(&booking(Uuid::new_v4(), "2024-06-01", "10:00 am"))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["code"], "AUTHENTICATION_ERROR");
}

#[tokio::test]
async fn test_create_rejects_malformed_slot() {
    let ctx = TestContext::new().await;
    let (name, value) = admin_auth();

    let response = ctx
        .server
        .post("/api/appointments")
        .add_header(name, value)
        .json(&booking(Uuid::new_v4(), "2024-6-1", "10:00 am"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_double_booking_is_conflict() {
    let ctx = TestContext::new().await;
    let staff_id = Uuid::new_v4();
    book(&ctx, staff_id, "2024-06-01", "10:00 am").await;

    let (name, value) = admin_auth();
    let response = ctx
        .server
        .post("/api/appointments")
        .add_header(name, value)
        .json(&booking(staff_id, "2024-06-01", "10:00 am"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "SLOT_TAKEN");
    assert_eq!(body["retryable"], false);
}

#[tokio::test]
async fn test_list_and_get_are_public() {
    let ctx = TestContext::new().await;
    let staff_id = Uuid::new_v4();
    let later = book(&ctx, staff_id, "2024-06-02", "09:00 am").await;
    let earlier = book(&ctx, staff_id, "2024-06-01", "09:00 am").await;

    let response = ctx.server.get("/api/appointments").await;
    response.assert_status_ok();
    let body = response.json::<ListAppointmentsResponse>();
    assert!(body.success);
    let ids: Vec<Uuid> = body.data.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);

    let response = ctx.server.get(&format!("/api/appointments/{}", later.id)).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Appointment>().id, later.id);
}

#[tokio::test]
async fn test_get_unknown_and_malformed_ids() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get(&format!("/api/appointments/{}", Uuid::new_v4())).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["code"], "NOT_FOUND");

    let response = ctx.server.get("/api/appointments/not-a-uuid").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cancel_frees_the_slot() {
    let ctx = TestContext::new().await;
    let staff_id = Uuid::new_v4();
    let first = book(&ctx, staff_id, "2024-06-01", "10:00 am").await;

    let (name, value) = admin_auth();
    let response = ctx
        .server
        .put(&format!("/api/appointments/{}/cancel", first.id))
        .add_header(name, value)
        .json(&json!({ "reason": "Client is ill" }))
        .await;
    response.assert_status_ok();
    let cancelled = response.json::<Appointment>();
    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
    assert_eq!(cancelled.cancel_reason.as_deref(), Some("Client is ill"));

    book(&ctx, staff_id, "2024-06-01", "10:00 am").await;
}

#[tokio::test]
async fn test_cancel_without_body() {
    let ctx = TestContext::new().await;
    let appointment = book(&ctx, Uuid::new_v4(), "2024-06-01", "10:00 am").await;

    let (name, value) = admin_auth();
    let response = ctx
        .server
        .put(&format!("/api/appointments/{}/cancel", appointment.id))
        .add_header(name, value)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Appointment>().cancel_reason, None);
}

#[tokio::test]
async fn test_cancel_with_mistyped_reason_is_rejected() {
    let ctx = TestContext::new().await;
    let appointment = book(&ctx, Uuid::new_v4(), "2024-06-01", "10:00 am").await;

    let (name, value) = admin_auth();
    let response = ctx
        .server
        .put(&format!("/api/appointments/{}/cancel", appointment.id))
        .add_header(name, value)
        .json(&json!({ "reason": 42 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "VALIDATION_ERROR");

    let stored = ctx
        .server
        .get(&format!("/api/appointments/{}", appointment.id))
        .await
        .json::<Appointment>();
    assert_eq!(stored.status, AppointmentStatus::Booked);
    assert_eq!(stored.cancel_reason, None);
}

#[tokio::test]
async fn test_cancel_with_malformed_json_is_rejected() {
    let ctx = TestContext::new().await;
    let appointment = book(&ctx, Uuid::new_v4(), "2024-06-01", "10:00 am").await;

    let (name, value) = admin_auth();
    let response = ctx
        .server
        .put(&format!("/api/appointments/{}/cancel", appointment.id))
        .add_header(name, value)
        .text("{\"reason\": ")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let stored = ctx
        .server
        .get(&format!("/api/appointments/{}", appointment.id))
        .await
        .json::<Appointment>();
    assert_eq!(stored.status, AppointmentStatus::Booked);
}

#[tokio::test]
async fn test_reschedule_into_taken_slot_is_conflict() {
    let ctx = TestContext::new().await;
    let staff_id = Uuid::new_v4();
    book(&ctx, staff_id, "2024-06-01", "10:00 am").await;
    let second = book(&ctx, staff_id, "2024-06-01", "11:00 am").await;

    let (name, value) = admin_auth();
    let response = ctx
        .server
        .put(&format!("/api/appointments/{}/reschedule", second.id))
        .add_header(name, value)
        .json(&json!({ "date": "2024-06-01", "time": "10:00 am" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["code"], "SLOT_TAKEN");

    let response = ctx.server.get(&format!("/api/appointments/{}", second.id)).await;
    let unchanged = response.json::<Appointment>();
    assert_eq!(unchanged.time, "11:00 am");
    assert_eq!(unchanged.status, AppointmentStatus::Booked);
}

#[tokio::test]
async fn test_reschedule_into_own_slot() {
    let ctx = TestContext::new().await;
    let appointment = book(&ctx, Uuid::new_v4(), "2024-06-01", "10:00 am").await;

    let (name, value) = admin_auth();
    let response = ctx
        .server
        .put(&format!("/api/appointments/{}/reschedule", appointment.id))
        .add_header(name, value)
        .json(&json!({ "date": "2024-06-01", "time": "10:00 am" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Appointment>().status, AppointmentStatus::Rescheduled);
}

#[tokio::test]
async fn test_reschedule_requires_date_and_time() {
    let ctx = TestContext::new().await;
    let appointment = book(&ctx, Uuid::new_v4(), "2024-06-01", "10:00 am").await;

    let (name, value) = admin_auth();
    let response = ctx
        .server
        .put(&format!("/api/appointments/{}/reschedule", appointment.id))
        .add_header(name, value)
        .json(&json!({ "date": "2024-06-02" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_appointment() {
    let ctx = TestContext::new().await;
    let appointment = book(&ctx, Uuid::new_v4(), "2024-06-01", "10:00 am").await;
    let path = format!("/api/appointments/{}", appointment.id);

    let (name, value) = admin_auth();
    ctx.server.delete(&path).add_header(name, value).await.assert_status_ok();
    ctx.server.get(&path).await.assert_status(StatusCode::NOT_FOUND);

    let (name, value) = admin_auth();
    ctx.server
        .delete(&path)
        .add_header(name, value)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
