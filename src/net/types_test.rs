use super::*;

// =============================================================
// Requests
// =============================================================

#[test]
fn login_request_shape() {
    let body = serde_json::to_value(LoginRequest { phone: "9999999999" }).unwrap();
    assert_eq!(body, serde_json::json!({ "phone": "9999999999" }));
}

#[test]
fn signup_request_uses_lowercase_role_and_language() {
    let body = serde_json::to_value(SignupRequest {
        name: "Ann".to_owned(),
        role: Role::Doctor,
        phone: "555".to_owned(),
        language: Language::En,
    })
    .unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "name": "Ann", "role": "doctor", "phone": "555", "language": "en" })
    );
}

#[test]
fn add_record_request_sends_null_next_visit() {
    let body = serde_json::to_value(AddRecordRequest {
        health_id: "HID-1".to_owned(),
        blood_group: "O+".to_owned(),
        ..AddRecordRequest::default()
    })
    .unwrap();
    assert_eq!(body["next_visit"], serde_json::Value::Null);
    assert_eq!(body["health_id"], "HID-1");
    assert_eq!(body["remarks"], "");
}

// =============================================================
// Responses
// =============================================================

#[test]
fn login_response_parses_role() {
    let resp: LoginResponse = serde_json::from_str(r#"{"role":"worker"}"#).unwrap();
    assert_eq!(resp.role, Role::Worker);
}

#[test]
fn login_response_rejects_unknown_role() {
    assert!(serde_json::from_str::<LoginResponse>(r#"{"role":"nurse"}"#).is_err());
}

#[test]
fn signup_response_health_id_is_optional() {
    let with: SignupResponse = serde_json::from_str(r#"{"health_id":"HID-1"}"#).unwrap();
    assert_eq!(with.health_id.as_deref(), Some("HID-1"));
    let without: SignupResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(without.health_id, None);
}

#[test]
fn patient_parses_history_with_numeric_doctor_id() {
    let patient: Patient = serde_json::from_value(serde_json::json!({
        "name": "Ravi",
        "phone": "555",
        "language": "ta",
        "history": [{
            "blood_group": "B+",
            "remarks": "rest",
            "doctor_id": 7,
            "created_at": "2025-01-02T09:00:00"
        }]
    }))
    .unwrap();
    assert_eq!(patient.history.len(), 1);
    assert_eq!(patient.history[0].doctor_id.as_deref(), Some("7"));
    assert_eq!(patient.history[0].injuries, None);
}

#[test]
fn worker_dashboard_tolerates_notifications_only() {
    let dash: WorkerDashboard = serde_json::from_value(serde_json::json!({
        "notifications": [{ "message": "Visit on 2025-02-01", "is_read": 0 }]
    }))
    .unwrap();
    assert_eq!(dash.health_id, None);
    assert_eq!(dash.medical_record, None);
    assert_eq!(dash.notifications.len(), 1);
    assert!(!dash.notifications[0].is_read);
}

#[test]
fn notification_flag_accepts_bool_and_int() {
    let read: Notification = serde_json::from_str(r#"{"message":"m","is_read":1}"#).unwrap();
    assert!(read.is_read);
    let also_read: Notification = serde_json::from_str(r#"{"message":"m","is_read":true}"#).unwrap();
    assert!(also_read.is_read);
    assert!(serde_json::from_str::<Notification>(r#"{"message":"m","is_read":2}"#).is_err());
}
