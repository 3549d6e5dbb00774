use super::*;

// =============================================================
// Helpers
// =============================================================

fn record(blood_group: &str, remarks: &str) -> MedicalRecord {
    MedicalRecord {
        blood_group: Some(blood_group.to_owned()),
        remarks: Some(remarks.to_owned()),
        next_visit: Some("2025-06-01".to_owned()),
        ..MedicalRecord::default()
    }
}

fn patient(history: Vec<MedicalRecord>) -> Patient {
    Patient {
        name: "Ravi".to_owned(),
        phone: "555".to_owned(),
        language: "ta".to_owned(),
        history,
    }
}

fn loaded(history: Vec<MedicalRecord>) -> DoctorState {
    let mut state = DoctorState { health_id_input: "HID-1".to_owned(), ..DoctorState::default() };
    let id = state.begin_lookup().unwrap();
    state.apply_lookup(id, Ok(patient(history)));
    state
}

// =============================================================
// Draft
// =============================================================

#[test]
fn prefill_copies_fields_but_resets_next_visit() {
    let draft = RecordDraft::prefilled_from(&record("AB-", "follow up"));
    assert_eq!(draft.blood_group, "AB-");
    assert_eq!(draft.remarks, "follow up");
    assert_eq!(draft.injuries, "");
    assert_eq!(draft.next_visit, "");
}

#[test]
fn empty_next_visit_becomes_none() {
    let draft = RecordDraft { next_visit: "  ".to_owned(), ..RecordDraft::default() };
    let request = draft.to_request("HID-1", Some("2025-01-01")).unwrap();
    assert_eq!(request.next_visit, None);
    assert_eq!(request.health_id, "HID-1");
}

#[test]
fn past_next_visit_is_rejected() {
    let draft = RecordDraft { next_visit: "2024-12-31".to_owned(), ..RecordDraft::default() };
    assert_eq!(draft.to_request("HID-1", Some("2025-01-01")), Err("past_date"));
}

#[test]
fn today_next_visit_is_accepted() {
    let draft = RecordDraft { next_visit: "2025-01-01".to_owned(), ..RecordDraft::default() };
    let request = draft.to_request("HID-1", Some("2025-01-01")).unwrap();
    assert_eq!(request.next_visit.as_deref(), Some("2025-01-01"));
}

#[test]
fn unknown_today_defers_date_check() {
    let draft = RecordDraft { next_visit: "1999-01-01".to_owned(), ..RecordDraft::default() };
    assert!(draft.to_request("HID-1", None).is_ok());
}

#[test]
fn text_fields_are_addressable_by_key() {
    let mut draft = RecordDraft::default();
    for key in TEXT_FIELDS {
        *draft.field_mut(key).unwrap() = format!("{key}!");
    }
    assert_eq!(draft.field("injuries"), Some("injuries!"));
    assert_eq!(draft.remarks, "remarks!");
    assert_eq!(draft.field("blood_group"), None);
    assert!(draft.field_mut("next_visit").is_none());
}

#[test]
fn blood_groups_cover_all_eight() {
    assert_eq!(BLOOD_GROUPS.len(), 8);
    assert!(BLOOD_GROUPS.contains(&"O-"));
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn blank_lookup_is_rejected_without_busy() {
    let mut state = DoctorState { health_id_input: "   ".to_owned(), ..DoctorState::default() };
    assert_eq!(state.begin_lookup(), Err("hid_required"));
    assert!(!state.busy);
    assert_eq!(state.flash, Some(Flash::error("hid_required")));
}

#[test]
fn lookup_trims_input_and_marks_busy() {
    let mut state = DoctorState { health_id_input: " HID-9 ".to_owned(), ..DoctorState::default() };
    assert_eq!(state.begin_lookup(), Ok("HID-9".to_owned()));
    assert!(state.busy);
    assert_eq!(state.begin_lookup(), Err("busy"));
}

#[test]
fn successful_lookup_prefills_from_latest_record() {
    let state = loaded(vec![record("O+", "latest"), record("A-", "older")]);
    assert!(!state.busy);
    assert_eq!(state.patient_id.as_deref(), Some("HID-1"));
    assert_eq!(state.draft.blood_group, "O+");
    assert_eq!(state.draft.remarks, "latest");
    assert_eq!(state.history().len(), 2);
}

#[test]
fn lookup_without_history_starts_blank_draft() {
    let mut state = loaded(vec![record("O+", "x")]);
    state.health_id_input = "HID-2".to_owned();
    let id = state.begin_lookup().unwrap();
    state.apply_lookup(id, Ok(patient(Vec::new())));
    assert_eq!(state.draft, RecordDraft::default());
}

#[test]
fn failed_lookup_clears_previous_patient() {
    let mut state = loaded(vec![record("O+", "x")]);
    state.show_history = true;
    state.health_id_input = "HID-404".to_owned();
    let id = state.begin_lookup().unwrap();
    state.apply_lookup(id, Err(ApiError::Status(404)));
    assert_eq!(state.patient, None);
    assert_eq!(state.patient_id, None);
    assert!(!state.show_history);
    assert_eq!(state.flash, Some(Flash::error("patient_not_found")));
    assert!(state.history().is_empty());
}

// =============================================================
// Save
// =============================================================

#[test]
fn save_requires_loaded_patient() {
    let mut state = DoctorState::default();
    assert_eq!(state.begin_save(None), Err("hid_required"));
    assert!(!state.busy);
}

#[test]
fn save_targets_looked_up_patient_not_edited_input() {
    let mut state = loaded(Vec::new());
    state.health_id_input = "HID-OTHER".to_owned();
    let request = state.begin_save(None).unwrap();
    assert_eq!(request.health_id, "HID-1");
    assert!(state.busy);
}

#[test]
fn save_with_past_date_flashes_error() {
    let mut state = loaded(Vec::new());
    state.draft.next_visit = "2020-01-01".to_owned();
    assert_eq!(state.begin_save(Some("2025-01-01")), Err("past_date"));
    assert_eq!(state.flash, Some(Flash::error("past_date")));
    assert!(!state.busy);
}

#[test]
fn successful_save_flashes_and_requests_refresh() {
    let mut state = loaded(Vec::new());
    state.begin_save(None).unwrap();
    assert_eq!(state.apply_save(Ok(())), Some("HID-1".to_owned()));
    assert_eq!(state.flash, Some(Flash::success("record_added")));
    assert!(!state.busy);
}

#[test]
fn failed_save_shows_connection_error() {
    let mut state = loaded(Vec::new());
    state.begin_save(None).unwrap();
    assert_eq!(state.apply_save(Err(ApiError::Network("offline".to_owned()))), None);
    assert_eq!(state.flash, Some(Flash::error("conn_error")));
}

#[test]
fn refresh_keeps_success_flash() {
    let mut state = loaded(Vec::new());
    state.begin_save(None).unwrap();
    let id = state.apply_save(Ok(())).unwrap();
    state.apply_refresh(id, Ok(patient(vec![record("B+", "new")])));
    assert_eq!(state.flash, Some(Flash::success("record_added")));
    assert_eq!(state.history().len(), 1);
    assert_eq!(state.draft.blood_group, "B+");
}
