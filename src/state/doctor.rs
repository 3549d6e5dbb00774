//! Doctor dashboard state: patient lookup, record draft and history modal.
//!
//! DESIGN
//! ======
//! Transitions are split into `begin_*` (validate input, mark busy) and
//! `apply_*` (fold the server result back in) so the page only has to run the
//! request in between.

#[cfg(test)]
#[path = "doctor_test.rs"]
mod doctor_test;

use crate::net::http::ApiError;
use crate::net::types::{AddRecordRequest, MedicalRecord, Patient};
use crate::util::dates;

/// Blood groups offered by the record form.
pub const BLOOD_GROUPS: &[&str] = &["A+", "A-", "B+", "B-", "O+", "O-", "AB+", "AB-"];

/// Free-text draft fields in form order, by translation key.
pub const TEXT_FIELDS: &[&str] = &["blood_summary", "injuries", "allergies", "remarks"];

/// Editable medical record form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub blood_group: String,
    pub blood_summary: String,
    pub injuries: String,
    pub allergies: String,
    pub remarks: String,
    /// `YYYY-MM-DD` or empty for no scheduled visit.
    pub next_visit: String,
}

impl RecordDraft {
    /// Start from a previous record. The next visit is never carried over.
    #[must_use]
    pub fn prefilled_from(record: &MedicalRecord) -> Self {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            blood_group: field(&record.blood_group),
            blood_summary: field(&record.blood_summary),
            injuries: field(&record.injuries),
            allergies: field(&record.allergies),
            remarks: field(&record.remarks),
            next_visit: String::new(),
        }
    }

    /// Free-text field named by its translation key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "blood_summary" => Some(&self.blood_summary),
            "injuries" => Some(&self.injuries),
            "allergies" => Some(&self.allergies),
            "remarks" => Some(&self.remarks),
            _ => None,
        }
    }

    pub fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "blood_summary" => Some(&mut self.blood_summary),
            "injuries" => Some(&mut self.injuries),
            "allergies" => Some(&mut self.allergies),
            "remarks" => Some(&mut self.remarks),
            _ => None,
        }
    }

    /// Build the request body for `health_id`.
    ///
    /// # Errors
    ///
    /// Returns `"past_date"` when the next visit lies before `today`. When
    /// `today` is unknown the date is passed through for the server to check.
    pub fn to_request(&self, health_id: &str, today: Option<&str>) -> Result<AddRecordRequest, &'static str> {
        let next_visit = Some(self.next_visit.trim()).filter(|d| !d.is_empty());
        if let (Some(date), Some(today)) = (next_visit, today) {
            if dates::is_before(date, today) {
                return Err("past_date");
            }
        }
        Ok(AddRecordRequest {
            health_id: health_id.to_owned(),
            blood_group: self.blood_group.clone(),
            blood_summary: self.blood_summary.clone(),
            injuries: self.injuries.clone(),
            allergies: self.allergies.clone(),
            remarks: self.remarks.clone(),
            next_visit: next_visit.map(str::to_owned),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

/// One-line status message, stored as a translation key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub key: &'static str,
}

impl Flash {
    #[must_use]
    pub const fn success(key: &'static str) -> Self {
        Self { kind: FlashKind::Success, key }
    }

    #[must_use]
    pub const fn error(key: &'static str) -> Self {
        Self { kind: FlashKind::Error, key }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DoctorState {
    /// Raw health ID input.
    pub health_id_input: String,
    /// Health ID the displayed patient was loaded with.
    pub patient_id: Option<String>,
    pub patient: Option<Patient>,
    pub draft: RecordDraft,
    pub busy: bool,
    pub flash: Option<Flash>,
    pub show_history: bool,
}

impl DoctorState {
    /// Validate the lookup input and mark the page busy.
    ///
    /// # Errors
    ///
    /// `"busy"` while another request runs, `"hid_required"` for blank input.
    pub fn begin_lookup(&mut self) -> Result<String, &'static str> {
        if self.busy {
            return Err("busy");
        }
        let health_id = self.health_id_input.trim().to_owned();
        if health_id.is_empty() {
            self.flash = Some(Flash::error("hid_required"));
            return Err("hid_required");
        }
        self.busy = true;
        self.flash = None;
        Ok(health_id)
    }

    /// Fold a lookup result in. Failure clears any previously shown patient.
    pub fn apply_lookup(&mut self, health_id: String, result: Result<Patient, ApiError>) {
        self.busy = false;
        match result {
            Ok(patient) => {
                self.draft = patient.history.first().map(RecordDraft::prefilled_from).unwrap_or_default();
                self.patient = Some(patient);
                self.patient_id = Some(health_id);
            }
            Err(_) => {
                self.patient = None;
                self.patient_id = None;
                self.show_history = false;
                self.flash = Some(Flash::error("patient_not_found"));
            }
        }
    }

    /// Validate the draft against the loaded patient and mark the page busy.
    ///
    /// # Errors
    ///
    /// `"busy"` while another request runs, `"hid_required"` without a loaded
    /// patient, or a draft validation key.
    pub fn begin_save(&mut self, today: Option<&str>) -> Result<AddRecordRequest, &'static str> {
        if self.busy {
            return Err("busy");
        }
        let Some(health_id) = self.patient_id.clone() else {
            return Err("hid_required");
        };
        match self.draft.to_request(&health_id, today) {
            Ok(request) => {
                self.busy = true;
                self.flash = None;
                Ok(request)
            }
            Err(key) => {
                self.flash = Some(Flash::error(key));
                Err(key)
            }
        }
    }

    /// Fold a save result in. Returns the health ID to refresh on success.
    pub fn apply_save(&mut self, result: Result<(), ApiError>) -> Option<String> {
        self.busy = false;
        match result {
            Ok(()) => {
                self.flash = Some(Flash::success("record_added"));
                self.patient_id.clone()
            }
            Err(_) => {
                self.flash = Some(Flash::error("conn_error"));
                None
            }
        }
    }

    /// Replace the patient after a post-save refresh, keeping the flash.
    pub fn apply_refresh(&mut self, health_id: String, result: Result<Patient, ApiError>) {
        if let Ok(patient) = result {
            self.draft = patient.history.first().map(RecordDraft::prefilled_from).unwrap_or_default();
            self.patient = Some(patient);
            self.patient_id = Some(health_id);
        }
    }

    #[must_use]
    pub fn history(&self) -> &[MedicalRecord] {
        self.patient.as_ref().map_or(&[], |p| p.history.as_slice())
    }
}
