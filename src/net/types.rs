//! Wire DTOs for the clinic REST API.
//!
//! DESIGN
//! ======
//! Response types default every field the UI can live without, so a sparse
//! server payload still decodes. SQLite-backed fields arrive loosely typed
//! (integer flags, numeric ids) and are normalized at the serde boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::i18n::Language;
use crate::state::session::Role;

/// `POST /login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub phone: &'a str,
}

/// `POST /login` success body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub role: Role,
}

/// `POST /signup` body describing a new actor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    /// Requested role. The server decides what is actually granted.
    pub role: Role,
    pub phone: String,
    pub language: Language,
}

/// `POST /signup` success body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SignupResponse {
    /// Issued health ID. Present only when the server auto-authenticated the new actor.
    #[serde(default)]
    pub health_id: Option<String>,
}

/// `POST /doctor/get_patient` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PatientLookupRequest<'a> {
    pub health_id: &'a str,
}

/// A registered worker as seen by a doctor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Patient {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    /// Preferred language code; kept raw since it is display-only here.
    #[serde(default)]
    pub language: String,
    /// Past records, newest first.
    #[serde(default)]
    pub history: Vec<MedicalRecord>,
}

/// One medical record entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecord {
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub blood_summary: Option<String>,
    #[serde(default)]
    pub injuries: Option<String>,
    #[serde(default)]
    pub allergies: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub next_visit: Option<String>,
    /// Authoring doctor; numeric or string ids are both accepted.
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub doctor_id: Option<String>,
    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `POST /doctor/add_record` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AddRecordRequest {
    pub health_id: String,
    pub blood_group: String,
    pub blood_summary: String,
    pub injuries: String,
    pub allergies: String,
    pub remarks: String,
    /// `YYYY-MM-DD`, serialized as `null` when no visit is scheduled.
    pub next_visit: Option<String>,
}

/// `GET /worker/dashboard` success body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct WorkerDashboard {
    #[serde(default)]
    pub health_id: Option<String>,
    #[serde(default)]
    pub medical_record: Option<MedicalRecord>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

/// A message pushed to a worker, e.g. a scheduled visit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Notification {
    pub message: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_read: bool,
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(false),
        serde_json::Value::Bool(b) => Ok(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(D::Error::custom("expected 0 or 1")),
        },
        _ => Err(D::Error::custom("expected boolean flag")),
    }
}
