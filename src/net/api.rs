//! Typed calls for each clinic API endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authentication relies on the server's session cookie, which the browser
//! attaches to every call; no token is ever placed in a body or header.
//! [`AuthApi`] is the seam the session manager is built against so tests can
//! substitute a scripted server.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::IgnoredAny;

use super::http::{ApiClient, ApiError};
use super::types::{
    AddRecordRequest, LoginRequest, LoginResponse, Patient, PatientLookupRequest, SignupRequest, SignupResponse,
    WorkerDashboard,
};

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const GET_PATIENT_PATH: &str = "/doctor/get_patient";
pub const ADD_RECORD_PATH: &str = "/doctor/add_record";
pub const WORKER_DASHBOARD_PATH: &str = "/worker/dashboard";

/// Authentication endpoints consumed by the session manager.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchange a phone number for a server session and its role.
    async fn login(&self, phone: &str) -> Result<LoginResponse, ApiError>;

    /// Register a new actor.
    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, ApiError>;
}

/// The clinic server reached over HTTP.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClinicApi {
    client: ApiClient,
}

impl ClinicApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch a patient and their record history by health ID.
    ///
    /// # Errors
    ///
    /// Fails for unknown IDs, a non-doctor session, or transport errors; the
    /// server does not let the caller tell these apart.
    pub async fn get_patient(&self, health_id: &str) -> Result<Patient, ApiError> {
        self.client
            .post_json(GET_PATIENT_PATH, &PatientLookupRequest { health_id })
            .await
    }

    /// Append a medical record to a patient.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the server rejects the record or is unreachable.
    pub async fn add_record(&self, record: &AddRecordRequest) -> Result<(), ApiError> {
        let _: IgnoredAny = self.client.post_json(ADD_RECORD_PATH, record).await?;
        Ok(())
    }

    /// Load the signed-in worker's own record and notifications.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the session is not a worker session or the
    /// server is unreachable.
    pub async fn worker_dashboard(&self) -> Result<WorkerDashboard, ApiError> {
        self.client.get_json(WORKER_DASHBOARD_PATH).await
    }
}

impl AuthApi for ClinicApi {
    async fn login(&self, phone: &str) -> Result<LoginResponse, ApiError> {
        self.client.post_json(LOGIN_PATH, &LoginRequest { phone }).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, ApiError> {
        self.client.post_json(SIGNUP_PATH, request).await
    }
}
