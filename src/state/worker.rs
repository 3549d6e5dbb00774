//! Worker dashboard view model.

#[cfg(test)]
#[path = "worker_test.rs"]
mod worker_test;

use crate::net::http::ApiError;
use crate::net::types::{MedicalRecord, Notification, WorkerDashboard};
use crate::util::dates;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WorkerView {
    #[default]
    Loading,
    Ready(WorkerDashboard),
    Failed,
}

impl WorkerView {
    #[must_use]
    pub fn from_result(result: Result<WorkerDashboard, ApiError>) -> Self {
        result.map_or(Self::Failed, Self::Ready)
    }
}

/// Report summary rows in display order, as translation key and raw value.
#[must_use]
pub fn summary_rows(record: &MedicalRecord) -> [(&'static str, Option<&str>); 5] {
    [
        ("blood_group", record.blood_group.as_deref()),
        ("blood_summary", record.blood_summary.as_deref()),
        ("injuries", record.injuries.as_deref()),
        ("allergies", record.allergies.as_deref()),
        ("remarks", record.remarks.as_deref()),
    ]
}

/// Non-blank field value, or `None` so the caller can render the nil label.
#[must_use]
pub fn field_value(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Date the record was last written, without the time part.
#[must_use]
pub fn last_updated(record: &MedicalRecord) -> Option<&str> {
    record.created_at.as_deref().map(dates::date_part).filter(|d| !d.is_empty())
}

/// Unread notifications first; order within each group is kept.
#[must_use]
pub fn ordered_notifications(notifications: &[Notification]) -> Vec<&Notification> {
    let mut ordered: Vec<&Notification> = notifications.iter().collect();
    ordered.sort_by_key(|n| n.is_read);
    ordered
}
