use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The API wraps every successful payload in a `data` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub department_id: i64,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    pub id: i64,
    pub department_name: String,
    /// Wall-clock `HH:MM`, no timezone attached.
    pub max_clock_in_time: String,
    pub max_clock_out_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeRequest {
    pub employee_id: String,
    pub department_id: i64,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepartmentRequest {
    pub department_name: String,
    pub max_clock_in_time: String,
    pub max_clock_out_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClockRequest {
    pub employee_id: String,
}

/// Session snapshot returned by clock-in and clock-out.
///
/// Compatibility shim: older API deployments spell two of these fields
/// differently (`employee_name` instead of `name`, `isLate` instead of
/// `is_late`). Both spellings are accepted here so call sites only ever
/// see the canonical names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClockSession {
    pub employee_id: String,
    #[serde(default)]
    pub attendance_id: Option<i64>,
    #[serde(default)]
    pub clock_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub clock_out: Option<DateTime<Utc>>,
    #[serde(default, alias = "employee_name")]
    pub name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default, alias = "isLate")]
    pub is_late: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClockResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub data: ClockSession,
}

/// One row of the attendance log. `name` and `department` are
/// denormalized by the server for display; the same field-name shim as
/// `ClockSession` applies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: String,
    #[serde(default)]
    pub clock_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub clock_out: Option<DateTime<Utc>>,
    #[serde(default, alias = "employee_name")]
    pub name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// Error shape the API reports business failures with. Transport and
/// decoding failures are folded into the same type at the client
/// boundary, so callers handle a single error currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
        }
    }

    pub fn decode_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "DECODE_FAILED".to_string(),
        }
    }

    pub fn server(status: u16) -> Self {
        Self {
            error: format!("Server mengembalikan status {}", status),
            code: "SERVER_ERROR".to_string(),
        }
    }
}
