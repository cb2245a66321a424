use chrono::NaiveDate;

use crate::api::{ApiClient, ApiError, AttendanceRecord, Department};

pub async fn fetch_logs(
    api: &ApiClient,
    date: Option<NaiveDate>,
    department: Option<i64>,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    api.attendance_logs(date, department).await
}

pub async fn fetch_departments(api: &ApiClient) -> Result<Vec<Department>, ApiError> {
    api.list_departments().await
}
