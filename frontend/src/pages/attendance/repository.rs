use crate::api::{ApiClient, ApiError, ClockRequest, ClockResponse};

pub async fn submit_clock_in(
    api: &ApiClient,
    employee_id: String,
) -> Result<ClockResponse, ApiError> {
    api.clock_in(&ClockRequest { employee_id }).await
}

pub async fn submit_clock_out(
    api: &ApiClient,
    employee_id: String,
) -> Result<ClockResponse, ApiError> {
    api.clock_out(&ClockRequest { employee_id }).await
}
