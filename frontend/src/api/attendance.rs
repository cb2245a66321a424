use chrono::NaiveDate;

use super::{
    client::ApiClient,
    types::{ApiError, AttendanceRecord, ClockRequest, ClockResponse, DataEnvelope},
};

impl ApiClient {
    pub async fn clock_in(&self, payload: &ClockRequest) -> Result<ClockResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/attendance/clock-in", base_url))
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        Self::decode_json(response).await
    }

    pub async fn clock_out(&self, payload: &ClockRequest) -> Result<ClockResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .put(format!("{}/attendance/clock-out", base_url))
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        Self::decode_json(response).await
    }

    pub async fn attendance_logs(
        &self,
        date: Option<NaiveDate>,
        department: Option<i64>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut url = format!("{}/attendance/logs", base_url);
        let mut query_params = Vec::new();

        if let Some(date) = date {
            query_params.push(format!("date={}", date.format("%Y-%m-%d")));
        }
        if let Some(department) = department {
            query_params.push(format!("department={}", department));
        }

        if !query_params.is_empty() {
            url.push('?');
            url.push_str(&query_params.join("&"));
        }

        let response = self
            .http_client()
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        // The logs endpoint wraps its page in two `data` envelopes.
        let envelope: DataEnvelope<DataEnvelope<Vec<AttendanceRecord>>> =
            Self::decode_json(response).await?;
        Ok(envelope.data.data)
    }
}
