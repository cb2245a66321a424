use super::{
    client::ApiClient,
    types::{ApiError, DataEnvelope, Employee, EmployeeRequest},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/employees", base_url))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let envelope: DataEnvelope<Vec<Employee>> = Self::decode_json(response).await?;
        Ok(envelope.data)
    }

    pub async fn create_employee(&self, payload: &EmployeeRequest) -> Result<Employee, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/employees", base_url))
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let envelope: DataEnvelope<Employee> = Self::decode_json(response).await?;
        Ok(envelope.data)
    }

    pub async fn update_employee(
        &self,
        id: i64,
        payload: &EmployeeRequest,
    ) -> Result<Employee, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .put(format!("{}/employees/{}", base_url, id))
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let envelope: DataEnvelope<Employee> = Self::decode_json(response).await?;
        Ok(envelope.data)
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{}/employees/{}", base_url, id))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        Self::expect_success(response).await
    }
}
