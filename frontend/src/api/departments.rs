use super::{
    client::ApiClient,
    types::{ApiError, DataEnvelope, Department, DepartmentRequest},
};

impl ApiClient {
    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/departments", base_url))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let envelope: DataEnvelope<Vec<Department>> = Self::decode_json(response).await?;
        Ok(envelope.data)
    }

    pub async fn create_department(
        &self,
        payload: &DepartmentRequest,
    ) -> Result<Department, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/departments", base_url))
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let envelope: DataEnvelope<Department> = Self::decode_json(response).await?;
        Ok(envelope.data)
    }

    pub async fn update_department(
        &self,
        id: i64,
        payload: &DepartmentRequest,
    ) -> Result<Department, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .put(format!("{}/departments/{}", base_url, id))
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let envelope: DataEnvelope<Department> = Self::decode_json(response).await?;
        Ok(envelope.data)
    }

    /// Fails with the server's `{error}` when employees still reference
    /// the department; the UI surfaces that string as-is.
    pub async fn delete_department(&self, id: i64) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{}/departments/{}", base_url, id))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        Self::expect_success(response).await
    }
}
