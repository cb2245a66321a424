use std::rc::Rc;

use crate::api::{ApiClient, ApiError, Department, DepartmentRequest};

#[derive(Clone)]
pub struct DepartmentsRepository {
    client: Rc<ApiClient>,
}

impl DepartmentsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.client.list_departments().await
    }

    pub async fn save(
        &self,
        id: Option<i64>,
        payload: DepartmentRequest,
    ) -> Result<Department, ApiError> {
        match id {
            Some(id) => self.client.update_department(id, &payload).await,
            None => self.client.create_department(&payload).await,
        }
    }

    pub async fn remove(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_department(id).await
    }
}
