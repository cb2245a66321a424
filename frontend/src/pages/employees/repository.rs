use std::rc::Rc;

use crate::api::{ApiClient, ApiError, Department, Employee, EmployeeRequest};

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    /// The department list feeds the select options and the table's
    /// department column.
    pub async fn fetch_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.client.list_departments().await
    }

    pub async fn save(
        &self,
        id: Option<i64>,
        payload: EmployeeRequest,
    ) -> Result<Employee, ApiError> {
        match id {
            Some(id) => self.client.update_employee(id, &payload).await,
            None => self.client.create_employee(&payload).await,
        }
    }

    pub async fn remove(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_employee(id).await
    }
}
