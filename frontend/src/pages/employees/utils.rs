use crate::api::{Department, Employee, EmployeeRequest};

/// One form record backs both the create and the edit dialog; it is
/// reset after every successful submission or dialog dismissal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub employee_id: String,
    pub department_id: String,
    pub name: String,
    pub address: String,
}

impl EmployeeFormState {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            department_id: employee.department_id.to_string(),
            name: employee.name.clone(),
            address: employee.address.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> Result<EmployeeRequest, String> {
        let department_id = self
            .department_id
            .trim()
            .parse::<i64>()
            .map_err(|_| "Pilih department terlebih dahulu".to_string())?;
        Ok(EmployeeRequest {
            employee_id: self.employee_id.trim().to_string(),
            department_id,
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeDialog {
    Create,
    Edit(Employee),
}

impl EmployeeDialog {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Create => "Tambah Karyawan Baru",
            Self::Edit(_) => "Edit Karyawan",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Simpan",
            Self::Edit(_) => "Update",
        }
    }

    /// Numeric id the save request is keyed by; absent for create.
    pub fn target_id(&self) -> Option<i64> {
        match self {
            Self::Create => None,
            Self::Edit(employee) => Some(employee.id),
        }
    }
}

/// The table joins the department name from the locally loaded list;
/// the API only stores the numeric reference.
pub fn department_label(departments: &[Department], department_id: i64) -> String {
    departments
        .iter()
        .find(|department| department.id == department_id)
        .map(|department| department.department_name.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fixtures;

    #[test]
    fn form_round_trips_an_employee() {
        let employee = fixtures::employee(5, "E5", "Siti Aminah");
        let state = EmployeeFormState::from_employee(&employee);
        assert_eq!(state.department_id, "1");

        let request = state.to_request().unwrap();
        assert_eq!(request.employee_id, "E5");
        assert_eq!(request.department_id, 1);
        assert_eq!(request.name, "Siti Aminah");
    }

    #[test]
    fn form_rejects_missing_department_selection() {
        let state = EmployeeFormState {
            employee_id: "E1".into(),
            department_id: String::new(),
            name: "Budi".into(),
            address: "Jl. Merdeka 1".into(),
        };
        let err = state.to_request().unwrap_err();
        assert_eq!(err, "Pilih department terlebih dahulu");
    }

    #[test]
    fn form_reset_clears_every_field() {
        let mut state = EmployeeFormState::from_employee(&fixtures::employee(1, "E1", "Budi"));
        state.reset();
        assert_eq!(state, EmployeeFormState::default());
    }

    #[test]
    fn dialog_carries_title_and_target() {
        assert_eq!(EmployeeDialog::Create.title(), "Tambah Karyawan Baru");
        assert_eq!(EmployeeDialog::Create.target_id(), None);

        let edit = EmployeeDialog::Edit(fixtures::employee(9, "E9", "Budi"));
        assert_eq!(edit.title(), "Edit Karyawan");
        assert_eq!(edit.submit_label(), "Update");
        assert_eq!(edit.target_id(), Some(9));
    }

    #[test]
    fn department_label_joins_by_id() {
        let departments = vec![fixtures::engineering()];
        assert_eq!(department_label(&departments, 1), "Engineering");
        assert_eq!(department_label(&departments, 42), "-");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn to_request_trims_whitespace() {
        let state = EmployeeFormState {
            employee_id: " E1 ".into(),
            department_id: "2".into(),
            name: " Budi ".into(),
            address: " Jl. Merdeka 1 ".into(),
        };
        let request = state.to_request().unwrap();
        assert_eq!(request.employee_id, "E1");
        assert_eq!(request.name, "Budi");
    }
}
