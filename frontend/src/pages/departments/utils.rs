use crate::api::{Department, DepartmentRequest};

/// Backs both the create and the edit dialog. The two time fields stay
/// `HH:MM` strings straight from the `type=time` inputs; no ordering
/// check between them happens client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentFormState {
    pub department_name: String,
    pub max_clock_in_time: String,
    pub max_clock_out_time: String,
}

impl DepartmentFormState {
    pub fn from_department(department: &Department) -> Self {
        Self {
            department_name: department.department_name.clone(),
            max_clock_in_time: department.max_clock_in_time.clone(),
            max_clock_out_time: department.max_clock_out_time.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> Result<DepartmentRequest, String> {
        if self.department_name.trim().is_empty() {
            return Err("Nama departemen wajib diisi".to_string());
        }
        Ok(DepartmentRequest {
            department_name: self.department_name.trim().to_string(),
            max_clock_in_time: self.max_clock_in_time.trim().to_string(),
            max_clock_out_time: self.max_clock_out_time.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentDialog {
    Create,
    Edit(Department),
}

impl DepartmentDialog {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Create => "Tambah Departemen Baru",
            Self::Edit(_) => "Edit Departemen",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Simpan",
            Self::Edit(_) => "Update",
        }
    }

    pub fn target_id(&self) -> Option<i64> {
        match self {
            Self::Create => None,
            Self::Edit(department) => Some(department.id),
        }
    }
}

pub const DELETE_DEPARTMENT_WARNING: &str = "Apakah Anda yakin ingin menghapus department ini? \
     Penghapusan tidak dapat dilakukan jika masih ada karyawan yang terdaftar di department ini.";

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fixtures;

    #[test]
    fn form_round_trips_a_department() {
        let state = DepartmentFormState::from_department(&fixtures::engineering());
        assert_eq!(state.max_clock_in_time, "09:00");

        let request = state.to_request().unwrap();
        assert_eq!(request.department_name, "Engineering");
        assert_eq!(request.max_clock_out_time, "18:00");
    }

    #[test]
    fn form_requires_a_name() {
        let state = DepartmentFormState {
            department_name: "  ".into(),
            max_clock_in_time: "09:00".into(),
            max_clock_out_time: "18:00".into(),
        };
        assert!(state.to_request().is_err());
    }

    #[test]
    fn dialog_carries_title_and_target() {
        assert_eq!(DepartmentDialog::Create.target_id(), None);
        let edit = DepartmentDialog::Edit(fixtures::engineering());
        assert_eq!(edit.title(), "Edit Departemen");
        assert_eq!(edit.target_id(), Some(1));
    }
}
