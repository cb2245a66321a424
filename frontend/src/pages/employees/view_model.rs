use std::rc::Rc;

use leptos::*;

use super::{
    repository::EmployeesRepository,
    utils::{EmployeeDialog, EmployeeFormState},
};
use crate::api::{ApiClient, ApiError, Department, Employee, EmployeeRequest};

#[derive(Debug, Clone)]
pub struct SavePayload {
    pub id: Option<i64>,
    pub request: EmployeeRequest,
}

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub dialog: RwSignal<Option<EmployeeDialog>>,
    pub form: RwSignal<EmployeeFormState>,
    /// Single latest-error string shared by create, update and delete.
    pub error: RwSignal<Option<String>>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub reload: RwSignal<u32>,
    pub employees_resource: Resource<u32, Result<Vec<Employee>, String>>,
    pub departments_resource: Resource<u32, Result<Vec<Department>, String>>,
    pub save_action: Action<SavePayload, Result<Employee, ApiError>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EmployeesRepository::new_with_client(Rc::new(api));

    let dialog = create_rw_signal(None::<EmployeeDialog>);
    let form = create_rw_signal(EmployeeFormState::default());
    let error = create_rw_signal(None::<String>);
    let pending_delete = create_rw_signal(None::<Employee>);
    let reload = create_rw_signal(0u32);

    let repo_for_employees = repository.clone();
    let employees_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_employees.clone();
            async move {
                repo.fetch_employees().await.map_err(|err| {
                    log::error!("Gagal memuat karyawan: {}", err);
                    err.error
                })
            }
        },
    );

    let repo_for_departments = repository.clone();
    let departments_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_departments.clone();
            async move {
                repo.fetch_departments().await.map_err(|err| {
                    log::error!("Gagal memuat department: {}", err);
                    err.error
                })
            }
        },
    );

    let repo_for_save = repository.clone();
    let save_action = create_action(move |payload: &SavePayload| {
        let repo = repo_for_save.clone();
        let payload = payload.clone();
        async move { repo.save(payload.id, payload.request).await }
    });

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |id: &i64| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move { repo.remove(id).await }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => {
                    dialog.set(None);
                    form.update(|state| state.reset());
                    error.set(None);
                    reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    log::error!("Gagal menyimpan karyawan: {}", err);
                    error.set(Some(err.error));
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    log::error!("Gagal menghapus karyawan: {}", err);
                    error.set(Some(err.error));
                }
            }
        }
    });

    EmployeesViewModel {
        dialog,
        form,
        error,
        pending_delete,
        reload,
        employees_resource,
        departments_resource,
        save_action,
        delete_action,
    }
}

impl EmployeesViewModel {
    pub fn open_create(&self) {
        self.form.update(|state| state.reset());
        self.dialog.set(Some(EmployeeDialog::Create));
    }

    pub fn open_edit(&self, employee: &Employee) {
        self.form.set(EmployeeFormState::from_employee(employee));
        self.dialog.set(Some(EmployeeDialog::Edit(employee.clone())));
    }

    pub fn dismiss_dialog(&self) {
        self.dialog.set(None);
        self.form.update(|state| state.reset());
    }

    pub fn submit(&self) {
        match self.form.get_untracked().to_request() {
            Ok(request) => {
                let id = self
                    .dialog
                    .get_untracked()
                    .and_then(|dialog| dialog.target_id());
                self.save_action.dispatch(SavePayload { id, request });
            }
            Err(message) => self.error.set(Some(message)),
        }
    }

    pub fn request_delete(&self, employee: Employee) {
        self.pending_delete.set(Some(employee));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    /// Confirmed in the dialog; only now does a request go out.
    pub fn confirm_delete(&self) {
        if let Some(employee) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(employee.id);
        }
    }
}
