use std::rc::Rc;

use leptos::*;

use super::{
    repository::DepartmentsRepository,
    utils::{DepartmentDialog, DepartmentFormState},
};
use crate::api::{ApiClient, ApiError, Department, DepartmentRequest};

#[derive(Debug, Clone)]
pub struct SavePayload {
    pub id: Option<i64>,
    pub request: DepartmentRequest,
}

#[derive(Clone, Copy)]
pub struct DepartmentsViewModel {
    pub dialog: RwSignal<Option<DepartmentDialog>>,
    pub form: RwSignal<DepartmentFormState>,
    pub error: RwSignal<Option<String>>,
    pub pending_delete: RwSignal<Option<Department>>,
    pub reload: RwSignal<u32>,
    pub departments_resource: Resource<u32, Result<Vec<Department>, String>>,
    pub save_action: Action<SavePayload, Result<Department, ApiError>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
}

pub fn use_departments_view_model() -> DepartmentsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = DepartmentsRepository::new_with_client(Rc::new(api));

    let dialog = create_rw_signal(None::<DepartmentDialog>);
    let form = create_rw_signal(DepartmentFormState::default());
    let error = create_rw_signal(None::<String>);
    let pending_delete = create_rw_signal(None::<Department>);
    let reload = create_rw_signal(0u32);

    let repo_for_list = repository.clone();
    let departments_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_list.clone();
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
                    log::error!("Gagal menyimpan departemen: {}", err);
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
                    // Typically: employees still reference the department.
                    log::error!("Gagal menghapus departemen: {}", err);
                    error.set(Some(err.error));
                }
            }
        }
    });

    DepartmentsViewModel {
        dialog,
        form,
        error,
        pending_delete,
        reload,
        departments_resource,
        save_action,
        delete_action,
    }
}

impl DepartmentsViewModel {
    pub fn open_create(&self) {
        self.form.update(|state| state.reset());
        self.dialog.set(Some(DepartmentDialog::Create));
    }

    pub fn open_edit(&self, department: &Department) {
        self.form
            .set(DepartmentFormState::from_department(department));
        self.dialog
            .set(Some(DepartmentDialog::Edit(department.clone())));
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

    pub fn request_delete(&self, department: Department) {
        self.pending_delete.set(Some(department));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(department) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(department.id);
        }
    }
}
