use leptos::*;

use super::{
    components::{form::DepartmentFormDialog, list::DepartmentTable},
    utils::DELETE_DEPARTMENT_WARNING,
    view_model::use_departments_view_model,
};
use crate::components::{
    confirm_dialog::ConfirmDialog,
    layout::{ErrorMessage, Layout},
};

#[component]
pub fn DepartmentsPage() -> impl IntoView {
    view! { <Layout><DepartmentsPanel /></Layout> }
}

#[component]
pub fn DepartmentsPanel() -> impl IntoView {
    let vm = use_departments_view_model();

    let departments = Signal::derive(move || {
        vm.departments_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let load_error =
        Signal::derive(move || vm.departments_resource.get().and_then(|result| result.err()));
    let loading = vm.departments_resource.loading();
    let saving: Signal<bool> = vm.save_action.pending().into();

    let dialog_open = Signal::derive(move || vm.dialog.get().is_some());
    let dialog_title = Signal::derive(move || {
        vm.dialog
            .get()
            .map(|dialog| dialog.title().to_string())
            .unwrap_or_default()
    });
    let dialog_submit_label = Signal::derive(move || {
        vm.dialog
            .get()
            .map(|dialog| dialog.submit_label().to_string())
            .unwrap_or_default()
    });

    let confirm_open = Signal::derive(move || vm.pending_delete.get().is_some());

    view! {
        <div class="space-y-4">
            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold text-gray-900">"Departemen"</h2>
                <button
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-blue-600 text-white hover:bg-blue-700"
                    on:click=move |_| vm.open_create()
                >
                    "Tambah Departemen"
                </button>
            </div>

            <Show when=move || vm.error.get().is_some()>
                <ErrorMessage message={vm.error.get().unwrap_or_default()} />
            </Show>
            <Show when=move || load_error.get().is_some()>
                <ErrorMessage message={load_error.get().unwrap_or_default()} />
            </Show>

            <DepartmentTable
                departments=departments
                loading=loading
                on_edit=Callback::new(move |department| vm.open_edit(&department))
                on_delete=Callback::new(move |department| vm.request_delete(department))
            />

            <DepartmentFormDialog
                open=dialog_open
                title=dialog_title
                submit_label=dialog_submit_label
                form=vm.form
                saving=saving
                on_submit=Callback::new(move |_| vm.submit())
                on_cancel=Callback::new(move |_| vm.dismiss_dialog())
            />

            <ConfirmDialog
                is_open=confirm_open
                title={"Hapus Departemen".to_string()}
                message={DELETE_DEPARTMENT_WARNING.to_string()}
                confirm_label={"Hapus".to_string()}
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </div>
    }
}
