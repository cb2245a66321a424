use leptos::*;

use super::{
    components::{form::EmployeeFormDialog, list::EmployeeTable},
    view_model::use_employees_view_model,
};
use crate::components::{
    confirm_dialog::ConfirmDialog,
    layout::{ErrorMessage, Layout},
};

#[component]
pub fn EmployeesPage() -> impl IntoView {
    view! { <Layout><EmployeesPanel /></Layout> }
}

#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let vm = use_employees_view_model();

    let employees = Signal::derive(move || {
        vm.employees_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let departments = Signal::derive(move || {
        vm.departments_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let load_error =
        Signal::derive(move || vm.employees_resource.get().and_then(|result| result.err()));
    let loading = vm.employees_resource.loading();
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
    let confirm_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|employee| {
                format!(
                    "Apakah Anda yakin ingin menghapus karyawan '{}'?",
                    employee.name
                )
            })
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-4">
            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold text-gray-900">"Karyawan"</h2>
                <button
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-blue-600 text-white hover:bg-blue-700"
                    on:click=move |_| vm.open_create()
                >
                    "Tambah Karyawan"
                </button>
            </div>

            <Show when=move || vm.error.get().is_some()>
                <ErrorMessage message={vm.error.get().unwrap_or_default()} />
            </Show>
            <Show when=move || load_error.get().is_some()>
                <ErrorMessage message={load_error.get().unwrap_or_default()} />
            </Show>

            <EmployeeTable
                employees=employees
                departments=departments
                loading=loading
                on_edit=Callback::new(move |employee| vm.open_edit(&employee))
                on_delete=Callback::new(move |employee| vm.request_delete(employee))
            />

            <EmployeeFormDialog
                open=dialog_open
                title=dialog_title
                submit_label=dialog_submit_label
                form=vm.form
                departments=departments
                saving=saving
                on_submit=Callback::new(move |_| vm.submit())
                on_cancel=Callback::new(move |_| vm.dismiss_dialog())
            />

            <ConfirmDialog
                is_open=confirm_open
                title={"Hapus Karyawan".to_string()}
                message=confirm_message
                confirm_label={"Hapus".to_string()}
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_renders_heading_and_create_button() {
        let html = render_to_string(|| view! { <EmployeesPage /> });
        assert!(html.contains("Karyawan"));
        assert!(html.contains("Tambah Karyawan"));
        // Dialogs stay closed until opened.
        assert!(!html.contains("role=\"dialog\""));
    }
}
