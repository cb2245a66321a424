use leptos::*;

use crate::{
    api::{Department, Employee},
    components::layout::LoadingSpinner,
    pages::employees::utils::department_label,
};

const TH_CLASS: &str =
    "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";
const TD_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-gray-900";

#[component]
pub fn EmployeeTable(
    employees: Signal<Vec<Employee>>,
    departments: Signal<Vec<Department>>,
    loading: Signal<bool>,
    on_edit: Callback<Employee>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-md border border-gray-200 overflow-x-auto">
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class=TH_CLASS>"ID"</th>
                        <th class=TH_CLASS>"Nama"</th>
                        <th class=TH_CLASS>"Department"</th>
                        <th class=TH_CLASS>"Alamat"</th>
                        <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">
                            "Aksi"
                        </th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    <For
                        each=move || employees.get()
                        key=|employee| employee.id
                        children=move |employee: Employee| {
                            let edit_target = employee.clone();
                            let delete_target = employee.clone();
                            let department_id = employee.department_id;
                            let department = Signal::derive(move || {
                                department_label(&departments.get(), department_id)
                            });
                            view! {
                                <tr class="hover:bg-gray-50">
                                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">
                                        {employee.employee_id.clone()}
                                    </td>
                                    <td class=TD_CLASS>{employee.name.clone()}</td>
                                    <td class=TD_CLASS>{move || department.get()}</td>
                                    <td class=TD_CLASS>{employee.address.clone()}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-right">
                                        <div class="flex justify-end gap-2">
                                            <button
                                                class="inline-flex items-center rounded-md border border-gray-300 px-3 py-1.5 text-sm font-medium text-gray-700 hover:bg-gray-100"
                                                on:click=move |_| on_edit.call(edit_target.clone())
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="inline-flex items-center rounded-md bg-red-600 px-3 py-1.5 text-sm font-medium text-white hover:bg-red-700"
                                                on:click=move |_| on_delete.call(delete_target.clone())
                                            >
                                                "Hapus"
                                            </button>
                                        </div>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
